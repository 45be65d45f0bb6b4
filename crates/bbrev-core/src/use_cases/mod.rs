//! Use cases.

pub mod reviewers;
