//! Reconciliation core.

#![warn(clippy::all)]

pub mod errors;
pub mod use_cases;

pub use errors::{DomainError, Result};
