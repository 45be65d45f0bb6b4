//! API types.

mod reviewer;

pub use reviewer::{Reviewer, ReviewerPage};
