//! Domain models.

mod default_reviewers;
mod repository_path;

pub use default_reviewers::DefaultReviewers;
pub use repository_path::{RepositoryPath, RepositoryPathError};
