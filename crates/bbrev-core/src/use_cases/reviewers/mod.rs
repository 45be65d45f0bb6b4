//! Default-reviewers use cases.

mod create_default_reviewers;
mod delete_default_reviewers;
mod list_default_reviewers;
mod read_default_reviewers;

use bbrev_models::RepositoryPath;

pub use self::{
    create_default_reviewers::CreateDefaultReviewers,
    delete_default_reviewers::DeleteDefaultReviewers,
    list_default_reviewers::ListDefaultReviewers, read_default_reviewers::ReadDefaultReviewers,
};

pub(crate) fn listing_path(repository: &RepositoryPath) -> String {
    format!(
        "2.0/repositories/{}/{}/default-reviewers",
        repository.owner(),
        repository.name()
    )
}

pub(crate) fn member_path(repository: &RepositoryPath, uuid: &str) -> String {
    format!("{}/{}", listing_path(repository), uuid)
}
