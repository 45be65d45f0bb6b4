use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::RepositoryPath;

/// Default reviewers of a repository, as declared or last observed.
///
/// The member set is keyed by reviewer uuid. The whole resource is
/// recreate-on-change: there is no partial membership update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultReviewers {
    /// Repository path.
    pub repository: RepositoryPath,
    /// Reviewer uuids.
    pub reviewers: BTreeSet<String>,
    /// Resource identity, set once the resource exists remotely.
    pub id: Option<String>,
}

impl DefaultReviewers {
    /// Build a declared resource, not yet created remotely.
    pub fn new<I, S>(repository: RepositoryPath, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            repository,
            reviewers: reviewers.into_iter().map(Into::into).collect(),
            id: None,
        }
    }

    /// Derived resource identity.
    pub fn resource_id(&self) -> String {
        format!("{}/reviewers", self.repository)
    }

    /// Mark the resource as existing remotely.
    pub fn assign_id(&mut self) {
        self.id = Some(self.resource_id());
    }
}
