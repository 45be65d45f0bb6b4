use bbrev_api_interface::BitbucketService;
use bbrev_models::DefaultReviewers;

use super::{member_path, ReadDefaultReviewers};
use crate::{errors::DomainError, Result};

/// Add every declared reviewer to a repository.
pub struct CreateDefaultReviewers;

impl CreateDefaultReviewers {
    /// Issue one PUT per declared member, then resync from the remote
    /// listing so the observed state is authoritative.
    ///
    /// The first non-200 answer aborts with the offending uuid and
    /// status; members already added stay added.
    #[tracing::instrument(skip(api, resource))]
    pub async fn run(api: &dyn BitbucketService, resource: &mut DefaultReviewers) -> Result<()> {
        for uuid in resource.reviewers.clone() {
            let response = api
                .put_only(&member_path(&resource.repository, &uuid))
                .await?;

            if response.status != 200 {
                return Err(DomainError::ReviewerCreateError {
                    uuid,
                    status: response.status,
                });
            }
        }

        resource.assign_id();

        ReadDefaultReviewers::run(api, resource).await
    }
}
