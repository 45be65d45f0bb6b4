use bbrev_api_interface::BitbucketService;
use bbrev_models::DefaultReviewers;

use super::member_path;
use crate::{errors::DomainError, Result};

/// Remove every known reviewer from a repository.
pub struct DeleteDefaultReviewers;

impl DeleteDefaultReviewers {
    /// Issue one DELETE per known member.
    ///
    /// The first member that answers 404 ends the whole operation with
    /// a success: the resource is treated as already gone and the
    /// remaining members are not touched. Any status other than 204 or
    /// that first 404 aborts with the offending uuid; members already
    /// removed stay removed.
    #[tracing::instrument(skip(api, resource))]
    pub async fn run(api: &dyn BitbucketService, resource: &DefaultReviewers) -> Result<()> {
        for uuid in &resource.reviewers {
            let response = api.delete(&member_path(&resource.repository, uuid)).await?;

            if response.status == 404 {
                return Ok(());
            }

            if response.status != 204 {
                return Err(DomainError::ReviewerDeleteError {
                    uuid: uuid.clone(),
                    status: response.status,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bbrev_api_interface::{ApiResponse, MockBitbucketService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn removes_every_member() {
        let mut api = MockBitbucketService::new();
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u1}")
            .return_once(|_| Ok(ApiResponse::new(204, "")));
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u2}")
            .return_once(|_| Ok(ApiResponse::new(204, "")));

        let resource = DefaultReviewers::new(("me", "test").into(), ["{u1}", "{u2}"]);
        DeleteDefaultReviewers::run(&api, &resource).await.unwrap();
    }

    #[tokio::test]
    async fn first_not_found_short_circuits() {
        // Members iterate in set order: {u1}, then {u2}, then {u3}.
        // {u2} answering 404 must end the operation without a DELETE
        // for {u3}.
        let mut api = MockBitbucketService::new();
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u1}")
            .return_once(|_| Ok(ApiResponse::new(204, "")));
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u2}")
            .return_once(|_| Ok(ApiResponse::new(404, "")));

        let resource = DefaultReviewers::new(("me", "test").into(), ["{u1}", "{u2}", "{u3}"]);
        DeleteDefaultReviewers::run(&api, &resource).await.unwrap();

        api.checkpoint();
    }

    #[tokio::test]
    async fn failing_member_aborts_without_rollback() {
        let mut api = MockBitbucketService::new();
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u1}")
            .return_once(|_| Ok(ApiResponse::new(204, "")));
        api.expect_delete()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers/{u2}")
            .return_once(|_| Ok(ApiResponse::new(500, "")));

        let resource = DefaultReviewers::new(("me", "test").into(), ["{u1}", "{u2}", "{u3}"]);
        let error = DeleteDefaultReviewers::run(&api, &resource)
            .await
            .unwrap_err();

        match error {
            DomainError::ReviewerDeleteError { uuid, status } => {
                assert_eq!(uuid, "{u2}");
                assert_eq!(status, 500);
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
