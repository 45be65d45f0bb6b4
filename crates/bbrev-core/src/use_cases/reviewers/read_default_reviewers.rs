use bbrev_api_interface::BitbucketService;
use bbrev_models::DefaultReviewers;

use super::ListDefaultReviewers;
use crate::Result;

/// Resync the local member set from the remote listing.
pub struct ReadDefaultReviewers;

impl ReadDefaultReviewers {
    /// Overwrite the local member set with the uuids the remote
    /// reports. A full overwrite, never a merge: locally declared
    /// members the remote does not report are dropped.
    ///
    /// A 404 anywhere in the walk leaves the local state untouched and
    /// still succeeds.
    #[tracing::instrument(skip(api, resource))]
    pub async fn run(api: &dyn BitbucketService, resource: &mut DefaultReviewers) -> Result<()> {
        if let Some(uuids) = ListDefaultReviewers::run(api, &resource.repository).await? {
            resource.reviewers = uuids.into_iter().collect();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bbrev_api_interface::{ApiResponse, MockBitbucketService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn overwrites_local_set() {
        let mut api = MockBitbucketService::new();
        api.expect_get()
            .once()
            .withf(|path| path == "2.0/repositories/me/test/default-reviewers")
            .return_once(|_| {
                Ok(ApiResponse::new(
                    200,
                    r#"{"values":[{"uuid":"{u2}"},{"uuid":"{u3}"}],"page":1,"size":2}"#,
                ))
            });

        let mut resource = DefaultReviewers::new(("me", "test").into(), ["{u1}", "{u2}"]);
        ReadDefaultReviewers::run(&api, &mut resource).await.unwrap();

        // {u1} is gone: the remote listing is authoritative
        assert_eq!(
            resource.reviewers,
            BTreeSet::from(["{u2}".to_string(), "{u3}".to_string()])
        );
    }

    #[tokio::test]
    async fn not_found_leaves_state_untouched() {
        let mut api = MockBitbucketService::new();
        api.expect_get()
            .once()
            .return_once(|_| Ok(ApiResponse::new(404, "")));

        let mut resource = DefaultReviewers::new(("me", "test").into(), ["{u1}"]);
        let before = resource.clone();

        ReadDefaultReviewers::run(&api, &mut resource).await.unwrap();

        assert_eq!(resource, before);
    }
}
