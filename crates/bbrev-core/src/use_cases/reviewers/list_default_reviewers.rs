use bbrev_api_interface::{types::ReviewerPage, BitbucketService};
use bbrev_models::RepositoryPath;

use super::listing_path;
use crate::{errors::DomainError, Result};

/// Pagination walk over the default-reviewers listing.
pub struct ListDefaultReviewers;

impl ListDefaultReviewers {
    /// Collect every reviewer uuid for a repository.
    ///
    /// Returns `None` when the listing answers 404 at any point during
    /// the walk: the resource does not exist remotely, which is not an
    /// error. Any other non-2xx status aborts without partial results.
    #[tracing::instrument(skip(api), ret)]
    pub async fn run(
        api: &dyn BitbucketService,
        repository: &RepositoryPath,
    ) -> Result<Option<Vec<String>>> {
        let mut path = listing_path(repository);
        let mut uuids = Vec::new();

        loop {
            let response = api.get(&path).await?;

            if response.status == 404 {
                return Ok(None);
            }

            if !response.is_success() {
                return Err(DomainError::UnexpectedStatusError {
                    path,
                    status: response.status,
                });
            }

            let page: ReviewerPage = serde_json::from_str(&response.body)
                .map_err(|e| DomainError::PageDecodeError { source: e })?;
            uuids.extend(page.values.into_iter().map(|reviewer| reviewer.uuid));

            if page.next.is_empty() {
                break;
            }

            // The continuation URL content is ignored on purpose: the
            // next page is recomputed from the observed page number so
            // URL construction stays in one place.
            path = format!("{}?page={}", listing_path(repository), page.page + 1);
        }

        Ok(Some(uuids))
    }
}
