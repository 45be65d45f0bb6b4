use bbrev_api_interface::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },
}

impl From<reqwest::Error> for CloudError {
    fn from(e: reqwest::Error) -> Self {
        CloudError::HttpError { source: e }
    }
}

impl From<CloudError> for ApiError {
    fn from(e: CloudError) -> Self {
        match e {
            CloudError::HttpError { source } => ApiError::TransportError {
                source: Box::new(source),
            },
        }
    }
}
