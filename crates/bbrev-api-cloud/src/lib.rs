//! Bitbucket Cloud driver for the API interface.

#![warn(clippy::all)]

pub mod auth;
pub mod errors;

use async_trait::async_trait;
use bbrev_api_interface::{ApiResponse, BitbucketService, Result};
use bbrev_config::Config;
use reqwest::{Client, RequestBuilder, Response};

use crate::{
    auth::{build_cloud_url, get_client_builder},
    errors::CloudError,
};

/// Bitbucket Cloud API adapter implementation.
#[derive(Clone)]
pub struct CloudApiService {
    config: Config,
}

impl CloudApiService {
    /// Creates a new Bitbucket Cloud API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, CloudError> {
        get_client_builder(&self.config)?
            .build()
            .map_err(CloudError::from)
    }

    fn build_url(&self, path: &str) -> String {
        build_cloud_url(&self.config, path)
    }

    fn with_credentials(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(
            &self.config.api.cloud.username,
            Some(&self.config.api.cloud.app_password),
        )
    }

    // The body is drained on every path so the connection is released,
    // whatever the status code.
    async fn drain(response: Response) -> Result<ApiResponse, CloudError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl BitbucketService for CloudApiService {
    #[tracing::instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        let response = self
            .with_credentials(self.get_client()?.get(self.build_url(path)))
            .send()
            .await
            .map_err(CloudError::from)?;

        Ok(Self::drain(response).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn put_only(&self, path: &str) -> Result<ApiResponse> {
        let response = self
            .with_credentials(self.get_client()?.put(self.build_url(path)))
            .send()
            .await
            .map_err(CloudError::from)?;

        Ok(Self::drain(response).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let response = self
            .with_credentials(self.get_client()?.delete(self.build_url(path)))
            .send()
            .await
            .map_err(CloudError::from)?;

        Ok(Self::drain(response).await?)
    }
}
