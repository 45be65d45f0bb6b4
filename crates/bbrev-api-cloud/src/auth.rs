//! Auth.

use std::time::Duration;

use bbrev_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::CloudError;

/// Get a Bitbucket Cloud client builder.
///
/// Credentials are applied per request; the builder only carries
/// timeout, user-agent and content negotiation.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, CloudError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.cloud.connect_timeout))
        .user_agent(format!("bbrev/{}", config.version))
        .default_headers(headers))
}

/// Build a Bitbucket Cloud URL.
pub fn build_cloud_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}/{}",
        config.api.cloud.root_url.trim_end_matches('/'),
        path.into()
    )
}
