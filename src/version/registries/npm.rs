//! npm registry API implementation

use std::time::Duration;

use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{MetadataParse, PackageVersionSet};

/// Default base URL for npm registry
pub const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// Registry implementation for npm registry API
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry for `base_url`.
    ///
    /// Without a timeout, requests wait until the server responds or the
    /// connection drops.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, RegistryError> {
        let mut builder = reqwest::Client::builder().user_agent("version-resolve");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_package(
        &self,
        package_name: &str,
    ) -> Result<PackageVersionSet, RegistryError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        debug!("Fetching npm metadata: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        MetadataParse::parse(&body).into_result()
    }
}
