//! Registry trait for fetching package metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageVersionSet;

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches dist-tags and all published versions for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "react", "@types/node")
    ///
    /// # Returns
    /// * `Ok(PackageVersionSet)` - Validated metadata, versions lowest first
    /// * `Err(RegistryError)` - Non-success status, transport failure or invalid payload
    async fn fetch_package(&self, package_name: &str)
    -> Result<PackageVersionSet, RegistryError>;
}
