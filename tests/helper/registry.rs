//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use indexmap::IndexMap;

use version_resolve::version::error::RegistryError;
use version_resolve::version::registry::Registry;
use version_resolve::version::types::{DistTags, PackageVersionSet};
use version_resolve::version::warning::WarningSink;

/// In-memory registry for testing
#[derive(Default)]
pub struct StaticRegistry {
    packages: HashMap<String, PackageVersionSet>,
    failures: HashMap<String, u16>,
    calls: AtomicUsize,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        package: &str,
        latest: &str,
        canary: Option<&str>,
        versions: Vec<&str>,
    ) -> Self {
        self.packages.insert(
            package.to_string(),
            PackageVersionSet {
                dist_tags: DistTags {
                    latest: latest.to_string(),
                    canary: canary.map(str::to_string),
                },
                versions: versions.into_iter().map(|v| v.to_string()).collect(),
            },
        );
        self
    }

    /// Respond to `package` with the given HTTP status
    pub fn with_failure(mut self, package: &str, status: u16) -> Self {
        self.failures.insert(package.to_string(), status);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for StaticRegistry {
    async fn fetch_package(
        &self,
        package_name: &str,
    ) -> Result<PackageVersionSet, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.failures.get(package_name) {
            return Err(RegistryError::Http { status: *status });
        }
        self.packages
            .get(package_name)
            .cloned()
            .ok_or(RegistryError::Http { status: 404 })
    }
}

/// Warning sink that keeps every message
#[derive(Default)]
pub struct RecordingWarnings {
    messages: Mutex<Vec<String>>,
}

impl RecordingWarnings {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl WarningSink for RecordingWarnings {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Build an ordered constraint map
pub fn constraints(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(name, constraint)| (name.to_string(), constraint.to_string()))
        .collect()
}
