//! Batch resolution of version constraints
//!
//! Each package is resolved independently: a failed lookup emits one warning
//! and keeps the original constraint string, without affecting other entries.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use indexmap::IndexMap;
use tokio::time::sleep;
use tracing::debug;

use crate::config::FETCH_STAGGER_DELAY_MS;
use crate::version::constraint::Constraint;
use crate::version::error::ConstraintError;
use crate::version::registry::Registry;
use crate::version::warning::WarningSink;

/// Resolves package constraints against a registry.
pub struct VersionResolver {
    registry: Arc<dyn Registry>,
    warnings: Arc<dyn WarningSink>,
    stagger_delay: Duration,
}

impl VersionResolver {
    pub fn new(registry: Arc<dyn Registry>, warnings: Arc<dyn WarningSink>) -> Self {
        Self {
            registry,
            warnings,
            stagger_delay: Duration::from_millis(FETCH_STAGGER_DELAY_MS),
        }
    }

    /// Set the delay between starting consecutive lookups (zero disables staggering)
    pub fn with_stagger_delay(mut self, delay: Duration) -> Self {
        self.stagger_delay = delay;
        self
    }

    /// Resolve every constraint in `constraints`.
    ///
    /// Literal constraints are returned as is without touching the registry.
    /// Lookups run concurrently; the result has the same keys in the same order.
    pub async fn resolve(&self, constraints: &IndexMap<String, String>) -> IndexMap<String, String> {
        let mut lookups: u32 = 0;
        let futures = constraints.iter().map(|(name, raw)| {
            let parsed = Constraint::parse(raw);
            let delay = match &parsed {
                Ok(constraint) if constraint.needs_lookup() => {
                    let delay = self.lookup_delay(lookups);
                    lookups = lookups.saturating_add(1);
                    delay
                }
                _ => Duration::ZERO,
            };

            async move {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                (name.clone(), self.resolve_one(name, raw, parsed).await)
            }
        });

        join_all(futures).await.into_iter().collect()
    }

    /// Start delay for the `slot`-th lookup of a batch
    fn lookup_delay(&self, slot: u32) -> Duration {
        self.stagger_delay.saturating_mul(slot)
    }

    async fn resolve_one(
        &self,
        package_name: &str,
        raw: &str,
        parsed: Result<Constraint, ConstraintError>,
    ) -> String {
        let constraint = match parsed {
            Ok(Constraint::Literal(version)) => return version,
            Ok(constraint) => constraint,
            Err(e) => {
                self.warnings.warn(&format!(
                    "Invalid version constraint for {}: {}, using fallback",
                    package_name, e
                ));
                return raw.to_string();
            }
        };

        match self.registry.fetch_package(package_name).await {
            Ok(package) => {
                let resolved = constraint.apply(&package);
                debug!("Resolved {}@{} to {}", package_name, constraint, resolved);
                resolved
            }
            Err(e) => {
                self.warnings.warn(&format!(
                    "Failed to fetch version for {}: {}, using fallback",
                    package_name, e
                ));
                constraint.to_string()
            }
        }
    }
}
