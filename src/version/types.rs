//! Registry metadata types

use std::collections::HashMap;

use serde::Deserialize;

use crate::version::compare::compare_versions;
use crate::version::error::RegistryError;

/// Distribution tags of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistTags {
    pub latest: String,
    pub canary: Option<String>,
}

/// Published versions and dist-tags of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersionSet {
    pub dist_tags: DistTags,
    /// Published versions, lowest first
    pub versions: Vec<String>,
}

/// Outcome of validating a registry metadata document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataParse {
    Parsed(PackageVersionSet),
    Invalid(String),
}

/// Raw registry document; only the fields we read
#[derive(Debug, Deserialize)]
struct PackageDocument {
    #[serde(rename = "dist-tags")]
    dist_tags: Option<DistTagsDocument>,
    versions: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct DistTagsDocument {
    latest: Option<String>,
    canary: Option<String>,
}

impl MetadataParse {
    /// Validate a registry response body.
    ///
    /// Requires `dist-tags.latest` and a `versions` object; everything else is ignored.
    pub fn parse(body: &str) -> Self {
        let document: PackageDocument = match serde_json::from_str(body) {
            Ok(document) => document,
            Err(e) => return MetadataParse::Invalid(e.to_string()),
        };

        let Some(dist_tags) = document.dist_tags else {
            return MetadataParse::Invalid("missing dist-tags".to_string());
        };
        let Some(latest) = dist_tags.latest else {
            return MetadataParse::Invalid("missing dist-tags.latest".to_string());
        };
        let Some(versions) = document.versions else {
            return MetadataParse::Invalid("missing versions".to_string());
        };

        let mut versions: Vec<String> = versions.into_keys().collect();
        versions.sort_by(|a, b| compare_versions(a, b).then_with(|| a.cmp(b)));

        MetadataParse::Parsed(PackageVersionSet {
            dist_tags: DistTags {
                latest,
                canary: dist_tags.canary,
            },
            versions,
        })
    }

    pub fn into_result(self) -> Result<PackageVersionSet, RegistryError> {
        match self {
            MetadataParse::Parsed(package) => Ok(package),
            MetadataParse::Invalid(reason) => Err(RegistryError::InvalidResponse(reason)),
        }
    }
}
