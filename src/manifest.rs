//! `package.json` dependency updates
//!
//! Merges resolved versions into the `dependencies` or `devDependencies`
//! section. Keys outside the updated section keep their order; the updated
//! section is sorted by package name.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at {0}")]
    NotAnObject(String),
}

/// Dependency section of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    pub fn section(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Dev => "devDependencies",
        }
    }
}

/// A `package.json` loaded for editing
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(document) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            _ => Err(ManifestError::NotAnObject(path.display().to_string())),
        }
    }

    /// Insert or overwrite `dependencies` in the given section.
    pub fn add_dependencies(
        &mut self,
        dependencies: &IndexMap<String, String>,
        kind: DependencyKind,
    ) -> Result<(), ManifestError> {
        let section_name = kind.section();
        let section = self
            .document
            .entry(section_name)
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(section) = section else {
            return Err(ManifestError::NotAnObject(section_name.to_string()));
        };

        for (name, version) in dependencies {
            section.insert(name.clone(), Value::String(version.clone()));
        }

        let mut entries: Vec<(String, Value)> = std::mem::take(section).into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        section.extend(entries);

        Ok(())
    }

    /// Write the manifest back to the file it was loaded from.
    pub fn save(&self) -> Result<(), ManifestError> {
        let mut content = serde_json::to_string_pretty(&self.document).map_err(|source| {
            ManifestError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        content.push('\n');

        std::fs::write(&self.path, content).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
