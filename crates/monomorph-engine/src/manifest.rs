//! The `monomorph.toml` manifest: layout, vocabulary overrides and the
//! list of templates to generate.
//!
//! ```toml
//! [layout]
//! template-root = "src/test/java"
//! output-root = "src/main/auto"
//!
//! [[generate]]
//! template = "primavera.array.WrapperList"
//! targets = ["int", "long", "float", "double"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use monomorph_core::{TypeDescriptor, from_name, suggest};
use serde::Deserialize;
use thiserror::Error;

use crate::driver::Request;
use crate::source::{Layout, LogicalName};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("failed to parse manifest: {0}")]
    Parse(String),

    #[error("unknown target '{name}' for '{template}'{}", did_you_mean(.suggestion))]
    UnknownTarget {
        template: String,
        name: String,
        suggestion: Option<&'static str>,
    },

    #[error("invalid template name '{0}'")]
    InvalidTemplate(String),

    #[error("manifest has no [[generate]] entries")]
    Empty,
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default, rename = "generate")]
    pub entries: Vec<Entry>,
}

/// One `[[generate]]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Entry {
    pub template: String,
    /// Registry names; every target when omitted.
    #[serde(default)]
    pub targets: Option<Vec<String>>,
    #[serde(default)]
    pub package_private: bool,
}

impl Manifest {
    /// Load a manifest file. Relative layout roots resolve against the
    /// manifest's directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut manifest = Self::from_str(&contents)?;
        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        manifest.layout = manifest.layout.rooted_at(base);
        Ok(manifest)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Resolve entries into requests, in manifest order.
    ///
    /// A (template, target) pair listed twice is generated once, with the
    /// settings of its first entry.
    pub fn requests(&self) -> Result<Vec<Request>> {
        if self.entries.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen = HashSet::new();
        let mut requests = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let template = LogicalName::new(entry.template.as_str())
                .map_err(|_| ManifestError::InvalidTemplate(entry.template.clone()))?;

            let mut targets = entry.resolve_targets()?;
            targets.retain(|target| seen.insert((template.clone(), target.name)));
            if targets.is_empty() {
                continue;
            }

            requests.push(Request::new(template, targets).package_private(entry.package_private));
        }

        Ok(requests)
    }
}

impl Entry {
    fn resolve_targets(&self) -> Result<Vec<&'static TypeDescriptor>> {
        let Some(names) = &self.targets else {
            return Ok(monomorph_core::all().iter().collect());
        };

        names
            .iter()
            .map(|name| {
                from_name(name).ok_or_else(|| ManifestError::UnknownTarget {
                    template: self.template.clone(),
                    name: name.clone(),
                    suggestion: suggest(name),
                })
            })
            .collect()
    }
}
