//! monomorph engine: specializes one generic template per target type.
//!
//! This crate provides the generation pipeline:
//! - `rewrite` - ordered per-line rewrite rules parametrized by a target
//! - `filter` - drop filtering and top-level visibility demotion
//! - `lint` - placeholder calls the rules cannot rewrite safely
//! - `source` - logical template names, layout, template loading
//! - `emit` - generated file rendering and atomic writes
//! - `driver` - (template, targets) work items and batch reports
//! - `manifest` - the TOML manifest describing a generation batch

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod driver;
pub mod emit;
pub mod filter;
pub mod lint;
pub mod manifest;
pub mod rewrite;
pub mod source;
pub mod vocabulary;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod driver_tests;

use std::path::PathBuf;
use std::sync::Arc;

pub use driver::{Generator, Options, Outcome, Report, Request};
pub use lint::Warning;
pub use manifest::{Entry, Manifest, ManifestError};
pub use rewrite::{Pipeline, RewriteResult};
pub use source::{Layout, LineEnding, LogicalName, Template, locate_template};
pub use vocabulary::Vocabulary;

/// Errors raised while specializing a (template, target) pair.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The logical name does not resolve to a template file.
    #[error("template '{name}' not found at {}", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    /// The template exists but could not be read.
    #[error("failed to read template {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The template breaks an assumption the rewrite rules rely on.
    #[error("ambiguous rewrite in '{name}': {message}")]
    AmbiguousRewrite { name: String, message: String },

    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("invalid template name '{0}'")]
    InvalidName(String),

    /// A vocabulary spelling is empty or produced an unusable pattern.
    #[error("invalid vocabulary: {0}")]
    Vocabulary(String),
}

impl Error {
    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::WriteFailed {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
