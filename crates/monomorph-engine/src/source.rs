//! Logical template names and the directory layout they resolve against.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use monomorph_core::TypeDescriptor;
use serde::Deserialize;
use tracing::debug;

use crate::rewrite::Pipeline;
use crate::{Error, Result};

/// A fully-qualified template name: `primavera.array.WrapperList`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalName(String);

impl LogicalName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.split('.').all(is_java_identifier) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Final segment: `WrapperList`.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, simple)| simple)
    }

    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

impl FromStr for LogicalName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Where templates are read from and generated modules are written to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Layout {
    pub template_root: PathBuf,
    pub output_root: PathBuf,
    /// Without the dot; empty for extensionless files.
    pub extension: String,
    pub line_ending: LineEnding,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            template_root: PathBuf::from("src/test/java"),
            output_root: PathBuf::from("src/main/auto"),
            extension: "java".into(),
            line_ending: LineEnding::Lf,
        }
    }
}

impl Layout {
    /// `template_root/primavera/array/WrapperList.java`
    pub fn template_path(&self, name: &LogicalName) -> PathBuf {
        let mut path = self.template_root.clone();
        if let Some(package) = name.package() {
            path.extend(package.split('.'));
        }
        path.push(self.file_name(name.simple_name()));
        path
    }

    /// `output_root/primavera/array/IntList.java`
    ///
    /// The package is kept; the simple name is specialized the way the
    /// rules specialize the type it declares.
    pub fn output_path(
        &self,
        name: &LogicalName,
        target: &TypeDescriptor,
        pipeline: &Pipeline,
    ) -> PathBuf {
        let mut path = self.output_root.clone();
        if let Some(package) = name.package() {
            path.extend(package.split('.'));
        }
        let simple = pipeline.specialize_name(name.simple_name(), target);
        path.push(self.file_name(&simple));
        path
    }

    /// Resolve relative roots against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.template_root.is_relative() {
            self.template_root = base.join(&self.template_root);
        }
        if self.output_root.is_relative() {
            self.output_root = base.join(&self.output_root);
        }
        self
    }

    fn file_name(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.extension)
        }
    }
}

/// A template read fully into memory. Rendered against many targets
/// without being read again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub name: LogicalName,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Template {
    pub fn new(name: LogicalName, path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            name,
            path: path.into(),
            lines: text.lines().map(String::from).collect(),
        }
    }
}

/// Read the template `name` from the layout's template root.
pub fn locate_template(layout: &Layout, name: &LogicalName) -> Result<Template> {
    let path = layout.template_path(name);
    let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::TemplateNotFound {
            name: name.to_string(),
            path: path.clone(),
        },
        _ => Error::ReadFailed {
            path: path.clone(),
            source: Arc::new(source),
        },
    })?;

    let template = Template::new(name.clone(), path, &text);
    debug!(
        template = %name,
        lines = template.lines.len(),
        "read template"
    );
    Ok(template)
}
