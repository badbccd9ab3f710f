//! Writing generated modules.
//!
//! A destination is either fully rewritten or left as it was: content goes
//! to a temporary file in the destination directory, which is then renamed
//! over the destination.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use monomorph_core::TypeDescriptor;
use tempfile::Builder;
use tracing::info;

use crate::rewrite::Pipeline;
use crate::source::{Layout, LineEnding, LogicalName};
use crate::{Error, Result};

/// The comment identifying a module as generated.
pub fn header_line(name: &LogicalName, target: &TypeDescriptor) -> String {
    format!("// Generated by monomorph from {name} ({target}). Do not edit.")
}

/// Prepend the header comment unless a line already carries `marker`.
pub fn add_header(lines: &mut Vec<String>, header: String, marker: &str) {
    let marked = !marker.is_empty() && lines.iter().any(|line| line.contains(marker));
    if !marked {
        lines.insert(0, header);
    }
}

/// Join lines with `ending`; non-empty output ends with one line ending.
pub fn render_file(lines: &[String], ending: LineEnding) -> String {
    let ending = ending.as_str();
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + ending.len()).sum());
    for line in lines {
        out.push_str(line);
        out.push_str(ending);
    }
    out
}

/// Write the specialization of `name` for `target` to its output path.
pub fn emit(
    layout: &Layout,
    pipeline: &Pipeline,
    name: &LogicalName,
    target: &TypeDescriptor,
    lines: &[String],
) -> Result<PathBuf> {
    let path = layout.output_path(name, target, pipeline);
    write_atomic(&path, &render_file(lines, layout.line_ending))?;
    info!(template = %name, %target, path = %path.display(), "generated");
    Ok(path)
}

/// Replace `path` with `contents`, creating parent directories as needed.
///
/// An existing destination keeps its permissions; a new one gets the
/// ordinary file mode under the process umask.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::write_failed(dir, e))?;

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder
        .tempfile_in(dir)
        .map_err(|e| Error::write_failed(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::write_failed(path, e))?;
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write_failed(path, e))?;
    }
    file.persist(path)
        .map_err(|e| Error::write_failed(path, e.error))?;
    Ok(())
}
