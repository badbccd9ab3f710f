//! Whole-module passes that run after per-line rewriting.

use tracing::debug;

use crate::rewrite::RewriteResult;
use crate::{Error, Result};

const PUBLIC: &str = "public ";

/// Modifiers allowed between `public` and the type keyword.
const MODIFIERS: &[&str] = &["abstract", "final", "sealed", "non-sealed", "strictfp", "static"];

const TYPE_KEYWORDS: &[&str] = &["class", "interface", "enum", "record", "@interface"];

/// Remove dropped lines, keeping the rest in order.
pub fn filter_dropped(results: impl IntoIterator<Item = RewriteResult>) -> Vec<String> {
    results
        .into_iter()
        .filter_map(|result| match result {
            RewriteResult::Keep(text) => Some(text),
            RewriteResult::Drop => None,
        })
        .collect()
}

/// Strip `public` from the first top-level type declaration of `name`.
///
/// Only column-0 declarations qualify, so members and nested types keep
/// their visibility. Returns the index of the demoted line.
pub fn demote_visibility(name: &str, lines: &mut [String]) -> Result<usize> {
    let index = lines
        .iter()
        .position(|line| is_top_level_declaration(line))
        .ok_or_else(|| Error::AmbiguousRewrite {
            name: name.to_string(),
            message: "no top-level public type declaration to demote".to_string(),
        })?;

    lines[index].replace_range(..PUBLIC.len(), "");
    debug!(template = name, line = index + 1, "demoted visibility");
    Ok(index)
}

/// `public [modifiers] class|interface|enum|record|@interface ...` at column 0.
pub fn is_top_level_declaration(line: &str) -> bool {
    let Some(rest) = line.strip_prefix(PUBLIC) else {
        return false;
    };
    rest.split_whitespace()
        .find(|word| !MODIFIERS.contains(word))
        .is_some_and(|word| TYPE_KEYWORDS.contains(&word))
}
