//! Per-line rewriting of template text for one target.
//!
//! A [`Pipeline`] owns the placeholder [`Vocabulary`] and the patterns
//! compiled from it, and applies [`RULES`] in order to each line. Lines
//! are never reordered; each one is rewritten or dropped on its own.

mod calls;
mod rules;

#[cfg(test)]
mod pipeline_tests;

use monomorph_core::TypeDescriptor;
use regex::Regex;

use crate::vocabulary::Vocabulary;
use crate::{Error, Result};

pub use calls::{Arguments, CallSite, call_sites, next_call, replace_calls, split_arguments};
pub use rules::{
    RULES, Rule, rename_functional_marker, rename_placeholders, resolve_marker_imports,
    substitute_arithmetic, substitute_array_construction, substitute_conveniences,
    substitute_zero_value,
};

/// Outcome of rewriting one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewriteResult {
    Keep(String),
    /// The line exists only to make the template compile.
    Drop,
}

impl RewriteResult {
    pub fn kept(&self) -> Option<&str> {
        match self {
            RewriteResult::Keep(text) => Some(text),
            RewriteResult::Drop => None,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, RewriteResult::Drop)
    }
}

/// Patterns compiled from the vocabulary's wrapper spellings.
#[derive(Debug)]
pub(crate) struct Patterns {
    /// `(\w*)Wrapper\d?(\w*)<Wrapper\d?>`
    pub generic_form: Regex,
    /// `AsWrapper\d?`
    pub wrapper_suffix: Option<Regex>,
    /// `Wrapper\d?`
    pub wrapper_token: Regex,
}

#[derive(Debug)]
pub struct Pipeline {
    vocabulary: Vocabulary,
    patterns: Patterns,
}

impl Pipeline {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        validate(&vocabulary)?;

        let wrapper = regex::escape(&vocabulary.wrapper);
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| Error::Vocabulary(e.to_string()))
        };

        let patterns = Patterns {
            generic_form: compile(format!(
                r"([0-9A-Za-z_]*){wrapper}[0-9]?([0-9A-Za-z_]*)<{wrapper}[0-9]?>"
            ))?,
            wrapper_suffix: match vocabulary.wrapper_suffix.as_str() {
                "" => None,
                suffix => Some(compile(format!("{}[0-9]?", regex::escape(suffix)))?),
            },
            wrapper_token: compile(format!("{wrapper}[0-9]?"))?,
        };

        Ok(Self {
            vocabulary,
            patterns,
        })
    }

    /// Pipeline over the default vocabulary.
    pub fn standard() -> Result<Self> {
        Self::new(Vocabulary::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub(crate) fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Apply every rule in order; the first `Drop` wins.
    pub fn rewrite(&self, line: &str, target: &TypeDescriptor) -> RewriteResult {
        let mut text = line.to_string();
        for (_, rule) in RULES {
            match rule(self, &text, target) {
                RewriteResult::Keep(next) => text = next,
                RewriteResult::Drop => return RewriteResult::Drop,
            }
        }
        RewriteResult::Keep(text)
    }

    pub fn rewrite_all(&self, lines: &[String], target: &TypeDescriptor) -> Vec<RewriteResult> {
        lines.iter().map(|line| self.rewrite(line, target)).collect()
    }

    /// Rename the placeholder in a template's simple name, as the rules
    /// would for a type name: `NavigableWrapperMap` → `NavigableIntMap`.
    /// Names without a placeholder are prefixed with the short label.
    pub fn specialize_name(&self, simple_name: &str, target: &TypeDescriptor) -> String {
        let token = &self.patterns.wrapper_token;
        if token.is_match(simple_name) {
            token
                .replace_all(simple_name, regex::NoExpand(target.short_label))
                .into_owned()
        } else {
            format!("{}{}", target.short_label, simple_name)
        }
    }
}

fn validate(vocabulary: &Vocabulary) -> Result<()> {
    let required = [
        ("wrapper", &vocabulary.wrapper),
        ("primitive", &vocabulary.primitive),
        ("marker-namespace", &vocabulary.marker_namespace),
        ("zero-call", &vocabulary.zero_call),
        ("array-call", &vocabulary.array_call),
        ("compare-call", &vocabulary.compare_call),
        ("increment-call", &vocabulary.increment_call),
        ("decrement-call", &vocabulary.decrement_call),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::Vocabulary(format!("`{field}` must not be empty")));
        }
    }
    Ok(())
}
