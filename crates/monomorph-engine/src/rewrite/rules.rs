//! The rewrite rules, in pipeline order.
//!
//! Order matters: imports are resolved before any renaming touches the
//! marker names, placeholder calls are expanded while their placeholder
//! prefixes are still intact, and the identifier renaming runs from the
//! most specific form down to the bare token.

use monomorph_core::TypeDescriptor;
use regex::{Captures, NoExpand, Regex};

use super::calls::{is_word_char, replace_calls};
use super::{Pipeline, RewriteResult};

/// A single rule: rewrite one line for one target, or drop it.
pub type Rule = fn(&Pipeline, &str, &TypeDescriptor) -> RewriteResult;

/// The pipeline, applied top to bottom. A `Drop` stops it.
pub const RULES: &[(&str, Rule)] = &[
    ("marker-imports", resolve_marker_imports),
    ("zero-value", substitute_zero_value),
    ("array-construction", substitute_array_construction),
    ("arithmetic", substitute_arithmetic),
    ("functional-marker", rename_functional_marker),
    ("placeholders", rename_placeholders),
    ("conveniences", substitute_conveniences),
];

/// Imports of the three functional markers become imports of the concrete
/// primitive-specialized interfaces; any other import from the marker
/// namespace is dropped.
pub fn resolve_marker_imports(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let keep = || RewriteResult::Keep(line.to_string());
    let vocabulary = pipeline.vocabulary();

    let Some(path) = import_path(line) else {
        return keep();
    };
    let Some(member) = path.strip_prefix(vocabulary.marker_namespace.as_str()) else {
        return keep();
    };
    if member.is_empty() {
        return RewriteResult::Drop;
    }
    // `primavera.SpecializedCodeGeneratorUtils` only shares a prefix.
    let Some(member) = member.strip_prefix('.') else {
        return keep();
    };

    match vocabulary.markers.iter().find(|m| m.name == member) {
        Some(marker) => RewriteResult::Keep(format!(
            "import {}.{}{};",
            vocabulary.function_package,
            target.short_label,
            marker.role.suffix()
        )),
        None => RewriteResult::Drop,
    }
}

/// `import [static] a.b.C;` → `a.b.C`
pub(crate) fn import_path(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("import ")?.trim_start();
    let rest = rest.strip_prefix("static ").map_or(rest, str::trim_start);
    Some(rest.trim_end().strip_suffix(';')?.trim_end())
}

/// `Wrapper.initital()` → the target's zero literal.
pub fn substitute_zero_value(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let name = &pipeline.vocabulary().zero_call;
    RewriteResult::Keep(replace_calls(line, name, 0, &|_| {
        target.zero_value.to_string()
    }))
}

/// `Wrapper.newArray(n)` → a native scalar array, or a reflective object
/// array for the object target.
pub fn substitute_array_construction(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let name = &pipeline.vocabulary().array_call;
    RewriteResult::Keep(replace_calls(line, name, 1, &|args| {
        if target.numeric {
            format!("new {}[{}]", target.scalar_name, args[0])
        } else {
            format!(
                "({}[]) java.lang.reflect.Array.newInstance(Object.class, {})",
                target.boxed_type_name, args[0]
            )
        }
    }))
}

/// `compare(a, b)` → `Boxed.compare(a, b)`, `increment(x, n)` → `x += n`,
/// `decrement(x, n)` → `x -= n`.
pub fn substitute_arithmetic(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let vocabulary = pipeline.vocabulary();
    let text = replace_calls(line, &vocabulary.compare_call, 2, &|args| {
        format!("{}.compare({}, {})", target.boxed_type_name, args[0], args[1])
    });
    let text = replace_calls(&text, &vocabulary.increment_call, 2, &|args| {
        format!("{} += {}", args[0], args[1])
    });
    let text = replace_calls(&text, &vocabulary.decrement_call, 2, &|args| {
        format!("{} -= {}", args[0], args[1])
    });
    RewriteResult::Keep(text)
}

/// `WrapperFunction` → `IntFunction`.
pub fn rename_functional_marker(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let text = match pipeline.vocabulary().transform_marker() {
        Some(marker) => line.replace(
            &marker.name,
            &format!("{}{}", target.short_label, marker.role.suffix()),
        ),
        None => line.to_string(),
    };
    RewriteResult::Keep(text)
}

/// Placeholder identifiers, most specific form first:
///
/// 1. `Primitive` → scalar name
/// 2. `WrapperList<Wrapper1>` → `IntList`, or `List<E>` for the object target
/// 3. `applyAsWrapper` → `apply` for the object target
/// 4. a standalone `Wrapper` → boxed name (`Entry<Wrapper, V>` → `Entry<Integer, V>`)
/// 5. any other `Wrapper` → short label (`NavigableWrapperMap` → `NavigableIntMap`)
pub fn rename_placeholders(
    pipeline: &Pipeline,
    line: &str,
    target: &TypeDescriptor,
) -> RewriteResult {
    let patterns = pipeline.patterns();
    let text = line.replace(&pipeline.vocabulary().primitive, target.scalar_name);

    let text = patterns.generic_form.replace_all(&text, |caps: &Captures| {
        let parameters = if target.numeric {
            String::new()
        } else {
            format!("<{}>", target.boxed_type_name)
        };
        format!("{}{}{}{}", &caps[1], target.short_label, &caps[2], parameters)
    });

    let text = match (&patterns.wrapper_suffix, target.numeric) {
        (Some(suffix), false) => suffix.replace_all(&text, "").into_owned(),
        _ => text.into_owned(),
    };

    let text = replace_standalone(&patterns.wrapper_token, &text, target.boxed_type_name);
    let text = patterns
        .wrapper_token
        .replace_all(&text, NoExpand(target.short_label))
        .into_owned();

    RewriteResult::Keep(text)
}

/// Replace tokens with no identifier character on either side. Line
/// boundaries count as non-identifier characters.
fn replace_standalone(token: &Regex, text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for m in token.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }
        out.push_str(&text[copied..m.start()]);
        out.push_str(replacement);
        copied = m.end();
    }

    out.push_str(&text[copied..]);
    out
}

/// Template-only idioms (`new List()`) → their concrete spelling.
pub fn substitute_conveniences(
    pipeline: &Pipeline,
    line: &str,
    _target: &TypeDescriptor,
) -> RewriteResult {
    let text = pipeline
        .vocabulary()
        .conveniences
        .iter()
        .fold(line.to_string(), |text, c| text.replace(&c.from, &c.to));
    RewriteResult::Keep(text)
}
