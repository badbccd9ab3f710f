//! Balanced-parenthesis matching of placeholder calls.
//!
//! Placeholder calls such as `Primitive.compare(a, b)` take arbitrary
//! expressions as arguments, including nested calls, so the arguments are
//! split on top-level commas only. Parentheses, brackets, braces and
//! string/char literals are respected. Matching never crosses a line.

use std::ops::Range;

/// A `name(` occurrence on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Byte offset of the call name.
    pub start: usize,
    /// Byte offset of the opening parenthesis.
    pub open: usize,
    /// `None` when the closing parenthesis is not on this line.
    pub arguments: Option<Arguments>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arguments {
    /// Untrimmed byte ranges of each argument.
    pub ranges: Vec<Range<usize>>,
    /// Byte offset just past the closing parenthesis.
    pub end: usize,
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the next call of `name` at or after byte offset `from`.
///
/// The name must not continue an identifier or a qualified name on its
/// left (`myWrapper.newArray(` and `x.Wrapper.newArray(` are not calls).
pub fn next_call(line: &str, name: &str, from: usize) -> Option<CallSite> {
    if name.is_empty() {
        return None;
    }

    let mut search = from;
    while let Some(found) = line.get(search..)?.find(name) {
        let start = search + found;
        let open = start + name.len();
        search = open;

        let preceding = line[..start].chars().next_back();
        if preceding.is_some_and(|c| is_word_char(c) || c == '$' || c == '.') {
            continue;
        }
        if !line[open..].starts_with('(') {
            continue;
        }

        return Some(CallSite {
            start,
            open,
            arguments: split_arguments(line, open),
        });
    }
    None
}

/// Every call of `name` on the line, including calls nested in arguments.
pub fn call_sites(line: &str, name: &str) -> Vec<CallSite> {
    let mut sites = Vec::new();
    let mut from = 0;
    while let Some(site) = next_call(line, name, from) {
        from = site.open;
        sites.push(site);
    }
    sites
}

/// Split the arguments of the call whose `(` sits at byte offset `open`.
pub fn split_arguments(line: &str, open: usize) -> Option<Arguments> {
    let mut depth = 0usize;
    let mut ranges = Vec::new();
    let mut arg_start = open + 1;
    let mut chars = line[open + 1..]
        .char_indices()
        .map(|(i, c)| (i + open + 1, c));

    while let Some((i, c)) = chars.next() {
        match c {
            '"' | '\'' => skip_literal(&mut chars, c)?,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' if depth > 0 => depth -= 1,
            ')' => {
                let last = arg_start..i;
                if !ranges.is_empty() || !line[last.clone()].trim().is_empty() {
                    ranges.push(last);
                }
                return Some(Arguments { ranges, end: i + 1 });
            }
            ',' if depth == 0 => {
                ranges.push(arg_start..i);
                arg_start = i + 1;
            }
            _ => {}
        }
    }
    None
}

fn skip_literal(chars: &mut impl Iterator<Item = (usize, char)>, quote: char) -> Option<()> {
    while let Some((_, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Some(());
        }
    }
    None
}

/// Rewrite every call of `name` that has exactly `arity` arguments.
///
/// Arguments are trimmed and calls of the same name nested inside them are
/// rewritten first. Calls with another arity, or without a closing
/// parenthesis on this line, are left as written; `lint` reports them.
pub fn replace_calls(
    line: &str,
    name: &str,
    arity: usize,
    render: &dyn Fn(&[String]) -> String,
) -> String {
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut from = 0;

    while let Some(site) = next_call(line, name, from) {
        match site.arguments {
            Some(args) if args.ranges.len() == arity => {
                let rendered: Vec<String> = args
                    .ranges
                    .iter()
                    .map(|range| replace_calls(line[range.clone()].trim(), name, arity, render))
                    .collect();
                out.push_str(&line[copied..site.start]);
                out.push_str(&render(&rendered));
                copied = args.end;
                from = args.end;
            }
            // Keep looking inside: nested well-formed calls still qualify.
            _ => from = site.open,
        }
    }

    out.push_str(&line[copied..]);
    out
}
