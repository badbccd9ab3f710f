//! Placeholder calls the rewrite rules cannot expand.
//!
//! The rules leave such calls as written, so the generated module would
//! still mention a placeholder. Lint runs once per template, before any
//! target is rendered.

use std::fmt;

use crate::rewrite::call_sites;
use crate::vocabulary::Vocabulary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    /// The closing parenthesis is not on the call's line.
    Unbalanced,
    Arity { expected: usize, found: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// 1-based.
    pub line: usize,
    pub call: String,
    pub problem: Problem,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::Unbalanced => write!(
                f,
                "line {}: `{}(` is not closed on the same line",
                self.line, self.call
            ),
            Problem::Arity { expected, found } => write!(
                f,
                "line {}: `{}` takes {} {}, found {}",
                self.line,
                self.call,
                expected,
                if expected == 1 { "argument" } else { "arguments" },
                found
            ),
        }
    }
}

pub fn lint(lines: &[String], vocabulary: &Vocabulary) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        for (call, expected) in vocabulary.calls() {
            for site in call_sites(line, call) {
                let problem = match site.arguments {
                    None => Problem::Unbalanced,
                    Some(args) if args.ranges.len() != expected => Problem::Arity {
                        expected,
                        found: args.ranges.len(),
                    },
                    Some(_) => continue,
                };
                warnings.push(Warning {
                    line: index + 1,
                    call: call.to_string(),
                    problem,
                });
            }
        }
    }

    warnings
}
