//! The specialization target catalogue.
//!
//! Targets are declared once through `define_targets!`, which emits the
//! public constants, the ordered table behind [`all`], and a compile-time
//! label check for every entry. The table is closed: generation runs walk
//! it in declared order so batch output and logs are reproducible.

use std::fmt;

use serde::Serialize;

use crate::invariants::is_identifier_fragment;

/// One specialization target and the spellings that drive substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    /// Registry name used by manifests and the CLI (`int`, `double`, ...).
    pub name: &'static str,
    /// True scalar: arrays of it are native scalar arrays.
    pub numeric: bool,
    /// Native scalar spelling (`int`, `float`); `E` for the object target.
    pub scalar_name: &'static str,
    /// Capitalized fragment spliced into specialized identifiers (`Int`).
    pub short_label: &'static str,
    /// General type used in generic positions and for `compare` calls.
    pub boxed_type_name: &'static str,
    /// Source text of the zero value (`0`, `0f`, `null`).
    pub zero_value: &'static str,
}

impl TypeDescriptor {
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Names this target answers to, in lookup priority order.
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> {
        let label = (!self.short_label.is_empty()).then_some(self.short_label);
        let boxed = self.numeric.then_some(self.boxed_type_name);
        std::iter::once(self.name).chain(label).chain(boxed)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

macro_rules! define_targets {
    (
        $(
            $const_name:ident => {
                name: $name:literal,
                numeric: $numeric:literal,
                scalar: $scalar:literal,
                label: $label:literal,
                boxed: $boxed:literal,
                zero: $zero:literal $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            pub const $const_name: TypeDescriptor = TypeDescriptor {
                name: $name,
                numeric: $numeric,
                scalar_name: $scalar,
                short_label: $label,
                boxed_type_name: $boxed,
                zero_value: $zero,
            };

            const _: () = assert!(is_identifier_fragment($label));
        )*

        static ALL: &[TypeDescriptor] = &[$($const_name),*];
    };
}

define_targets! {
    OBJECT => {
        name: "object",
        numeric: false,
        scalar: "E",
        label: "",
        boxed: "E",
        zero: "null",
    },
    INT => {
        name: "int",
        numeric: true,
        scalar: "int",
        label: "Int",
        boxed: "Integer",
        zero: "0",
    },
    LONG => {
        name: "long",
        numeric: true,
        scalar: "long",
        label: "Long",
        boxed: "Long",
        zero: "0L",
    },
    FLOAT => {
        name: "float",
        numeric: true,
        scalar: "float",
        label: "Float",
        boxed: "Float",
        zero: "0f",
    },
    DOUBLE => {
        name: "double",
        numeric: true,
        scalar: "double",
        label: "Double",
        boxed: "Double",
        zero: "0d",
    },
}

/// Every target, in declared order.
pub fn all() -> &'static [TypeDescriptor] {
    ALL
}

/// The true scalar targets, in declared order.
pub fn numeric() -> Vec<&'static TypeDescriptor> {
    numeric_of(ALL)
}

/// Keep only the true scalar targets of `targets`, preserving order.
pub fn numeric_of<'a>(
    targets: impl IntoIterator<Item = &'a TypeDescriptor>,
) -> Vec<&'a TypeDescriptor> {
    targets.into_iter().filter(|t| t.numeric).collect()
}

/// Case-insensitive lookup by registry name, short label or boxed name.
pub fn from_name(name: &str) -> Option<&'static TypeDescriptor> {
    let name = name.trim();
    ALL.iter().find(|t| t.aliases().any(|alias| alias.eq_ignore_ascii_case(name)))
}

/// Suggest the closest registry name for a typo.
pub fn suggest(input: &str) -> Option<&'static str> {
    let input = input.to_ascii_lowercase();
    ALL.iter()
        .map(|t| (t.name, levenshtein(t.name, &input)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(name, _)| name)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
