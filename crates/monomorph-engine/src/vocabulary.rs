//! Placeholder spellings recognized in templates.
//!
//! The defaults match the marker declarations templates import from
//! `primavera.SpecializedCodeGenerator`. A manifest may override any field
//! through its `[vocabulary]` table; omitted fields keep the default.

use serde::Deserialize;

/// Role of a functional-interface marker, i.e. the suffix of its concrete
/// primitive-specialized replacement (`IntFunction`, `LongConsumer`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum MarkerRole {
    Function,
    Consumer,
    BinaryOperator,
}

impl MarkerRole {
    pub fn suffix(self) -> &'static str {
        match self {
            MarkerRole::Function => "Function",
            MarkerRole::Consumer => "Consumer",
            MarkerRole::BinaryOperator => "BinaryOperator",
        }
    }
}

/// A functional-interface marker declared inside the marker namespace.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marker {
    pub name: String,
    pub role: MarkerRole,
}

/// A template-only idiom rewritten to its concrete spelling.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Convenience {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Vocabulary {
    /// Boxed placeholder; also matches one trailing digit (`Wrapper1`).
    pub wrapper: String,
    /// Scalar placeholder.
    pub primitive: String,
    /// Package holding the placeholder declarations; its imports never
    /// reach generated output.
    pub marker_namespace: String,
    /// Package of the concrete functional interfaces markers resolve to.
    pub function_package: String,
    pub markers: Vec<Marker>,
    pub zero_call: String,
    pub array_call: String,
    pub compare_call: String,
    pub increment_call: String,
    pub decrement_call: String,
    /// Method-name suffix deleted for the object target (`applyAsWrapper`).
    pub wrapper_suffix: String,
    pub conveniences: Vec<Convenience>,
    /// Text whose presence means the output already carries a generated marker.
    pub generated_marker: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            wrapper: "Wrapper".into(),
            primitive: "Primitive".into(),
            marker_namespace: "primavera.SpecializedCodeGenerator".into(),
            function_package: "java.util.function".into(),
            markers: vec![
                Marker {
                    name: "WrapperFunction".into(),
                    role: MarkerRole::Function,
                },
                Marker {
                    name: "WrapperConsumer".into(),
                    role: MarkerRole::Consumer,
                },
                Marker {
                    name: "WrapperBinaryOperator".into(),
                    role: MarkerRole::BinaryOperator,
                },
            ],
            // Misspelled in the marker declaration itself; templates call it this way.
            zero_call: "Wrapper.initital".into(),
            array_call: "Wrapper.newArray".into(),
            compare_call: "Primitive.compare".into(),
            increment_call: "Primitive.increment".into(),
            decrement_call: "Primitive.decrement".into(),
            wrapper_suffix: "AsWrapper".into(),
            conveniences: vec![Convenience {
                from: "new List()".into(),
                to: "new ArrayList()".into(),
            }],
            generated_marker: "@Generated(".into(),
        }
    }
}

impl Vocabulary {
    /// The single-argument transform marker, renamed wherever it appears.
    pub fn transform_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.role == MarkerRole::Function)
    }

    /// Placeholder calls with their expected argument counts.
    pub fn calls(&self) -> [(&str, usize); 5] {
        [
            (self.zero_call.as_str(), 0),
            (self.array_call.as_str(), 1),
            (self.compare_call.as_str(), 2),
            (self.increment_call.as_str(), 2),
            (self.decrement_call.as_str(), 2),
        ]
    }
}
