#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data for monomorph.
//!
//! - **Registry**: the closed, ordered catalogue of specialization targets
//!   (`TypeDescriptor`), shared read-only by every generation run
//! - **Colors**: the terminal palette used by the CLI reports

mod colors;
mod invariants;
pub mod registry;


pub use colors::Colors;
pub use registry::{TypeDescriptor, all, from_name, numeric, numeric_of, suggest};
