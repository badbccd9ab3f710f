pub mod batch;
pub mod check;
pub mod generate;
pub mod render;
pub mod target_resolver;
pub mod targets;
