//! Test utilities shared by the engine's test modules.

use std::fs;
use std::path::Path;

use monomorph_core::TypeDescriptor;

use crate::Pipeline;
use crate::filter::filter_dropped;

/// Split fixture text into template lines.
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

/// Rewrite and filter `template` for one target with the default vocabulary.
pub fn specialize(template: &str, target: &TypeDescriptor) -> String {
    let pipeline = Pipeline::standard().unwrap();
    filter_dropped(pipeline.rewrite_all(&lines(template), target)).join("\n")
}

/// Write a template fixture below `root` at the path of its logical name.
pub fn write_template(root: &Path, name: &str, text: &str) {
    let mut path = root.to_path_buf();
    path.extend(name.split('.'));
    path.set_extension("java");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}
