use std::path::PathBuf;

use monomorph_engine::emit::{render_file, write_atomic};
use monomorph_engine::lint::lint;
use monomorph_engine::{Generator, Layout, LogicalName, Vocabulary, locate_template};

use super::batch::exit_with;
use super::target_resolver::require_target;
use crate::logging;

pub struct RenderArgs {
    pub template: String,
    pub target: String,
    pub template_root: Option<PathBuf>,
    pub package_private: bool,
    pub output: Option<PathBuf>,
    pub header: bool,
    pub verbose: u8,
}

pub fn run(args: RenderArgs) {
    logging::init(args.verbose);
    let target = require_target(&args.target);
    let name: LogicalName = args.template.parse().unwrap_or_else(|e| exit_with(e));

    let mut layout = Layout::default();
    if let Some(root) = args.template_root {
        layout.template_root = root;
    }
    let generator = Generator::new(layout, Vocabulary::default())
        .unwrap_or_else(|e| exit_with(e))
        .header(args.header);

    let template = locate_template(generator.layout(), &name).unwrap_or_else(|e| exit_with(e));
    for warning in lint(&template.lines, generator.pipeline().vocabulary()) {
        tracing::warn!(template = %name, "{warning}");
    }

    let lines = generator
        .render(&template, target, args.package_private)
        .unwrap_or_else(|e| exit_with(e));
    let text = render_file(&lines, generator.layout().line_ending);

    match args.output {
        Some(path) => write_atomic(&path, &text).unwrap_or_else(|e| exit_with(e)),
        None => print!("{text}"),
    }
}
