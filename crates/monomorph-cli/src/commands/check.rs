use std::path::PathBuf;

use monomorph_core::Colors;
use monomorph_engine::Options;

use super::batch;
use crate::logging;

pub struct CheckArgs {
    pub manifest: PathBuf,
    pub only: Vec<String>,
    pub strict: bool,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    logging::init(args.verbose);
    let colors = Colors::new(args.color);

    let options = Options {
        strict: args.strict,
        ..Options::default()
    };
    let batch = batch::load(&args.manifest, &args.only, options);
    let report = batch.generator.check_all(&batch.requests);

    // Without --strict, template warnings are logged, not failures.
    if batch::report_failures(&report, colors) > 0 {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
