use std::path::PathBuf;

use monomorph_core::Colors;
use monomorph_engine::Options;

use super::batch;
use crate::logging;

pub struct GenerateArgs {
    pub manifest: PathBuf,
    pub only: Vec<String>,
    pub strict: bool,
    pub fail_fast: bool,
    pub parallel: bool,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    logging::init(args.verbose);
    let colors = Colors::new(args.color);

    let options = Options {
        strict: args.strict,
        parallel: args.parallel,
        fail_fast: args.fail_fast,
        ..Options::default()
    };
    let batch = batch::load(&args.manifest, &args.only, options);
    let report = batch.generator.generate_all(&batch.requests);

    for path in report.generated() {
        println!(
            "{}Generate{} {}{}{}",
            colors.green,
            colors.reset,
            colors.blue,
            path.display(),
            colors.reset
        );
    }

    if batch::report_failures(&report, colors) > 0 {
        std::process::exit(1);
    }
}
