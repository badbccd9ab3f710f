//! Manifest loading and failure reporting shared by `generate` and `check`.

use std::fmt::Display;
use std::path::Path;

use monomorph_core::Colors;
use monomorph_engine::{Generator, Manifest, Options, Outcome, Report, Request};

pub struct Batch {
    pub generator: Generator,
    pub requests: Vec<Request>,
}

/// Load a manifest and build its generator, or exit with an error.
pub fn load(manifest_path: &Path, only: &[String], options: Options) -> Batch {
    let manifest = Manifest::from_path(manifest_path).unwrap_or_else(|e| exit_with(e));
    let requests = manifest.requests().unwrap_or_else(|e| exit_with(e));
    let requests = select(requests, only).unwrap_or_else(|e| exit_with(e));

    let generator = Generator::new(manifest.layout, manifest.vocabulary)
        .unwrap_or_else(|e| exit_with(e))
        .with_options(options);

    Batch {
        generator,
        requests,
    }
}

/// Keep the requests for the templates named in `only`; all when empty.
pub fn select(requests: Vec<Request>, only: &[String]) -> Result<Vec<Request>, String> {
    if let Some(missing) = only
        .iter()
        .find(|name| !requests.iter().any(|r| r.template.as_str() == name.as_str()))
    {
        return Err(format!("template '{missing}' is not in the manifest"));
    }
    if only.is_empty() {
        return Ok(requests);
    }

    Ok(requests
        .into_iter()
        .filter(|r| only.iter().any(|name| name == r.template.as_str()))
        .collect())
}

/// `error: <template> (<target>): <message>`, or `None` for a success.
pub fn format_failure(outcome: &Outcome, colors: Colors) -> Option<String> {
    let err = outcome.error()?;
    Some(format!(
        "{}error{}: {}{}{} {}({}){}: {}",
        colors.red,
        colors.reset,
        colors.blue,
        outcome.template,
        colors.reset,
        colors.dim,
        outcome.target,
        colors.reset,
        err
    ))
}

/// Print every failure to stderr; returns how many there were.
pub fn report_failures(report: &Report, colors: Colors) -> usize {
    let mut failures = 0;
    for line in report.outcomes().iter().filter_map(|o| format_failure(o, colors)) {
        eprintln!("{line}");
        failures += 1;
    }
    failures
}

/// Print `error: <err>` and exit with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
