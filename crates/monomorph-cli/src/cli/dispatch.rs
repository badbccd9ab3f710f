//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::render::RenderArgs;
use crate::commands::targets::TargetsArgs;

pub struct GenerateParams {
    pub manifest: PathBuf,
    pub only: Vec<String>,
    pub strict: bool,
    pub fail_fast: bool,
    pub sequential: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            only: parse_only(m),
            strict: m.get_flag("strict"),
            fail_fast: m.get_flag("fail_fast"),
            sequential: m.get_flag("sequential"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            manifest: p.manifest,
            only: p.only,
            strict: p.strict,
            fail_fast: p.fail_fast,
            parallel: !p.sequential,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RenderParams {
    pub template: String,
    pub target: String,
    pub template_root: Option<PathBuf>,
    pub package_private: bool,
    pub output: Option<PathBuf>,
    pub no_header: bool,
    pub verbose: u8,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            template: m.get_one::<String>("template").cloned().unwrap_or_default(),
            target: m.get_one::<String>("target").cloned().unwrap_or_default(),
            template_root: m.get_one::<PathBuf>("template_root").cloned(),
            package_private: m.get_flag("package_private"),
            output: m.get_one::<PathBuf>("output").cloned(),
            no_header: m.get_flag("no_header"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            template: p.template,
            target: p.target,
            template_root: p.template_root,
            package_private: p.package_private,
            output: p.output,
            header: !p.no_header,
            verbose: p.verbose,
        }
    }
}

pub struct CheckParams {
    pub manifest: PathBuf,
    pub only: Vec<String>,
    pub strict: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            only: parse_only(m),
            strict: m.get_flag("strict"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest: p.manifest,
            only: p.only,
            strict: p.strict,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TargetsParams {
    pub json: bool,
}

impl TargetsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<TargetsParams> for TargetsArgs {
    fn from(p: TargetsParams) -> Self {
        Self { json: p.json }
    }
}

fn parse_manifest(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("monomorph.toml"))
}

fn parse_only(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("only")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
