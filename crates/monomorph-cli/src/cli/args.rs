//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `check` can share
//! their manifest flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file (positional, defaults to `monomorph.toml`).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .default_value("monomorph.toml")
        .help("Generation manifest")
}

/// Restrict the run to some templates (--only, repeatable).
pub fn only_arg() -> Arg {
    Arg::new("only")
        .long("only")
        .value_name("TEMPLATE")
        .action(ArgAction::Append)
        .help("Only process this template (repeatable)")
}

/// Template logical name (positional, required).
pub fn template_arg() -> Arg {
    Arg::new("template")
        .value_name("TEMPLATE")
        .required(true)
        .help("Template name, e.g. primavera.array.WrapperList")
}

/// Specialization target (-t/--target).
pub fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("TARGET")
        .required(true)
        .help("Target type (int, long, float, double, object)")
}

/// Template root directory (--template-root).
pub fn template_root_arg() -> Arg {
    Arg::new("template_root")
        .long("template-root")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory holding templates [default: src/test/java]")
}

/// Demote the top-level declaration (--package-private).
pub fn package_private_arg() -> Arg {
    Arg::new("package_private")
        .long("package-private")
        .action(ArgAction::SetTrue)
        .help("Remove `public` from the top-level declaration")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Treat lint warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat template warnings as errors")
}

/// Stop at the first failure (--fail-fast).
pub fn fail_fast_arg() -> Arg {
    Arg::new("fail_fast")
        .long("fail-fast")
        .action(ArgAction::SetTrue)
        .help("Stop at the first failure")
}

/// Disable parallel generation (--sequential).
pub fn sequential_arg() -> Arg {
    Arg::new("sequential")
        .long("sequential")
        .action(ArgAction::SetTrue)
        .help("Process templates one at a time")
}

/// Omit the generated-file header comment (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't add the generated-file header comment")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log more (-v info, -vv debug, -vvv trace)")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
