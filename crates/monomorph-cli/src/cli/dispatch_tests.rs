//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Defaults: the manifest path and flags when nothing is passed
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion: negative flags become positive command options

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, generate_command, render_command, targets_command};
use crate::commands::generate::GenerateArgs;
use crate::commands::render::RenderArgs;

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.manifest, PathBuf::from("monomorph.toml"));
    assert!(params.only.is_empty());
    assert!(!params.strict);
    assert!(!params.fail_fast);
    assert!(!params.sequential);
    assert_eq!(params.verbose, 0);
    assert_eq!(params.color, ColorChoice::Auto);

    let args: GenerateArgs = params.into();
    assert!(args.parallel);
}

#[test]
fn generate_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "demos/primavera.toml",
            "--only",
            "primavera.array.WrapperList",
            "--only",
            "primavera.set.WrapperSet",
            "--strict",
            "--fail-fast",
            "--sequential",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.manifest, PathBuf::from("demos/primavera.toml"));
    assert_eq!(
        params.only,
        ["primavera.array.WrapperList", "primavera.set.WrapperSet"]
    );
    assert!(params.strict);
    assert!(params.fail_fast);
    assert_eq!(params.verbose, 2);
    assert_eq!(params.color, ColorChoice::Never);

    let args: GenerateArgs = params.into();
    assert!(!args.parallel);
    assert!(!args.color);
}

#[test]
fn generate_always_writes_headers() {
    let result = generate_command().try_get_matches_from(["generate", "--no-header"]);
    assert!(result.is_err());
}

#[test]
fn render_requires_target() {
    let result = render_command().try_get_matches_from(["render", "primavera.array.WrapperList"]);
    assert!(result.is_err());
}

#[test]
fn render_params() {
    let m = render_command()
        .try_get_matches_from([
            "render",
            "primavera.map.SkipListWrapperMap",
            "-t",
            "long",
            "--template-root",
            "templates",
            "--package-private",
            "-o",
            "LongSkipListMap.java",
        ])
        .unwrap();
    let args: RenderArgs = RenderParams::from_matches(&m).into();

    assert_eq!(args.template, "primavera.map.SkipListWrapperMap");
    assert_eq!(args.target, "long");
    assert_eq!(args.template_root, Some(PathBuf::from("templates")));
    assert!(args.package_private);
    assert_eq!(args.output, Some(PathBuf::from("LongSkipListMap.java")));
    assert!(args.header);
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "build/monomorph.toml", "--strict"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.manifest, PathBuf::from("build/monomorph.toml"));
    assert!(params.strict);
}

#[test]
fn check_rejects_generate_only_flags() {
    let result = check_command().try_get_matches_from(["check", "--fail-fast"]);
    assert!(result.is_err());
}

#[test]
fn targets_json_flag() {
    let m = targets_command()
        .try_get_matches_from(["targets", "--json"])
        .unwrap();
    assert!(TargetsParams::from_matches(&m).json);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["monomorph"]).is_err());
    assert!(
        build_cli()
            .try_get_matches_from(["monomorph", "targets"])
            .is_ok()
    );
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
