//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("monomorph")
        .about("Generate primitive-specialized Java sources from generic templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(render_command())
        .subcommand(check_command())
        .subcommand(targets_command())
}

/// Run a manifest and write every generated file.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate every (template, target) pair of a manifest")
        .override_usage(
            "\
  monomorph generate [MANIFEST]
  monomorph generate [MANIFEST] --only <TEMPLATE>...",
        )
        .after_help(
            r#"EXAMPLES:
  monomorph generate                                  # ./monomorph.toml
  monomorph generate demos/primavera.toml             # explicit manifest
  monomorph generate --only primavera.array.WrapperList
  monomorph generate --strict --fail-fast -v          # CI"#,
        )
        .arg(manifest_arg())
        .arg(only_arg())
        .arg(strict_arg())
        .arg(fail_fast_arg())
        .arg(sequential_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Print one specialization without touching the output tree.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render one template for one target")
        .override_usage(
            "\
  monomorph render <TEMPLATE> -t <TARGET>
  monomorph render <TEMPLATE> -t <TARGET> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  monomorph render primavera.array.WrapperList -t int
  monomorph render primavera.map.SkipListWrapperMap -t long --package-private
  monomorph render primavera.set.WrapperSet -t double --template-root templates/
  monomorph render primavera.ring.WrapperRingBuffer -t int -o IntRingBuffer.java"#,
        )
        .arg(template_arg())
        .arg(target_arg())
        .arg(template_root_arg())
        .arg(package_private_arg())
        .arg(output_arg())
        .arg(no_header_arg())
        .arg(verbose_arg())
}

/// Render every pair of a manifest in memory.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check a manifest and its templates without writing")
        .override_usage("  monomorph check [MANIFEST]")
        .after_help(
            r#"EXAMPLES:
  monomorph check                          # ./monomorph.toml
  monomorph check demos/primavera.toml --strict"#,
        )
        .arg(manifest_arg())
        .arg(only_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// List the specialization targets.
pub fn targets_command() -> Command {
    Command::new("targets")
        .about("List supported specialization targets")
        .arg(json_arg())
}
