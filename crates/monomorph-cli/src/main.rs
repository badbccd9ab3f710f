mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, RenderParams, TargetsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("targets", m)) => {
            let params = TargetsParams::from_matches(m);
            commands::targets::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
