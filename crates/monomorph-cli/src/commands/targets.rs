pub struct TargetsArgs {
    pub json: bool,
}

pub fn run(args: TargetsArgs) {
    let targets = monomorph_core::all();

    if args.json {
        match serde_json::to_string_pretty(targets) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Supported targets ({}):", targets.len());
    for target in targets {
        let kind = if target.numeric { "scalar" } else { "object" };
        println!(
            "  {:<8} {:<8} {:<8} {}",
            target.name, target.scalar_name, target.boxed_type_name, kind
        );
    }
}
