use monomorph_core::TypeDescriptor;

/// Resolve a target by registry name, short label or boxed name.
pub fn resolve_target(name: &str) -> Result<&'static TypeDescriptor, String> {
    monomorph_core::from_name(name).ok_or_else(|| format!("unknown target: '{name}'"))
}

/// Resolve a target, or exit with a suggestion.
pub fn require_target(name: &str) -> &'static TypeDescriptor {
    match resolve_target(name) {
        Ok(target) => target,
        Err(msg) => {
            eprintln!("error: {msg}");
            if let Some(suggestion) = monomorph_core::suggest(name) {
                eprintln!();
                eprintln!("Did you mean '{suggestion}'?");
            }
            eprintln!();
            eprintln!("Run 'monomorph targets' for the full list.");
            std::process::exit(1);
        }
    }
}
