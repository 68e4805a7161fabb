//! Logger initialization

/// Map a `-v` count to a default filter level
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity count. Quiet mode leaves
/// the logger uninstalled.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level_for(verbose)))
        .format_timestamp(None)
        .init();
}
