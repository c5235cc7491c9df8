/// Initialize the logger with the specified verbosity level
///
/// `RUST_LOG` takes precedence over the level derived from `verbose`
/// (0=warn, 1=info, 2=debug, 3+=trace).
pub fn setup_logger(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter_for(verbose)))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "discocli=warn",
        1 => "discocli=info",
        2 => "discocli=debug",
        _ => "discocli=trace",
    }
}
