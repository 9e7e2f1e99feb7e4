use tracing_subscriber::EnvFilter;

// RUST_LOG takes precedence, info otherwise
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the menu
        .with_writer(std::io::stderr);
    if json {
        // machine readable output, colors would end up inside the json strings
        builder.with_ansi(false).json().init();
    } else {
        builder.compact().init();
    }
}
