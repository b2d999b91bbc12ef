use tracing::Level;

// Logs are written to stderr as json lines so they never mix with the menu on stdout.
pub fn setup_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}
