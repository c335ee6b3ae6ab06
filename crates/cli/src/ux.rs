use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries the status report. `RUST_LOG`
/// takes precedence over the flags when set.
pub fn setup_logging(verbose: u8, quiet: bool, json: bool) -> anyhow::Result<()> {
    if json {
        // Mute all logging so stdout stays valid JSON
        tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default())
            .context("setting no-op subscriber failed")?;
        return Ok(());
    }

    let level = log_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

pub fn log_level(verbose: u8, quiet: bool) -> tracing::Level {
    if quiet {
        return tracing::Level::ERROR;
    }
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
