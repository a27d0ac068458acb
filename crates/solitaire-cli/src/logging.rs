use anyhow::Context;
use flexi_logger::{Logger, LoggerHandle};

/// Starts logging to stderr.
///
/// An explicit `level` (a filter such as `debug` or `solitaire_training=debug`)
/// wins over `RUST_LOG`; without either, `info` is used. The returned handle
/// must be kept alive until the program ends.
pub fn setup_logging(level: Option<&str>) -> anyhow::Result<LoggerHandle> {
    let logger = match level {
        Some(level) => Logger::try_with_str(level),
        None => Logger::try_with_env_or_str("info"),
    }
    .context("Invalid log level specification")?;

    logger
        .format(flexi_logger::colored_default_format)
        .start()
        .context("Failed to start logger")
}
