use anyhow::{anyhow, Result};
use docheaders_config::LogConfig;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable overriding the log file of the config.
pub const LOG_PATH_ENV: &str = "DOCHEADERS_LOG_PATH";

/// Log files larger than this are removed on startup.
const MAX_LOG_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Parses `[log] max-level`, `None` when it is not a level name.
pub fn parse_max_level(max_level: &str) -> Option<tracing::Level> {
    max_level.parse().ok()
}

/// Picks the log file: the command line flag first, then the environment,
/// then the config file.
pub fn resolve_log_path(
    cli_log: Option<PathBuf>,
    env_log: Option<PathBuf>,
    log_config: &LogConfig,
) -> Option<PathBuf> {
    cli_log
        .or(env_log)
        .or_else(|| log_config.log_file.as_ref().map(PathBuf::from))
}

/// Installs the global subscriber.
///
/// Logs go to `log_path` when there is one, otherwise only warnings and
/// errors are written to stderr. The returned guard must be held until exit
/// so that buffered lines are flushed.
pub fn init(log_path: Option<PathBuf>, log_config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_path) = log_path else {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        return Ok(None);
    };

    if let Ok(metadata) = std::fs::metadata(&log_path) {
        if log_path.is_file() && metadata.len() > MAX_LOG_FILE_SIZE {
            std::fs::remove_file(&log_path)?;
        }
    }

    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| anyhow!("{log_path:?} has no parent"))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let parsed_level = parse_max_level(&log_config.max_level);
    let max_level = parsed_level.unwrap_or(tracing::Level::DEBUG);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if parsed_level.is_none() {
        tracing::warn!(
            max_level = %log_config.max_level,
            "Invalid max log level in the config, using debug"
        );
    }

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_level() {
        assert_eq!(parse_max_level("trace"), Some(tracing::Level::TRACE));
        assert_eq!(parse_max_level("WARN"), Some(tracing::Level::WARN));
        assert_eq!(parse_max_level("loud"), None);
        assert_eq!(parse_max_level(""), None);
    }

    #[test]
    fn test_log_path_precedence() {
        let log_config = LogConfig {
            log_file: Some("/tmp/config.log".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_log_path(
                Some("/tmp/cli.log".into()),
                Some("/tmp/env.log".into()),
                &log_config
            ),
            Some(PathBuf::from("/tmp/cli.log"))
        );
        assert_eq!(
            resolve_log_path(None, Some("/tmp/env.log".into()), &log_config),
            Some(PathBuf::from("/tmp/env.log"))
        );
        assert_eq!(
            resolve_log_path(None, None, &log_config),
            Some(PathBuf::from("/tmp/config.log"))
        );
        assert_eq!(resolve_log_path(None, None, &LogConfig::default()), None);
    }
}
