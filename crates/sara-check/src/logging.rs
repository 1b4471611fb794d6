//! Logging initialization.
//!
//! Logs always go to stderr so stdout stays clean for results:
//! - **Text** (default): compact human-readable lines
//! - **JSON**: one structured object per event, for piping into tooling

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the default log level.
pub const LOG_LEVEL_VAR: &str = "SARA_LOG_LEVEL";

/// Environment variable selecting the log format (`text` or `json`).
pub const LOG_FORMAT_VAR: &str = "SARA_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text.
    Text,
    /// Structured JSON.
    Json,
}

impl LogFormat {
    /// Reads the format from [`LOG_FORMAT_VAR`], defaulting to text.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise [`LOG_LEVEL_VAR`] is used, falling
/// back to `warn` so normal runs only print results.
///
/// # Errors
///
/// Returns an error if the filter directive cannot be parsed.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let log_level = std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" json ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Text);
    }
}
