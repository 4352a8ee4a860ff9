use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format
pub const LOG_FORMAT_ENV: &str = "FORMS_LOG_FORMAT";

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    #[default]
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses `"text"` or `"json"`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }

    /// Reads [`LOG_FORMAT_ENV`], falling back to [`LogFormat::Text`].
    pub fn from_env_or_default() -> Self {
        env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }
}

/// Initializes the global tracing subscriber.
///
/// Loads `.env` if present, filters with `RUST_LOG` (default `info`), writes
/// text or JSON according to [`LOG_FORMAT_ENV`], and forwards records emitted
/// through the `log` macros used inside this crate.
///
/// Safe to call more than once: when a global subscriber is already set the
/// call returns `Ok(())` and leaves it in place.
///
/// # Examples
///
/// ```
/// use telehealth_forms::utils::logger::init_logging;
///
/// init_logging().expect("logging setup");
/// ```
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;

    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = match LogFormat::from_env_or_default() {
        LogFormat::Text => (Some(fmt::layer().with_target(true)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_target(true))),
    };

    // Initialize LogTracer bridge first (idempotent - errors are ignored)
    let _ = LogTracer::init();

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init();

    match result {
        Ok(()) => {
            tracing::debug!("logging initialized");
            Ok(())
        }
        Err(e) => {
            // An already installed subscriber stays in place.
            eprintln!(
                "Tracing subscriber already initialized or failed to initialize: {:?}",
                e
            );
            Ok(())
        }
    }
}
