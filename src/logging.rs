//! Standardized logging setup for wren-bridge embedders
//!
//! Thin configuration layer over the `tracing` crate with structured output
//! and env-filter support. The library itself only emits events; installing a
//! subscriber is the embedder's choice, and these helpers make the common
//! setups one call.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with timestamps
    Pretty,
    /// Compact format for production
    Compact,
    /// JSON format for structured logging
    Json,
}

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: LogFormat,
    /// Output destination
    pub output: LogOutput,
    /// Whether to include span events
    pub span_events: bool,
    /// Custom filter directives (e.g., "wren_bridge=debug")
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            output: LogOutput::Stderr,
            span_events: false,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already set, which callers racing on
/// initialization may simply ignore.
pub fn init_logging(config: LogConfig) -> Result<(), TryInitError> {
    let filter = build_filter(&config);

    match config.output {
        LogOutput::Stdout => init_with_writer(&config, filter, std::io::stdout),
        LogOutput::Stderr => init_with_writer(&config, filter, std::io::stderr),
    }
}

fn init_with_writer<W>(config: &LogConfig, filter: EnvFilter, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_span_events(span_events_config(config.span_events));

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(layer.pretty().with_filter(filter))
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(layer.compact().with_filter(filter))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(layer.json().with_filter(filter))
            .try_init(),
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let base_filter = EnvFilter::from_default_env().add_directive(config.level.into());

    match &config.filter {
        Some(filter_str) => filter_str.split(',').fold(base_filter, |filter, directive| {
            filter.add_directive(directive.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid filter directive: {}", directive);
                config.level.into()
            }))
        }),
        None => base_filter,
    }
}

fn span_events_config(enabled: bool) -> FmtSpan {
    if enabled {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Initialize logging with defaults for development
pub fn init_dev_logging() -> Result<(), TryInitError> {
    init_logging(
        LogConfig::new()
            .with_level(Level::DEBUG)
            .with_span_events(true)
            .with_filter("wren_bridge=debug"),
    )
}
