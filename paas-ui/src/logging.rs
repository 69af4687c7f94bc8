//! Logging configuration
//!
//! Structured `tracing` output written to the browser console

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wasm_bindgen::JsValue;
use web_sys::console;

const FALLBACK_LEVEL: &str = "info";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // EnvFilter directive (trace, debug, info, warn, error, or per target)
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: FALLBACK_LEVEL.to_string(),
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    pub fn new(level: &str) -> Self {
        Self {
            level: level.to_string(),
            ..Self::default()
        }
    }

    /// Build the filter; an unparsable directive falls back to `info`
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }

    /// Install the global subscriber
    pub fn init(&self) -> Result<(), TryInitError> {
        // The browser stamps its own time; wasm has no system clock.
        let console_layer = fmt::layer()
            .with_target(self.include_targets)
            .with_level(true)
            .with_ansi(false)
            .without_time()
            .with_writer(ConsoleMakeWriter);

        tracing_subscriber::registry()
            .with(self.filter())
            .with(console_layer)
            .try_init()
    }
}

/// Hands out one [`ConsoleWriter`] per event, routed by level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a formatted event and emits it as a single console call on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = JsValue::from_str(&self.line());
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig::new("paas_common=loud");
        assert_eq!(
            config.filter().to_string(),
            EnvFilter::new(FALLBACK_LEVEL).to_string()
        );
    }

    #[test]
    fn test_writer_buffers_whole_event() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "WARN paas_common::controller: ").unwrap();
        writeln!(writer, "Failed to load templates").unwrap();
        assert_eq!(
            writer.line(),
            "WARN paas_common::controller: Failed to load templates"
        );
        // Dropping with content would call into the browser console.
        writer.buffer.clear();
    }
}
