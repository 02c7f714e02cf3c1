//! Tracing layer feeding the diagnostic log, and subscriber setup.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::DiagnosticEntry;
use super::writer::DiagnosticLogWriter;

/// Default console filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "linkbio=info,linkbio_core=info,linkbio_cli=info";

/// A tracing Layer appending events at or above `min_level` to a JSONL file.
pub struct DiagnosticLayer {
    writer: Arc<DiagnosticLogWriter>,
    min_level: Level,
}

impl DiagnosticLayer {
    /// Record warnings and errors for `instance` under `log_dir`.
    pub fn new(log_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        let writer = DiagnosticLogWriter::new(log_dir, instance)?;
        Ok(Self {
            writer: Arc::new(writer),
            min_level: Level::WARN,
        })
    }

    /// Change the least severe level that gets recorded.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Level ordering: TRACE > DEBUG > ... > ERROR
        if *metadata.level() > self.min_level {
            return;
        }

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = DiagnosticEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.instance(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Never panic from inside logging
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn put(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.put(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.put(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.into());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, serde_json::Value::String(value.to_string()));
    }
}

/// Builder for the process-wide subscriber: console plus optional JSONL.
pub struct LoggingBuilder {
    instance: String,
    log_dir: Option<PathBuf>,
    verbosity: u8,
}

impl LoggingBuilder {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            log_dir: None,
            verbosity: 0,
        }
    }

    /// Also append warnings and errors to JSONL files in `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Number of `-v` flags: 1 = debug, 2+ = trace.
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let fallback = match self.verbosity {
            0 => DEFAULT_FILTER.to_string(),
            1 => DEFAULT_FILTER.replace("=info", "=debug"),
            _ => DEFAULT_FILTER.replace("=info", "=trace"),
        };
        if self.verbosity > 0 {
            return EnvFilter::new(fallback);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }

    /// Build only the JSONL layer, for manual composition.
    pub fn build_layer(&self) -> std::io::Result<Option<DiagnosticLayer>> {
        self.log_dir
            .as_ref()
            .map(|dir| DiagnosticLayer::new(dir, &self.instance))
            .transpose()
    }

    /// The JSONL layer, or none plus the reason when the log dir is unusable.
    fn layer_or_console(&self) -> (Option<DiagnosticLayer>, Option<std::io::Error>) {
        match self.build_layer() {
            Ok(layer) => (layer, None),
            Err(e) => (None, Some(e)),
        }
    }

    /// Install the global subscriber. Returns the JSONL path, if any.
    ///
    /// An unwritable log dir only costs the JSONL file: console logging is
    /// installed anyway and the failure is reported as a warning. The only
    /// error is a subscriber already being installed.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let (diagnostics, unavailable) = self.layer_or_console();
        let path = diagnostics.as_ref().map(|l| l.log_path().to_path_buf());

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(diagnostics)
            .try_init()
            .map_err(std::io::Error::other)?;

        if let Some(e) = unavailable {
            tracing::warn!(
                error = %e,
                log_dir = ?self.log_dir,
                "Diagnostic log unavailable, logging to console only"
            );
        }

        Ok(path)
    }
}
