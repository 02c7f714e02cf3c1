//! Diagnostic logging.
//!
//! Console output goes through `tracing_subscriber::fmt`. Warnings and errors,
//! including every failed profile refresh, can additionally be appended to a
//! JSONL file so they survive the window closing.
//!
//! ```text
//! <log_dir>/
//! └── 2026-10-15_desktop.jsonl    # one JSON object per line
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use linkbio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("desktop")
//!     .with_log_dir("./logs")
//!     .verbosity(1)
//!     .init()?;
//! ```
//!
//! ### Querying logs with jq
//!
//! ```bash
//! jq 'select(.level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::DiagnosticEntry;
pub use layer::{DiagnosticLayer, LoggingBuilder};
pub use writer::{read_entries, DiagnosticLogWriter};
