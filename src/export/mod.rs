//! Report output for audit results.
//!
//! This is the presentation layer: it renders engine results as colored text
//! or JSON Lines, applies the palette for risk tiers and decides whether
//! recommendations are shown for safe URLs.

mod jsonl;
mod plain;
mod types;

use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};

use crate::config::OutputFormat;

pub use jsonl::{record_to_json, write_jsonl};
pub use plain::write_plain;
pub use types::AuditRecord;

/// Writer wrapper that treats a closed downstream pipe as success.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                // Downstream command closed the pipe
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes a record in the requested format.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &AuditRecord,
    format: OutputFormat,
    always_recommend: bool,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            write_plain(writer, record, always_recommend).context("Failed to write report")
        }
        OutputFormat::Json => write_jsonl(writer, record, always_recommend),
    }
}
