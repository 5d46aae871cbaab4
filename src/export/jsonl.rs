//! JSONL export functionality.
//!
//! Each line is a complete JSON object representing one analyzed URL, ready
//! for piping to `jq` or loading elsewhere.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;

use super::types::AuditRecord;

/// Serializes a record, replacing hidden recommendations with an empty list.
pub fn record_to_json(record: &AuditRecord, always_recommend: bool) -> Result<Value> {
    let mut value = serde_json::to_value(record).context("Failed to serialize audit record")?;
    if record.visible_recommendations(always_recommend).is_empty() {
        if let Some(report) = value.get_mut("auditReport") {
            report["recommendations"] = Value::Array(Vec::new());
        }
    }
    Ok(value)
}

/// Writes one record as a single JSON line.
pub fn write_jsonl<W: Write>(
    writer: &mut W,
    record: &AuditRecord,
    always_recommend: bool,
) -> Result<()> {
    let value = record_to_json(record, always_recommend)?;
    serde_json::to_writer(&mut *writer, &value).context("Failed to write JSON record")?;
    writeln!(writer).context("Failed to write JSON record")?;
    Ok(())
}
