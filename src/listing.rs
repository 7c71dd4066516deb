//! Show-time cleanup for venue listing CSV files.

use crate::time::{parse, show_time_minutes};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Columns rewritten when no others are configured
pub const DEFAULT_TIME_COLUMNS: &[&str] = &["Start Time", "Signup Time"];

/// Per-run counts of what happened to time cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingReport {
    pub rows: usize,
    pub converted: usize,
    pub unchanged: usize,
    pub empty: usize,
    pub missing_columns: Vec<String>,
}

/// Rewrite the time columns of a headered CSV into display form.
pub fn normalize_listing<R: Read, W: Write>(
    reader: R,
    writer: W,
    columns: &[String],
) -> Result<ListingReport> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut writer =
        csv::WriterBuilder::new().terminator(csv::Terminator::Any(b'\n')).from_writer(writer);
    let mut report = ListingReport::default();

    let headers = reader.headers().context("Failed to read listing header")?.clone();
    let mut targets = Vec::new();
    for column in columns {
        match headers.iter().position(|h| h.trim() == column.as_str()) {
            Some(index) => targets.push(index),
            None => {
                warn!("Column '{}' not found in listing, skipping", column);
                report.missing_columns.push(column.clone());
            }
        }
    }

    writer.write_record(&headers).context("Failed to write listing header")?;

    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read listing row {}", line + 1))?;
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();

        for &index in &targets {
            let Some(value) = fields.get_mut(index) else {
                continue;
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                report.empty += 1;
                continue;
            }
            let parsed = parse(trimmed);
            if !parsed.is_recognized() {
                report.unchanged += 1;
                continue;
            }
            let display = parsed.render();
            if display == *value {
                report.unchanged += 1;
            } else {
                debug!("Row {}: '{}' -> '{}'", line + 1, value, display);
                report.converted += 1;
                *value = display;
            }
        }

        writer
            .write_record(&fields)
            .with_context(|| format!("Failed to write listing row {}", line + 1))?;
        report.rows += 1;
    }

    writer.flush().context("Failed to flush listing output")?;
    info!(
        "Normalized {} rows: {} converted, {} unchanged, {} empty",
        report.rows, report.converted, report.unchanged, report.empty
    );
    Ok(report)
}

/// Reorder a headered CSV by the show time in `column`.
///
/// With `from` set, shows at or after that minute of the day come first and
/// earlier ones follow; each group keeps show-time order. Rows without a
/// readable time sort as midnight. Returns the number of rows written.
pub fn sort_listing<R: Read, W: Write>(
    reader: R,
    writer: W,
    column: &str,
    from: Option<u32>,
) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut writer =
        csv::WriterBuilder::new().terminator(csv::Terminator::Any(b'\n')).from_writer(writer);

    let headers = reader.headers().context("Failed to read listing header")?.clone();
    let index = headers
        .iter()
        .position(|h| h.trim() == column)
        .with_context(|| format!("Column '{}' not found in listing", column))?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read listing row {}", line + 1))?;
        let minutes = show_time_minutes(record.get(index).unwrap_or("").trim());
        rows.push((minutes, record));
    }

    let cutoff = from.unwrap_or(0);
    rows.sort_by_key(|(minutes, _)| (*minutes < cutoff, *minutes));

    writer.write_record(&headers).context("Failed to write listing header")?;
    for (_, record) in &rows {
        writer.write_record(record).context("Failed to write listing row")?;
    }
    writer.flush().context("Failed to flush listing output")?;

    debug!("Sorted {} rows by '{}'", rows.len(), column);
    Ok(rows.len())
}
