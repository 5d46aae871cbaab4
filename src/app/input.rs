//! Input preparation for the engine.
//!
//! The engine accepts any string; rejecting empty input and skipping comment
//! lines is the caller's job and happens here.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

/// Trims a line of input and returns it if it should be analyzed.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn prepare_input(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        debug!("Skipping empty input");
        return None;
    }
    if trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed)
}

/// Collects prepared inputs from a reader, one per line.
///
/// Unreadable lines (e.g. invalid UTF-8) are logged and skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> Vec<String> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if let Some(input) = prepare_input(&line) {
                    inputs.push(input.to_string());
                }
            }
            Err(e) => warn!("Failed to read line from input: {e}"),
        }
    }
    inputs
}

/// Gathers inputs from positional arguments and an optional file (`-` for stdin).
///
/// Arguments come first, in order, followed by file lines.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub fn collect_inputs(urls: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut inputs: Vec<String> = urls
        .iter()
        .filter_map(|u| prepare_input(u))
        .map(str::to_string)
        .collect();

    match file {
        Some(path) if path.as_os_str() == "-" => {
            inputs.extend(read_inputs(std::io::stdin().lock()));
        }
        Some(path) => {
            let handle = std::fs::File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            inputs.extend(read_inputs(std::io::BufReader::new(handle)));
        }
        None => {}
    }

    Ok(inputs)
}
