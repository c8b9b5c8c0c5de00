//! Plain-text transcript export.
//!
//! ```text
//! LLM Relay Hub Export
//! Generated: 2026-10-18 14:02:11
//! ============================================================
//!
//! TURN 001 – SENT TO CHATGPT @ 14:00:00
//! ...
//! ```

use crate::error::ExportError;
use crate::logging::sanitize_path;

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const EXPORT_TITLE: &str = "LLM Relay Hub Export";

/// Width of the `=` rule under the header
pub const SEPARATOR_WIDTH: usize = 60;

/// Render the export document for already-rendered turn records
pub fn render_export(entries: &[String], generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(EXPORT_TITLE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");
    out.push_str(&entries.join("\n\n"));
    out
}

/// Default file name offered in the save prompt
pub fn suggested_file_name(now: NaiveDateTime) -> String {
    format!("LLM_Relay_{}.txt", now.format("%Y-%m-%d_%H%M%S"))
}

/// Suggested destination: `dir` when given, otherwise the working directory
pub fn suggested_path(dir: Option<&Path>, now: NaiveDateTime) -> PathBuf {
    let name = suggested_file_name(now);
    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Write the export document to `path`, returning the number of turns written
pub fn write_export(path: &Path, entries: &[String], generated_at: NaiveDateTime) -> Result<usize, ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(ExportError::MissingDirectory(parent.to_path_buf()));
    }

    let document = render_export(entries, generated_at);
    std::fs::write(path, document).map_err(|source| ExportError::Write { path: path.to_path_buf(), source })?;

    tracing::info!(path = %sanitize_path(path), turns = entries.len(), "session exported");
    Ok(entries.len())
}
