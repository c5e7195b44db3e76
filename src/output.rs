// Summary file naming and persistence. One file per successful run, written
// beside the source PDF; two runs within the same second on the same file
// collide and overwrite, which is accepted behavior.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp layout for summary filenames: local time, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Build the summary file path for a source PDF and a preformatted timestamp:
/// `{dir}/{pdf-stem}_summary_{timestamp}.txt`.
pub fn summary_file_path(pdf_path: &Path, timestamp: &str) -> PathBuf {
    let stem = pdf_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    let mut out_path = pdf_path.to_path_buf();
    out_path.set_file_name(format!("{stem}_summary_{timestamp}.txt"));
    out_path
}

/// Write the summary next to the source PDF, stamped with the current local
/// time. The content is written exactly as given — no trailing newline is
/// added. Returns the path of the created file.
pub fn write_summary(pdf_path: &Path, summary: &str) -> Result<PathBuf> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let out_path = summary_file_path(pdf_path, &timestamp);

    fs::write(&out_path, summary)
        .with_context(|| format!("Failed to write summary file: {}", out_path.display()))?;

    info!("Summary saved to {}", out_path.display());
    Ok(out_path)
}
