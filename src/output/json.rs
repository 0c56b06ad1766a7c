// JSON report writing.
//
// Reports are written as UTF-8 with 4-space indentation and non-ASCII text
// left unescaped, matching the files downstream consumers already read.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

/// Render any serializable report as indented JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize report")?;
    Ok(String::from_utf8(buf)?)
}

/// Write a report to `path`, creating missing parent directories.
///
/// Failure is fatal to the caller and is never retried; the error names the
/// destination.
pub fn write_report<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = to_pretty_json(value)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    }

    std::fs::write(path, json).with_context(|| {
        format!(
            "Unable to write to {}. Check file permissions.",
            path.display()
        )
    })?;

    info!(path = %path.display(), "Report written");
    Ok(())
}
