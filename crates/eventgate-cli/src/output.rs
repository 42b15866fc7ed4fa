//! Output formatting utilities.

use std::path::Path;

use eventgate_core::Envelope;

/// Formats an envelope as pretty-printed JSON (two-space indent, UTF-8 kept as is).
pub fn format_envelope(envelope: &Envelope) -> String {
    serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the banner printed before each file's result.
pub fn format_header(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    format!("--- {} ---", name)
}
