//! Runs the handler over a list of event files.

use std::io::Write;
use std::path::{Path, PathBuf};

use eventgate_core::{handler, Context, EventJson};
use serde_json::Value;

use crate::output;

/// Counts of what happened to each file in a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files whose event was accepted.
    pub accepted: usize,
    /// Files whose event was rejected.
    pub rejected: usize,
    /// Files that could not be read or parsed as JSON.
    pub unreadable: usize,
}

impl Summary {
    /// Returns true if every file was read and accepted.
    pub fn all_ok(&self) -> bool {
        self.rejected == 0 && self.unreadable == 0
    }
}

/// Builds the context passed to the handler for local runs.
pub fn local_context(source: &str) -> Context {
    let mut context = Context::new();
    context.insert("source".to_string(), Value::String(source.to_string()));
    context
}

/// Processes each file in order, writing a banner and the result for each.
///
/// A file that cannot be read or parsed is reported inline and skipped; only
/// failures writing to `out` abort the run.
pub fn run<W: Write>(
    paths: &[PathBuf],
    context: &Context,
    out: &mut W,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let mut summary = Summary::default();

    for path in paths {
        writeln!(out, "{}", output::format_header(path))?;

        let event = match read_event(path) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable event file");
                writeln!(out, "ERROR reading JSON: {}", e)?;
                summary.unreadable += 1;
                continue;
            }
        };

        let envelope = handler(&event, Some(context));
        if envelope.is_ok() {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }
        writeln!(out, "{}", output::format_envelope(&envelope))?;
        writeln!(out)?;
    }

    Ok(summary)
}

fn read_event(path: &Path) -> Result<EventJson, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
