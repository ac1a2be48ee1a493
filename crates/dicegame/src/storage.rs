//! Score file persistence.
//!
//! The file is a single JSON array of [`ScoreEntry`] records, pretty-printed
//! with 4-space indentation and rewritten in full on every save. Loading is
//! tolerant: a missing, empty or unreadable file yields an empty list.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::diagnostic::DiagnosticSink;
use crate::error::{Error, Result};
use crate::score::ScoreEntry;

/// Default score file name
pub const DEFAULT_SCORES_FILE: &str = "scores.json";

const INDENT: &[u8] = b"    ";

/// Load saved scores from `path`.
///
/// Never fails. Missing and zero-length files are silently treated as empty;
/// unreadable or malformed files report one diagnostic to `sink` and are
/// treated as empty too. Records claiming zero dice are dropped with a single
/// diagnostic; the remaining records are kept. Records missing optional
/// fields load as-is.
pub fn load_scores<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> Vec<ScoreEntry> {
    let path = path.as_ref();

    let bytes = match fs::read(path).map_err(Error::from) {
        Ok(bytes) => bytes,
        Err(e) if e.is_not_found() => {
            debug!("No score file at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            sink.warn(&format!(
                "{} could not be read ({}), starting with no scores",
                path.display(),
                e
            ));
            return Vec::new();
        }
    };

    if bytes.is_empty() {
        debug!("Score file {} is empty", path.display());
        return Vec::new();
    }

    match serde_json::from_slice::<Vec<ScoreEntry>>(&bytes) {
        Ok(mut entries) => {
            let total = entries.len();
            entries.retain(ScoreEntry::is_valid);
            let dropped = total - entries.len();
            if dropped > 0 {
                sink.warn(&format!(
                    "{}: skipped {} record(s) with a dice count of 0, they will be removed on the next save",
                    path.display(),
                    dropped
                ));
            }
            debug!("Loaded {} scores from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            sink.warn(&format!(
                "{} could not be read (corrupt or incorrect file format: {}), it will be overwritten on the next save",
                path.display(),
                e
            ));
            Vec::new()
        }
    }
}

/// Write all `entries` to `path`, replacing any previous content.
pub fn save_scores<P: AsRef<Path>>(path: P, entries: &[ScoreEntry]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_scores(&mut writer, entries)?;
    writer.flush()?;

    debug!("Saved {} scores to {}", entries.len(), path.display());
    Ok(())
}

/// Serialize `entries` in the score file layout.
pub fn write_scores<W: Write>(writer: W, entries: &[ScoreEntry]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    entries.serialize(&mut ser)?;
    Ok(())
}
