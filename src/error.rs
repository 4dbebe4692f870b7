// src/error.rs
// Per-file error types for the scan pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure scoped to a single candidate file.
///
/// These are the only two recoverable conditions in a run: the file is
/// reported on the output stream and excluded from the result set, and the
/// scan continues. Everything else propagates and aborts the run.
///
/// `Display` renders the exact operator-facing diagnostic line.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Error reading file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Syntax error in file {} at line {}: {}", .path.display(), .line, .text)]
    Syntax {
        path: PathBuf,
        /// 1-based line of the first error node in the parse tree.
        line: usize,
        /// The offending source line, trimmed.
        text: String,
    },
}
