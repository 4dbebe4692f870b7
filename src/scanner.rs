// src/scanner.rs
// The scan pipeline: walk, parse, extract, print

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::report::{self, FileReport, ScanStats};
use crate::{extractor, parser, walker};

/// Runs the full pipeline over one root directory.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk, parse, extract, and print the report.
    pub fn run(&self) -> Result<()> {
        let reports = self.scan()?;
        print!("{}", report::render(&reports));
        Ok(())
    }

    /// Build the result set.
    ///
    /// Per-file diagnostics are printed as they occur, interleaved with the
    /// scan rather than buffered with the report. A file enters the result
    /// set only if it parses and declares at least one class or function.
    pub fn scan(&self) -> Result<Vec<FileReport>> {
        info!("Scanning {}", self.root.display());

        let mut parser = parser::python_parser()?;
        let candidates = walker::collect_candidates(&self.root)?;
        debug!("Found {} candidate files", candidates.len());

        let mut stats = ScanStats::default();
        let mut reports = Vec::new();

        for path in candidates {
            stats.files_scanned += 1;

            let parsed = match parser::parse_python_file(&mut parser, &path)? {
                Ok(parsed) => parsed,
                Err(diagnostic) => {
                    println!("{diagnostic}");
                    stats.errors += 1;
                    continue;
                }
            };

            let (classes, functions) = extractor::extract(&parsed.tree, &parsed.source);
            debug!(
                "{}: {} classes, {} functions",
                path.display(),
                classes.len(),
                functions.len()
            );

            let file_report = FileReport {
                path,
                classes,
                functions,
            };
            if file_report.is_empty() {
                continue;
            }

            stats.files_reported += 1;
            stats.classes_found += file_report.classes.len();
            stats.functions_found += file_report.functions.len();
            reports.push(file_report);
        }

        info!(
            "Scanned {} files: {} reported, {} classes, {} functions, {} errors",
            stats.files_scanned,
            stats.files_reported,
            stats.classes_found,
            stats.functions_found,
            stats.errors
        );

        Ok(reports)
    }
}
