// src/report.rs
// Result-set data model and report rendering

use std::path::PathBuf;

/// A collected declaration: its name and normalized docstring, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub doc: Option<String>,
}

/// Everything collected from one file, in tree-walk order.
///
/// A report only enters the result set if at least one sequence is
/// non-empty.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub classes: Vec<Entity>,
    pub functions: Vec<Entity>,
}

impl FileReport {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty()
    }
}

/// Statistics for one scan run, logged at the end
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_reported: usize,
    pub classes_found: usize,
    pub functions_found: usize,
    pub errors: usize,
}

/// Render the result set as the final report text.
///
/// One block per file in result-set order, terminated by the completion
/// sentinel. Entities with no docstring print the name alone.
pub fn render(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!("\nFile: {}\n", report.path.display()));
        if !report.classes.is_empty() {
            out.push_str("Classes:\n");
            for entity in &report.classes {
                out.push_str(&entity_line(entity));
            }
        }
        if !report.functions.is_empty() {
            out.push_str("Functions:\n");
            for entity in &report.functions {
                out.push_str(&entity_line(entity));
            }
        }
    }

    out.push_str("\nAll done!\n");
    out
}

fn entity_line(entity: &Entity) -> String {
    match &entity.doc {
        Some(doc) => format!("  {} - {}\n", entity.name, doc),
        None => format!("  {}\n", entity.name),
    }
}
