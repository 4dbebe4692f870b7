// src/parser.rs
// Tree-sitter parse adapter with per-file failure isolation

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

use crate::error::FileError;

/// A successfully parsed file: the syntax tree plus the source it was
/// parsed from (node text lookups need the original bytes).
pub struct ParsedFile {
    pub tree: Tree,
    pub source: String,
}

/// Create a parser configured with the Python grammar.
pub fn python_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .context("failed to load Python grammar")?;
    Ok(parser)
}

/// Parse one candidate file.
///
/// The outer `Result` is fatal and aborts the run. The inner `Result`
/// carries the two recoverable per-file conditions: the caller prints the
/// `FileError` diagnostic and skips the file.
pub fn parse_python_file(
    parser: &mut Parser,
    path: &Path,
) -> Result<std::result::Result<ParsedFile, FileError>> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            return Ok(Err(FileError::Read {
                path: path.to_path_buf(),
                source,
            }));
        }
    };

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| anyhow!("tree-sitter returned no tree for {}", path.display()))?;

    if tree.root_node().has_error() {
        return Ok(Err(syntax_error(path, &source, &tree)));
    }

    Ok(Ok(ParsedFile { tree, source }))
}

/// Build the syntax diagnostic from the first error node in the tree.
fn syntax_error(path: &Path, source: &str, tree: &Tree) -> FileError {
    let (line, text) = match first_error_node(tree.root_node()) {
        Some(node) => {
            let row = node.start_position().row;
            let text = source.lines().nth(row).unwrap_or("").trim().to_string();
            (row + 1, text)
        }
        None => (1, String::new()),
    };

    FileError::Syntax {
        path: path.to_path_buf(),
        line,
        text,
    }
}

/// First ERROR or MISSING node in document order, if any.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    node.children(&mut node.walk()).find_map(first_error_node)
}
