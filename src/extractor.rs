// src/extractor.rs
// Declaration extraction over the syntax tree

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::{Node, Tree};

use crate::report::Entity;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Declaration kind of a syntax-tree node.
///
/// Extraction matches on this tag instead of raw node-kind strings; the
/// strings live only in `DeclKind::of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Function,
    Other,
}

impl DeclKind {
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            "class_definition" => DeclKind::Class,
            // `async def` carries an `async` child and is a distinct
            // declaration kind; it is not collected, only descended into.
            "function_definition" if !is_async(node) => DeclKind::Function,
            _ => DeclKind::Other,
        }
    }
}

fn is_async(node: &Node) -> bool {
    node.children(&mut node.walk()).any(|n| n.kind() == "async")
}

/// Walk the tree depth-first and collect every class and named function
/// definition, regardless of nesting depth. Returns the two flat sequences
/// in visitation order.
pub fn extract(tree: &Tree, source: &str) -> (Vec<Entity>, Vec<Entity>) {
    let mut classes = Vec::new();
    let mut functions = Vec::new();
    visit(tree.root_node(), source.as_bytes(), &mut classes, &mut functions);
    (classes, functions)
}

fn visit(node: Node, source: &[u8], classes: &mut Vec<Entity>, functions: &mut Vec<Entity>) {
    match DeclKind::of(&node) {
        DeclKind::Class => {
            if let Some(entity) = extract_entity(node, source) {
                classes.push(entity);
            }
        }
        DeclKind::Function => {
            if let Some(entity) = extract_entity(node, source) {
                functions.push(entity);
            }
        }
        DeclKind::Other => {}
    }

    for child in node.children(&mut node.walk()) {
        visit(child, source, classes, functions);
    }
}

fn extract_entity(node: Node, source: &[u8]) -> Option<Entity> {
    let name_node = node.child_by_field_name("name")?;
    Some(Entity {
        name: node_text(name_node, source),
        doc: docstring(node, source),
    })
}

/// The declaration's leading documentation literal, normalized, if any.
///
/// That is the first statement of the body when it is a plain string
/// expression. An empty docstring is treated as absent.
fn docstring(node: Node, source: &[u8]) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    // Comments are named nodes in the tree but not statements.
    let first = body
        .named_children(&mut body.walk())
        .find(|n| n.kind() != "comment")?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    if expr.kind() != "string" {
        return None;
    }
    // An interpolated string is an expression, not a documentation literal.
    if expr
        .children(&mut expr.walk())
        .any(|n| n.kind() == "interpolation")
    {
        return None;
    }

    let mut text = String::new();
    for child in expr.children(&mut expr.walk()) {
        if child.kind() == "string_content" {
            text.push_str(&node_text(child, source));
        }
    }

    let normalized = normalize_whitespace(&text);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Collapse every whitespace run (including newlines) to a single space.
/// Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Helper to extract text from a tree-sitter node
fn node_text(node: Node, source: &[u8]) -> String {
    std::str::from_utf8(&source[node.byte_range()])
        .unwrap_or("")
        .to_string()
}
