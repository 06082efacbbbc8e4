use crate::detection::classifier::{NODE_MARKER, PYTHON_MARKER};
use crate::detection::Inventory;

const BASE_ENTRIES: &[&str] = &[".git", "__pycache__"];

/// Builds the `.dockerignore` body from inventory evidence
///
/// The two base entries always appear; the rest are added independently of
/// each other. Output is one entry per line with a trailing newline.
pub fn render_dockerignore(inventory: &Inventory) -> String {
    let mut entries: Vec<&str> = BASE_ENTRIES.to_vec();

    if inventory.has_file(NODE_MARKER) {
        entries.push("node_modules");
    }
    if inventory.any_path_contains_segment("build") {
        entries.push("build");
    }
    if inventory.has_file(PYTHON_MARKER) {
        entries.push("venv");
        entries.push(".venv");
    }

    let mut body = entries.join("\n");
    body.push('\n');
    body
}
