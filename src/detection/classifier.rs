//! Marker-file framework classification
//!
//! Rules are evaluated top to bottom and the first match wins. Markers for
//! specialised ecosystems come before the generic Python/Node markers because
//! a `package.json` or `requirements.txt` can coexist with any of them (an
//! Angular workspace always has both `angular.json` and `package.json`).

use super::inventory::Inventory;
use super::label::FrameworkLabel;
use tracing::debug;

pub const PYTHON_MARKER: &str = "requirements.txt";
pub const NODE_MARKER: &str = "package.json";

/// A marker file whose presence decides the label outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    pub marker: &'static str,
    pub label: FrameworkLabel,
}

/// Specialised markers in priority order. Do not reorder.
pub const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        marker: "angular.json",
        label: FrameworkLabel::Angular,
    },
    MarkerRule {
        marker: "streamlit_app.py",
        label: FrameworkLabel::Streamlit,
    },
    MarkerRule {
        marker: "pom.xml",
        label: FrameworkLabel::Java,
    },
    MarkerRule {
        marker: "Gemfile",
        label: FrameworkLabel::Ruby,
    },
    MarkerRule {
        marker: "CMakeLists.txt",
        label: FrameworkLabel::Cpp,
    },
];

/// Assigns exactly one label from the set of file names present
pub fn classify(inventory: &Inventory) -> FrameworkLabel {
    if let Some(rule) = MARKER_RULES
        .iter()
        .find(|rule| inventory.has_file(rule.marker))
    {
        debug!(marker = rule.marker, framework = %rule.label, "Marker rule matched");
        return rule.label;
    }

    let has_py = inventory.has_file(PYTHON_MARKER);
    let has_js = inventory.has_file(NODE_MARKER);

    let label = match (has_py, has_js) {
        (true, true) => FrameworkLabel::Fullstack,
        (true, false) => FrameworkLabel::Python,
        (false, true) => FrameworkLabel::React,
        (false, false) => FrameworkLabel::Unknown,
    };

    debug!(has_py, has_js, framework = %label, "Generic markers evaluated");
    label
}
