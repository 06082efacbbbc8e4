//! Framework labels and python variants

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Project type assigned by the classifier. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkLabel {
    Python,
    React,
    Streamlit,
    Angular,
    Java,
    Ruby,
    Cpp,
    Fullstack,
    Unknown,
}

impl FrameworkLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkLabel::Python => "python",
            FrameworkLabel::React => "react",
            FrameworkLabel::Streamlit => "streamlit",
            FrameworkLabel::Angular => "angular",
            FrameworkLabel::Java => "java",
            FrameworkLabel::Ruby => "ruby",
            FrameworkLabel::Cpp => "cpp",
            FrameworkLabel::Fullstack => "fullstack",
            FrameworkLabel::Unknown => "unknown",
        }
    }

    pub fn all_variants() -> &'static [Self] {
        &[
            FrameworkLabel::Python,
            FrameworkLabel::React,
            FrameworkLabel::Streamlit,
            FrameworkLabel::Angular,
            FrameworkLabel::Java,
            FrameworkLabel::Ruby,
            FrameworkLabel::Cpp,
            FrameworkLabel::Fullstack,
            FrameworkLabel::Unknown,
        ]
    }

    pub fn is_known(&self) -> bool {
        *self != FrameworkLabel::Unknown
    }
}

impl fmt::Display for FrameworkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refinement of the `python` label, supplied by the caller and never inferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PythonVariant {
    #[default]
    None,
    Flask,
    Django,
}

impl PythonVariant {
    /// Case-insensitive parse; anything but `flask`/`django` is treated as unset
    pub fn parse_lenient(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return PythonVariant::None;
        };

        match raw.trim().to_lowercase().as_str() {
            "flask" => PythonVariant::Flask,
            "django" => PythonVariant::Django,
            other => {
                warn!(
                    variant = other,
                    "Unrecognised python variant ignored (expected flask or django)"
                );
                PythonVariant::None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PythonVariant::None => "none",
            PythonVariant::Flask => "flask",
            PythonVariant::Django => "django",
        }
    }
}

impl fmt::Display for PythonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
