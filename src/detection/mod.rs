//! Project inspection: file inventory, evidence queries and classification

pub mod classifier;
pub mod inventory;
pub mod label;

pub use classifier::{classify, MarkerRule, MARKER_RULES};
pub use inventory::{validate_directory, FileFact, Inventory, InventoryBuilder, ScanError};
pub use label::{FrameworkLabel, PythonVariant};
