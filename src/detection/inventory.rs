//! File inventory and evidence queries
//!
//! The inventory is a flat list of every regular file under a project root.
//! Classification and ignore-file generation only ever ask two questions of
//! it: "is there a file with this exact name?" and "does any path pass
//! through a directory with this name?".

use ignore::WalkBuilder;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path does not exist: {0}")]
    NotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to resolve {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// One file discovered under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFact {
    name: String,
    relative_path: PathBuf,
}

impl FileFact {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            relative_path,
        }
    }

    /// Base filename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path relative to the scan root
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

/// Files found by a scan, in walk order (order carries no meaning)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    facts: Vec<FileFact>,
}

impl Inventory {
    pub fn new(facts: Vec<FileFact>) -> Self {
        Self { facts }
    }

    /// Builds an inventory from relative paths without touching the disk
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            facts: paths.into_iter().map(FileFact::new).collect(),
        }
    }

    pub fn facts(&self) -> &[FileFact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// True iff some file's base name equals `name` exactly (case-sensitive)
    pub fn has_file(&self, name: &str) -> bool {
        self.facts.iter().any(|fact| fact.name == name)
    }

    /// True iff some file's relative path has `segment` as a whole component
    pub fn any_path_contains_segment(&self, segment: &str) -> bool {
        self.facts.iter().any(|fact| {
            fact.relative_path
                .components()
                .any(|c| matches!(c, Component::Normal(part) if part == segment))
        })
    }
}

/// Walks a project directory into an [`Inventory`]
///
/// Every regular file is inventoried: hidden files and ignore files
/// (`.gitignore`, `.ignore`) are not honoured. Symlinks are not followed.
pub struct InventoryBuilder {
    root: PathBuf,
}

impl InventoryBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build(&self) -> Result<Inventory, ScanError> {
        let start = Instant::now();
        validate_directory(&self.root)?;

        let mut facts = Vec::new();
        for result in WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();
            facts.push(FileFact::new(relative));
        }

        info!(
            repo = %self.root.display(),
            files = facts.len(),
            scan_time_ms = start.elapsed().as_millis() as u64,
            "Inventory built"
        );

        Ok(Inventory::new(facts))
    }
}

/// Fails unless `path` exists and is a directory
pub fn validate_directory(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    debug!(path = %path.display(), "Project directory validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_fact_name_is_basename() {
        let fact = FileFact::new("src/app/main.py");
        assert_eq!(fact.name(), "main.py");
        assert_eq!(fact.relative_path(), Path::new("src/app/main.py"));
    }

    #[test]
    fn test_has_file_is_exact_and_case_sensitive() {
        let inventory = Inventory::from_paths(["Gemfile", "src/requirements.txt"]);
        assert!(inventory.has_file("Gemfile"));
        assert!(inventory.has_file("requirements.txt"));
        assert!(!inventory.has_file("gemfile"));
        assert!(!inventory.has_file("requirements"));
        assert!(!inventory.has_file("*.txt"));
    }

    #[test]
    fn test_segment_match_requires_whole_component() {
        let inventory = Inventory::from_paths(["builder/main.c", "src/rebuild.rs"]);
        assert!(!inventory.any_path_contains_segment("build"));

        let inventory = Inventory::from_paths(["web/build/index.html"]);
        assert!(inventory.any_path_contains_segment("build"));
    }

    #[test]
    fn test_segment_match_includes_file_name() {
        let inventory = Inventory::from_paths(["scripts/build"]);
        assert!(inventory.any_path_contains_segment("build"));
    }

    #[test]
    fn test_build_walks_nested_and_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::create_dir_all(dir.path().join(".config")).unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        fs::write(dir.path().join("src/app/main.py"), "print()\n").unwrap();
        fs::write(dir.path().join(".config/settings.json"), "{}").unwrap();
        fs::write(dir.path().join(".gitignore"), "src/\n").unwrap();

        let inventory = InventoryBuilder::new(dir.path()).build().unwrap();

        assert_eq!(inventory.len(), 4);
        assert!(inventory.has_file("main.py"));
        assert!(inventory.has_file("settings.json"));
        assert!(inventory
            .facts()
            .iter()
            .any(|f| f.relative_path() == Path::new("src/app/main.py")));
    }

    #[test]
    fn test_build_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();

        let inventory = InventoryBuilder::new(dir.path()).build().unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_build_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = InventoryBuilder::new(&missing).build().unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_build_root_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = InventoryBuilder::new(&file).build().unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
        assert!(err.to_string().contains("not a directory"));
    }
}
