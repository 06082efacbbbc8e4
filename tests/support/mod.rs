use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a project directory containing `files` (relative paths, parents
/// created as needed) with placeholder content
#[allow(dead_code)]
pub fn create_project(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for file in files {
        let path = dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, format!("# {}\n", file)).expect("Failed to write fixture file");
    }
    dir
}

#[allow(dead_code)]
pub fn read_artifact(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
}

#[allow(dead_code)]
pub fn docker_gen_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_docker-gen"))
}
