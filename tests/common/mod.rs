#![allow(dead_code, clippy::unwrap_used)]

pub mod temp_files {
    use std::path::{Path, PathBuf};

    /// Path of a checked-in fixture under `tests/fixtures`
    pub fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Write `content` to `name` inside `dir` and return the path
    pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Copy a fixture into `dir`, keeping its file name
    pub fn copy_fixture(dir: &Path, name: &str) -> PathBuf {
        let dest = dir.join(name);
        std::fs::copy(fixture(name), &dest).unwrap();
        dest
    }

    /// Sorted file names directly inside `dir`
    pub fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
