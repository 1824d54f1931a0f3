use std::path::Path;
use std::process::Command;

use tracing::info;

/// Environment variable overriding the `rustfmt` binary.
pub const RUSTFMT_BIN_ENV: &str = "VOLDELIG_RUSTFMT_BIN";

/// Run rustfmt over generated files
///
/// # Errors
///
/// Returns an error if rustfmt cannot be started or exits unsuccessfully.
pub fn format_generated(files: &[impl AsRef<Path>]) -> anyhow::Result<()> {
    if files.is_empty() {
        return Ok(());
    }
    // Allow tests to override the rustfmt binary path without mutating PATH
    let rustfmt_bin = std::env::var(RUSTFMT_BIN_ENV).unwrap_or_else(|_| "rustfmt".to_string());

    let mut cmd = Command::new(rustfmt_bin);
    cmd.arg("--edition").arg("2021");
    for file in files {
        cmd.arg(file.as_ref());
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("rustfmt failed");
    }
    info!("✅ Formatted {} file(s)", files.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    // Serialize environment mutations to avoid test races
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn stub_rustfmt(dir: &Path, exit_code: i32) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let stub = dir.join("rustfmt");
        fs::write(&stub, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();
        stub
    }

    fn with_rustfmt_bin<T>(stub: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
        let old_bin = env::var(RUSTFMT_BIN_ENV).ok();
        env::set_var(RUSTFMT_BIN_ENV, stub);
        let res = f();
        match old_bin {
            Some(v) => env::set_var(RUSTFMT_BIN_ENV, v),
            None => env::remove_var(RUSTFMT_BIN_ENV),
        }
        res
    }

    #[test]
    fn test_format_generated_noop() {
        let dir = env::temp_dir().join(format!("voldelig_fmt_noop_{}", std::process::id()));
        let stub = stub_rustfmt(&dir, 0);
        let file = dir.join("Employee.rs");
        fs::write(&file, "pub struct Employee;").unwrap();
        let res = with_rustfmt_bin(&stub, || format_generated(&[&file]));
        let _ = fs::remove_dir_all(&dir);
        assert!(res.is_ok());
    }

    #[test]
    fn test_format_generated_error() {
        let dir = env::temp_dir().join(format!("voldelig_fmt_err_{}", std::process::id()));
        let stub = stub_rustfmt(&dir, 1);
        let file = dir.join("Employee.rs");
        fs::write(&file, "pub struct Employee;").unwrap();
        let res = with_rustfmt_bin(&stub, || format_generated(&[&file]));
        let _ = fs::remove_dir_all(&dir);
        assert!(res.is_err());
    }

    #[test]
    fn test_format_generated_no_files() {
        let files: Vec<PathBuf> = Vec::new();
        assert!(format_generated(&files).is_ok());
    }
}
