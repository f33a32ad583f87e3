//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out documents in a temporary site tree and
//! running the relink binary against them.

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};

/// Writes file below `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Runs the relink binary with `args` from `dir`.
///
/// # Errors
///
/// Returns error if the binary cannot be spawned
pub fn run_relink(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_relink"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}
