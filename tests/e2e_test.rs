//! End-to-end tests for the relink binary.

mod common;

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Tests rewritten document is printed to stdout.
#[test]
fn test_prints_rewritten_document() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    common::write_file(dir.path(), "docs/page.md", "[Home](index.md)\n")?;

    // Act
    let output = common::run_relink(
        dir.path(),
        &["--source-path", "../../docs/page.md", "docs/page.md"],
    )?;

    // Assert
    assert!(output.status.success(), "Binary should succeed");
    assert_eq!(String::from_utf8(output.stdout)?, "[Home](../../index.html)\n");
    let original = fs::read_to_string(dir.path().join("docs/page.md"))?;
    assert_eq!(original, "[Home](index.md)\n", "Input should be untouched");

    Ok(())
}

/// Tests input path drives depth detection when no override is given.
#[test]
fn test_input_path_sets_depth() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    common::write_file(dir.path(), "site/docs/page.md", "![Logo](img/logo.png)\n")?;
    let workdir = dir.path().join("site/docs");

    // Act
    let output = common::run_relink(&workdir, &["../docs/page.md"])?;

    // Assert
    assert!(output.status.success(), "Binary should succeed");
    assert_eq!(String::from_utf8(output.stdout)?, "![Logo](../img/logo.png)\n");

    Ok(())
}

/// Tests in place rewriting of several documents.
#[test]
fn test_rewrites_in_place() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let workdir = dir.path().join("out");
    common::write_file(dir.path(), "out/a.md", "[B](b.md)\n")?;
    common::write_file(dir.path(), "out/c.rst", "`D <d.rst>`_\n")?;
    common::write_file(dir.path(), "out/plain.txt", "[B](b.md)\n")?;

    // Act
    let output = common::run_relink(
        &workdir,
        &["--in-place", "../out/a.md", "../out/c.rst", "../out/plain.txt"],
    )?;

    // Assert
    assert!(output.status.success(), "Binary should succeed");
    assert!(output.stdout.is_empty(), "Nothing should be printed");
    assert_eq!(fs::read_to_string(workdir.join("a.md"))?, "[B](../b.html)\n");
    assert_eq!(fs::read_to_string(workdir.join("c.rst"))?, "`D <../d.html>`_\n");
    assert_eq!(fs::read_to_string(workdir.join("plain.txt"))?, "[B](b.md)\n");

    Ok(())
}

/// Tests missing input is reported with a failing exit code.
#[test]
fn test_missing_input_fails() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;

    // Act
    let output = common::run_relink(dir.path(), &["missing.md"])?;

    // Assert
    assert!(!output.status.success(), "Binary should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing.md"),
        "Error should name missing input: {}",
        stderr
    );

    Ok(())
}

/// Tests source path override is rejected for several inputs.
#[test]
fn test_source_path_with_multiple_inputs_fails() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    common::write_file(dir.path(), "a.md", "")?;
    common::write_file(dir.path(), "b.md", "")?;

    // Act
    let output = common::run_relink(dir.path(), &["--source-path", "../a.md", "a.md", "b.md"])?;

    // Assert
    assert!(!output.status.success(), "Ambiguous override should fail");

    Ok(())
}
