use std::{error::Error, fs};

use predicates::prelude::*;
use tempfile::TempDir;

use super::{empty_search_dir, open_in_cursor};

#[cfg(unix)]
#[test]
fn open_reports_goto_with_line_and_column() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let Some(bin) = super::install_fake_cursor(home.path())? else {
        return Ok(());
    };
    let file = home.path().join("main.rs");
    fs::write(&file, "fn main() {}")?;

    open_in_cursor(home.path(), &bin)?
        .args(["open", file.to_str().unwrap(), "--line", "42", "--column", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Opened").and(predicate::str::contains(format!(
                "--goto \"{}:42:7\"",
                file.display()
            ))),
        );

    Ok(())
}

#[cfg(unix)]
#[test]
fn open_drops_non_positive_column() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let Some(bin) = super::install_fake_cursor(home.path())? else {
        return Ok(());
    };
    let file = home.path().join("lib.rs");
    fs::write(&file, "")?;

    open_in_cursor(home.path(), &bin)?
        .args(["open", file.to_str().unwrap(), "--line", "42", "--column", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "--goto \"{}:42\"`",
            file.display()
        )));

    Ok(())
}

#[cfg(unix)]
#[test]
fn open_without_position_passes_bare_path() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let Some(bin) = super::install_fake_cursor(home.path())? else {
        return Ok(());
    };

    open_in_cursor(home.path(), &bin)?
        .args(["open", home.path().to_str().unwrap(), "--line", "-1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!(" \"{}\"`", home.path().display()))
                .and(predicate::str::contains("--goto").not()),
        );

    Ok(())
}

#[test]
fn open_warns_on_empty_path() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;

    open_in_cursor(home.path(), &search)?
        .args(["open", ""])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("warning")
                .and(predicate::str::contains("No path provided.")),
        );

    Ok(())
}

#[test]
fn open_errors_when_path_does_not_exist() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;
    let missing = home.path().join("missing.rs");

    open_in_cursor(home.path(), &search)?
        .args(["open", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn open_accepts_non_utf8_paths() -> Result<(), Box<dyn Error>> {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;
    let missing = home.path().join(OsStr::from_bytes(b"caf\xe9-missing.rs"));

    open_in_cursor(home.path(), &search)?
        .arg("open")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Path not found")
                .and(predicate::str::contains("invalid UTF-8").not()),
        );

    Ok(())
}

#[test]
fn open_errors_with_remediation_when_cursor_missing() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;

    open_in_cursor(home.path(), &search)?
        .args(["open", home.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Cursor executable not found in PATH")
                .and(predicate::str::contains("1. Cursor is installed")),
        );

    Ok(())
}
