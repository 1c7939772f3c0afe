use std::{error::Error, fs};

use predicates::prelude::*;
use tempfile::TempDir;

use super::{LAUNCHER, empty_search_dir, open_in_cursor};

#[test]
fn locate_finds_launcher_in_marked_path_entry() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let bin = home.path().join("Programs").join("Cursor").join("bin");
    fs::create_dir_all(&bin)?;
    let launcher = bin.join(LAUNCHER);
    fs::write(&launcher, "")?;
    let decoy = home.path().join("tools");
    fs::create_dir_all(&decoy)?;
    fs::write(decoy.join(LAUNCHER), "")?;
    let search = std::env::join_paths([decoy, bin])?;

    open_in_cursor(home.path(), home.path())?
        .env("PATH", search)
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains(launcher.to_str().unwrap()));

    Ok(())
}

#[test]
fn locate_fails_when_cursor_missing() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;

    open_in_cursor(home.path(), &search)?
        .arg("locate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cursor executable not found"));

    Ok(())
}

#[test]
fn locate_uses_fixed_location_from_preferences() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;
    let launcher = home.path().join("Programs").join("cursor").join("Cursor.exe");
    fs::create_dir_all(launcher.parent().unwrap())?;
    fs::write(&launcher, "")?;
    let json = serde_json::json!({
        "resolver": {
            "strategy": "fixed-location",
            "base": home.path(),
            "launcher": "Cursor.exe"
        }
    });
    fs::write(home.path().join("preferences.json"), serde_json::to_vec(&json)?)?;

    open_in_cursor(home.path(), &search)?
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains(launcher.to_str().unwrap()));

    Ok(())
}

#[test]
fn invalid_preferences_are_reported() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let search = empty_search_dir(home.path())?;
    fs::write(home.path().join("preferences.json"), "{ not json")?;

    open_in_cursor(home.path(), &search)?
        .arg("locate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is invalid"));

    Ok(())
}
