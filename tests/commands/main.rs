mod locate;
mod open;

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

#[cfg(windows)]
const LAUNCHER: &str = "cursor.cmd";
#[cfg(not(windows))]
const LAUNCHER: &str = "cursor";

/// Runs the binary with a private PATH and preferences file so the host's
/// Cursor install and config never leak into a test.
fn open_in_cursor(home: &Path, search_path: &Path) -> Result<Command, Box<dyn Error>> {
    let mut command = Command::cargo_bin("open-in-cursor")?;
    command
        .env("PATH", search_path)
        .env("OPEN_IN_CURSOR_CONFIG", home.join("preferences.json"))
        .env_remove("OPEN_IN_CURSOR_LOG");
    Ok(command)
}

/// Creates `<home>/Cursor/bin/<launcher>` pointing at a program that exits
/// immediately. Returns the bin directory, or `None` when no such program exists.
#[cfg(unix)]
fn install_fake_cursor(home: &Path) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(program) = ["/usr/bin/true", "/bin/true"]
        .into_iter()
        .map(Path::new)
        .find(|path| path.is_file())
    else {
        return Ok(None);
    };

    let bin = home.join("Cursor").join("bin");
    fs::create_dir_all(&bin)?;
    std::os::unix::fs::symlink(program, bin.join(LAUNCHER))?;
    Ok(Some(bin))
}

fn empty_search_dir(home: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let dir = home.join("empty-bin");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
