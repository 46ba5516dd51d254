//! Opens a written report with the platform's default application.

use crate::error::ConvertError;
use std::path::Path;
use std::process::Command;

/// Check that `path` exists and hand it to the system opener.
pub fn open_report(path: &Path) -> Result<(), ConvertError> {
    ensure_exists(path)?;

    let mut command = opener_command(path);
    tracing::debug!(command = ?command, "Opening report");

    let status = command.status().map_err(|e| ConvertError::OpenFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ConvertError::OpenFailed {
            path: path.to_path_buf(),
            reason: status.to_string(),
        })
    }
}

/// Fail with [`ConvertError::OutputMissing`] unless `path` is an existing file.
pub fn ensure_exists(path: &Path) -> Result<(), ConvertError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConvertError::OutputMissing(path.to_path_buf()))
    }
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
