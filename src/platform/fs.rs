// LeadDeck - platform/fs.rs
//
// Filesystem helpers for writing exports and revealing them to the user.

use crate::util::error::ExportError;
use std::fs::File;
use std::path::Path;
use std::process::Command;

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Create (or truncate) the export file at `path`.
pub fn create_export_file(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Command that opens `dir` itself in the system file manager.
fn open_dir_command(dir: &Path) -> Command {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    let mut cmd = Command::new(program);
    cmd.arg(dir);
    cmd
}

/// Command that shows `path` selected in its containing folder.
///
/// - **Windows**: `explorer.exe /select,"<path>"`
/// - **macOS**: `open -R "<path>"`
/// - **Linux**: `xdg-open "<parent>"` (per-file selection has no standard API)
fn reveal_command(path: &Path) -> Command {
    #[cfg(target_os = "windows")]
    {
        // `/select,<path>` must be a single argument.
        let mut cmd = Command::new("explorer");
        cmd.arg(format!("/select,{}", path.display()));
        cmd
    }
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg("-R").arg(path);
        cmd
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        open_dir_command(path.parent().unwrap_or(path))
    }
}

/// Open the export folder in the system file manager, creating it first if
/// no export has been written yet.
///
/// Failures are logged at WARN and never propagated.
pub fn open_dir(dir: &Path) {
    if let Err(e) = ensure_dir(dir) {
        tracing::warn!(error = %e, "Cannot create export directory");
        return;
    }
    if let Err(e) = open_dir_command(dir).spawn() {
        tracing::warn!(dir = %dir.display(), error = %e, "Failed to open export directory");
    }
}

/// Open the system file manager with `path` highlighted.
///
/// Failures are logged at WARN and never propagated.
pub fn reveal_in_file_manager(path: &Path) {
    if let Err(e) = reveal_command(path).spawn() {
        tracing::warn!(path = %path.display(), error = %e, "Failed to reveal export");
    }
}
