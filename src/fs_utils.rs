//! Filesystem helpers
//!
//! - `atomic_rename`: atomic file replacement (Windows requires explicit delete)
//! - `write_atomic`: write through a temp file next to the target
//! - `config_base_dir`: platform-appropriate configuration directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TranslateError};

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            fs::remove_file(dst)?;
        }
    }
    fs::rename(src, dst)
}

/// Write `content` to `path`, creating parent directories.
///
/// Readers never observe a half-written file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TranslateError::IoError {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| TranslateError::IoError {
        path: temp_path.clone(),
        message: e.to_string(),
    })?;

    atomic_rename(&temp_path, path).map_err(|e| TranslateError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Directory holding the autotranslate config file.
///
/// - **Linux**: `$XDG_CONFIG_HOME/autotranslate` or `~/.config/autotranslate`
/// - **macOS**: `~/Library/Application Support/autotranslate`
/// - **Windows**: `%APPDATA%\autotranslate`
/// - **Fallback**: system temp directory + `autotranslate`
pub fn config_base_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("autotranslate")
}
