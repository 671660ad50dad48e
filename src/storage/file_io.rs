//! Whole-file text I/O for the data file
//!
//! Writes go through a sibling temp file that is synced and then renamed over
//! the target, so a crash mid-write leaves the old contents in place.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::error::ExpenseError;

fn storage_error(action: &str, path: &Path, err: io::Error) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(storage_error("read", path, e)),
    }
}

/// Replace the contents of `path` with `text`, all or nothing
pub fn write_text_atomic<P: AsRef<Path>>(path: P, text: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // Same directory as the target, or the rename could cross filesystems
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(text.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", &temp_path, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}
