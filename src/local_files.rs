//! Capability-scoped access to user-supplied file paths.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};

use crate::error::ClientError;

fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), ClientError> {
    let file_name = path.file_name().ok_or_else(|| ClientError::Io {
        message: format!("{path} does not name a file"),
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| ClientError::io(&error))?;
    Ok((dir, file_name))
}

/// Reads a UTF-8 file.
pub(crate) fn read_to_string(path: &Utf8Path) -> Result<String, ClientError> {
    let (dir, file_name) = open_parent(path)?;
    dir.read_to_string(file_name)
        .map_err(|error| ClientError::io(&error))
}

/// Opens a file for appending, creating it when missing.
pub(crate) fn open_append(path: &Utf8Path) -> Result<File, ClientError> {
    let (dir, file_name) = open_parent(path)?;
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    dir.open_with(file_name, &options)
        .map_err(|error| ClientError::io(&error))
}
