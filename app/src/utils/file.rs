use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::error::{MemError, MemResult};

// `ErrorKind::FilesystemLoop` is unstable (`io_error_more`), so match ELOOP by errno.
#[cfg(target_os = "linux")]
const ELOOP: i32 = 40;
#[cfg(not(target_os = "linux"))]
const ELOOP: i32 = 62;

/// Strips the scheme from a trusted file uri, `file:/lib/ld.so` -> `/lib/ld.so`.
/// Only the first `:` separates the scheme, the rest belongs to the path.
pub fn uri_to_path(uri: &str) -> MemResult<PathBuf> {
    match uri.split_once(':') {
        Some((_scheme, path)) => Ok(PathBuf::from(path)),
        None => Err(MemError::InvalidUri(uri.to_string())),
    }
}

/// Size of `path` if it is a regular file (symlinks are followed).
/// Paths that do not resolve (missing, a file used as a directory, a symlink
/// loop) and non-regular files yield `None`; other stat failures are errors.
pub fn regular_file_size(path: &Path) -> MemResult<Option<u64>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::NotFound | ErrorKind::NotADirectory
            ) || e.raw_os_error() == Some(ELOOP) =>
        {
            Ok(None)
        }
        Err(e) => Err(MemError::Stat {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
