//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations, plus the
//! directory copy helpers the built-in deployers share.

use crate::domain::ports::FileSystem;
use std::fs;
use std::io;
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Recursively copy the contents of `src` into `dest`, creating `dest`.
///
/// Existing files are overwritten. Returns the number of files copied.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            copied += copy_dir_contents(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove everything inside `dir` except entries named in `keep`.
pub fn clear_dir_except(dir: &Path, keep: &[&str]) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if keep.iter().any(|k| entry.file_name() == *k) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
