//! FileSystem port - the filesystem questions the orchestrator asks
//!
//! Kept to what a deploy run needs before it dispatches: whether the
//! generated output is already there.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles with a fixed answer
pub trait FileSystem {
    /// Check if a path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
