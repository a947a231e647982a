//! Small filesystem helpers shared by config and extraction.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Write a file, creating it with `mode` if it does not exist.
///
/// Existing files keep their permissions; this never widens access to a
/// file someone already restricted.
pub(crate) fn write_with_mode(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Create a directory (and parents) with `mode` on the leaf.
pub(crate) fn create_dir_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
