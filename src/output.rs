//! Output file writing.
//!
//! Each artifact is written to a temporary file next to its destination and
//! renamed into place, so a destination is either the previous content or the
//! complete new content. The two artifacts are written independently.
//!
//! An existing destination keeps its permissions. A new destination gets the
//! mode a plain create would give it (`0o666` minus the process umask).

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{ExportError, Result};

/// Replace `path` with `contents`, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // applied through open(2), so the umask still takes effect
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut staged = builder.tempfile_in(parent).map_err(write_err)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
