//! Filesystem primitives used by the credentials and client cache writers.

use std::{
    fs::{self, DirBuilder, OpenOptions},
    io::{ErrorKind, Write},
    path::Path,
};

use log::debug;

use crate::error::{Error, Result};

/// Returns whether an entry exists at `path`.
///
/// Only a definite "not found" maps to `false`. Any other stat failure, such as
/// permission denied on a parent directory, is returned as [`Error::Stat`] so the
/// caller never mistakes an unreadable path for a missing one.
pub fn exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Creates `dir` and all missing ancestors. Newly created directories get `mode` on Unix.
pub fn ensure_dir(dir: &Path, mode: u32) -> Result<()> {
    if exists(dir)? {
        return Ok(());
    }

    debug!("Creating directory {}", dir.display());

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Replaces the whole content of `path` with `contents`.
///
/// The file is created if needed and its permissions are reset to `mode`
/// afterwards, so a pre-existing file with looser bits is tightened too.
pub fn write_private(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(err)?;
    file.write_all(contents).map_err(err)?;
    file.flush().map_err(err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(err)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
