//! Locating the client programs a session launch hands the alias to.
//!
//! Each program is looked up on `PATH` once per process and must be a regular
//! executable that only root or the current user can modify.

use once_cell::sync::OnceCell;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

// `io::Error` is not `Clone`, so failures are cached as kind plus message.
type Lookup = Result<PathBuf, (io::ErrorKind, String)>;

static SSH: OnceCell<Lookup> = OnceCell::new();
static OSASCRIPT: OnceCell<Lookup> = OnceCell::new();

pub(crate) fn ssh_path() -> io::Result<PathBuf> {
    lookup_once(&SSH, "ssh")
}

pub(crate) fn osascript_path() -> io::Result<PathBuf> {
    lookup_once(&OSASCRIPT, "osascript")
}

fn lookup_once(cell: &OnceCell<Lookup>, program: &str) -> io::Result<PathBuf> {
    cell.get_or_init(|| find_client(program).map_err(|err| (err.kind(), err.to_string())))
        .clone()
        .map_err(|(kind, message)| io::Error::new(kind, message))
}

fn find_client(program: &str) -> io::Result<PathBuf> {
    let found = which::which(program)
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("cannot launch sessions: `{program}` is not on PATH ({err})")))?;
    checked_client_path(&found, program)
}

/// Canonicalize `path` and make sure it is safe to pass a host alias to.
fn checked_client_path(path: &Path, program: &str) -> io::Result<PathBuf> {
    let resolved = fs::canonicalize(path)
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{program} at '{}' cannot be resolved: {err}", path.display())))?;
    let metadata = fs::metadata(&resolved)?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{program} at '{}' is not a file", resolved.display()),
        ));
    }

    #[cfg(unix)]
    check_unix_permissions(&resolved, &metadata, program)?;

    Ok(resolved)
}

#[cfg(unix)]
fn check_unix_permissions(path: &Path, metadata: &fs::Metadata, program: &str) -> io::Result<()> {
    let mode = metadata.permissions().mode();
    let problem = if mode & 0o002 != 0 {
        Some("is writable by every user")
    } else if mode & 0o111 == 0 {
        Some("has no execute bit")
    } else {
        let owner = metadata.uid();
        (owner != 0 && owner != nix::unistd::Uid::effective().as_raw()).then_some("is owned by another user")
    };

    match problem {
        Some(problem) => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("refusing to launch {program} at '{}': it {problem}", path.display()),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
