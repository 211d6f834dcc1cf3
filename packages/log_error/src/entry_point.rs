//! Resolution of the running program's path from argument zero

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Absolute path of the entry-point program
///
/// Argument zero is canonicalized so symlinks and `..` are resolved. When the
/// path does not exist (argument zero is only a convention), it is made
/// absolute against the current directory instead. With no arguments at all
/// the current directory is returned.
#[must_use]
pub fn entry_point_path() -> PathBuf {
    resolve(std::env::args_os().next())
}

pub(crate) fn resolve(arg0: Option<OsString>) -> PathBuf {
    let arg0 = PathBuf::from(arg0.unwrap_or_default());
    let target = if arg0.as_os_str().is_empty() {
        Path::new(".")
    } else {
        arg0.as_path()
    };

    match std::fs::canonicalize(target) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Cannot canonicalize {}: {e}", target.display());
            absolutize(target)
        }
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            tracing::debug!("Current directory unavailable: {e}");
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arg0_is_current_dir() {
        let cwd = std::fs::canonicalize(".").expect("current directory should resolve");
        assert_eq!(resolve(None), cwd);
        assert_eq!(resolve(Some(OsString::new())), cwd);
    }

    #[test]
    fn test_nonexistent_absolute_path_is_kept() {
        let path = "/nonexistent-log-error-dir/app/main";
        assert_eq!(resolve(Some(path.into())), PathBuf::from(path));
    }

    #[test]
    fn test_nonexistent_relative_path_is_joined_to_cwd() {
        let cwd = std::env::current_dir().expect("current directory should be readable");
        let resolved = resolve(Some("no-such-program-xyz".into()));
        assert_eq!(resolved, cwd.join("no-such-program-xyz"));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_existing_path_is_canonical() {
        let resolved = resolve(Some("./Cargo.toml".into()));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("Cargo.toml"));
        assert!(!resolved.to_string_lossy().contains("/./"));
    }
}
