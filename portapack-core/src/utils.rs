//! Utility functions for path inspection.
//!
//! Small helpers shared by the packaging flows and the synchronizer.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Checks whether `path` ends in `.extension` (case-insensitive).
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Checks if the given path is an existing file with the given extension.
#[must_use]
pub fn is_file_with_extension(path: &Path, extension: &str) -> bool {
    path.is_file() && has_extension(path, extension)
}

/// Parent directory of `path`, or `.` for a bare file name.
#[must_use]
pub fn parent_dir_or_current(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Safely extracts the final component of a path.
/// Returns an error if the path has no file name (e.g. `/` or `..`).
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            CoreError::InvalidInput(format!("Path '{}' has no file name", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_is_case_insensitive() {
        assert!(has_extension(Path::new("main.py"), "py"));
        assert!(has_extension(Path::new("MAIN.PY"), "py"));
        assert!(has_extension(Path::new("App.CsProj"), "csproj"));
        assert!(!has_extension(Path::new("main.pyc"), "py"));
        assert!(!has_extension(Path::new("py"), "py"));
    }

    #[test]
    fn test_is_file_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("app.JAR");
        std::fs::write(&jar, b"PK").unwrap();

        assert!(is_file_with_extension(&jar, "jar"));
        assert!(!is_file_with_extension(&dir.path().join("missing.jar"), "jar"));
        // A directory named like a jar is not a jar.
        let fake = dir.path().join("lib.jar");
        std::fs::create_dir(&fake).unwrap();
        assert!(!is_file_with_extension(&fake, "jar"));
    }

    #[test]
    fn test_parent_dir_or_current() {
        assert_eq!(parent_dir_or_current(Path::new("app.jar")), PathBuf::from("."));
        assert_eq!(
            parent_dir_or_current(Path::new("build/libs/app.jar")),
            PathBuf::from("build/libs")
        );
    }

    #[test]
    fn test_get_filename_safe() {
        assert_eq!(get_filename_safe(Path::new("/tmp/assets/")).unwrap(), "assets");
        assert!(get_filename_safe(Path::new("/")).is_err());
    }
}
