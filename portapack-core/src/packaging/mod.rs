//! Packaging invocations for the supported toolchains.
//!
//! Every packager follows the same shape: validate the request, assemble a
//! [`ToolCommand`](crate::external::ToolCommand), create the output
//! directory, run the tool once through a [`ToolRunner`](crate::external::ToolRunner)
//! and treat a non-zero exit as terminal. Nothing is retried and no output
//! is parsed.

pub mod dotnet;
pub mod java;
pub mod python;

pub use dotnet::{DotnetPackageRequest, package_dotnet};
pub use java::{JavaPackageRequest, package_java};
pub use python::{PythonPackageOutcome, PythonPackageRequest, package_python};

use crate::error::{CoreError, CoreResult, invalid_input};
use crate::utils::is_file_with_extension;

use std::fs;
use std::path::Path;

/// Requires `path` to be an existing file ending in `.extension`.
pub(crate) fn require_file_with_extension(path: &Path, extension: &str, label: &str) -> CoreResult<()> {
    if is_file_with_extension(path, extension) {
        Ok(())
    } else {
        Err(invalid_input(format!(
            "Invalid {label} path '{}' (expected an existing .{extension} file)",
            path.display()
        )))
    }
}

/// Rejects an empty output directory argument.
pub(crate) fn require_output_dir(output_dir: &Path) -> CoreResult<()> {
    if output_dir.as_os_str().is_empty() {
        Err(invalid_input("Output directory cannot be empty"))
    } else {
        Ok(())
    }
}

/// Creates the output directory and its parents if missing.
pub(crate) fn ensure_output_dir(output_dir: &Path) -> CoreResult<()> {
    if !output_dir.exists() {
        log::debug!("Creating output directory {}", output_dir.display());
        fs::create_dir_all(output_dir).map_err(|e| {
            CoreError::InvalidInput(format!(
                "Cannot create output directory '{}': {}",
                output_dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_output_dir_rejects_empty() {
        assert!(require_output_dir(Path::new("")).is_err());
        assert!(require_output_dir(Path::new("dist")).is_ok());
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_require_file_with_extension_message() {
        let err = require_file_with_extension(Path::new("missing.csproj"), "csproj", ".csproj").unwrap_err();
        assert!(err.to_string().contains("missing.csproj"));
    }
}
