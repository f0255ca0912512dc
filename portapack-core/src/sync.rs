// ============================================================================
// portapack-core/src/sync.rs
// ============================================================================
//
// SYNCHRONIZER: Copying Files and Directory Trees into an Output Directory
//
// Two entry points:
// - copy_tree: best-effort batch copy of the top-level entries of a
//   directory, with a name exclusion list. Per-entry failures are collected
//   in the returned SyncReport instead of aborting the batch.
// - copy_single: all-or-nothing copy of one file or directory.
//
// Both follow the clobber policy: an existing destination entry with the
// same name is removed before the new copy is written, never merged. Files
// keep their permission bits and access/modification times.
//
// AI-ASSISTANT-INFO: Directory/file synchronizer with clobber semantics

use crate::error::{CoreError, CoreResult, invalid_input};
use crate::utils::get_filename_safe;

use filetime::FileTime;
use walkdir::WalkDir;

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// REPORT TYPES
// ============================================================================

/// A top-level entry that could not be copied.
#[derive(Debug)]
pub struct SkippedEntry {
    pub source: PathBuf,
    pub error: CoreError,
}

/// Outcome of a [`copy_tree`] call whose precondition held.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Destination paths written, one per copied top-level entry.
    pub copied: Vec<PathBuf>,
    /// Top-level names skipped because they were excluded.
    pub excluded: Vec<OsString>,
    /// Entries that failed; the rest of the batch still ran.
    pub failed: Vec<SkippedEntry>,
}

impl SyncReport {
    /// True when no entry failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

// ============================================================================
// BATCH COPY
// ============================================================================

/// Copies every top-level entry of `source_dir` into `destination_dir`.
///
/// Entries whose file name appears in `exclusions` are skipped; only
/// top-level names are compared. `destination_dir` is created if needed.
///
/// Returns `Err(CoreError::SourceNotFound)` without touching the filesystem
/// when `source_dir` does not exist. Otherwise returns `Ok`, even when some
/// entries failed: those are logged as warnings and listed in
/// [`SyncReport::failed`].
///
/// ```rust,no_run
/// use portapack_core::copy_tree;
/// use std::path::Path;
///
/// let report = copy_tree(Path::new("project"), Path::new("dist"), ["main.py"]).unwrap();
/// for skipped in &report.failed {
///     eprintln!("{}: {}", skipped.source.display(), skipped.error);
/// }
/// ```
pub fn copy_tree<I, S>(source_dir: &Path, destination_dir: &Path, exclusions: I) -> CoreResult<SyncReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !source_dir.exists() {
        log::warn!("Source folder '{}' does not exist.", source_dir.display());
        return Err(CoreError::SourceNotFound(source_dir.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(invalid_input(format!(
            "Source '{}' is not a directory",
            source_dir.display()
        )));
    }
    if normalize(source_dir)? == normalize(destination_dir)? {
        return Err(invalid_input(format!(
            "Source and destination are the same directory: '{}'",
            source_dir.display()
        )));
    }

    let exclusions: HashSet<OsString> = exclusions
        .into_iter()
        .map(|name| name.as_ref().to_os_string())
        .collect();

    fs::create_dir_all(destination_dir)?;

    let mut report = SyncReport::default();
    let mut entries = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                log::warn!("Failed to read an entry of {}: {}", source_dir.display(), e);
                report.failed.push(SkippedEntry {
                    source: source_dir.to_path_buf(),
                    error: e.into(),
                });
            }
        }
    }
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name();
        if exclusions.contains(&name) {
            log::debug!("Excluded: {}", entry.path().display());
            report.excluded.push(name);
            continue;
        }

        let source = entry.path();
        let target = destination_dir.join(&name);
        match sync_entry(&source, &target, destination_dir) {
            Ok(()) => report.copied.push(target),
            Err(error) => {
                log::warn!(
                    "Failed to copy {} to {}: {}",
                    source.display(),
                    target.display(),
                    error
                );
                report.failed.push(SkippedEntry { source, error });
            }
        }
    }

    log::info!(
        "Synchronized '{}' into '{}': {} copied, {} excluded, {} failed",
        source_dir.display(),
        destination_dir.display(),
        report.copied.len(),
        report.excluded.len(),
        report.failed.len()
    );
    Ok(report)
}

fn sync_entry(source: &Path, target: &Path, destination_dir: &Path) -> CoreResult<()> {
    if source.is_dir() {
        ensure_not_nested(source, destination_dir)?;
        remove_existing(target)?;
        copy_dir_recursive(source, target)
    } else {
        copy_file(source, target)
    }
}

// ============================================================================
// SINGLE COPY
// ============================================================================

/// Copies one file or directory into `destination_dir`.
///
/// A file lands at `destination_dir/<file name>`, overwriting. A directory
/// lands at `destination_dir/<basename>`, replacing whatever was there.
/// Any failure aborts the operation; partially copied trees are left as is.
///
/// Returns the path of the copy.
pub fn copy_single(source: &Path, destination_dir: &Path) -> CoreResult<PathBuf> {
    if !source.exists() {
        log::warn!("Source path '{}' does not exist.", source.display());
        return Err(CoreError::SourceNotFound(source.to_path_buf()));
    }

    let name = match source.file_name() {
        Some(name) => name.to_os_string(),
        None => OsString::from(get_filename_safe(&source.canonicalize()?)?),
    };
    let target = destination_dir.join(&name);
    if normalize(source)? == normalize(&target)? {
        return Err(invalid_input(format!(
            "'{}' is already in '{}'",
            source.display(),
            destination_dir.display()
        )));
    }

    if source.is_file() {
        fs::create_dir_all(destination_dir)?;
        copy_file(source, &target)?;
        log::info!("File copied to {}", target.display());
    } else {
        ensure_not_nested(source, destination_dir)?;
        fs::create_dir_all(destination_dir)?;
        remove_existing(&target)?;
        copy_dir_recursive(source, &target)?;
        log::info!("Folder copied to {}", target.display());
    }
    Ok(target)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Copies a file's contents, permission bits and timestamps.
fn copy_file(source: &Path, target: &Path) -> CoreResult<()> {
    let copy_error = |e: io::Error| CoreError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    };

    fs::copy(source, target).map_err(copy_error)?;
    let metadata = fs::metadata(source).map_err(copy_error)?;
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .map_err(copy_error)
}

/// Recursively copies `source` to `target`, which must not exist.
fn copy_dir_recursive(source: &Path, target: &Path) -> CoreResult<()> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| invalid_input(format!("'{}' escaped the copy root", entry.path().display())))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|e| CoreError::Copy {
                from: entry.path().to_path_buf(),
                to: destination.clone(),
                source: e,
            })?;
            directories.push((entry.into_path(), destination));
        } else {
            copy_file(entry.path(), &destination)?;
        }
    }

    // Deepest first: writing into a directory would bump its mtime again.
    for (source_dir, target_dir) in directories.iter().rev() {
        let metadata = fs::metadata(source_dir)?;
        filetime::set_file_times(
            target_dir,
            FileTime::from_last_access_time(&metadata),
            FileTime::from_last_modification_time(&metadata),
        )?;
        fs::set_permissions(target_dir, metadata.permissions())?;
    }
    Ok(())
}

/// Removes `path` whether it is a file, symlink or directory tree.
fn remove_existing(path: &Path) -> CoreResult<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            log::debug!("Removing existing directory {}", path.display());
            fs::remove_dir_all(path)?;
        }
        Ok(_) => fs::remove_file(path)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn ensure_not_nested(source: &Path, destination: &Path) -> CoreResult<()> {
    if normalize(destination)?.starts_with(normalize(source)?) {
        return Err(CoreError::NestedDestination {
            path: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Absolute, symlink-resolved form of `path`. Components that do not exist
/// yet are appended lexically to the deepest existing ancestor.
fn normalize(path: &Path) -> CoreResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut missing = Vec::new();
    let mut existing = absolute.as_path();
    loop {
        if existing.exists() {
            break;
        }
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize().unwrap_or_else(|_| existing.to_path_buf());
    for name in missing.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_missing_components() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let missing = dir.path().join("not").join("yet");
        assert_eq!(normalize(&missing).unwrap(), root.join("not").join("yet"));
    }

    #[test]
    fn test_ensure_not_nested() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        assert!(matches!(
            ensure_not_nested(&project, &project.join("dist")),
            Err(CoreError::NestedDestination { .. })
        ));
        assert!(ensure_not_nested(&project, &dir.path().join("dist")).is_ok());
        // A sibling sharing a name prefix is not nested.
        assert!(ensure_not_nested(&project, &dir.path().join("project-dist")).is_ok());
    }

    #[test]
    fn test_remove_existing_handles_files_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stale.txt");
        fs::write(&file, "old").unwrap();

        remove_existing(&file).unwrap();
        assert!(!file.exists());
        remove_existing(&file).unwrap();
    }
}
