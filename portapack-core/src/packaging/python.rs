// ============================================================================
// portapack-core/src/packaging/python.rs
// ============================================================================
//
// PYTHON PACKAGING: PyInstaller Invocation
//
// Builds a PyInstaller command for a main script and runs it. In one-folder
// mode the script's project folder is then synchronised into the output
// directory so data files travel with the bundle.
//
// AI-ASSISTANT-INFO: PyInstaller argument assembly and invocation

use super::{ensure_output_dir, require_file_with_extension, require_output_dir};
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{Tool, ToolCommand, ToolRunner, run_tool};
use crate::sync::{SyncReport, copy_tree};
use crate::utils::{get_filename_safe, parent_dir_or_current};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Inputs of a Python packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonPackageRequest {
    /// Main script, must be an existing `.py` file.
    pub script: PathBuf,
    /// Passed as `--distpath`.
    pub output_dir: PathBuf,
    /// Single executable (`-F`) instead of a folder bundle.
    pub onefile: bool,
    /// Optional `--icon`; ignored with a warning when it is not a file.
    pub icon: Option<PathBuf>,
}

impl PythonPackageRequest {
    pub fn validate(&self) -> CoreResult<()> {
        require_file_with_extension(&self.script, "py", "Python file")?;
        require_output_dir(&self.output_dir)
    }

    /// The icon that will actually be passed, if any.
    #[must_use]
    pub fn usable_icon(&self) -> Option<&Path> {
        self.icon.as_deref().filter(|icon| icon.is_file())
    }

    /// Assembles the PyInstaller command line.
    #[must_use]
    pub fn build_command(&self, config: &CoreConfig) -> ToolCommand {
        let mut cmd = ToolCommand::new(config.program(Tool::PyInstaller));
        cmd.arg(&self.script)
            .arg("--distpath")
            .arg(&self.output_dir)
            .arg("--noconfirm")
            .arg("--clean");

        if self.onefile {
            cmd.arg("-F");
        }
        if let Some(icon) = self.usable_icon() {
            cmd.arg("--icon").arg(icon);
        }
        cmd
    }
}

/// Result of a successful Python packaging run.
#[derive(Debug, Default)]
pub struct PythonPackageOutcome {
    /// Supporting-file sync, only attempted in one-folder mode. A failed
    /// sync does not fail the packaging run.
    pub supporting_files: Option<CoreResult<SyncReport>>,
}

/// Packages a Python project with PyInstaller.
///
/// In one-folder mode, the folder containing the script is copied into the
/// output directory afterwards, minus the script itself.
pub fn package_python<R: ToolRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    request: &PythonPackageRequest,
) -> CoreResult<PythonPackageOutcome> {
    request.validate()?;

    if let Some(icon) = &request.icon {
        if !icon.is_file() {
            log::warn!("Icon file '{}' not found. Ignoring icon.", icon.display());
        }
    }

    ensure_output_dir(&request.output_dir)?;

    log::info!(
        "Packaging Python project '{}' into '{}' (onefile={})...",
        request.script.display(),
        request.output_dir.display(),
        request.onefile
    );
    run_tool(runner, &request.build_command(config))?;
    log::info!("Packaging completed.");

    if request.onefile {
        return Ok(PythonPackageOutcome::default());
    }

    log::info!("Copying supporting files...");
    let synced = copy_supporting_files(request);
    if let Err(e) = &synced {
        log::warn!("Supporting files were not copied: {}", e);
    }
    Ok(PythonPackageOutcome {
        supporting_files: Some(synced),
    })
}

fn copy_supporting_files(request: &PythonPackageRequest) -> CoreResult<SyncReport> {
    let project_dir = parent_dir_or_current(&request.script);
    let exclusions = supporting_file_exclusions(&request.script, &project_dir, &request.output_dir)?;
    copy_tree(&project_dir, &request.output_dir, exclusions)
}

/// The script itself, plus the output directory when it sits directly
/// inside the project folder.
fn supporting_file_exclusions(script: &Path, project_dir: &Path, output_dir: &Path) -> CoreResult<Vec<OsString>> {
    let mut exclusions = vec![OsString::from(get_filename_safe(script)?)];

    let output_parent = parent_dir_or_current(output_dir);
    let same_parent = match (output_parent.canonicalize(), project_dir.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if same_parent {
        if let Some(name) = output_dir.file_name() {
            exclusions.push(name.to_os_string());
        }
    }
    Ok(exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::MockToolRunner;
    use std::fs;

    fn request(dir: &Path, onefile: bool) -> PythonPackageRequest {
        let script = dir.join("main.py");
        fs::write(&script, "print('hi')\n").unwrap();
        PythonPackageRequest {
            script,
            output_dir: dir.join("out"),
            onefile,
            icon: None,
        }
    }

    #[test]
    fn test_build_command_minimal() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), false);
        let cmd = req.build_command(&CoreConfig::default());

        assert_eq!(cmd.program, "pyinstaller");
        assert_eq!(
            cmd.args_lossy(),
            vec![
                req.script.to_string_lossy().into_owned(),
                "--distpath".to_string(),
                req.output_dir.to_string_lossy().into_owned(),
                "--noconfirm".to_string(),
                "--clean".to_string(),
            ]
        );
    }

    #[test]
    fn test_build_command_onefile_with_icon() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join("app.ico");
        fs::write(&icon, [0u8; 4]).unwrap();
        let mut req = request(dir.path(), true);
        req.icon = Some(icon.clone());

        let args = req.build_command(&CoreConfig::default()).args_lossy();
        assert_eq!(&args[5..], ["-F".to_string(), "--icon".to_string(), icon.to_string_lossy().into_owned()]);
    }

    #[test]
    fn test_missing_icon_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path(), true);
        req.icon = Some(dir.path().join("missing.ico"));

        let args = req.build_command(&CoreConfig::default()).args_lossy();
        assert!(!args.iter().any(|a| a == "--icon"));
    }

    #[test]
    fn test_rejects_non_python_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("main.txt");
        fs::write(&script, "").unwrap();
        let req = PythonPackageRequest {
            script,
            output_dir: dir.path().join("out"),
            onefile: true,
            icon: None,
        };
        let runner = MockToolRunner::new();

        let err = package_python(&runner, &CoreConfig::default(), &req).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(runner.get_received_calls().is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_output_dir_inside_project_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("main.py");
        let exclusions =
            supporting_file_exclusions(&script, dir.path(), &dir.path().join("dist")).unwrap();
        assert_eq!(exclusions, vec![OsString::from("main.py"), OsString::from("dist")]);

        let elsewhere = tempfile::tempdir().unwrap();
        let exclusions =
            supporting_file_exclusions(&script, dir.path(), &elsewhere.path().join("dist")).unwrap();
        assert_eq!(exclusions, vec![OsString::from("main.py")]);
    }
}
