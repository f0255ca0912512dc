// portapack-core/tests/packaging_tests.rs
//
// Drives the packagers through a hand-written ToolRunner to check argument
// assembly, tool probing order and supporting-file copies.

use portapack_core::packaging::{
    DotnetPackageRequest, JavaPackageRequest, PythonPackageRequest, package_dotnet, package_java,
    package_python,
};
use portapack_core::{CoreConfig, CoreError, CoreResult, ToolCommand, ToolOutput, ToolRunner};

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Records commands and answers with a fixed exit code.
struct RecordingRunner {
    installed: bool,
    exit_code: i32,
    calls: RefCell<Vec<ToolCommand>>,
}

impl RecordingRunner {
    fn new(installed: bool, exit_code: i32) -> Self {
        Self {
            installed,
            exit_code,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn single_call(&self) -> ToolCommand {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one tool invocation");
        calls[0].clone()
    }
}

impl ToolRunner for RecordingRunner {
    fn is_installed(&self, _program: &str) -> bool {
        self.installed
    }

    fn run(&self, command: &ToolCommand) -> CoreResult<ToolOutput> {
        self.calls.borrow_mut().push(command.clone());
        Ok(ToolOutput {
            exit_code: Some(self.exit_code),
            stdout: String::new(),
            stderr: if self.exit_code == 0 { String::new() } else { "build failed".to_string() },
        })
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_python_onefile_runs_pyinstaller_only() {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    let script = project.path().join("main.py");
    touch(&script);
    touch(&project.path().join("data.json"));
    let runner = RecordingRunner::new(true, 0);

    let request = PythonPackageRequest {
        script: script.clone(),
        output_dir: out.path().join("dist"),
        onefile: true,
        icon: None,
    };
    let outcome = package_python(&runner, &CoreConfig::default(), &request).unwrap();

    let call = runner.single_call();
    assert_eq!(call.program, "pyinstaller");
    assert_eq!(
        call.args_lossy(),
        vec![
            lossy(&script),
            "--distpath".to_string(),
            lossy(&out.path().join("dist")),
            "--noconfirm".to_string(),
            "--clean".to_string(),
            "-F".to_string(),
        ]
    );
    assert!(outcome.supporting_files.is_none());
    assert!(out.path().join("dist").is_dir());
    assert!(!out.path().join("dist/data.json").exists());
}

#[test]
fn test_python_onedir_copies_supporting_files() {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    let script = project.path().join("main.py");
    touch(&script);
    touch(&project.path().join("config.ini"));
    touch(&project.path().join("assets/icon.png"));
    let runner = RecordingRunner::new(true, 0);

    let request = PythonPackageRequest {
        script,
        output_dir: out.path().to_path_buf(),
        onefile: false,
        icon: None,
    };
    let outcome = package_python(&runner, &CoreConfig::default(), &request).unwrap();

    let report = outcome
        .supporting_files
        .expect("one-folder mode syncs supporting files")
        .unwrap();
    assert!(report.is_complete());
    assert!(out.path().join("config.ini").is_file());
    assert!(out.path().join("assets/icon.png").is_file());
    assert!(!out.path().join("main.py").exists());
}

#[test]
fn test_python_output_in_project_folder_still_succeeds() {
    let project = tempdir().unwrap();
    let script = project.path().join("main.py");
    touch(&script);
    touch(&project.path().join("config.ini"));
    let runner = RecordingRunner::new(true, 0);

    let request = PythonPackageRequest {
        script,
        output_dir: project.path().to_path_buf(),
        onefile: false,
        icon: None,
    };
    let outcome = package_python(&runner, &CoreConfig::default(), &request).unwrap();

    assert_eq!(runner.calls.borrow().len(), 1);
    match outcome.supporting_files {
        Some(Err(CoreError::InvalidInput(_))) => {}
        other => panic!("expected a skipped supporting-file copy, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(project.path().join("config.ini")).unwrap(), "x");
}

#[test]
fn test_python_tool_failure_skips_supporting_files() {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    let script = project.path().join("main.py");
    touch(&script);
    touch(&project.path().join("config.ini"));
    let runner = RecordingRunner::new(true, 1);

    let request = PythonPackageRequest {
        script,
        output_dir: out.path().to_path_buf(),
        onefile: false,
        icon: None,
    };
    let err = package_python(&runner, &CoreConfig::default(), &request).unwrap_err();

    match err {
        CoreError::ToolFailed { tool, exit_code, output } => {
            assert_eq!(tool, "pyinstaller");
            assert_eq!(exit_code, Some(1));
            assert_eq!(output, "build failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!out.path().join("config.ini").exists());
}

#[test]
fn test_dotnet_missing_tool_aborts_before_any_io() {
    let root = tempdir().unwrap();
    let project = root.path().join("App.csproj");
    touch(&project);
    let runner = RecordingRunner::new(false, 0);

    let request = DotnetPackageRequest {
        project,
        output_dir: root.path().join("publish"),
    };
    let err = package_dotnet(&runner, &CoreConfig::default(), &request).unwrap_err();

    assert!(matches!(err, CoreError::ToolMissing { ref tool, .. } if tool == "dotnet"));
    assert!(runner.calls.borrow().is_empty());
    assert!(!root.path().join("publish").exists());
}

#[test]
fn test_dotnet_publish_arguments() {
    let root = tempdir().unwrap();
    let project = root.path().join("App.csproj");
    touch(&project);
    let runner = RecordingRunner::new(true, 0);

    let request = DotnetPackageRequest {
        project: project.clone(),
        output_dir: root.path().join("publish"),
    };
    package_dotnet(&runner, &CoreConfig::default(), &request).unwrap();

    let call = runner.single_call();
    assert_eq!(call.program, "dotnet");
    assert_eq!(
        call.args_lossy(),
        vec![
            "publish".to_string(),
            lossy(&project),
            "-c".to_string(),
            "Release".to_string(),
            "-r".to_string(),
            "win-x64".to_string(),
            "--self-contained".to_string(),
            "true".to_string(),
            "/p:PublishSingleFile=true".to_string(),
            "-o".to_string(),
            lossy(&root.path().join("publish")),
        ]
    );
    assert!(root.path().join("publish").is_dir());
}

#[test]
fn test_dotnet_rejects_wrong_extension() {
    let root = tempdir().unwrap();
    let project = root.path().join("App.sln");
    touch(&project);
    let runner = RecordingRunner::new(true, 0);

    let request = DotnetPackageRequest {
        project,
        output_dir: root.path().join("publish"),
    };
    let err = package_dotnet(&runner, &CoreConfig::default(), &request).unwrap_err();

    assert!(matches!(err, CoreError::InvalidInput(_)));
    assert!(runner.calls.borrow().is_empty());
}

#[test]
fn test_java_jpackage_arguments() {
    let root = tempdir().unwrap();
    let jar = root.path().join("libs").join("app.jar");
    touch(&jar);
    let runner = RecordingRunner::new(true, 0);

    let request = JavaPackageRequest {
        jar,
        output_dir: root.path().join("installers"),
        app_name: "Demo".to_string(),
    };
    package_java(&runner, &CoreConfig::default(), &request).unwrap();

    let call = runner.single_call();
    assert_eq!(call.program, "jpackage");
    assert_eq!(
        call.args_lossy(),
        vec![
            "--input".to_string(),
            lossy(&root.path().join("libs")),
            "--name".to_string(),
            "Demo".to_string(),
            "--main-jar".to_string(),
            "app.jar".to_string(),
            "--type".to_string(),
            "exe".to_string(),
            "--dest".to_string(),
            lossy(&root.path().join("installers")),
        ]
    );
}

#[test]
fn test_java_non_zero_exit_is_reported() {
    let root = tempdir().unwrap();
    let jar = root.path().join("app.jar");
    touch(&jar);
    let runner = RecordingRunner::new(true, 2);

    let request = JavaPackageRequest {
        jar,
        output_dir: root.path().join("installers"),
        app_name: "Demo".to_string(),
    };
    let err = package_java(&runner, &CoreConfig::default(), &request).unwrap_err();

    assert!(matches!(err, CoreError::ToolFailed { exit_code: Some(2), .. }));
}
