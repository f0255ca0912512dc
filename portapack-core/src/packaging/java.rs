//! `jpackage` invocation for Java applications.

use super::{ensure_output_dir, require_file_with_extension, require_output_dir};
use crate::config::CoreConfig;
use crate::error::{CoreResult, invalid_input};
use crate::external::{Tool, ToolCommand, ToolRunner, require_tool, run_tool};
use crate::utils::{get_filename_safe, parent_dir_or_current};

use std::path::PathBuf;

/// Inputs of a jpackage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaPackageRequest {
    /// Existing `.jar` file. Its directory becomes `--input`.
    pub jar: PathBuf,
    pub output_dir: PathBuf,
    pub app_name: String,
}

impl JavaPackageRequest {
    pub fn validate(&self) -> CoreResult<()> {
        require_file_with_extension(&self.jar, "jar", "JAR file")?;
        require_output_dir(&self.output_dir)?;
        if self.app_name.trim().is_empty() {
            return Err(invalid_input("Application name cannot be empty"));
        }
        Ok(())
    }

    pub fn build_command(&self, config: &CoreConfig) -> CoreResult<ToolCommand> {
        let mut cmd = ToolCommand::new(config.program(Tool::Jpackage));
        cmd.arg("--input")
            .arg(parent_dir_or_current(&self.jar))
            .arg("--name")
            .arg(self.app_name.trim())
            .arg("--main-jar")
            .arg(get_filename_safe(&self.jar)?)
            .arg("--type")
            .arg(&config.jpackage_type)
            .arg("--dest")
            .arg(&self.output_dir);
        Ok(cmd)
    }
}

/// Packages a jar with jpackage. Fails with `ToolMissing` before touching
/// the filesystem when jpackage is not available.
pub fn package_java<R: ToolRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    request: &JavaPackageRequest,
) -> CoreResult<()> {
    require_tool(runner, config, Tool::Jpackage)?;
    request.validate()?;
    ensure_output_dir(&request.output_dir)?;

    log::info!(
        "Packaging Java app '{}' with jpackage to '{}' ...",
        request.app_name.trim(),
        request.output_dir.display()
    );
    run_tool(runner, &request.build_command(config)?)?;
    log::info!("Java packaging done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_jar_name_uses_current_dir() {
        let request = JavaPackageRequest {
            jar: PathBuf::from("app.jar"),
            output_dir: PathBuf::from("installers"),
            app_name: " Demo ".to_string(),
        };
        let args = request.build_command(&CoreConfig::default()).unwrap().args_lossy();
        assert_eq!(
            args,
            [
                "--input", ".", "--name", "Demo", "--main-jar", "app.jar", "--type", "exe", "--dest",
                "installers",
            ]
        );
    }

    #[test]
    fn test_blank_app_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("app.jar");
        std::fs::write(&jar, b"PK").unwrap();
        let request = JavaPackageRequest {
            jar,
            output_dir: dir.path().join("out"),
            app_name: "   ".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
