//! `dotnet publish` invocation for C# projects.
//!
//! Produces a self-contained single-file executable for the configured
//! runtime identifier.

use super::{ensure_output_dir, require_file_with_extension, require_output_dir};
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{Tool, ToolCommand, ToolRunner, require_tool, run_tool};

use std::path::PathBuf;

/// Inputs of a .NET publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetPackageRequest {
    /// Existing `.csproj` file.
    pub project: PathBuf,
    pub output_dir: PathBuf,
}

impl DotnetPackageRequest {
    pub fn validate(&self) -> CoreResult<()> {
        require_file_with_extension(&self.project, "csproj", ".csproj")?;
        require_output_dir(&self.output_dir)
    }

    #[must_use]
    pub fn build_command(&self, config: &CoreConfig) -> ToolCommand {
        let mut cmd = ToolCommand::new(config.program(Tool::Dotnet));
        cmd.arg("publish")
            .arg(&self.project)
            .args(["-c", config.dotnet_configuration.as_str()])
            .args(["-r", config.dotnet_runtime.as_str()])
            .args(["--self-contained", "true"])
            .arg("/p:PublishSingleFile=true")
            .arg("-o")
            .arg(&self.output_dir);
        cmd
    }
}

/// Publishes a C# project. Fails with `ToolMissing` before touching the
/// filesystem when dotnet is not available.
pub fn package_dotnet<R: ToolRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    request: &DotnetPackageRequest,
) -> CoreResult<()> {
    require_tool(runner, config, Tool::Dotnet)?;
    request.validate()?;
    ensure_output_dir(&request.output_dir)?;

    log::info!(
        "Packaging C# project '{}' to '{}' ...",
        request.project.display(),
        request.output_dir.display()
    );
    run_tool(runner, &request.build_command(config))?;
    log::info!("C# packaging done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_uses_configured_runtime() {
        let request = DotnetPackageRequest {
            project: PathBuf::from("src/App/App.csproj"),
            output_dir: PathBuf::from("publish"),
        };
        let config = CoreConfig::default().with_dotnet_runtime("linux-x64");
        let args = request.build_command(&config).args_lossy();

        assert_eq!(
            args,
            [
                "publish",
                "src/App/App.csproj",
                "-c",
                "Release",
                "-r",
                "linux-x64",
                "--self-contained",
                "true",
                "/p:PublishSingleFile=true",
                "-o",
                "publish",
            ]
        );
    }
}
