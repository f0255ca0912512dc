// portapack-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use portapack_core::CoreConfig;
use portapack_core::config::{DEFAULT_DOTNET_RUNTIME, DEFAULT_JPACKAGE_TYPE};

use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Portapack: Portable application packager",
    long_about = "Packages Python, C# and Java projects into portable executables \
                  using PyInstaller, dotnet publish and jpackage, and copies files \
                  and folders. Starts an interactive menu when no command is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// The subcommand to run; the interactive menu when none was given.
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Menu)
    }
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (NO_COLOR is honoured as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Optional: Directory for a timestamped log file of the session
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Runtime identifier passed to `dotnet publish -r`
    #[arg(long, global = true, value_name = "RID", default_value = DEFAULT_DOTNET_RUNTIME)]
    pub dotnet_runtime: String,

    /// Installer type passed to `jpackage --type`
    #[arg(long, global = true, value_name = "TYPE", default_value = DEFAULT_JPACKAGE_TYPE)]
    pub installer_type: String,
}

impl GlobalArgs {
    /// Core configuration with the command-line overrides applied.
    pub fn core_config(&self) -> CoreConfig {
        CoreConfig::default()
            .with_dotnet_runtime(self.dotnet_runtime.clone())
            .with_jpackage_type(self.installer_type.clone())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Package a Python script with PyInstaller
    Python(PythonArgs),
    /// Publish a C# project as a self-contained single file
    Dotnet(DotnetArgs),
    /// Build a native installer for a Java jar with jpackage
    Java(JavaArgs),
    /// Copy a file or folder into a destination directory
    Copy(CopyArgs),
    /// Check which packaging tools are installed
    Probe(ProbeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PythonArgs {
    /// Main Python script (*.py)
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Directory where the packaged application is written
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Produce a single executable instead of a folder
    #[arg(long)]
    pub onefile: bool,

    /// Optional: Icon file for the executable
    #[arg(long, value_name = "ICON")]
    pub icon: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DotnetArgs {
    /// C# project file (*.csproj)
    #[arg(short, long, value_name = "CSPROJ")]
    pub project: PathBuf,

    /// Directory where the published executable is written
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct JavaArgs {
    /// Application jar (*.jar)
    #[arg(short, long, value_name = "JAR")]
    pub jar: PathBuf,

    /// Directory where the installer is written
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Application name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// File or folder to copy
    #[arg(short, long, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory
    #[arg(short, long, value_name = "DEST_DIR")]
    pub dest: PathBuf,

    /// Create the destination directory when it does not exist
    #[arg(long)]
    pub create: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Programs to check (defaults to pyinstaller, dotnet and jpackage)
    #[arg(value_name = "TOOL")]
    pub tools: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::parse_from(["portapack"]);
        assert!(matches!(cli.selected_command(), Commands::Menu));
        assert_eq!(cli.global.dotnet_runtime, "win-x64");
        assert_eq!(cli.global.installer_type, "exe");
    }

    #[test]
    fn test_global_overrides_reach_core_config() {
        let cli = Cli::parse_from([
            "portapack",
            "java",
            "--jar",
            "app.jar",
            "--output",
            "out",
            "--name",
            "Demo",
            "--installer-type",
            "msi",
            "--dotnet-runtime",
            "linux-x64",
        ]);
        let config = cli.global.core_config();
        assert_eq!(config.jpackage_type, "msi");
        assert_eq!(config.dotnet_runtime, "linux-x64");
        match cli.selected_command() {
            Commands::Java(args) => assert_eq!(args.name, "Demo"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_probe_accepts_tool_list() {
        let cli = Cli::parse_from(["portapack", "probe", "dotnet", "jpackage"]);
        match cli.selected_command() {
            Commands::Probe(args) => assert_eq!(args.tools, ["dotnet", "jpackage"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
