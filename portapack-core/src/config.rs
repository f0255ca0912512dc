// ============================================================================
// portapack-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structure and Constants
//
// Holds the program names of the external packagers and the fixed publish
// parameters handed to them. There are no config files and no environment
// lookups: defaults live in the constants below and the CLI overrides a few
// of them from command-line flags.
//
// AI-ASSISTANT-INFO: Configuration structure and defaults for portapack-core

use crate::external::Tool;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Executable used to bundle Python scripts.
pub const DEFAULT_PYINSTALLER_PROGRAM: &str = "pyinstaller";

/// Executable providing `dotnet publish`.
pub const DEFAULT_DOTNET_PROGRAM: &str = "dotnet";

/// Executable used to package Java applications (JDK 14+).
pub const DEFAULT_JPACKAGE_PROGRAM: &str = "jpackage";

/// Build configuration passed to `dotnet publish -c`.
pub const DEFAULT_DOTNET_CONFIGURATION: &str = "Release";

/// Runtime identifier passed to `dotnet publish -r`.
pub const DEFAULT_DOTNET_RUNTIME: &str = "win-x64";

/// Installer type passed to `jpackage --type`.
pub const DEFAULT_JPACKAGE_TYPE: &str = "exe";

/// Argument used by the tool probe.
pub const VERSION_QUERY_ARG: &str = "--version";

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Settings shared by every packaging invocation.
///
/// # Examples
///
/// ```rust
/// use portapack_core::CoreConfig;
///
/// let config = CoreConfig::default().with_dotnet_runtime("linux-x64");
/// assert_eq!(config.dotnet_runtime, "linux-x64");
/// assert_eq!(config.jpackage_type, "exe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub pyinstaller_program: String,
    pub dotnet_program: String,
    pub jpackage_program: String,

    /// `dotnet publish -c` value
    pub dotnet_configuration: String,

    /// `dotnet publish -r` value
    pub dotnet_runtime: String,

    /// `jpackage --type` value
    pub jpackage_type: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            pyinstaller_program: DEFAULT_PYINSTALLER_PROGRAM.to_string(),
            dotnet_program: DEFAULT_DOTNET_PROGRAM.to_string(),
            jpackage_program: DEFAULT_JPACKAGE_PROGRAM.to_string(),
            dotnet_configuration: DEFAULT_DOTNET_CONFIGURATION.to_string(),
            dotnet_runtime: DEFAULT_DOTNET_RUNTIME.to_string(),
            jpackage_type: DEFAULT_JPACKAGE_TYPE.to_string(),
        }
    }
}

impl CoreConfig {
    /// Returns the executable name configured for `tool`.
    #[must_use]
    pub fn program(&self, tool: Tool) -> &str {
        match tool {
            Tool::PyInstaller => &self.pyinstaller_program,
            Tool::Dotnet => &self.dotnet_program,
            Tool::Jpackage => &self.jpackage_program,
        }
    }

    #[must_use]
    pub fn with_dotnet_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.dotnet_runtime = runtime.into();
        self
    }

    #[must_use]
    pub fn with_jpackage_type(mut self, installer_type: impl Into<String>) -> Self {
        self.jpackage_type = installer_type.into();
        self
    }

    /// Overrides the executable used for `tool`.
    #[must_use]
    pub fn with_program(mut self, tool: Tool, program: impl Into<String>) -> Self {
        let program = program.into();
        match tool {
            Tool::PyInstaller => self.pyinstaller_program = program,
            Tool::Dotnet => self.dotnet_program = program,
            Tool::Jpackage => self.jpackage_program = program,
        }
        self
    }
}
