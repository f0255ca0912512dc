// portapack-cli/src/lib.rs
//
// Library portion of the Portapack CLI application.
// Contains argument definitions, the interactive menu and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GlobalArgs};
pub use commands::Context;
pub use error::{CliError, CliResult};
pub use input::{InputProvider, ScriptedInput, StdinInput};
pub use terminal::Console;

/// Runs the selected command. The menu reads answers from `input`.
pub fn dispatch(ctx: &Context<'_>, command: &Commands, input: &mut dyn InputProvider) -> CliResult<()> {
    match command {
        Commands::Menu => menu::run_menu(ctx, input),
        Commands::Python(args) => commands::python::run_python(ctx, args),
        Commands::Dotnet(args) => commands::dotnet::run_dotnet(ctx, args),
        Commands::Java(args) => commands::java::run_java(ctx, args),
        Commands::Copy(args) => commands::copy::run_copy(ctx, args),
        Commands::Probe(args) => commands::probe::run_probe(ctx, args),
    }
}
