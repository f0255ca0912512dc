// portapack-cli/src/commands/dotnet.rs
//
// C# packaging: menu flow and `dotnet` subcommand.

use super::{Context, require_non_empty, with_spinner};
use crate::cli::DotnetArgs;
use crate::error::{CliResult, invalid_input};
use crate::input::{InputProvider, ask_path};

use portapack_core::packaging::{DotnetPackageRequest, package_dotnet};
use portapack_core::utils::is_file_with_extension;
use portapack_core::{Tool, require_tool};

/// Checks for the dotnet SDK before asking anything, then prompts for the
/// project file and output directory.
pub fn dotnet_flow(ctx: &Context<'_>, input: &mut dyn InputProvider) -> CliResult<()> {
    require_tool(ctx.runner, ctx.config, Tool::Dotnet)?;

    let project = ask_path(input, "Enter full path to your C# project file (*.csproj): ")?;
    if !is_file_with_extension(&project, "csproj") {
        return Err(invalid_input(format!(
            "'{}' is not an existing .csproj file",
            project.display()
        )));
    }

    let output_dir = ask_path(input, "Enter output directory: ")?;
    require_non_empty(&output_dir, "Output directory cannot be empty")?;

    package(ctx, &DotnetPackageRequest { project, output_dir })
}

pub fn run_dotnet(ctx: &Context<'_>, args: &DotnetArgs) -> CliResult<()> {
    package(
        ctx,
        &DotnetPackageRequest {
            project: args.project.clone(),
            output_dir: args.output.clone(),
        },
    )
}

fn package(ctx: &Context<'_>, request: &DotnetPackageRequest) -> CliResult<()> {
    let message = format!(
        "Packaging C# project '{}' to '{}'...",
        request.project.display(),
        request.output_dir.display()
    );
    with_spinner(ctx.console, &message, || {
        package_dotnet(ctx.runner, ctx.config, request)
    })?;
    ctx.console.success("C# packaging done.");
    Ok(())
}
