// portapack-cli/src/commands/java.rs
//
// Java packaging: menu flow and `java` subcommand.

use super::{Context, require_non_empty, with_spinner};
use crate::cli::JavaArgs;
use crate::error::{CliResult, invalid_input};
use crate::input::{InputProvider, ask, ask_path};

use portapack_core::packaging::{JavaPackageRequest, package_java};
use portapack_core::utils::is_file_with_extension;
use portapack_core::{Tool, require_tool};

pub fn java_flow(ctx: &Context<'_>, input: &mut dyn InputProvider) -> CliResult<()> {
    require_tool(ctx.runner, ctx.config, Tool::Jpackage)?;

    let jar = ask_path(input, "Enter full path to your Java .jar file: ")?;
    if !is_file_with_extension(&jar, "jar") {
        return Err(invalid_input(format!("'{}' is not an existing .jar file", jar.display())));
    }

    let output_dir = ask_path(input, "Enter output directory: ")?;
    require_non_empty(&output_dir, "Output directory cannot be empty")?;

    let app_name = ask(input, "Enter application name: ")?;
    if app_name.is_empty() {
        return Err(invalid_input("Application name cannot be empty"));
    }

    package(
        ctx,
        &JavaPackageRequest {
            jar,
            output_dir,
            app_name,
        },
    )
}

pub fn run_java(ctx: &Context<'_>, args: &JavaArgs) -> CliResult<()> {
    package(
        ctx,
        &JavaPackageRequest {
            jar: args.jar.clone(),
            output_dir: args.output.clone(),
            app_name: args.name.clone(),
        },
    )
}

fn package(ctx: &Context<'_>, request: &JavaPackageRequest) -> CliResult<()> {
    let message = format!(
        "Packaging Java app '{}' with jpackage to '{}'...",
        request.app_name.trim(),
        request.output_dir.display()
    );
    with_spinner(ctx.console, &message, || {
        package_java(ctx.runner, ctx.config, request)
    })?;
    ctx.console.success("Java packaging done.");
    Ok(())
}
