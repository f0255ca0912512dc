// ============================================================================
// portapack-cli/src/menu.rs
// ============================================================================
//
// INTERACTIVE MENU: Main Loop
//
// Renders the numbered menu, reads a choice and runs the matching flow. A
// failing flow is reported and the loop continues. End of input at any
// prompt leaves the loop normally.
//
// AI-ASSISTANT-INFO: Interactive menu loop and choice dispatch

use crate::commands::{Context, about, copy, dotnet, java, python};
use crate::error::{CliError, CliResult};
use crate::input::{InputProvider, pause};

pub const MENU_TITLE: &str = "Portable App Packager";

const SELECT_PROMPT: &str = "Select an option: ";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const RETURN_PROMPT: &str = "Press Enter to return to menu...";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Python,
    Dotnet,
    Java,
    Copy,
    About,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Python,
        MenuChoice::Dotnet,
        MenuChoice::Java,
        MenuChoice::Copy,
        MenuChoice::About,
        MenuChoice::Exit,
    ];

    /// Parses the number typed at the menu prompt.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::Python),
            "2" => Some(MenuChoice::Dotnet),
            "3" => Some(MenuChoice::Java),
            "4" => Some(MenuChoice::Copy),
            "5" => Some(MenuChoice::About),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Python => "Package Python project",
            MenuChoice::Dotnet => "Package C# project (dotnet publish)",
            MenuChoice::Java => "Package Java project (jpackage)",
            MenuChoice::Copy => "Copy arbitrary files/folders",
            MenuChoice::About => "About",
            MenuChoice::Exit => "Exit",
        }
    }
}

fn render_menu(ctx: &Context<'_>) {
    let console = ctx.console;
    console.clear_screen();
    console.line("");
    console.heading(MENU_TITLE);
    console.line("");
    for (number, choice) in MenuChoice::ALL.iter().enumerate() {
        console.line(&format!("{}) {}", number + 1, choice.label()));
    }
    console.line("");
}

/// Runs the menu until Exit is chosen or input ends.
pub fn run_menu(ctx: &Context<'_>, input: &mut dyn InputProvider) -> CliResult<()> {
    loop {
        render_menu(ctx);

        let Some(answer) = input.read_line(SELECT_PROMPT)? else {
            log::info!("Input closed, leaving the menu.");
            return Ok(());
        };

        let choice = MenuChoice::parse(&answer);
        log::debug!("Menu answer {:?} -> {:?}", answer.trim(), choice);

        let outcome = match choice {
            Some(MenuChoice::Python) => python::python_flow(ctx, input),
            Some(MenuChoice::Dotnet) => dotnet::dotnet_flow(ctx, input),
            Some(MenuChoice::Java) => java::java_flow(ctx, input),
            Some(MenuChoice::Copy) => copy::copy_flow(ctx, input),
            Some(MenuChoice::About) => {
                about::show_about(ctx.console);
                Ok(())
            }
            Some(MenuChoice::Exit) => {
                ctx.console.info("Exiting...");
                return Ok(());
            }
            None => {
                ctx.console.warning("Invalid choice, please try again.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(CliError::InputClosed) => {
                log::info!("Input closed during a prompt, leaving the menu.");
                return Ok(());
            }
            Err(e) => ctx.console.error(&e.to_string()),
        }

        let prompt = if choice == Some(MenuChoice::About) { RETURN_PROMPT } else { CONTINUE_PROMPT };
        if !pause(input, prompt)? {
            return Ok(());
        }
    }
}
