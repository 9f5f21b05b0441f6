//! Prompt demo - acknowledgement and branching walkthrough

use anyhow::Result;
use clap::Parser;
use prompt_core::prompt::{self, Assignments};
use prompt_core::{Cli, CliIdentity, ConsoleTerminal, GlobalArgs, ParsedArguments, Prompt};

/// Demo identity
#[derive(Clone)]
pub struct DemoIdentity;

impl CliIdentity for DemoIdentity {
    fn display_name(&self) -> &'static str {
        "Demo"
    }

    fn banner(&self) -> String {
        "Demo - Prompt engine walkthrough".to_string()
    }

    fn color(&self) -> u32 {
        0x7A5CFF
    }
}

#[derive(Parser, Debug)]
#[command(name = "prompt-demo")]
#[command(about = "Demonstration CLI for the prompt engine")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,
}

fn prompts() -> Vec<Prompt> {
    vec![
        prompt::yes_no("okay", "Are you okay?").required(true).into(),
        prompt::warning("This is a warning")
            .on_acknowledgement(|ack| Ok(Assignments::one("ack_warning", ack.accepted)))
            .into(),
        prompt::diverge(|answers| {
            Ok(match answers.get_bool("ack_warning") {
                Some(true) => "acknowledged".to_string(),
                _ => "not_acknowledged".to_string(),
            })
        })
        .branch(
            "acknowledged",
            vec![prompt::info("Warning was acknowledged").required(true).into()],
        )
        .branch(
            "not_acknowledged",
            vec![prompt::warning("Warning was NOT acknowledged")
                .required(true)
                .into()],
        )
        .into(),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let mut cli = Cli::with_identity(
        &DemoIdentity,
        ParsedArguments::from(args.global),
        ConsoleTerminal::new(),
    );

    let result = cli.prompt(&prompts()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let answers = result?;
    cli.write(&serde_yaml::to_string(&answers)?)?;
    cliclack::outro("Done")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_core::{ScriptedTerminal, Verbosity};

    async fn run(verbosity: Verbosity, okay: &str, accepted: bool) -> ScriptedTerminal {
        let args = ParsedArguments::default().with_verbosity(verbosity);
        let term = ScriptedTerminal::new()
            .with_lines([okay])
            .with_confirms([accepted]);
        let mut cli = Cli::with_identity(&DemoIdentity, args, term);
        cli.prompt(&prompts()).await.unwrap();
        cli.into_terminal()
    }

    #[tokio::test]
    async fn test_branch_notices_survive_quiet_verbosity() {
        let term = run(Verbosity::None, "y", true).await;
        assert!(term.printed("Warning was acknowledged"));

        let term = run(Verbosity::None, "n", false).await;
        assert!(term.printed("Warning was NOT acknowledged"));
    }
}
