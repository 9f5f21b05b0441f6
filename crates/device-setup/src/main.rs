//! Device setup - collect network settings for a new device

use anyhow::Result;
use clap::Parser;
use prompt_core::prompt::{self, Choices, Message, Pattern};
use prompt_core::{
    Cli, CliIdentity, ConsoleTerminal, GlobalArgs, ParsedArguments, Prompt, PromptManifest,
};
use std::path::PathBuf;

/// Device setup identity
#[derive(Clone)]
pub struct DeviceSetup;

impl CliIdentity for DeviceSetup {
    fn display_name(&self) -> &'static str {
        "MSC"
    }

    fn banner(&self) -> String {
        "MSC - Device setup".to_string()
    }

    fn color(&self) -> u32 {
        0x00A37A
    }

    fn max_attempts(&self) -> Option<u32> {
        Some(5)
    }
}

#[derive(Parser, Debug)]
#[command(name = "device-setup")]
#[command(about = "Interactive network device setup")]
#[command(version)]
pub struct Args {
    /// Run the prompts described in a YAML manifest instead of the built-in ones
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

const IP_WITH_MASK: &str = r"^(\d{1,3}\.){3}\d{1,3}/\d{1,2}$";
const IP: &str = r"^(\d{1,3}\.){3}\d{1,3}$";

fn builtin_prompts() -> Result<Vec<Prompt>> {
    Ok(vec![
        prompt::description("Answer ? at any prompt for help").into(),
        prompt::text("host", "What is the device name?")
            .required(true)
            .help("Up to 15 letters or digits, stored in uppercase")
            .pattern(Pattern::new(
                r"^[A-Za-z0-9]{1,15}$",
                "up to 15 alphanumeric characters",
            )?)
            .transform(|name| Ok(name.to_uppercase()))
            .into(),
        prompt::text("ip", "What is the device IP and mask?")
            .required(true)
            .pattern(Pattern::new(IP_WITH_MASK, "a.b.c.d/nn")?)
            .into(),
        prompt::text(
            "gateway",
            Message::dynamic(|answers| {
                Ok(format!(
                    "What is the gateway IP for {}?",
                    answers.get_str("ip").unwrap_or_default()
                ))
            }),
        )
        .required(true)
        .pattern(Pattern::new(IP, "a.b.c.d")?)
        .into(),
        prompt::number("port", "Which management port?")
            .integer(true)
            .range(1.0, 65535.0)
            .default_value(22.0)
            .into(),
        prompt::text("role", "What role does the device have?")
            .required(true)
            .choices(Choices::new([
                ("r", "Router"),
                ("s", "Switch"),
                ("f", "Firewall"),
            ]))
            .into(),
        prompt::confirm("save", "Save this configuration?").into(),
    ])
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
    let prompts = match &args.file {
        Some(path) => PromptManifest::load(path).await?.into_prompts()?,
        None => builtin_prompts()?,
    };

    let mut cli = Cli::with_identity(
        &DeviceSetup,
        ParsedArguments::from(args.global),
        ConsoleTerminal::new(),
    );

    let result = cli.prompt(&prompts).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let answers = result?;
    if answers.get_bool("save") == Some(false) {
        cliclack::outro_cancel("Configuration discarded")?;
        return Ok(());
    }

    cli.complete(&serde_yaml::to_string(&answers)?)?;
    cliclack::outro("Device configured")?;
    Ok(())
}
