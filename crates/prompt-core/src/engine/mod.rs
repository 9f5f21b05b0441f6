//! Prompt engine
//!
//! [`Cli::prompt`] walks a list of [`Prompt`] descriptors in order:
//!
//! - informational notices are shown or suppressed (see [`notice`])
//! - input prompts are asked until a value is accepted (see [`input`])
//! - divergences pick a branch whose prompts run next (see [`diverge`])
//!
//! All prompts of a run share one result map. Callbacks only ever see a
//! read-only [`Answers`] snapshot; the dispatcher is the only writer.

mod diverge;
mod input;
mod notice;

use crate::config::{CliConfig, CliIdentity, ParsedArguments};
use crate::error::Result;
use crate::loc::{strings_for, StringTable};
use crate::prompt::answers::Accumulator;
use crate::prompt::{Answers, Prompt, Value};
use crate::style;
use crate::terminal::Terminal;
use crate::verbosity::{should_display, TextKind, Verbosity};

/// A configured prompt engine bound to a terminal
pub struct Cli<T: Terminal> {
    config: CliConfig,
    args: ParsedArguments,
    strings: &'static StringTable,
    terminal: T,
}

impl<T: Terminal> Cli<T> {
    pub fn new(config: CliConfig, args: ParsedArguments, terminal: T) -> Self {
        let strings = strings_for(&args.lang);
        Self {
            config,
            args,
            strings,
            terminal,
        }
    }

    /// Engine presenting itself as `identity`
    pub fn with_identity<I: CliIdentity>(identity: &I, args: ParsedArguments, terminal: T) -> Self {
        Self::new(CliConfig::from_identity(identity), args, terminal)
    }

    /// Engine using the localized default name and banner
    pub fn localized(args: ParsedArguments, terminal: T) -> Self {
        let config = CliConfig::localized(strings_for(&args.lang));
        Self::new(config, args, terminal)
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn args(&self) -> &ParsedArguments {
        &self.args
    }

    pub fn verbosity(&self) -> Verbosity {
        self.args.verbosity
    }

    pub fn lang(&self) -> &str {
        &self.args.lang
    }

    pub fn strings(&self) -> &'static StringTable {
        self.strings
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// `[display_name]` in the accent color
    pub fn name(&self) -> String {
        style::name_tag(&self.config.display_name, self.config.color)
    }

    /// Run `prompts` to completion and return everything collected.
    ///
    /// Prints the banner first. Rejected input is retried in place; config
    /// errors, callback failures and terminal errors end the run.
    pub async fn prompt(&mut self, prompts: &[Prompt]) -> Result<Answers> {
        self.print_banner()?;

        let mut results = Accumulator::default();
        self.dispatch(prompts, &mut results).await?;

        Ok(results.into_answers())
    }

    async fn dispatch(&mut self, prompts: &[Prompt], results: &mut Accumulator) -> Result<()> {
        // Entering a branch pushes its prompts; an exhausted list pops back
        // to the descriptor after the divergence in its parent.
        let mut pending = vec![prompts.iter()];

        while let Some(level) = pending.last_mut() {
            let Some(prompt) = level.next() else {
                pending.pop();
                continue;
            };

            let answers = results.snapshot();
            match prompt {
                Prompt::Diverge(divergence) => {
                    if let Some(branch) = self.route(divergence, &answers).await? {
                        pending.push(branch.iter());
                    }
                }
                Prompt::Notice(notice) => {
                    let assignments = self.show_notice(notice, &answers).await?;
                    results.apply(assignments);
                }
                Prompt::Text(input) => {
                    let value = self.ask_text(input, &answers).await?;
                    results.set(&input.name, Value::Text(value));
                }
                Prompt::Number(input) => {
                    if let Some(value) = self.ask_number(input, &answers).await? {
                        results.set(&input.name, Value::Number(value));
                    }
                }
                Prompt::YesNo(input) => {
                    let value = self.ask_yes_no(input, &answers).await?;
                    results.set(&input.name, Value::Bool(value));
                }
                Prompt::Confirm(input) => {
                    let value = self.ask_confirm(input, &answers).await?;
                    results.set(&input.name, Value::Bool(value));
                }
            }
        }

        Ok(())
    }

    /// Print a line of `kind` regardless of verbosity
    fn emit(&mut self, kind: &TextKind, message: &str) -> Result<()> {
        let line = format!("{} {}", self.name(), style::style(kind, message));
        self.terminal.write_line(&line)?;
        Ok(())
    }

    /// Print a line of `kind` if the configured verbosity allows it
    fn log(&mut self, kind: TextKind, message: &str) -> Result<()> {
        if should_display(&kind, self.verbosity()) {
            self.emit(&kind, message)?;
        }
        Ok(())
    }

    pub fn print_banner(&mut self) -> Result<()> {
        let banner = self.config.banner.clone();
        self.terminal.intro(&banner)?;
        Ok(())
    }

    /// Bold accent-colored line, always shown
    pub fn describe(&mut self, message: &str) -> Result<()> {
        let line = format!(
            "{} {}",
            self.name(),
            style::accent(message, self.config.color)
        );
        self.terminal.write_line(&line)?;
        Ok(())
    }

    /// Unstyled line, always shown
    pub fn write(&mut self, message: &str) -> Result<()> {
        self.emit(&TextKind::Label, message)
    }

    /// Completion line, always shown
    pub fn complete(&mut self, message: &str) -> Result<()> {
        self.emit(&TextKind::Complete, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Error, message)
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Warning, message)
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Info, message)
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Success, message)
    }

    pub fn debug(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Debug, message)
    }

    pub fn trace(&mut self, message: &str) -> Result<()> {
        self.log(TextKind::Trace, message)
    }
}
