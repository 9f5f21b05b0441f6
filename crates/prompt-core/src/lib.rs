//! Prompt Core - Declarative prompt engine for interactive CLIs
//!
//! A program describes what to ask as a list of [`Prompt`] descriptors and
//! hands it to [`Cli::prompt`], which asks each one in order and returns the
//! collected [`Answers`]. Binaries share the engine and differ only in their
//! [`CliIdentity`].
//!
//! # Architecture
//!
//! - **Descriptors** - [`prompt`] builders and the YAML [`manifest`] format
//! - **Engine** - [`Cli`] dispatches descriptors, validates input, routes divergences
//! - **Presentation** - [`Verbosity`] gating, [`style`], localized [`loc`] strings
//! - **Terminal** - the [`Terminal`] trait with console and scripted implementations
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables [`ConsoleTerminal`], backed by `console` and `cliclack`
//!
//! # Example Usage
//!
//! ```ignore
//! use prompt_core::{prompt, Cli, ConsoleTerminal, ParsedArguments, Prompt};
//!
//! let prompts: Vec<Prompt> = vec![
//!     prompt::text("host", "What is the device name?").required(true).into(),
//!     prompt::number("port", "Which port?").integer(true).range(1.0, 65535.0).into(),
//! ];
//!
//! let mut cli = Cli::localized(ParsedArguments::default(), ConsoleTerminal::new());
//! let answers = cli.prompt(&prompts).await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod loc;
pub mod manifest;
pub mod prompt;
pub mod style;
pub mod terminal;
pub mod verbosity;

// Re-export main types for convenience
pub use config::{CliConfig, CliIdentity, GlobalArgs, ParsedArguments};
pub use engine::Cli;
pub use error::{PromptError, Result};
pub use loc::{strings_for, StringTable};
pub use manifest::PromptManifest;
pub use prompt::{Answers, Assignments, Prompt, Value};
pub use terminal::{ScriptedTerminal, Terminal};
pub use verbosity::{TextKind, Verbosity};

#[cfg(feature = "tui")]
pub use terminal::ConsoleTerminal;
