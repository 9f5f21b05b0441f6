//! Command-line arguments consumed by the engine

use crate::verbosity::Verbosity;
use clap::Args;
use std::collections::BTreeMap;

/// Flags every prompt binary accepts; flatten into the binary's own parser
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (all, trace, debug, info, warning, error, none or 0-6)
    #[arg(long = "verbose", global = true)]
    pub verbose: Option<Verbosity>,

    /// Language for built-in messages (e.g. en-US, pirate)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Pre-fill a prompt's default value (repeatable: --set name=value)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Remaining arguments, passed through to the program
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub positionals: Vec<String>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parsed arguments as the engine sees them
#[derive(Debug, Clone)]
pub struct ParsedArguments {
    pub verbosity: Verbosity,
    pub lang: String,
    /// Default values for prompts, keyed by prompt name
    pub values: BTreeMap<String, String>,
    pub positionals: Vec<String>,
}

impl Default for ParsedArguments {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            lang: "en".to_string(),
            values: BTreeMap::new(),
            positionals: Vec::new(),
        }
    }
}

impl ParsedArguments {
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Default supplied on the command line for the prompt `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl From<GlobalArgs> for ParsedArguments {
    fn from(args: GlobalArgs) -> Self {
        let defaults = ParsedArguments::default();
        ParsedArguments {
            verbosity: args.verbose.unwrap_or(defaults.verbosity),
            lang: args.lang.unwrap_or(defaults.lang),
            values: args.set.into_iter().collect(),
            positionals: args.positionals,
        }
    }
}
