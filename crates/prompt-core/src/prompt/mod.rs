//! Declarative prompt descriptors
//!
//! A prompt run is driven by a list of [`Prompt`] values. Build them with the
//! constructor functions in this module and chain the builder methods:
//!
//! ```ignore
//! use prompt_core::prompt::{self, Prompt};
//!
//! let prompts: Vec<Prompt> = vec![
//!     prompt::yes_no("okay", "Are you okay?").into(),
//!     prompt::warning("This is a warning").acknowledge(true).into(),
//!     prompt::number("port", "Which port?").integer(true).range(1.0, 65535.0).into(),
//! ];
//! ```

pub mod answers;
pub mod hook;

pub use answers::{Acknowledged, Answers, Assignments, Value};
pub use hook::{Hook, Message};

use crate::error::{PromptError, Result};
use crate::loc::StringTable;
use crate::verbosity::TextKind;
use regex::Regex;
use std::future::Future;

/// One entry of a prompt list
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Informational text, optionally acknowledged
    Notice(Notice),
    Text(TextInput),
    Number(NumberInput),
    YesNo(YesNoInput),
    Confirm(ConfirmInput),
    /// Branch point choosing one of several sub-lists
    Diverge(Divergence),
}

impl Prompt {
    /// Result name for input prompts
    pub fn name(&self) -> Option<&str> {
        match self {
            Prompt::Text(p) => Some(&p.name),
            Prompt::Number(p) => Some(&p.name),
            Prompt::YesNo(p) => Some(&p.name),
            Prompt::Confirm(p) => Some(&p.name),
            Prompt::Notice(_) | Prompt::Diverge(_) => None,
        }
    }
}

/// Ordered single-character choices with their descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices(Vec<(String, String)>);

impl Choices {
    pub fn new<I, K, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, d)| (k.into(), d.into()))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }

    /// Exact, case-sensitive key match
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Every key must be one lowercase character
    pub fn validate(&self, strings: &StringTable) -> Result<()> {
        for (key, _) in &self.0 {
            if key.chars().count() != 1 {
                return Err(PromptError::config(format!(
                    "{} ('{}')",
                    strings.text_choice_not_char, key
                )));
            }
            if key.to_lowercase() != *key {
                return Err(PromptError::config(format!(
                    "{} ('{}')",
                    strings.text_choice_not_lower, key
                )));
            }
        }
        Ok(())
    }

    /// `[y/N/?]`, with the default key shown in uppercase
    pub fn summary(&self, default: Option<&str>) -> String {
        let keys: Vec<String> = self
            .0
            .iter()
            .map(|(k, _)| {
                if Some(k.as_str()) == default {
                    k.to_uppercase()
                } else {
                    k.clone()
                }
            })
            .collect();
        format!("[{}/?]", keys.join("/"))
    }

    /// `key - description` lines, continuation lines indented by `indent`
    pub fn listing(&self, indent: usize) -> String {
        self.0
            .iter()
            .map(|(k, d)| format!("{} - {}", k, d))
            .collect::<Vec<_>>()
            .join(&format!("\n{}", " ".repeat(indent)))
    }
}

/// Regex validation with a human-readable description of the format
#[derive(Debug, Clone)]
pub struct Pattern {
    pub regex: Regex,
    pub format: String,
}

impl Pattern {
    pub fn new(pattern: &str, format: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PromptError::config(format!("Invalid pattern '{}': {}", pattern, e)))?;
        Ok(Self::from_regex(regex, format))
    }

    pub fn from_regex(regex: Regex, format: impl Into<String>) -> Self {
        Self {
            regex,
            format: format.into(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Informational text
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: TextKind,
    pub message: Message,
    pub when: Option<Hook<Answers, bool>>,
    pub required: bool,
    pub acknowledge: bool,
    pub on_acknowledgement: Option<Hook<Acknowledged, Assignments>>,
}

impl Notice {
    /// Always display, regardless of verbosity or `when`
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Ask for an explicit acknowledgement after displaying
    pub fn acknowledge(mut self, acknowledge: bool) -> Self {
        self.acknowledge = acknowledge;
        self
    }

    pub fn when<F>(mut self, f: F) -> Self
    where
        F: Fn(&Answers) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.when = Some(Hook::new(f));
        self
    }

    pub fn when_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Answers) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<bool>> + Send + 'static,
    {
        self.when = Some(Hook::from_async(f));
        self
    }

    /// Called with the acknowledgement outcome; returned assignments are
    /// recorded in the results
    pub fn on_acknowledgement<F>(mut self, f: F) -> Self
    where
        F: Fn(&Acknowledged) -> anyhow::Result<Assignments> + Send + Sync + 'static,
    {
        self.acknowledge = true;
        self.on_acknowledgement = Some(Hook::new(f));
        self
    }

    pub fn on_acknowledgement_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Acknowledged) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Assignments>> + Send + 'static,
    {
        self.acknowledge = true;
        self.on_acknowledgement = Some(Hook::from_async(f));
        self
    }
}

/// Free text input
#[derive(Debug, Clone)]
pub struct TextInput {
    pub name: String,
    pub message: Message,
    pub help: Option<Message>,
    pub default: Option<String>,
    pub required: bool,
    pub choices: Option<Choices>,
    pub validator: Option<Hook<String, Option<String>>>,
    pub pattern: Option<Pattern>,
    pub transform: Option<Hook<String, String>>,
}

impl TextInput {
    /// Shown when the user answers `?`
    pub fn help(mut self, help: impl Into<Message>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choices(mut self, choices: Choices) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Return `Ok(Some(message))` to reject the value with that message
    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&String) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        self.validator = Some(Hook::new(f));
        self
    }

    pub fn validator_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<String>>> + Send + 'static,
    {
        self.validator = Some(Hook::from_async(f));
        self
    }

    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&String) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.transform = Some(Hook::new(f));
        self
    }

    pub fn transform_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        self.transform = Some(Hook::from_async(f));
        self
    }
}

/// Numeric input
#[derive(Debug, Clone)]
pub struct NumberInput {
    pub name: String,
    pub message: Message,
    pub help: Option<Message>,
    pub default: Option<f64>,
    pub required: bool,
    pub choices: Option<Choices>,
    pub integer: bool,
    /// Inclusive `(min, max)`
    pub range: Option<(f64, f64)>,
    pub validator: Option<Hook<f64, Option<String>>>,
    pub transform: Option<Hook<f64, f64>>,
}

impl NumberInput {
    pub fn help(mut self, help: impl Into<Message>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choices(mut self, choices: Choices) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn integer(mut self, integer: bool) -> Self {
        self.integer = integer;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&f64) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        self.validator = Some(Hook::new(f));
        self
    }

    pub fn validator_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<String>>> + Send + 'static,
    {
        self.validator = Some(Hook::from_async(f));
        self
    }

    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&f64) -> anyhow::Result<f64> + Send + Sync + 'static,
    {
        self.transform = Some(Hook::new(f));
        self
    }

    pub fn transform_async<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<f64>> + Send + 'static,
    {
        self.transform = Some(Hook::from_async(f));
        self
    }
}

/// Yes/no input answered with `y` or `n`
#[derive(Debug, Clone)]
pub struct YesNoInput {
    pub name: String,
    pub message: Message,
    pub help: Option<Message>,
    pub default: Option<bool>,
    pub required: bool,
    /// Record the opposite of the answer
    pub negate: bool,
}

impl YesNoInput {
    pub fn help(mut self, help: impl Into<Message>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }
}

/// Single binary confirmation, no default and no retry
#[derive(Debug, Clone)]
pub struct ConfirmInput {
    pub name: String,
    pub message: Message,
}

/// Branch point: `select` picks a key, the matching branch runs next
#[derive(Debug, Clone)]
pub struct Divergence {
    pub select: Hook<Answers, String>,
    pub branches: Vec<(String, Vec<Prompt>)>,
}

impl Divergence {
    pub fn branch(mut self, key: impl Into<String>, prompts: Vec<Prompt>) -> Self {
        self.branches.push((key.into(), prompts));
        self
    }

    /// Prompts for `key`, first match wins
    pub fn get(&self, key: &str) -> Option<&[Prompt]> {
        self.branches
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, prompts)| prompts.as_slice())
    }
}

pub fn notice(kind: TextKind, message: impl Into<Message>) -> Notice {
    Notice {
        kind,
        message: message.into(),
        when: None,
        required: false,
        acknowledge: false,
        on_acknowledgement: None,
    }
}

pub fn label(message: impl Into<Message>) -> Notice {
    notice(TextKind::Label, message)
}

pub fn description(message: impl Into<Message>) -> Notice {
    notice(TextKind::Description, message)
}

pub fn complete(message: impl Into<Message>) -> Notice {
    notice(TextKind::Complete, message)
}

pub fn error(message: impl Into<Message>) -> Notice {
    notice(TextKind::Error, message)
}

pub fn warning(message: impl Into<Message>) -> Notice {
    notice(TextKind::Warning, message)
}

pub fn info(message: impl Into<Message>) -> Notice {
    notice(TextKind::Info, message)
}

pub fn success(message: impl Into<Message>) -> Notice {
    notice(TextKind::Success, message)
}

pub fn debug(message: impl Into<Message>) -> Notice {
    notice(TextKind::Debug, message)
}

pub fn trace(message: impl Into<Message>) -> Notice {
    notice(TextKind::Trace, message)
}

pub fn text(name: impl Into<String>, message: impl Into<Message>) -> TextInput {
    TextInput {
        name: name.into(),
        message: message.into(),
        help: None,
        default: None,
        required: false,
        choices: None,
        validator: None,
        pattern: None,
        transform: None,
    }
}

pub fn number(name: impl Into<String>, message: impl Into<Message>) -> NumberInput {
    NumberInput {
        name: name.into(),
        message: message.into(),
        help: None,
        default: None,
        required: false,
        choices: None,
        integer: false,
        range: None,
        validator: None,
        transform: None,
    }
}

pub fn yes_no(name: impl Into<String>, message: impl Into<Message>) -> YesNoInput {
    YesNoInput {
        name: name.into(),
        message: message.into(),
        help: None,
        default: None,
        required: false,
        negate: false,
    }
}

pub fn confirm(name: impl Into<String>, message: impl Into<Message>) -> ConfirmInput {
    ConfirmInput {
        name: name.into(),
        message: message.into(),
    }
}

pub fn diverge<F>(select: F) -> Divergence
where
    F: Fn(&Answers) -> anyhow::Result<String> + Send + Sync + 'static,
{
    Divergence {
        select: Hook::new(select),
        branches: Vec::new(),
    }
}

pub fn diverge_async<F, Fut>(select: F) -> Divergence
where
    F: Fn(Answers) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    Divergence {
        select: Hook::from_async(select),
        branches: Vec::new(),
    }
}

impl From<Notice> for Prompt {
    fn from(p: Notice) -> Self {
        Prompt::Notice(p)
    }
}

impl From<TextInput> for Prompt {
    fn from(p: TextInput) -> Self {
        Prompt::Text(p)
    }
}

impl From<NumberInput> for Prompt {
    fn from(p: NumberInput) -> Self {
        Prompt::Number(p)
    }
}

impl From<YesNoInput> for Prompt {
    fn from(p: YesNoInput) -> Self {
        Prompt::YesNo(p)
    }
}

impl From<ConfirmInput> for Prompt {
    fn from(p: ConfirmInput) -> Self {
        Prompt::Confirm(p)
    }
}

impl From<Divergence> for Prompt {
    fn from(p: Divergence) -> Self {
        Prompt::Diverge(p)
    }
}
