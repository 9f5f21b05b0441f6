//! Prompt lists as plain YAML data
//!
//! ```yaml
//! prompts:
//!   - type: yesno
//!     name: okay
//!     message: Are you okay?
//!     required: true
//!   - type: warning
//!     message: This is a warning
//!     acknowledge_field: ack_warning
//!   - type: divergence
//!     select: ack_warning
//!     branches:
//!       - key: "true"
//!         prompts:
//!           - type: info
//!             message: Warning was acknowledged
//! ```

use crate::error::{PromptError, Result};
use crate::prompt::{self, Answers, Assignments, Choices, Pattern, Prompt, Value};
use crate::verbosity::TextKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Root of a prompt manifest file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptManifest {
    #[serde(default)]
    pub prompts: Vec<PromptSpec>,
}

/// One manifest entry, tagged by `type`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptSpec {
    /// `text`, `number`, `yesno`, `confirm`, `divergence` or a text kind.
    /// `text-async`, `numeric` and `bool` are accepted as aliases.
    #[serde(rename = "type")]
    pub kind: String,

    /// Result name, required for input entries
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub help: Option<String>,

    #[serde(default)]
    pub default: Option<serde_yaml::Value>,

    #[serde(default)]
    pub required: bool,

    /// Ordered `key: description` pairs
    #[serde(default)]
    pub choices: Option<serde_yaml::Mapping>,

    /// Regex the answer must match
    #[serde(default)]
    pub pattern: Option<String>,

    /// Human-readable form of `pattern`, shown on rejection
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default)]
    pub integer: bool,

    #[serde(default)]
    pub negate: bool,

    #[serde(default)]
    pub acknowledge: bool,

    /// Store the acknowledgement outcome under this name (implies `acknowledge`)
    #[serde(default)]
    pub acknowledge_field: Option<String>,

    /// Show the notice only when this field is truthy
    #[serde(default)]
    pub when: Option<String>,

    /// Field whose current value picks the branch
    #[serde(default)]
    pub select: Option<String>,

    #[serde(default)]
    pub branches: Vec<BranchSpec>,
}

/// A divergence branch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchSpec {
    pub key: String,

    #[serde(default)]
    pub prompts: Vec<PromptSpec>,
}

impl PromptManifest {
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&source)
    }

    /// Build runnable descriptors, failing on the first malformed entry
    pub fn into_prompts(&self) -> Result<Vec<Prompt>> {
        build_all(&self.prompts)
    }
}

fn build_all(specs: &[PromptSpec]) -> Result<Vec<Prompt>> {
    specs.iter().map(PromptSpec::build).collect()
}

impl PromptSpec {
    fn input_name(&self) -> Result<String> {
        self.name
            .clone()
            .ok_or_else(|| PromptError::config(format!("'{}' entry has no name", self.kind)))
    }

    fn build(&self) -> Result<Prompt> {
        match self.kind.as_str() {
            "text" | "text-async" => self.build_text(),
            "number" | "numeric" => self.build_number(),
            "yesno" | "yes_no" | "bool" => self.build_yes_no(),
            "confirm" => Ok(prompt::confirm(self.input_name()?, self.message.as_str()).into()),
            "divergence" => self.build_divergence(),
            kind => {
                if let Some(field) = self.input_field() {
                    return Err(PromptError::config(format!(
                        "unknown input type '{}' (entry has '{}')",
                        kind, field
                    )));
                }
                Ok(self.build_notice(TextKind::parse(kind)).into())
            }
        }
    }

    /// First field that only makes sense on an input entry
    fn input_field(&self) -> Option<&'static str> {
        [
            ("name", self.name.is_some()),
            ("default", self.default.is_some()),
            ("choices", self.choices.is_some()),
            ("pattern", self.pattern.is_some()),
            ("min", self.min.is_some()),
            ("max", self.max.is_some()),
        ]
        .into_iter()
        .find_map(|(field, present)| present.then_some(field))
    }

    fn build_text(&self) -> Result<Prompt> {
        let mut input =
            prompt::text(self.input_name()?, self.message.as_str()).required(self.required);
        if let Some(help) = &self.help {
            input = input.help(help.as_str());
        }
        if let Some(default) = &self.default {
            input = input.default_value(scalar_text(default)?);
        }
        if let Some(choices) = &self.choices {
            input = input.choices(choices_from(choices)?);
        }
        if let Some(pattern) = &self.pattern {
            let format = self.format.clone().unwrap_or_else(|| pattern.clone());
            input = input.pattern(Pattern::new(pattern, format)?);
        }
        Ok(input.into())
    }

    fn build_number(&self) -> Result<Prompt> {
        let name = self.input_name()?;
        let mut input = prompt::number(name.as_str(), self.message.as_str())
            .required(self.required)
            .integer(self.integer);
        if let Some(help) = &self.help {
            input = input.help(help.as_str());
        }
        if let Some(default) = &self.default {
            let value = default.as_f64().ok_or_else(|| {
                PromptError::config(format!("default for '{}' is not a number", name))
            })?;
            input = input.default_value(value);
        }
        if let Some(choices) = &self.choices {
            input = input.choices(choices_from(choices)?);
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => input = input.range(min, max),
            (None, None) => {}
            _ => {
                return Err(PromptError::config(format!(
                    "'{}' needs both min and max",
                    name
                )))
            }
        }
        Ok(input.into())
    }

    fn build_yes_no(&self) -> Result<Prompt> {
        let name = self.input_name()?;
        let mut input = prompt::yes_no(name.as_str(), self.message.as_str())
            .required(self.required)
            .negate(self.negate);
        if let Some(help) = &self.help {
            input = input.help(help.as_str());
        }
        if let Some(default) = &self.default {
            let value = default.as_bool().ok_or_else(|| {
                PromptError::config(format!("default for '{}' is not true or false", name))
            })?;
            input = input.default_value(value);
        }
        Ok(input.into())
    }

    fn build_notice(&self, kind: TextKind) -> prompt::Notice {
        let mut notice = prompt::notice(kind, self.message.as_str())
            .required(self.required)
            .acknowledge(self.acknowledge);

        if let Some(field) = self.when.clone() {
            notice = notice.when(move |answers| Ok(is_truthy(answers, &field)));
        }
        if let Some(field) = self.acknowledge_field.clone() {
            notice = notice
                .on_acknowledgement(move |ack| Ok(Assignments::one(field.as_str(), ack.accepted)));
        }
        notice
    }

    fn build_divergence(&self) -> Result<Prompt> {
        let field = self
            .select
            .clone()
            .ok_or_else(|| PromptError::config("divergence entry has no 'select' field"))?;

        let mut seen = HashSet::new();
        let mut divergence = prompt::diverge(move |answers| Ok(branch_key(answers, &field)));
        for branch in &self.branches {
            if !seen.insert(branch.key.as_str()) {
                return Err(PromptError::config(format!(
                    "duplicate branch key '{}'",
                    branch.key
                )));
            }
            divergence = divergence.branch(branch.key.as_str(), build_all(&branch.prompts)?);
        }
        Ok(divergence.into())
    }
}

fn is_truthy(answers: &Answers, field: &str) -> bool {
    answers.get(field).is_some_and(Value::is_truthy)
}

/// Current value of `field` as text, `""` when unset
fn branch_key(answers: &Answers, field: &str) -> String {
    answers
        .get(field)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn scalar_text(value: &serde_yaml::Value) -> Result<String> {
    match value {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(PromptError::config(format!(
            "expected a scalar, found {:?}",
            other
        ))),
    }
}

fn choices_from(mapping: &serde_yaml::Mapping) -> Result<Choices> {
    let entries = mapping
        .iter()
        .map(|(key, description)| -> Result<(String, String)> {
            Ok((scalar_text(key)?, scalar_text(description)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Choices::new(entries))
}
