//! Input prompts: read, validate, transform, retry

use super::Cli;
use crate::error::{PromptError, Result};
use crate::prompt::{
    Answers, Choices, ConfirmInput, Message, NumberInput, TextInput, YesNoInput,
};
use crate::style;
use crate::terminal::Terminal;
use crate::verbosity::TextKind;

/// Outcome of checking one line of input
enum Check<V> {
    Accept(V),
    /// `?` was answered; ask again without counting an attempt
    Help,
    Reject,
}

impl<T: Terminal> Cli<T> {
    /// `[name] message : [a/B/?]` in bold
    fn prompt_line(&self, message: &str, choices: Option<&Choices>, default: &str) -> String {
        let summary = choices
            .map(|c| c.summary(Some(default).filter(|d| !d.is_empty())))
            .unwrap_or_default();
        let text = format!(
            "{} {} {} {}",
            self.name(),
            message,
            self.config.separator,
            summary
        );
        style::bold(text.trim_end())
    }

    /// Command-line default for `name`, else the descriptor's own
    fn default_text(&self, name: &str, fallback: Option<String>) -> String {
        self.args
            .value(name)
            .map(str::to_string)
            .or(fallback)
            .unwrap_or_default()
    }

    async fn show_help(
        &mut self,
        help: Option<&Message>,
        choices: Option<&Choices>,
        answers: &Answers,
    ) -> Result<()> {
        let help = match help {
            Some(message) => Some(message.resolve(answers).await?),
            None => None,
        };

        if let Some(text) = &help {
            self.describe(text)?;
        }
        if let Some(choices) = choices {
            let indent = self.config.display_name.chars().count() + 3;
            self.describe(&choices.listing(indent))?;
        }
        if help.is_none() && choices.is_none() {
            self.log(TextKind::Warning, self.strings.no_help)?;
        }
        Ok(())
    }

    /// Fail the run once `rejected` reaches the configured cap
    fn count_rejection(&self, name: &str, rejected: &mut u32) -> Result<()> {
        *rejected += 1;
        match self.config.max_attempts {
            Some(max) if *rejected >= max => Err(PromptError::AttemptsExhausted {
                name: name.to_string(),
                attempts: *rejected,
            }),
            _ => Ok(()),
        }
    }

    pub(super) async fn ask_text(&mut self, input: &TextInput, answers: &Answers) -> Result<String> {
        if let Some(choices) = &input.choices {
            choices.validate(self.strings)?;
        }

        let default = self.default_text(&input.name, input.default.clone());
        self.read_text(input, &default, answers).await
    }

    async fn read_text(
        &mut self,
        input: &TextInput,
        default: &str,
        answers: &Answers,
    ) -> Result<String> {
        let message = input.message.resolve(answers).await?;
        let line = self.prompt_line(&message, input.choices.as_ref(), default);
        let mut rejected = 0;

        loop {
            let raw = self.terminal.read_line(&line, default).await?;
            match self.check_text(input, raw.trim(), answers).await? {
                Check::Accept(value) => return Ok(value),
                Check::Help => {}
                Check::Reject => self.count_rejection(&input.name, &mut rejected)?,
            }
        }
    }

    async fn check_text(
        &mut self,
        input: &TextInput,
        response: &str,
        answers: &Answers,
    ) -> Result<Check<String>> {
        if response == "?" {
            self.show_help(input.help.as_ref(), input.choices.as_ref(), answers)
                .await?;
            return Ok(Check::Help);
        }

        if input.required && response.is_empty() {
            self.describe(self.strings.invalid_response)?;
            return Ok(Check::Reject);
        }

        if let Some(choices) = &input.choices {
            if !choices.contains(response) {
                self.describe(self.strings.invalid_response)?;
                return Ok(Check::Reject);
            }
        }

        if let Some(validator) = &input.validator {
            if let Some(problem) = validator.call(response.to_string()).await? {
                if !problem.is_empty() {
                    self.describe(&problem)?;
                    return Ok(Check::Reject);
                }
            }
        }

        if let Some(pattern) = &input.pattern {
            if !pattern.is_match(response) {
                let notice = format!("{} {}", self.strings.bad_format, pattern.format);
                self.describe(&notice)?;
                return Ok(Check::Reject);
            }
        }

        let value = match &input.transform {
            Some(transform) => transform.call(response.to_string()).await?,
            None => response.to_string(),
        };
        Ok(Check::Accept(value))
    }

    /// `None` when an optional prompt is left empty
    pub(super) async fn ask_number(
        &mut self,
        input: &NumberInput,
        answers: &Answers,
    ) -> Result<Option<f64>> {
        if let Some(choices) = &input.choices {
            choices.validate(self.strings)?;
        }

        let message = input.message.resolve(answers).await?;
        let default = self.default_text(&input.name, input.default.map(|d| d.to_string()));
        let line = self.prompt_line(&message, input.choices.as_ref(), &default);
        let mut rejected = 0;

        loop {
            let raw = self.terminal.read_line(&line, &default).await?;
            match self.check_number(input, raw.trim(), answers).await? {
                Check::Accept(value) => return Ok(value),
                Check::Help => {}
                Check::Reject => self.count_rejection(&input.name, &mut rejected)?,
            }
        }
    }

    async fn check_number(
        &mut self,
        input: &NumberInput,
        response: &str,
        answers: &Answers,
    ) -> Result<Check<Option<f64>>> {
        if response == "?" {
            self.show_help(input.help.as_ref(), input.choices.as_ref(), answers)
                .await?;
            return Ok(Check::Help);
        }

        if response.is_empty() {
            if input.required {
                self.describe(self.strings.invalid_response)?;
                return Ok(Check::Reject);
            }
            return Ok(Check::Accept(None));
        }

        if let Some(choices) = &input.choices {
            if !choices.contains(response) {
                self.describe(self.strings.invalid_response)?;
                return Ok(Check::Reject);
            }
        }

        let number = match response.parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                self.describe(self.strings.invalid_response)?;
                return Ok(Check::Reject);
            }
        };

        if input.integer && number.fract() != 0.0 {
            self.describe(self.strings.not_an_integer)?;
            return Ok(Check::Reject);
        }

        if let Some((min, max)) = input.range {
            if number < min || number > max {
                let notice = format!("{} {}, {}.", self.strings.range_error, min, max);
                self.describe(&notice)?;
                return Ok(Check::Reject);
            }
        }

        if let Some(validator) = &input.validator {
            if let Some(problem) = validator.call(number).await? {
                if !problem.is_empty() {
                    self.describe(&problem)?;
                    return Ok(Check::Reject);
                }
            }
        }

        let value = match &input.transform {
            Some(transform) => transform.call(number).await?,
            None => number,
        };
        Ok(Check::Accept(Some(value)))
    }

    /// Asked as a text prompt restricted to `y`/`n`
    pub(super) async fn ask_yes_no(&mut self, input: &YesNoInput, answers: &Answers) -> Result<bool> {
        let default = self
            .args
            .value(&input.name)
            .and_then(parse_flag)
            .or(input.default)
            .unwrap_or(false);

        let default_key = if default { "y" } else { "n" };
        let as_text = TextInput {
            name: input.name.clone(),
            message: input.message.clone(),
            help: input.help.clone(),
            default: Some(default_key.to_string()),
            required: input.required,
            choices: Some(Choices::new([
                ("y", self.strings.true_string),
                ("n", self.strings.false_string),
            ])),
            validator: None,
            pattern: None,
            transform: None,
        };

        let response = self.read_text(&as_text, default_key, answers).await?;
        let yes = response == "y";
        Ok(if input.negate { !yes } else { yes })
    }

    pub(super) async fn ask_confirm(&mut self, input: &ConfirmInput, answers: &Answers) -> Result<bool> {
        let message = input.message.resolve(answers).await?;
        let line = self.prompt_line(&message, None, "");
        Ok(self.terminal.read_confirm(&line).await?)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliConfig, ParsedArguments};
    use crate::loc::strings_for;
    use crate::prompt::{self, Prompt};
    use crate::terminal::ScriptedTerminal;
    use crate::verbosity::Verbosity;

    fn run_cli(term: ScriptedTerminal) -> Cli<ScriptedTerminal> {
        Cli::localized(ParsedArguments::default(), term)
    }

    #[tokio::test]
    async fn test_required_text_retries_on_empty() {
        let term = ScriptedTerminal::new().with_lines(["", "   ", "device-01"]);
        let prompts: Vec<Prompt> = vec![prompt::text("host", "Host?").required(true).into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();

        assert_eq!(answers.get_str("host"), Some("device-01"));
        assert_eq!(cli.terminal().count("A valid response is required."), 2);
        assert_eq!(cli.terminal().prompts().len(), 3);
    }

    #[tokio::test]
    async fn test_optional_text_accepts_empty() {
        let term = ScriptedTerminal::new().with_lines([""]);
        let prompts: Vec<Prompt> = vec![prompt::text("note", "Note?").into()];

        let answers = run_cli(term).prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("note"), Some(""));
    }

    #[tokio::test]
    async fn test_choices_are_case_sensitive_and_listed_on_help() {
        let term = ScriptedTerminal::new().with_lines(["Y", "?", "y"]);
        let prompts: Vec<Prompt> = vec![prompt::text("answer", "Continue?")
            .default_value("y")
            .choices(prompt::Choices::new([("y", "Yes"), ("n", "No")]))
            .into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();

        assert_eq!(answers.get_str("answer"), Some("y"));
        let term = cli.terminal();
        assert_eq!(term.prompts().len(), 3);
        assert!(term.prompts()[0].contains("[Y/n/?]"));
        assert!(term.printed("y - Yes"));
        assert!(term.printed("n - No"));
        assert_eq!(term.count("A valid response is required."), 1);
    }

    #[tokio::test]
    async fn test_bad_choice_keys_are_config_errors() {
        let term = ScriptedTerminal::new().with_lines(["y"]);
        let prompts: Vec<Prompt> = vec![prompt::text("answer", "Continue?")
            .choices(prompt::Choices::new([("Y", "Yes")]))
            .into()];

        let mut cli = run_cli(term);
        let err = cli.prompt(&prompts).await.unwrap_err();
        assert!(matches!(err, PromptError::Config(_)));
        assert_eq!(cli.terminal().prompts().len(), 0);
    }

    #[tokio::test]
    async fn test_help_text_and_missing_help() {
        let term = ScriptedTerminal::new().with_lines(["?", "x", "?", "y"]);
        let prompts: Vec<Prompt> = vec![
            prompt::text("a", "A?").help("Any single word").into(),
            prompt::text("b", "B?").into(),
        ];

        let mut cli = run_cli(term);
        cli.prompt(&prompts).await.unwrap();
        assert!(cli.terminal().printed("Any single word"));
        assert!(cli.terminal().printed("No help text available."));
    }

    #[tokio::test]
    async fn test_numeric_bounds() {
        let term = ScriptedTerminal::new().with_lines(["abc", "5.5", "15", "5"]);
        let prompts: Vec<Prompt> = vec![prompt::number("count", "How many?")
            .required(true)
            .integer(true)
            .range(1.0, 10.0)
            .into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();

        assert_eq!(answers.get_number("count"), Some(5.0));
        let term = cli.terminal();
        assert!(term.printed("A valid response is required."));
        assert!(term.printed("Response must be an integer."));
        assert!(term.printed("Response must be between the following, inclusively: 1, 10."));
        assert_eq!(term.prompts().len(), 4);
    }

    #[tokio::test]
    async fn test_inverted_range_rejects_everything() {
        let term = ScriptedTerminal::new().with_lines(["5", "1", "10"]);
        let prompts: Vec<Prompt> = vec![prompt::number("n", "N?").range(10.0, 1.0).into()];

        let err = run_cli(term).prompt(&prompts).await.unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[tokio::test]
    async fn test_optional_number_left_empty_is_skipped() {
        let term = ScriptedTerminal::new().with_lines([""]);
        let prompts: Vec<Prompt> = vec![prompt::number("retries", "Retries?").into()];

        let answers = run_cli(term).prompt(&prompts).await.unwrap();
        assert!(!answers.contains("retries"));
    }

    #[tokio::test]
    async fn test_validator_message_triggers_retry() {
        let term = ScriptedTerminal::new().with_lines(["root", "admin"]);
        let prompts: Vec<Prompt> = vec![prompt::text("user", "User?")
            .validator(|value| {
                Ok((value == "root").then(|| "root is not allowed".to_string()))
            })
            .into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("user"), Some("admin"));
        assert!(cli.terminal().printed("root is not allowed"));
    }

    #[tokio::test]
    async fn test_async_validator_and_transform() {
        let term = ScriptedTerminal::new().with_lines(["7", "8"]);
        let prompts: Vec<Prompt> = vec![prompt::number("even", "Even number?")
            .validator_async(|n| async move {
                Ok((n % 2.0 != 0.0).then(|| format!("{} is odd", n)))
            })
            .transform_async(|n| async move { Ok(n * 10.0) })
            .into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_number("even"), Some(80.0));
        assert!(cli.terminal().printed("7 is odd"));
    }

    #[tokio::test]
    async fn test_pattern_then_transform() {
        let term = ScriptedTerminal::new().with_lines(["short", "abcdefghijklmno"]);
        let prompts: Vec<Prompt> = vec![prompt::text("host", "What is the device name?")
            .pattern(
                prompt::Pattern::new(
                    "^[a-zA-Z0-9]{15}$",
                    "Hostname exactly 15 alpha-numeric characters",
                )
                .unwrap(),
            )
            .transform(|value| Ok(value.to_uppercase()))
            .into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("host"), Some("ABCDEFGHIJKLMNO"));
        assert!(cli.terminal().printed(
            "Response does not match the format: Hostname exactly 15 alpha-numeric characters"
        ));
    }

    #[tokio::test]
    async fn test_failing_transform_is_fatal() {
        let term = ScriptedTerminal::new().with_lines(["x", "y"]);
        let prompts: Vec<Prompt> = vec![prompt::text("t", "T?")
            .transform(|_| Err(anyhow::anyhow!("boom")))
            .into()];

        let mut cli = run_cli(term);
        let err = cli.prompt(&prompts).await.unwrap_err();
        assert!(matches!(err, PromptError::Callback(_)));
        assert_eq!(cli.terminal().remaining_lines(), 1);
    }

    #[tokio::test]
    async fn test_yes_no_uses_localized_choices_and_negate() {
        let term = ScriptedTerminal::new().with_lines(["?", "", "y"]);
        let prompts: Vec<Prompt> = vec![
            prompt::yes_no("okay", "Are you okay?").default_value(true).into(),
            prompt::yes_no("quiet", "Show output?").negate(true).into(),
        ];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();

        assert_eq!(answers.get_bool("okay"), Some(true));
        assert_eq!(answers.get_bool("quiet"), Some(false));
        let term = cli.terminal();
        assert!(term.prompts()[0].contains("[Y/n/?]"));
        assert!(term.printed("y - True, yes, on"));
        assert!(term.printed("n - False, no, off"));
    }

    #[tokio::test]
    async fn test_command_line_values_become_defaults() {
        let args = ParsedArguments::default()
            .with_value("host", "edge-router")
            .with_value("okay", "yes");
        let term = ScriptedTerminal::new().with_lines(["", ""]);
        let prompts: Vec<Prompt> = vec![
            prompt::text("host", "Host?").default_value("ignored").into(),
            prompt::yes_no("okay", "Okay?").into(),
        ];

        let mut cli = Cli::localized(args, term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("host"), Some("edge-router"));
        assert_eq!(answers.get_bool("okay"), Some(true));
        assert_eq!(cli.args().value("okay"), Some("yes"));
    }

    #[tokio::test]
    async fn test_confirm_asks_once() {
        let term = ScriptedTerminal::new().with_confirms([false]);
        let prompts: Vec<Prompt> = vec![prompt::confirm("proceed", "Proceed?").into()];

        let mut cli = run_cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_bool("proceed"), Some(false));
        assert_eq!(cli.terminal().prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_attempt_cap_ends_run_but_help_is_free() {
        let config = CliConfig::localized(strings_for("en")).with_max_attempts(2);
        let args = ParsedArguments::default().with_verbosity(Verbosity::None);
        let term = ScriptedTerminal::new().with_lines(["?", "?", "", ""]);
        let prompts: Vec<Prompt> = vec![prompt::text("host", "Host?").required(true).into()];

        let mut cli = Cli::new(config, args, term);
        let err = cli.prompt(&prompts).await.unwrap_err();
        match err {
            PromptError::AttemptsExhausted { name, attempts } => {
                assert_eq!(name, "host");
                assert_eq!(attempts, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(cli.terminal().remaining_lines(), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
