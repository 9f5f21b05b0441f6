//! Informational notices and acknowledgements

use super::Cli;
use crate::error::Result;
use crate::prompt::{Acknowledged, Answers, Assignments, Notice};
use crate::style;
use crate::terminal::Terminal;
use crate::verbosity::should_display;

impl<T: Terminal> Cli<T> {
    /// Whether `notice` is shown.
    ///
    /// Precedence: `acknowledge`, then `required`, then `when`, then the
    /// verbosity policy. Lower rules are not evaluated once a higher one applies.
    async fn is_visible(&self, notice: &Notice, answers: &Answers) -> Result<bool> {
        if notice.acknowledge || notice.required {
            return Ok(true);
        }
        match &notice.when {
            Some(when) => when.call(answers.clone()).await,
            None => Ok(should_display(&notice.kind, self.verbosity())),
        }
    }

    pub(super) async fn show_notice(
        &mut self,
        notice: &Notice,
        answers: &Answers,
    ) -> Result<Assignments> {
        if notice.acknowledge {
            return self.acknowledge(notice, answers).await;
        }

        if self.is_visible(notice, answers).await? {
            let message = notice.message.resolve(answers).await?;
            self.emit(&notice.kind, &message)?;
        }
        Ok(Assignments::new())
    }

    /// Show the message, ask once, and hand the outcome to the callback
    async fn acknowledge(&mut self, notice: &Notice, answers: &Answers) -> Result<Assignments> {
        let message = notice.message.resolve(answers).await?;
        let line = format!(
            "{} {} {}",
            self.name(),
            style::style(&notice.kind, &message),
            self.strings.acknowledge
        );
        let accepted = self.terminal.read_confirm(&line).await?;

        match &notice.on_acknowledgement {
            Some(callback) => {
                callback
                    .call(Acknowledged {
                        answers: answers.clone(),
                        accepted,
                    })
                    .await
            }
            None => Ok(Assignments::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParsedArguments;
    use crate::prompt::{self, Prompt};
    use crate::terminal::ScriptedTerminal;
    use crate::verbosity::Verbosity;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn cli_at(verbosity: Verbosity, term: ScriptedTerminal) -> Cli<ScriptedTerminal> {
        Cli::localized(ParsedArguments::default().with_verbosity(verbosity), term)
    }

    #[tokio::test]
    async fn test_verbosity_gates_plain_notices() {
        let prompts: Vec<Prompt> = vec![
            prompt::info("progress note").into(),
            prompt::warning("careful now").into(),
            prompt::debug("internal detail").into(),
        ];

        let mut cli = cli_at(Verbosity::Warning, ScriptedTerminal::new());
        cli.prompt(&prompts).await.unwrap();

        let term = cli.terminal();
        assert!(!term.printed("progress note"));
        assert!(term.printed("careful now"));
        assert!(!term.printed("internal detail"));
    }

    #[tokio::test]
    async fn test_required_overrides_verbosity() {
        let prompts: Vec<Prompt> = vec![prompt::info("must see").required(true).into()];

        let mut cli = cli_at(Verbosity::None, ScriptedTerminal::new());
        cli.prompt(&prompts).await.unwrap();
        assert!(cli.terminal().printed("must see"));
    }

    #[tokio::test]
    async fn test_when_decides_without_required() {
        let prompts: Vec<Prompt> = vec![
            prompt::info("shown by when").when(|_| Ok(true)).into(),
            prompt::error("hidden by when").when(|_| Ok(false)).into(),
            prompt::info("async when")
                .when_async(|answers| async move { Ok(answers.is_empty()) })
                .into(),
        ];

        let mut cli = cli_at(Verbosity::None, ScriptedTerminal::new());
        cli.prompt(&prompts).await.unwrap();

        let term = cli.terminal();
        assert!(term.printed("shown by when"));
        assert!(!term.printed("hidden by when"));
        assert!(term.printed("async when"));
    }

    #[tokio::test]
    async fn test_required_never_evaluates_when() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let prompts: Vec<Prompt> = vec![prompt::info("required wins")
            .required(true)
            .when(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(false)
            })
            .into()];

        let mut cli = cli_at(Verbosity::Info, ScriptedTerminal::new());
        cli.prompt(&prompts).await.unwrap();

        assert!(cli.terminal().printed("required wins"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_acknowledge_beats_verbosity_and_required_false() {
        let term = ScriptedTerminal::new().with_confirms([true]);
        let prompts: Vec<Prompt> = vec![prompt::debug("read this first")
            .required(false)
            .when(|_| Ok(false))
            .acknowledge(true)
            .into()];

        let mut cli = cli_at(Verbosity::None, term);
        let answers = cli.prompt(&prompts).await.unwrap();

        let term = cli.terminal();
        assert_eq!(term.prompts().len(), 1);
        assert!(term.prompts()[0].contains("read this first"));
        assert!(term.prompts()[0].contains("Acknowledge message?"));
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn test_async_acknowledgement_callback_gets_outcome() {
        let term = ScriptedTerminal::new()
            .with_lines(["y"])
            .with_confirms([true]);
        let prompts: Vec<Prompt> = vec![
            prompt::yes_no("okay", "Are you okay?").into(),
            prompt::warning("This is a warning")
                .on_acknowledgement_async(|ack| async move {
                    let okay = ack.answers.get_bool("okay").unwrap_or(false);
                    Ok(Assignments::one("ack_warning", ack.accepted && okay))
                })
                .into(),
        ];

        let answers = cli_at(Verbosity::Info, term).prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_bool("ack_warning"), Some(true));
    }

    #[tokio::test]
    async fn test_hidden_notice_does_not_resolve_message() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let prompts: Vec<Prompt> = vec![prompt::trace(prompt::Message::dynamic(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("expensive".to_string())
        }))
        .into()];

        let mut cli = cli_at(Verbosity::Info, ScriptedTerminal::new());
        cli.prompt(&prompts).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
