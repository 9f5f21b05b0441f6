//! Divergence routing

use super::Cli;
use crate::error::Result;
use crate::prompt::{Answers, Divergence, Prompt};
use crate::terminal::Terminal;

impl<T: Terminal> Cli<T> {
    /// Prompts of the branch `select` picks, or `None` for an unknown key
    pub(super) async fn route<'p>(
        &mut self,
        divergence: &'p Divergence,
        answers: &Answers,
    ) -> Result<Option<&'p [Prompt]>> {
        let key = divergence.select.call(answers.clone()).await?;

        match divergence.get(&key) {
            Some(branch) => {
                self.trace(&format!("Entering branch '{}'", key))?;
                Ok(Some(branch))
            }
            None => {
                self.trace(&format!("No branch '{}', continuing", key))?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParsedArguments;
    use crate::prompt::{self, Assignments};
    use crate::terminal::ScriptedTerminal;
    use crate::verbosity::Verbosity;

    fn cli(term: ScriptedTerminal) -> Cli<ScriptedTerminal> {
        Cli::localized(ParsedArguments::default().with_verbosity(Verbosity::Info), term)
    }

    fn acknowledgement_flow() -> Vec<Prompt> {
        vec![
            prompt::yes_no("okay", "Are you okay?").required(true).into(),
            prompt::warning(prompt::Message::dynamic(|_| Ok("This is a warning".to_string())))
                .required(true)
                .on_acknowledgement(|ack| Ok(Assignments::one("ack_warning", ack.accepted)))
                .into(),
            prompt::diverge(|answers| {
                Ok(if answers.get_bool("ack_warning").unwrap_or(false) {
                    "acknowledged".to_string()
                } else {
                    "not_acknowledged".to_string()
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

    #[tokio::test]
    async fn test_only_selected_branch_runs() {
        let term = ScriptedTerminal::new().with_lines(["y"]).with_confirms([true]);
        let mut cli = cli(term);
        let answers = cli.prompt(&acknowledgement_flow()).await.unwrap();

        assert_eq!(answers.get_bool("okay"), Some(true));
        assert_eq!(answers.get_bool("ack_warning"), Some(true));
        let term = cli.terminal();
        assert!(term.printed("Warning was acknowledged"));
        assert!(!term.printed("Warning was NOT acknowledged"));
    }

    #[tokio::test]
    async fn test_other_branch_when_not_acknowledged() {
        let term = ScriptedTerminal::new().with_lines(["n"]).with_confirms([false]);
        let mut cli = cli(term);
        cli.prompt(&acknowledgement_flow()).await.unwrap();

        let term = cli.terminal();
        assert!(term.printed("Warning was NOT acknowledged"));
        assert!(!term.printed("Warning was acknowledged"));
    }

    #[tokio::test]
    async fn test_unknown_key_is_a_no_op() {
        let term = ScriptedTerminal::new().with_lines(["after"]);
        let prompts: Vec<Prompt> = vec![
            prompt::diverge(|_| Ok("missing".to_string()))
                .branch("present", vec![prompt::info("never").required(true).into()])
                .into(),
            prompt::text("next", "Next?").into(),
        ];

        let mut cli = cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("next"), Some("after"));
        assert!(!cli.terminal().printed("never"));
    }

    #[tokio::test]
    async fn test_branches_share_results_and_nest() {
        let term = ScriptedTerminal::new().with_lines(["inner", "outer", "tail"]);
        let prompts: Vec<Prompt> = vec![
            prompt::diverge_async(|_| async { Ok("a".to_string()) })
                .branch(
                    "a",
                    vec![
                        prompt::diverge(|_| Ok("b".to_string()))
                            .branch("b", vec![prompt::text("value", "Inner?").into()])
                            .into(),
                        prompt::text("value", "Outer?").into(),
                    ],
                )
                .into(),
            prompt::text("last", "Last?").into(),
        ];

        let mut cli = cli(term);
        let answers = cli.prompt(&prompts).await.unwrap();

        assert_eq!(answers.get_str("value"), Some("outer"));
        assert_eq!(answers.get_str("last"), Some("tail"));
        let asked: Vec<_> = cli.terminal().prompts().to_vec();
        assert!(asked[0].contains("Inner?"));
        assert!(asked[1].contains("Outer?"));
        assert!(asked[2].contains("Last?"));
    }

    #[tokio::test]
    async fn test_selector_reads_earlier_answers() {
        let term = ScriptedTerminal::new().with_lines(["3", "fine"]);
        let prompts: Vec<Prompt> = vec![
            prompt::number("level", "Level?").into(),
            prompt::diverge(|answers| {
                Ok(match answers.get_number("level") {
                    Some(n) if n > 2.0 => "high".to_string(),
                    _ => "low".to_string(),
                })
            })
            .branch("high", vec![prompt::text("reason", "Why so high?").into()])
            .branch("low", vec![])
            .into(),
        ];

        let answers = cli(term).prompt(&prompts).await.unwrap();
        assert_eq!(answers.get_str("reason"), Some("fine"));
    }

    #[tokio::test]
    async fn test_selector_failure_is_fatal() {
        let prompts: Vec<Prompt> =
            vec![prompt::diverge(|_| Err(anyhow::anyhow!("no route"))).into()];

        let err = cli(ScriptedTerminal::new()).prompt(&prompts).await.unwrap_err();
        assert!(err.to_string().contains("no route"));
    }
}
