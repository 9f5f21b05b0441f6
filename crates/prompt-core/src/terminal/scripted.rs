//! Scripted terminal for tests and non-interactive runs

use super::Terminal;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;

/// Answers prompts from queued responses and records everything printed.
///
/// An empty queued line stands for pressing Enter on the pre-filled default.
/// Running out of queued responses is an `UnexpectedEof` error, which ends
/// the prompt run instead of retrying forever.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    confirms: VecDeque<bool>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue line responses, consumed in order
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue confirm responses, consumed in order
    pub fn with_confirms<I>(mut self, confirms: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.confirms.extend(confirms);
        self
    }

    /// Every line written, including prompt lines
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The prompt text of every read, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether any written line contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of written lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

fn exhausted(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("no scripted {} left", what),
    )
}

#[async_trait]
impl Terminal for ScriptedTerminal {
    async fn read_line(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.output.push(prompt.to_string());

        let line = self.lines.pop_front().ok_or_else(|| exhausted("line"))?;
        if line.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(line)
        }
    }

    async fn read_confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompts.push(prompt.to_string());
        self.output.push(prompt.to_string());

        self.confirms.pop_front().ok_or_else(|| exhausted("confirmation"))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
