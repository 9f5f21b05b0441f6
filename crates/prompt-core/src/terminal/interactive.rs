//! Interactive console terminal (cliclack + console)

use super::Terminal;
use async_trait::async_trait;
use console::Term;
use std::io::{self, BufRead, IsTerminal, Write};

/// Terminal backed by the process's stdin/stdout
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self
    }
}

/// Line read for piped or closed stdin. EOF and blank lines yield `default`.
fn read_piped<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> io::Result<String> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line.to_string())
    }
}

fn read_line_blocking(prompt: &str, default: &str) -> io::Result<String> {
    if !io::stdin().is_terminal() {
        return read_piped(&mut io::stdin().lock(), &mut io::stdout(), prompt, default);
    }

    let term = Term::stdout();
    term.write_str(&format!("{} ", prompt))?;
    if default.is_empty() {
        term.read_line()
    } else {
        term.read_line_initial_text(default)
    }
}

#[async_trait]
impl Terminal for ConsoleTerminal {
    async fn read_line(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let prompt = prompt.to_string();
        let default = default.to_string();

        tokio::task::spawn_blocking(move || read_line_blocking(&prompt, &default))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    async fn read_confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || cliclack::confirm(prompt).interact())
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        Term::stdout().write_line(line)
    }

    fn intro(&mut self, banner: &str) -> io::Result<()> {
        cliclack::intro(banner)
    }
}
