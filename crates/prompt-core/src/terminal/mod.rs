//! Line-based terminal access
//!
//! The engine never touches stdin/stdout directly. Everything goes through
//! [`Terminal`], so a run can be driven by a real console or by a script.

#[cfg(feature = "tui")]
mod interactive;
mod scripted;

#[cfg(feature = "tui")]
pub use interactive::ConsoleTerminal;
pub use scripted::ScriptedTerminal;

use async_trait::async_trait;
use std::io;

/// Input and output primitives the prompt engine needs
#[async_trait]
pub trait Terminal: Send {
    /// Show `prompt` and read one line, offering `default` as the initial text.
    ///
    /// Returns the line without its trailing newline. A terminal without
    /// input available returns an empty string rather than an error.
    async fn read_line(&mut self, prompt: &str, default: &str) -> io::Result<String>;

    /// Ask a single yes/no question
    async fn read_confirm(&mut self, prompt: &str) -> io::Result<bool>;

    /// Print one line of output
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Print the banner that opens a prompt run
    fn intro(&mut self, banner: &str) -> io::Result<()> {
        self.write_line(banner)
    }
}

#[async_trait]
impl<T: Terminal + ?Sized> Terminal for Box<T> {
    async fn read_line(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        (**self).read_line(prompt, default).await
    }

    async fn read_confirm(&mut self, prompt: &str) -> io::Result<bool> {
        (**self).read_confirm(prompt).await
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn intro(&mut self, banner: &str) -> io::Result<()> {
        (**self).intro(banner)
    }
}
