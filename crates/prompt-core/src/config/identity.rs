//! Identity trait for CLI binaries
//!
//! Each binary implements this trait to say how it presents itself: the
//! bracketed name in front of every line, the banner printed when a prompt
//! run starts, and the accent color.

/// Presentation settings for a binary built on the prompt engine
pub trait CliIdentity: Clone + Send + Sync + 'static {
    /// Short name shown as `[name]` in front of every line
    fn display_name(&self) -> &'static str;

    /// Banner printed once at the start of each prompt run
    fn banner(&self) -> String {
        format!("{} - Welcome", self.display_name())
    }

    /// 24-bit accent color for the name tag and described lines
    fn color(&self) -> u32 {
        super::DEFAULT_COLOR
    }

    /// Separator between a prompt message and its choices
    fn separator(&self) -> &'static str {
        ":"
    }

    /// Cap on rejected responses per input prompt (unbounded when `None`)
    fn max_attempts(&self) -> Option<u32> {
        None
    }
}
