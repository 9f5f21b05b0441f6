//! Engine configuration
//!
//! - [`CliIdentity`]: implemented by each binary to describe its presentation
//! - [`CliConfig`]: the resolved settings a [`Cli`](crate::Cli) runs with
//! - [`GlobalArgs`] / [`ParsedArguments`]: command-line flags and prompt defaults

pub mod args;
pub mod identity;

pub use args::{GlobalArgs, ParsedArguments};
pub use identity::CliIdentity;

use crate::loc::StringTable;

/// Accent color used when none is configured
pub const DEFAULT_COLOR: u32 = 0x156AFF;

/// Resolved presentation settings
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub display_name: String,
    pub banner: String,
    pub color: u32,
    pub separator: String,
    /// Rejected responses allowed per input prompt, unbounded when `None`
    pub max_attempts: Option<u32>,
}

impl CliConfig {
    /// Settings from a binary's identity
    pub fn from_identity<I: CliIdentity>(identity: &I) -> Self {
        Self {
            display_name: identity.display_name().to_string(),
            banner: identity.banner(),
            color: identity.color(),
            separator: identity.separator().to_string(),
            max_attempts: identity.max_attempts(),
        }
    }

    /// Localized fallback settings
    pub fn localized(strings: &StringTable) -> Self {
        Self {
            display_name: strings.default_name.to_string(),
            banner: format!("{} - {}", strings.default_name, strings.default_banner),
            color: DEFAULT_COLOR,
            separator: ":".to_string(),
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}
