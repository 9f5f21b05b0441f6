//! Verbosity levels and the display policy for text kinds

use std::fmt;
use std::str::FromStr;

/// Configured verbosity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Everything is displayed
    All,
    /// Finer-grained than `Debug`
    Trace,
    Debug,
    /// Progress messages
    #[default]
    Info,
    Warning,
    Error,
    /// Nothing gated by verbosity is displayed
    None,
}

impl Verbosity {
    pub const LEVELS: [Verbosity; 7] = [
        Verbosity::All,
        Verbosity::Trace,
        Verbosity::Debug,
        Verbosity::Info,
        Verbosity::Warning,
        Verbosity::Error,
        Verbosity::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::All => "all",
            Verbosity::Trace => "trace",
            Verbosity::Debug => "debug",
            Verbosity::Info => "info",
            Verbosity::Warning => "warning",
            Verbosity::Error => "error",
            Verbosity::None => "none",
        }
    }

    /// Level for a numeric index, clamped into the valid range
    pub fn from_index(index: i64) -> Self {
        let clamped = index.clamp(0, (Self::LEVELS.len() - 1) as i64);
        Self::LEVELS[clamped as usize]
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i64>() {
            return Ok(Self::from_index(index));
        }

        match s.to_lowercase().as_str() {
            "all" => Ok(Verbosity::All),
            "trace" => Ok(Verbosity::Trace),
            "debug" => Ok(Verbosity::Debug),
            "info" => Ok(Verbosity::Info),
            "warning" | "warn" => Ok(Verbosity::Warning),
            "error" => Ok(Verbosity::Error),
            "none" | "off" => Ok(Verbosity::None),
            other => Err(format!("unknown verbosity level: {}", other)),
        }
    }
}

/// Semantic kind of a displayed line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextKind {
    Label,
    Description,
    Complete,
    Error,
    Warning,
    Info,
    Success,
    Debug,
    Trace,
    /// A kind this crate has no floor for (e.g. from a manifest)
    Other(String),
}

impl TextKind {
    /// Minimum configured verbosity at which this kind is displayed.
    ///
    /// `None` means there is no floor and the kind is always shown.
    pub fn floor(&self) -> Option<Verbosity> {
        match self {
            TextKind::Label | TextKind::Description | TextKind::Complete => Some(Verbosity::Error),
            TextKind::Error => Some(Verbosity::Error),
            TextKind::Warning => Some(Verbosity::Warning),
            TextKind::Info | TextKind::Success => Some(Verbosity::Info),
            TextKind::Debug => Some(Verbosity::Debug),
            TextKind::Trace => Some(Verbosity::Trace),
            TextKind::Other(_) => None,
        }
    }

    pub fn parse(name: &str) -> Self {
        match name {
            "label" => TextKind::Label,
            "description" => TextKind::Description,
            "complete" => TextKind::Complete,
            "error" => TextKind::Error,
            "warning" | "warn" => TextKind::Warning,
            "info" => TextKind::Info,
            "success" => TextKind::Success,
            "debug" => TextKind::Debug,
            "trace" => TextKind::Trace,
            other => TextKind::Other(other.to_string()),
        }
    }
}

/// Whether a line of `kind` is displayed under the `configured` level
pub fn should_display(kind: &TextKind, configured: Verbosity) -> bool {
    match kind.floor() {
        Some(floor) => configured <= floor,
        None => true,
    }
}
