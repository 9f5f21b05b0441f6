//! ANSI styling for the engine's output

use crate::verbosity::TextKind;
use colored::Colorize;

/// Style `text` for display as `kind`. Pure, performs no output.
pub fn style(kind: &TextKind, text: &str) -> String {
    match kind {
        TextKind::Label | TextKind::Other(_) => text.normal().to_string(),
        TextKind::Description => text.cyan().to_string(),
        TextKind::Complete | TextKind::Success => text.green().to_string(),
        TextKind::Error => text.red().to_string(),
        TextKind::Warning => text.yellow().to_string(),
        TextKind::Info => text.blue().to_string(),
        TextKind::Debug | TextKind::Trace => text.dimmed().italic().to_string(),
    }
}

/// `[display_name]` in the identity color
pub fn name_tag(display_name: &str, color: u32) -> String {
    let (r, g, b) = rgb(color);
    format!("[{}]", display_name).truecolor(r, g, b).to_string()
}

/// Bold text in the identity color, used for described lines
pub fn accent(text: &str, color: u32) -> String {
    let (r, g, b) = rgb(color);
    text.truecolor(r, g, b).bold().to_string()
}

pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

fn rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
