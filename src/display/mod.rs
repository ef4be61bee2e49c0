//! Terminal display and formatting utilities.
//!
//! Handles colorized JSON output and token status rendering for
//! human-readable terminal output.

use std::io::IsTerminal;

pub mod json_printer;
pub mod token_status;

/// ANSI styles used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Cyan,
    Green,
    Yellow,
    Magenta,
    Red,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Cyan => "\x1b[36m",
            Style::Green => "\x1b[32m",
            Style::Yellow => "\x1b[33m",
            Style::Magenta => "\x1b[35m",
            Style::Red => "\x1b[31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in an ANSI style when `color` is enabled.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        format!("{}{text}{RESET}", style.code())
    } else {
        text.to_string()
    }
}

/// Whether stdout should receive ANSI colors.
///
/// Honors the `NO_COLOR` convention and disables color when stdout is
/// not a terminal.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()) && std::io::stdout().is_terminal()
}
