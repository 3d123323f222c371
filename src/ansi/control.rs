//! Escape sequence constants and CSI/OSC builders.

use std::fmt;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// String terminator used by OSC sequences.
const ST: &str = "\x1b\\";

/// OSC 8 sequence opening a hyperlink.
pub fn link_begin(url: &str, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("\x1b]8;id={};{}{}", id, url, ST),
        None => format!("\x1b]8;;{}{}", url, ST),
    }
}

/// OSC 8 sequence closing the current hyperlink.
pub fn link_end() -> &'static str {
    "\x1b]8;;\x1b\\"
}

/// Which part of a line or screen an erase applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    ToEnd = 0,
    ToStart = 1,
    All = 2,
}

/// Cursor and screen control sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    /// Move to a 1-based column on the current row
    CursorColumn(u16),
    /// 1-based row and column
    CursorPosition { row: u16, column: u16 },
    CursorHome,
    ShowCursor,
    HideCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EraseInLine(EraseMode),
    EraseInDisplay(EraseMode),
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ControlCode::CursorUp(n) => write!(f, "\x1b[{}A", n),
            ControlCode::CursorDown(n) => write!(f, "\x1b[{}B", n),
            ControlCode::CursorForward(n) => write!(f, "\x1b[{}C", n),
            ControlCode::CursorBack(n) => write!(f, "\x1b[{}D", n),
            ControlCode::CursorColumn(n) => write!(f, "\x1b[{}G", n),
            ControlCode::CursorPosition { row, column } => write!(f, "\x1b[{};{}H", row, column),
            ControlCode::CursorHome => f.write_str("\x1b[H"),
            ControlCode::ShowCursor => f.write_str("\x1b[?25h"),
            ControlCode::HideCursor => f.write_str("\x1b[?25l"),
            ControlCode::EnterAlternateScreen => f.write_str("\x1b[?1049h"),
            ControlCode::LeaveAlternateScreen => f.write_str("\x1b[?1049l"),
            ControlCode::EraseInLine(mode) => write!(f, "\x1b[{}K", mode as u8),
            ControlCode::EraseInDisplay(mode) => write!(f, "\x1b[{}J", mode as u8),
        }
    }
}
