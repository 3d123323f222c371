//! Native console color fallback for terminals without escape sequence support.
//!
//! Colors are set through crossterm's commands, which go through the native
//! console API on Windows consoles that do not understand ANSI. Only
//! foreground and background are simulated; decorations and links are
//! dropped. Everywhere else crossterm would emit SGR bytes, so the fallback
//! is never enabled there.

use std::io::{self, Write};

use crossterm::style::{Color as NativeColor, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

use crate::color::{Color, ColorSystem};
use crate::style::Style;

fn native(color: Color) -> NativeColor {
    match color.degrade(ColorSystem::Standard) {
        Color::Indexed(index) => match index {
            0 => NativeColor::Black,
            1 => NativeColor::DarkRed,
            2 => NativeColor::DarkGreen,
            3 => NativeColor::DarkYellow,
            4 => NativeColor::DarkBlue,
            5 => NativeColor::DarkMagenta,
            6 => NativeColor::DarkCyan,
            7 => NativeColor::Grey,
            8 => NativeColor::DarkGrey,
            9 => NativeColor::Red,
            10 => NativeColor::Green,
            11 => NativeColor::Yellow,
            12 => NativeColor::Blue,
            13 => NativeColor::Magenta,
            14 => NativeColor::Cyan,
            _ => NativeColor::White,
        },
        _ => NativeColor::Reset,
    }
}

/// Whether colors can be set through the native console API.
pub(crate) fn available() -> bool {
    #[cfg(windows)]
    {
        !crossterm::ansi_support::supports_ansi()
    }
    #[cfg(not(windows))]
    {
        false
    }
}

/// Tracks the colors last applied so the console is only touched on change.
#[derive(Debug, Default)]
pub(crate) struct NativeColors {
    current: Option<(Color, Color)>,
}

impl NativeColors {
    /// Record the colors of `style`, returning them if they differ from the last.
    fn update(&mut self, style: &Style) -> Option<(Color, Color)> {
        let wanted = (style.foreground(), style.background());
        if self.current == Some(wanted) {
            return None;
        }
        self.current = Some(wanted);
        Some(wanted)
    }

    pub fn apply<W: Write>(&mut self, out: &mut W, style: &Style) -> io::Result<()> {
        let Some((fg, bg)) = self.update(style) else {
            return Ok(());
        };
        if fg.is_default() && bg.is_default() {
            out.queue(ResetColor)?;
        } else {
            out.queue(SetForegroundColor(native(fg)))?;
            out.queue(SetBackgroundColor(native(bg)))?;
        }
        Ok(())
    }

    pub fn reset<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.current.take().is_some() {
            out.queue(ResetColor)?;
        }
        Ok(())
    }
}
