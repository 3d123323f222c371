//! Rendering to an output device.

use std::io::{self, Write};

use tracing::trace;

use crate::ansi::{AnsiWriter, ControlCode};
use crate::live::Exclusivity;
use crate::render::{render_lines, Capabilities, RenderContext, Renderable};
use crate::widgets::Paragraph;

/// Renders widgets with a fixed set of capabilities to any writer.
pub struct Console<W: Write> {
    writer: AnsiWriter<W>,
    context: RenderContext,
    exclusivity: Exclusivity,
}

impl Console<io::Stdout> {
    /// Console on standard output. On legacy Windows consoles without escape
    /// support, colors go through the native console API.
    pub fn stdout(capabilities: Capabilities) -> Self {
        Self {
            writer: AnsiWriter::new(io::stdout(), capabilities).with_native_colors(),
            context: RenderContext::new(capabilities),
            exclusivity: Exclusivity::new(),
        }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, capabilities: Capabilities) -> Self {
        Self {
            writer: AnsiWriter::new(out, capabilities),
            context: RenderContext::new(capabilities),
            exclusivity: Exclusivity::new(),
        }
    }

    /// Share an exclusivity flag with other consoles on the same device.
    pub fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    pub fn capabilities(&self) -> &Capabilities {
        self.context.capabilities()
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn exclusivity(&self) -> &Exclusivity {
        &self.exclusivity
    }

    /// Render at the console width. Returns the number of lines written.
    ///
    /// The last line is left open; see [`Console::write_line`].
    pub fn write(&mut self, renderable: &dyn Renderable) -> io::Result<usize> {
        let ctx = self.context;
        let lines = render_lines(renderable, &ctx, ctx.width());
        trace!(lines = lines.len(), width = ctx.width(), "Writing renderable");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.writer.line_break()?;
            }
            self.writer.write_segments(line)?;
        }
        Ok(lines.len())
    }

    pub fn write_line(&mut self, renderable: &dyn Renderable) -> io::Result<usize> {
        let lines = self.write(renderable)?;
        self.writer.line_break()?;
        Ok(lines)
    }

    /// Parse markup and write it as a line.
    pub fn markup(&mut self, markup: &str) -> crate::Result<()> {
        let paragraph = Paragraph::from_markup(markup)?;
        self.write_line(&paragraph)?;
        Ok(())
    }

    pub fn line_break(&mut self) -> io::Result<()> {
        self.writer.line_break()
    }

    pub fn control(&mut self, code: ControlCode) -> io::Result<()> {
        self.writer.write_control(code)
    }

    /// Close open links, reset native colors and flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.finish()
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
