//! Writes segments to an output device according to its capabilities.

use std::io::{self, Write};

use tracing::trace;

use super::control::{self, ControlCode, RESET};
use super::legacy::{self, NativeColors};
use super::sgr::sgr_sequence;
use crate::render::Capabilities;
use crate::segment::Segment;
use crate::style::Link;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Encodes segments as escape sequences, or as plain text when the device
/// does not understand them.
///
/// Hyperlinks form a stack: closing an inner link re-opens the outer one
/// instead of ending the link region.
pub struct AnsiWriter<W: Write> {
    out: W,
    capabilities: Capabilities,
    links: Vec<Link>,
    native: Option<NativeColors>,
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(out: W, capabilities: Capabilities) -> Self {
        Self {
            out,
            capabilities,
            links: Vec::new(),
            native: None,
        }
    }

    /// Set colors through the native console API when escapes are off on a
    /// legacy console. Only meaningful when `out` is the console itself, and
    /// only takes effect on Windows consoles without ANSI support.
    pub fn with_native_colors(mut self) -> Self {
        let wanted = !self.capabilities.ansi && self.capabilities.legacy_console;
        self.native = (wanted && legacy::available()).then(NativeColors::default);
        self
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Number of hyperlinks currently open.
    pub fn link_depth(&self) -> usize {
        self.links.len()
    }

    /// Open a hyperlink region. A no-op when links are unsupported.
    pub fn begin_link(&mut self, link: &Link) -> io::Result<()> {
        if !self.capabilities.supports_links() {
            return Ok(());
        }
        trace!(id = link.id(), depth = self.links.len(), "Begin link");
        self.out
            .write_all(control::link_begin(link.url(), Some(link.id())).as_bytes())?;
        self.links.push(link.clone());
        Ok(())
    }

    /// Close the innermost hyperlink region, resuming the enclosing one if any.
    pub fn end_link(&mut self) -> io::Result<()> {
        if self.links.pop().is_none() {
            return Ok(());
        }
        match self.links.last() {
            Some(outer) => {
                let resume = control::link_begin(outer.url(), Some(outer.id()));
                self.out.write_all(resume.as_bytes())
            }
            None => self.out.write_all(control::link_end().as_bytes()),
        }
    }

    /// Write one segment.
    pub fn write_segment(&mut self, segment: &Segment) -> io::Result<()> {
        if segment.is_line_break() {
            if let Some(native) = self.native.as_mut() {
                native.reset(&mut self.out)?;
            }
            return self.write_text("\n");
        }
        if segment.text().is_empty() {
            return Ok(());
        }

        if !self.capabilities.ansi {
            if let Some(native) = self.native.as_mut() {
                native.apply(&mut self.out, segment.style())?;
            }
            return self.write_text(segment.text());
        }

        let link = segment.link().cloned();
        if let Some(link) = &link {
            self.begin_link(link)?;
        }
        match sgr_sequence(segment.style(), self.capabilities.color_system) {
            Some(sgr) => {
                self.out.write_all(sgr.as_bytes())?;
                self.out.write_all(segment.text().as_bytes())?;
                self.out.write_all(RESET.as_bytes())?;
            }
            None => self.out.write_all(segment.text().as_bytes())?,
        }
        if link.is_some() {
            self.end_link()?;
        }
        Ok(())
    }

    pub fn write_segments<'a>(&mut self, segments: impl IntoIterator<Item = &'a Segment>) -> io::Result<()> {
        for segment in segments {
            self.write_segment(segment)?;
        }
        Ok(())
    }

    /// Write a cursor or screen control sequence. A no-op without escape support.
    pub fn write_control(&mut self, code: ControlCode) -> io::Result<()> {
        if !self.capabilities.ansi {
            return Ok(());
        }
        write!(self.out, "{}", code)
    }

    /// End the current line.
    pub fn line_break(&mut self) -> io::Result<()> {
        self.write_segment(&Segment::line_break())
    }

    /// Reset colors and close any open links, then flush.
    pub fn finish(&mut self) -> io::Result<()> {
        while !self.links.is_empty() {
            self.end_link()?;
        }
        if let Some(native) = self.native.as_mut() {
            native.reset(&mut self.out)?;
        }
        self.out.flush()
    }

    /// Plain text, with native line endings when escapes are off.
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if self.capabilities.ansi || LINE_ENDING == "\n" {
            return self.out.write_all(text.as_bytes());
        }
        self.out.write_all(text.replace('\n', LINE_ENDING).as_bytes())
    }
}
