//! ANSI output encoding.
//!
//! - sgr: style -> SGR parameter lists, per color system
//! - control: CSI cursor/screen sequences and OSC 8 hyperlinks
//! - writer: segment stream -> bytes, gated on negotiated capabilities
//! - legacy: native console color fallback
//! - strip: parse encoded output back into plain text

mod control;
mod legacy;
mod sgr;
mod strip;
mod writer;

pub use control::{link_begin, link_end, ControlCode, EraseMode, RESET};
pub use sgr::{color_codes, sgr_sequence, style_codes};
pub use strip::{decode, strip, Decoded};
pub use writer::AnsiWriter;

use std::io;

use crate::render::Capabilities;
use crate::segment::Segment;

/// Encode segments into a string.
pub fn encode(segments: &[Segment], capabilities: Capabilities) -> io::Result<String> {
    let mut writer = AnsiWriter::new(Vec::new(), capabilities);
    writer.write_segments(segments)?;
    writer.finish()?;
    String::from_utf8(writer.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
