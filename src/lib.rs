//! tessera: a terminal rendering engine.
//!
//! Styled text is authored in a small inline markup language, parsed into
//! [`Segment`]s, laid out by widgets implementing the two-pass
//! [`Renderable`] protocol, and encoded for whatever the output device
//! supports: 24-bit color down to no color at all, OSC 8 hyperlinks or
//! none, Unicode box drawing or ASCII.

pub mod ansi;
pub mod color;
pub mod config;
pub mod console;
mod error;
pub mod layout;
pub mod live;
pub mod markup;
pub mod render;
pub mod segment;
pub mod style;
pub mod widgets;

pub use color::{Color, ColorSystem};
pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use live::{Exclusivity, ExclusivityError, LiveDisplay};
pub use render::{Capabilities, Justify, Measurement, Overflow, RenderContext, Renderable};
pub use segment::Segment;
pub use style::{Decoration, Link, Style};
pub use widgets::{Column, Paragraph, Table};
