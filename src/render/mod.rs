//! The two-pass measure/render protocol.
//!
//! Every widget reports how wide it wants to be (`measure`) and then, given a
//! concrete width, yields its segments (`render`). Composites measure their
//! children first, decide widths, and render children at those widths without
//! measuring again.

mod capabilities;
mod measurement;

pub use capabilities::{Capabilities, RenderContext};
pub use measurement::Measurement;

use crate::segment::{split_lines, Segment};

/// Lazy, finite sequence of segments. Call `render` again for a fresh one.
pub type Segments<'a> = Box<dyn Iterator<Item = Segment> + 'a>;

/// Horizontal alignment of content within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

/// What to do with a word that does not fit on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Break the word across lines
    #[default]
    Fold,
    /// Cut the line at the width
    Crop,
    /// Cut the line and mark the cut with an ellipsis
    Ellipsis,
}

/// Anything that takes part in the measure/render protocol.
pub trait Renderable {
    /// Minimum and natural width when at most `max_width` cells are available.
    fn measure(&self, ctx: &RenderContext, max_width: usize) -> Measurement;

    /// Segments for a rendering at most `max_width` cells wide.
    fn render<'a>(&'a self, ctx: &'a RenderContext, max_width: usize) -> Segments<'a>;
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self, ctx: &RenderContext, max_width: usize) -> Measurement {
        (**self).measure(ctx, max_width)
    }

    fn render<'a>(&'a self, ctx: &'a RenderContext, max_width: usize) -> Segments<'a> {
        (**self).render(ctx, max_width)
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn measure(&self, ctx: &RenderContext, max_width: usize) -> Measurement {
        (**self).measure(ctx, max_width)
    }

    fn render<'a>(&'a self, ctx: &'a RenderContext, max_width: usize) -> Segments<'a> {
        (**self).render(ctx, max_width)
    }
}

/// Render and split into display lines.
pub fn render_lines(
    renderable: &dyn Renderable,
    ctx: &RenderContext,
    max_width: usize,
) -> Vec<Vec<Segment>> {
    split_lines(renderable.render(ctx, max_width), max_width)
}

/// Render to plain text, one `\n` per line, styles discarded.
pub fn render_plain(renderable: &dyn Renderable, ctx: &RenderContext, max_width: usize) -> String {
    render_lines(renderable, ctx, max_width)
        .iter()
        .map(|line| Segment::plain_text(line))
        .collect::<Vec<_>>()
        .join("\n")
}
