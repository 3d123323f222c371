//! Styled text with word wrapping.

use crate::markup::{self, MarkupError};
use crate::render::{Justify, Measurement, Overflow, RenderContext, Renderable, Segments};
use crate::segment::{
    char_width, line_width, split_lines, truncate, truncate_with_ellipsis, Segment,
};
use crate::style::Style;

/// A run of words or a run of whitespace.
struct Piece {
    space: bool,
    segments: Vec<Segment>,
    width: usize,
}

impl Piece {
    fn new(space: bool) -> Self {
        Self {
            space,
            segments: Vec::new(),
            width: 0,
        }
    }

    fn push(&mut self, c: char, style: &Style) {
        self.width += char_width(c);
        match self.segments.last_mut() {
            Some(last) if last.style() == style => last.push_char(c),
            _ => self.segments.push(Segment::new(c.to_string(), style.clone())),
        }
    }
}

fn pieces(line: &[Segment]) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    for segment in line {
        for c in segment.text().chars() {
            let space = c.is_whitespace();
            if pieces.last().map_or(true, |p| p.space != space) {
                pieces.push(Piece::new(space));
            }
            if let Some(piece) = pieces.last_mut() {
                piece.push(c, segment.style());
            }
        }
    }
    pieces
}

/// Pad a line to `width` according to `justify`.
fn align(line: Vec<Segment>, width: usize, justify: Justify) -> Vec<Segment> {
    let used = line_width(&line);
    if used >= width {
        return line;
    }
    let slack = width - used;
    let (left, right) = match justify {
        Justify::Left => return line,
        Justify::Right => (slack, 0),
        Justify::Center => (slack / 2, slack - slack / 2),
    };
    let mut out = Vec::with_capacity(line.len() + 2);
    if left > 0 {
        out.push(Segment::plain(" ".repeat(left)));
    }
    out.extend(line);
    if right > 0 {
        out.push(Segment::plain(" ".repeat(right)));
    }
    out
}

/// Styled text that wraps at word boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    segments: Vec<Segment>,
    justify: Justify,
    overflow: Overflow,
    no_wrap: bool,
}

impl Paragraph {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: Segment::merge(segments),
            ..Self::default()
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(vec![Segment::plain(text)])
    }

    pub fn styled(text: &str, style: Style) -> Self {
        Self::new(vec![Segment::new(text, style)])
    }

    pub fn from_markup(markup: &str) -> Result<Self, MarkupError> {
        markup::parse(markup).map(Self::new)
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn hard_lines(&self) -> Vec<Vec<Segment>> {
        split_lines(self.segments.iter().cloned(), usize::MAX)
    }

    /// Lines for a single hard line when it may not be wrapped.
    fn fit(&self, line: Vec<Segment>, width: usize, ellipsis: &str) -> Vec<Vec<Segment>> {
        if line_width(&line) <= width {
            return vec![line];
        }
        match self.overflow {
            Overflow::Fold => split_lines(line, width),
            Overflow::Crop => vec![truncate(&line, width)],
            Overflow::Ellipsis => vec![truncate_with_ellipsis(&line, width, ellipsis)],
        }
    }

    /// Greedy word wrap of a single hard line.
    fn wrap(&self, line: &[Segment], width: usize, ellipsis: &str) -> Vec<Vec<Segment>> {
        let mut lines: Vec<Vec<Segment>> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        let mut current_width = 0;
        let mut gap: Option<Piece> = None;
        let mut at_start = true;

        for piece in pieces(line) {
            if piece.space {
                if at_start {
                    // Leading indentation is kept, up to the width.
                    current = truncate(&piece.segments, width);
                    current_width = line_width(&current);
                } else {
                    gap = Some(piece);
                }
                at_start = false;
                continue;
            }
            at_start = false;

            let gap_width = gap.as_ref().map_or(0, |g| g.width);
            if current_width + gap_width + piece.width <= width {
                if let Some(gap) = gap.take() {
                    current.extend(gap.segments);
                }
                current.extend(piece.segments);
                current_width += gap_width + piece.width;
                continue;
            }

            gap = None;
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if piece.width <= width {
                current = piece.segments;
                current_width = piece.width;
                continue;
            }

            match self.overflow {
                Overflow::Fold => {
                    let mut chunks = split_lines(piece.segments, width);
                    let last = chunks.pop().unwrap_or_default();
                    lines.extend(chunks);
                    current_width = line_width(&last);
                    current = last;
                }
                Overflow::Crop => lines.push(truncate(&piece.segments, width)),
                Overflow::Ellipsis => {
                    lines.push(truncate_with_ellipsis(&piece.segments, width, ellipsis))
                }
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Display lines at `width`, justified.
    pub fn lines(&self, ctx: &RenderContext, width: usize) -> Vec<Vec<Segment>> {
        if width == 0 {
            return Vec::new();
        }
        let ellipsis = ctx.capabilities().ellipsis();
        let justify = ctx.justify().unwrap_or(self.justify);

        self.hard_lines()
            .into_iter()
            .flat_map(|line| {
                if self.no_wrap {
                    self.fit(line, width, ellipsis)
                } else {
                    self.wrap(&line, width, ellipsis)
                }
            })
            .map(|line| align(Segment::merge(line), width, justify))
            .collect()
    }
}

impl Renderable for Paragraph {
    fn measure(&self, _ctx: &RenderContext, max_width: usize) -> Measurement {
        let lines = self.hard_lines();
        let longest_line = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);
        let longest_word = if self.no_wrap {
            longest_line
        } else {
            lines
                .iter()
                .flat_map(|l| pieces(l))
                .filter(|p| !p.space)
                .map(|p| p.width)
                .max()
                .unwrap_or(0)
        };
        Measurement::new(longest_word, longest_line).clamp(max_width)
    }

    fn render<'a>(&'a self, ctx: &'a RenderContext, max_width: usize) -> Segments<'a> {
        let lines = self.lines(ctx, max_width);
        let count = lines.len();
        Box::new(
            lines
                .into_iter()
                .enumerate()
                .flat_map(move |(i, line)| {
                    let brk = (i + 1 < count).then(Segment::line_break);
                    line.into_iter().chain(brk)
                }),
        )
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::plain(text)
    }
}
