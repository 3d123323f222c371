//! Styled text segments and line utilities.
//!
//! A `Segment` is the atomic unit of rendered output: a run of text with one
//! style. Adjacent segments with identical styles can be merged without
//! changing the output. Hard line boundaries are marked with a dedicated
//! line-break segment that never merges with text.

use unicode_width::UnicodeWidthChar;

use crate::style::{Link, Style};

/// Width in terminal cells of a single character.
///
/// A line feed counts as one cell. Line splitting relies on this, so it is
/// kept even though a line feed occupies no cell on screen.
pub fn char_width(c: char) -> usize {
    if c == '\n' {
        return 1;
    }
    c.width().unwrap_or(0)
}

/// Width in terminal cells of a string.
pub fn cell_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// A run of text sharing a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    style: Style,
    line_break: bool,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            line_break: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::plain())
    }

    /// A hard line boundary.
    pub fn line_break() -> Self {
        Self {
            text: "\n".to_string(),
            style: Style::plain(),
            line_break: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn link(&self) -> Option<&Link> {
        self.style.link()
    }

    pub fn is_line_break(&self) -> bool {
        self.line_break
    }

    /// Width in cells. Line-break segments occupy no cells.
    pub fn cell_width(&self) -> usize {
        if self.line_break {
            0
        } else {
            cell_width(&self.text)
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Split into two segments at a cell offset.
    ///
    /// A wide character straddling the offset goes to the right-hand part.
    pub fn split_at_cell(&self, offset: usize) -> (Segment, Segment) {
        let mut width = 0;
        let mut byte = self.text.len();
        for (i, c) in self.text.char_indices() {
            let w = char_width(c);
            if width + w > offset {
                byte = i;
                break;
            }
            width += w;
        }
        let (left, right) = self.text.split_at(byte);
        (
            Segment::new(left, self.style.clone()),
            Segment::new(right, self.style.clone()),
        )
    }

    /// Merge adjacent text segments that share a style. Empty text segments are dropped.
    pub fn merge(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::new();
        for segment in segments {
            if !segment.line_break && segment.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last)
                    if !last.line_break && !segment.line_break && last.style == segment.style =>
                {
                    last.text.push_str(&segment.text);
                }
                _ => merged.push(segment),
            }
        }
        merged
    }

    /// Text of all segments with styles discarded.
    pub fn plain_text(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Total cell width of a line.
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_width).sum()
}

/// Whether a line occupies more than `max_width` cells.
pub fn is_line_too_wide(line: &[Segment], max_width: usize) -> bool {
    line_width(line) > max_width
}

/// Split segments into display lines.
///
/// Lines end at line-break segments and at `\n` inside text. A line wider
/// than `max_width` is hard-wrapped at the cell boundary; a single character
/// wider than `max_width` is still placed, alone, on its own line.
pub fn split_lines(segments: impl IntoIterator<Item = Segment>, max_width: usize) -> Vec<Vec<Segment>> {
    let mut lines: Vec<Vec<Segment>> = Vec::new();
    let mut line: Vec<Segment> = Vec::new();
    let mut width = 0;

    for segment in segments {
        if segment.is_line_break() {
            lines.push(std::mem::take(&mut line));
            width = 0;
            continue;
        }

        let mut pieces = segment.text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            let mut rest = Segment::new(piece, segment.style.clone());
            while !rest.text.is_empty() {
                let available = max_width.saturating_sub(width);
                let rest_width = rest.cell_width();
                if rest_width <= available {
                    width += rest_width;
                    line.push(rest);
                    break;
                }
                let (head, tail) = rest.split_at_cell(available);
                if head.text.is_empty() && line.is_empty() {
                    // Nothing fits even on an empty line: place one character.
                    // The line closes only if more text follows it.
                    let first = tail.text.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
                    let (one, more) = tail.text.split_at(first);
                    let one = Segment::new(one, segment.style.clone());
                    width = one.cell_width();
                    line.push(one);
                    rest = Segment::new(more, segment.style.clone());
                    continue;
                }
                if !head.text.is_empty() {
                    line.push(head);
                }
                lines.push(std::mem::take(&mut line));
                width = 0;
                rest = tail;
            }
            if pieces.peek().is_some() {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }
        }
    }

    lines.push(line);
    lines
}

/// Crop a line to at most `max_width` cells.
pub fn truncate(line: &[Segment], max_width: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut width = 0;
    for segment in line {
        let w = segment.cell_width();
        if width + w <= max_width {
            width += w;
            out.push(segment.clone());
            continue;
        }
        let (head, _) = segment.split_at_cell(max_width - width);
        if !head.text.is_empty() {
            out.push(head);
        }
        break;
    }
    out
}

/// Crop a line to `max_width` cells, ending in an ellipsis when anything was cut.
pub fn truncate_with_ellipsis(line: &[Segment], max_width: usize, ellipsis: &str) -> Vec<Segment> {
    if line_width(line) <= max_width {
        return line.to_vec();
    }
    let ellipsis_width = cell_width(ellipsis);
    if max_width < ellipsis_width {
        return truncate(line, max_width);
    }
    let mut out = truncate(line, max_width - ellipsis_width);
    let style = out
        .last()
        .or(line.last())
        .map(|s| s.style.clone())
        .unwrap_or_default();
    out.push(Segment::new(ellipsis, style));
    Segment::merge(out)
}

/// Pad a line with spaces up to `width` cells.
pub fn pad_to(line: &mut Vec<Segment>, width: usize, style: &Style) {
    let current = line_width(line);
    if current < width {
        line.push(Segment::new(" ".repeat(width - current), style.clone()));
    }
}
