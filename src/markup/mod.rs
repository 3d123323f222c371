//! Inline markup for styled text.
//!
//! ```text
//! [bold red]Error:[/] file [link=https://example.com]not found[/]
//! ```
//!
//! Tags nest. Each open tag layers its style over the current one; `[/]`
//! restores the style in effect before the matching open tag. Literal
//! brackets are written `[[` and `]]`.

mod error;
mod parser;
mod tokenizer;

pub use error::MarkupError;

use tokenizer::{TokenKind, Tokenizer};

use crate::segment::Segment;
use crate::style::Style;

/// Parse markup into segments with fully resolved styles.
///
/// Adjacent runs with the same style are merged.
pub fn parse(markup: &str) -> Result<Vec<Segment>, MarkupError> {
    parser::parse_with_style(markup, &Style::plain())
}

/// Parse markup with every segment layered over `base`.
pub fn parse_with_style(markup: &str, base: &Style) -> Result<Vec<Segment>, MarkupError> {
    parser::parse_with_style(markup, base)
}

/// Double every bracket so `text` is taken literally by the parser.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '[' => escaped.push_str("[["),
            ']' => escaped.push_str("]]"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Strip all tags, keeping only the literal text.
///
/// Tag balance is not checked; only the tokens themselves must be well formed.
pub fn remove(markup: &str) -> Result<String, MarkupError> {
    let mut text = String::new();
    for token in Tokenizer::new(markup) {
        if let TokenKind::Text(run) = token?.kind {
            text.push_str(&run);
        }
    }
    Ok(text)
}

/// Parse markup and layer `highlight` over the first occurrence of `query`
/// in the plain text, wherever tag boundaries fall.
///
/// Matching is exact (case-sensitive). Segments outside the match are left
/// as parsed; an empty or absent query returns the plain parse.
pub fn highlight(markup: &str, query: &str, highlight: &Style) -> Result<Vec<Segment>, MarkupError> {
    let segments = parse(markup)?;
    if query.is_empty() {
        return Ok(segments);
    }
    let plain = Segment::plain_text(&segments);
    let Some(start) = plain.find(query) else {
        return Ok(segments);
    };
    let end = start + query.len();

    let mut out = Vec::with_capacity(segments.len() + 2);
    let mut offset = 0;
    for segment in segments {
        let len = segment.text().len();
        let (seg_start, seg_end) = (offset, offset + len);
        offset = seg_end;

        let from = start.max(seg_start);
        let to = end.min(seg_end);
        if from >= to {
            out.push(segment);
            continue;
        }

        let text = segment.text();
        let style = segment.style();
        let (before, rest) = text.split_at(from - seg_start);
        let (matched, after) = rest.split_at(to - from);
        out.push(Segment::new(before, style.clone()));
        out.push(Segment::new(matched, style.combine(highlight)));
        out.push(Segment::new(after, style.clone()));
    }
    Ok(Segment::merge(out))
}
