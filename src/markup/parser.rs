//! Resolves a token stream into styled segments.

use super::error::MarkupError;
use super::tokenizer::{TokenKind, Tokenizer};
use crate::segment::Segment;
use crate::style::parser::parse_spec;
use crate::style::{Link, Style};

/// One open tag.
struct Frame {
    /// Style in effect before the tag, restored when it closes
    previous: Style,
    /// Placeholder link whose target is the tagged text, and the first segment it covers
    content_link: Option<(Link, usize)>,
}

pub(crate) fn parse_with_style(markup: &str, base: &Style) -> Result<Vec<Segment>, MarkupError> {
    let mut tokenizer = Tokenizer::new(markup);
    let end = tokenizer.len();

    let mut stack: Vec<Frame> = Vec::new();
    let mut current = base.clone();
    let mut segments: Vec<Segment> = Vec::new();

    for token in &mut tokenizer {
        let token = token?;
        match token.kind {
            TokenKind::Text(text) => segments.push(Segment::new(text, current.clone())),
            TokenKind::Open(spec) => {
                let parsed =
                    parse_spec(&spec).map_err(|e| MarkupError::from_style(token.position, e))?;
                let mut overlay = parsed.style;
                let mut content_link = None;
                if parsed.link_to_content {
                    let placeholder = Link::new("");
                    overlay = overlay.with_link(placeholder.clone());
                    content_link = Some((placeholder, segments.len()));
                }
                stack.push(Frame {
                    previous: current.clone(),
                    content_link,
                });
                current = current.combine(&overlay);
            }
            TokenKind::Close => {
                let frame = stack.pop().ok_or(MarkupError::UnexpectedClose {
                    position: token.position,
                })?;
                if let Some((placeholder, start)) = frame.content_link {
                    resolve_content_link(&mut segments[start..], &placeholder);
                }
                current = frame.previous;
            }
        }
    }

    if !stack.is_empty() {
        return Err(MarkupError::UnclosedTags {
            open: stack.len(),
            position: end,
        });
    }

    Ok(Segment::merge(segments))
}

/// Point every segment carrying `placeholder` at the text those segments spell out.
fn resolve_content_link(segments: &mut [Segment], placeholder: &Link) {
    let carries = |s: &Segment| s.link().map(Link::id) == Some(placeholder.id());
    let url: String = segments
        .iter()
        .filter(|s| carries(s))
        .map(Segment::text)
        .collect();
    let target = placeholder.retarget(&url);
    for segment in segments.iter_mut().filter(|s| carries(s)) {
        let style = segment.style().clone().with_link(target.clone());
        *segment = segment.clone().with_style(style);
    }
}
