//! Unit tests for the markup language

use tessera::markup::{self, MarkupError};
use tessera::{Color, Decoration, Segment, Style};

#[test]
fn three_segments_for_two_colored_words() {
    let segments = markup::parse("[red]Hello[/] [blue]World[/]").unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], Segment::new("Hello", Style::fg(Color::RED)));
    assert_eq!(segments[1], Segment::plain(" "));
    assert_eq!(segments[2], Segment::new("World", Style::fg(Color::BLUE)));
}

#[test]
fn lone_closing_bracket_position() {
    assert_eq!(
        markup::parse("Hello [[ World ]"),
        Err(MarkupError::UnescapedBracket { position: 15 })
    );
}

#[test]
fn unclosed_tags_are_reported() {
    let err = markup::parse("[bold]a[italic]b[/]").unwrap_err();
    assert!(matches!(err, MarkupError::UnclosedTags { open: 1, .. }));
}

#[test]
fn unterminated_tag_is_malformed() {
    assert_eq!(
        markup::parse("ok [bold"),
        Err(MarkupError::MalformedTag { position: 3 })
    );
}

#[test]
fn close_restores_pre_tag_style() {
    let segments = markup::parse("[on blue]a[bold red]b[/]c[/]").unwrap();
    let on_blue = Style::plain().with_background(Color::BLUE);
    assert_eq!(segments[0], Segment::new("a", on_blue.clone()));
    assert_eq!(
        segments[1].style(),
        &on_blue
            .clone()
            .with_foreground(Color::RED)
            .with_decoration(Decoration::BOLD)
    );
    assert_eq!(segments[2], Segment::new("c", on_blue));
}

#[test]
fn named_close_tags_pop_like_bare_ones() {
    assert_eq!(
        markup::parse("[bold]a[/bold]b").unwrap(),
        markup::parse("[bold]a[/]b").unwrap()
    );
}

#[test]
fn link_url_ends_at_space() {
    let segments = markup::parse("[link=https://a.io/x bold]t[/]").unwrap();
    assert_eq!(segments[0].link().map(|l| l.url()), Some("https://a.io/x"));
    assert!(segments[0].style().decoration().contains(Decoration::BOLD));
}

#[test]
fn outer_style_under_nested_tags_keeps_link() {
    let segments = markup::parse("[link=https://a.io]x [bold]y[/][/]").unwrap();
    assert!(segments.iter().all(|s| s.link().map(|l| l.url()) == Some("https://a.io")));
}

#[test]
fn remove_strips_tags_and_unescapes() {
    assert_eq!(
        markup::remove("[bold red]Error:[/] [[not a tag]]").unwrap(),
        "Error: [not a tag]"
    );
}

#[test]
fn escape_then_parse_is_literal() {
    let text = "array[0] = map[key]";
    let segments = markup::parse(&markup::escape(text)).unwrap();
    assert_eq!(segments, vec![Segment::plain(text)]);
}

#[test]
fn highlight_first_occurrence_only() {
    let mark = Style::fg(Color::YELLOW);
    let segments = markup::highlight("ab ab", "ab", &mark).unwrap();
    assert_eq!(
        segments,
        vec![Segment::new("ab", mark), Segment::plain(" ab")]
    );
}

#[test]
fn parse_with_base_style() {
    let base = Style::plain().with_decoration(Decoration::DIM);
    let segments = markup::parse_with_style("a[red]b[/]", &base).unwrap();
    assert_eq!(segments[0].style(), &base);
    assert_eq!(segments[1].style(), &base.clone().with_foreground(Color::RED));
}
