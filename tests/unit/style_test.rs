//! Unit tests for style parsing and composition

use tessera::style::{parse_color, StyleError};
use tessera::{Color, Decoration, Style};

#[test]
fn parses_full_spec() {
    let style = Style::parse("bold underline red on blue").unwrap();
    assert_eq!(style.foreground(), Color::RED);
    assert_eq!(style.background(), Color::BLUE);
    assert_eq!(style.decoration(), Decoration::BOLD | Decoration::UNDERLINE);
    assert!(style.link().is_none());
}

#[test]
fn parses_link_and_keeps_url_case() {
    let style = Style::parse("italic link=https://Example.com/Path").unwrap();
    assert_eq!(style.link().map(|l| l.url()), Some("https://Example.com/Path"));
    assert_eq!(style.decoration(), Decoration::ITALIC);
}

#[test]
fn color_literals() {
    assert_eq!(parse_color("red").unwrap(), Color::RED);
    assert_eq!(parse_color("#ff0000").unwrap(), Color::RED);
    assert_eq!(parse_color("rgb(255,0,0)").unwrap(), Color::RED);
    assert_eq!(parse_color("color(9)").unwrap(), Color::RED);
    assert_eq!(parse_color("9").unwrap(), Color::RED);
    assert_eq!(parse_color("default").unwrap(), Color::Default);
}

#[test]
fn unknown_token_is_named() {
    let err = Style::parse("bold sparkly").unwrap_err();
    assert_eq!(err, StyleError::UnknownToken("sparkly".to_string()));
    assert_eq!(err.to_string(), "Could not find color or decoration 'sparkly'");
}

#[test]
fn range_errors_state_the_range() {
    let err = parse_color("color(300)").unwrap_err();
    assert!(err.to_string().contains("0-255"), "{err}");
    assert!(err.to_string().contains("300"), "{err}");
    assert!(parse_color("rgb(0,256,0)").is_err());
}

#[test]
fn plain_is_not_an_identity_on_the_overlay_side() {
    let red = Style::fg(Color::RED);
    assert_eq!(red.combine(&Style::plain()), red);
    assert_eq!(Style::plain().combine(&red), red);

    let blue = Style::fg(Color::BLUE);
    assert_eq!(red.combine(&blue).foreground(), Color::BLUE);
}

#[test]
fn first_link_wins() {
    let a = Style::parse("link=https://a.example").unwrap();
    let b = Style::parse("link=https://b.example").unwrap();
    assert_eq!(
        a.combine(&b).link().map(|l| l.url()),
        Some("https://a.example")
    );
}

#[test]
fn markup_text_round_trips() {
    for spec in ["bold red on blue", "default on navy", "italic strikethrough", "default"] {
        let style = Style::parse(spec).unwrap();
        assert_eq!(Style::parse(&style.to_markup()).unwrap(), style, "{spec}");
    }
    assert_eq!(Style::plain().to_markup(), "default");
    assert_eq!(
        Style::plain().with_background(Color::NAVY).to_markup(),
        "default on navy"
    );
}
