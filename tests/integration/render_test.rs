//! End-to-end rendering: markup through widgets and the ANSI encoder

use tessera::ansi::{self, AnsiWriter};
use tessera::render::{render_lines, render_plain};
use tessera::segment::line_width;
use tessera::{
    markup, Capabilities, ColorSystem, Column, Console, Justify, Link, Paragraph, RenderContext,
    Table,
};

fn caps(color_system: ColorSystem) -> Capabilities {
    Capabilities {
        color_system,
        ..Capabilities::default()
    }
}

#[test]
fn three_equal_columns_in_twenty_four_cells() {
    let mut table = Table::new().show_header(false);
    for _ in 0..3 {
        table.add_column(Column::plain("")).unwrap();
    }
    table
        .add_row_markup(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"])
        .unwrap();

    let ctx = RenderContext::new(Capabilities::plain(24));
    let lines = render_lines(&table, &ctx, 24);
    assert!(lines.iter().all(|line| line_width(line) == 24));
    assert_eq!(
        render_plain(&table, &ctx, 24),
        "+------+-------+-------+\n\
         | aaaa | bbbbb | ccccc |\n\
         | aaaa | bbbbb | ccccc |\n\
         | aa   |       |       |\n\
         +------+-------+-------+"
    );
}

#[test]
fn unicode_table_wraps_widest_column() {
    let mut table = Table::new();
    table.add_column(Column::plain("Fruit")).unwrap();
    table
        .add_column(Column::plain("Qty").justify(Justify::Right))
        .unwrap();
    table.add_row_markup(&["[green]apple[/]", "3"]).unwrap();
    table.add_row_markup(&["banana split", "12"]).unwrap();

    let out = render_plain(&table, &RenderContext::default(), 20);
    insta::assert_snapshot!(out, @r"
    ┌────────────┬─────┐
    │ Fruit      │ Qty │
    ├────────────┼─────┤
    │ apple      │   3 │
    │ banana     │  12 │
    │ split      │     │
    └────────────┴─────┘
    ");
}

#[test]
fn encoded_output_strips_back_to_plain_text() {
    let source = "[bold red]Error:[/] see [link=https://example.com]docs[/] for [[details]]";
    let segments = markup::parse(source).unwrap();
    for system in ColorSystem::ALL {
        let encoded = ansi::encode(&segments, caps(system)).unwrap();
        assert_eq!(ansi::strip(&encoded), markup::remove(source).unwrap());
    }
}

#[test]
fn sgr_codes_per_color_system() {
    let segments = markup::parse("[bold red on blue]x[/]").unwrap();
    assert_eq!(
        ansi::encode(&segments, caps(ColorSystem::Standard)).unwrap(),
        "\x1b[1;91;104mx\x1b[0m"
    );
    assert_eq!(
        ansi::encode(&segments, caps(ColorSystem::EightBit)).unwrap(),
        "\x1b[1;38;5;9;48;5;12mx\x1b[0m"
    );
    assert_eq!(
        ansi::encode(&segments, caps(ColorSystem::NoColors)).unwrap(),
        "\x1b[1mx\x1b[0m"
    );

    let rgb = markup::parse("[#ff8800]x[/]").unwrap();
    assert_eq!(
        ansi::encode(&rgb, caps(ColorSystem::TrueColor)).unwrap(),
        "\x1b[38;2;255;136;0mx\x1b[0m"
    );
}

#[test]
fn hyperlinks_follow_capabilities() {
    let segments = markup::parse("[link=https://example.com]docs[/]").unwrap();

    let decoded = ansi::decode(&ansi::encode(&segments, Capabilities::default()).unwrap());
    assert_eq!(decoded.links, vec!["https://example.com".to_string()]);
    assert_eq!(decoded.text, "docs");

    let no_links = Capabilities {
        links: false,
        ..Capabilities::default()
    };
    let decoded = ansi::decode(&ansi::encode(&segments, no_links).unwrap());
    assert!(decoded.links.is_empty());
    assert_eq!(decoded.text, "docs");
}

#[test]
fn nested_links_resume_the_outer_link() {
    let outer = Link::with_id("https://outer.example", 1);
    let inner = Link::with_id("https://inner.example", 2);
    let mut writer = AnsiWriter::new(Vec::new(), Capabilities::default());
    writer.begin_link(&outer).unwrap();
    writer.begin_link(&inner).unwrap();
    assert_eq!(writer.link_depth(), 2);
    writer.end_link().unwrap();
    assert_eq!(writer.link_depth(), 1);
    writer.finish().unwrap();
    assert_eq!(writer.link_depth(), 0);

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(
        out,
        "\x1b]8;id=1;https://outer.example\x1b\\\
         \x1b]8;id=2;https://inner.example\x1b\\\
         \x1b]8;id=1;https://outer.example\x1b\\\
         \x1b]8;;\x1b\\"
    );
}

#[test]
fn plain_capabilities_emit_text_only() {
    let segments = markup::parse("[bold red link=https://x.io]hi[/] there").unwrap();
    assert_eq!(ansi::encode(&segments, Capabilities::plain(80)).unwrap(), "hi there");
}

#[test]
fn console_renders_table_and_paragraph() {
    let mut console = Console::new(Vec::new(), Capabilities::plain(30));
    let mut table = Table::new();
    table.add_column(Column::plain("k")).unwrap();
    table.add_column(Column::plain("v")).unwrap();
    table.add_row_markup(&["a", "1"]).unwrap();
    console.write_line(&table).unwrap();
    console
        .write_line(&Paragraph::from_markup("[italic]done[/]").unwrap())
        .unwrap();
    console.flush().unwrap();

    let out = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        out,
        "+---+---+\n| k | v |\n+---+---+\n| a | 1 |\n+---+---+\ndone\n"
    );
}
