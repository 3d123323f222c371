//! Property tests for the style model, markup and layout

use proptest::prelude::*;

use tessera::layout::{resolve_widths, ColumnConstraint, ColumnWidths};
use tessera::markup;
use tessera::render::render_lines;
use tessera::segment::line_width;
use tessera::{
    Capabilities, Color, ColorSystem, Decoration, Measurement, Paragraph, RenderContext, Segment,
    Style,
};

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Default),
        any::<u8>().prop_map(Color::Indexed),
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::Rgb(r, g, b)),
    ]
}

fn system() -> impl Strategy<Value = ColorSystem> {
    prop::sample::select(ColorSystem::ALL.to_vec())
}

fn constraint() -> impl Strategy<Value = ColumnConstraint> {
    (1usize..30, 0usize..30, 0usize..4, any::<bool>(), 0usize..4).prop_map(
        |(min, extra, padding, no_wrap, ratio)| {
            let mut c = ColumnConstraint::new(Measurement::new(min, min + extra));
            c.padding = padding;
            c.no_wrap = no_wrap;
            c.ratio = ratio;
            c
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_combine_ors_decorations(a in any::<u16>(), b in any::<u16>()) {
        let a = Decoration::from_bits_truncate(a);
        let b = Decoration::from_bits_truncate(b);
        let combined = Style::plain()
            .with_decoration(a)
            .combine(&Style::plain().with_decoration(b));
        prop_assert_eq!(combined.decoration(), a | b);
    }

    #[test]
    fn prop_degradation_composes(c in color(), s1 in system(), s2 in system()) {
        let (wide, narrow) = if s1 >= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert_eq!(c.degrade(wide).degrade(narrow), c.degrade(narrow));
    }

    #[test]
    fn prop_degraded_colors_fit_the_palette(c in color(), s in system()) {
        let degraded = c.degrade(s);
        match (s.palette_size(), degraded) {
            (_, Color::Default) => {}
            (Some(size), Color::Indexed(index)) => prop_assert!((index as usize) < size),
            (Some(_), Color::Rgb(..)) => prop_assert!(false, "rgb in palette system"),
            (None, _) => {}
        }
    }

    #[test]
    fn prop_layout_fits_budget(
        columns in prop::collection::vec(constraint(), 1..6),
        budget in 0usize..120,
        expand in any::<bool>(),
    ) {
        if let ColumnWidths::Fitted(widths) = resolve_widths(&columns, budget, expand) {
            let padding: usize = columns.iter().map(|c| c.padding).sum();
            prop_assert_eq!(widths.len(), columns.len());
            prop_assert!(widths.iter().sum::<usize>() + padding <= budget);
            prop_assert!(widths.iter().all(|w| *w > 0));
        }
    }

    #[test]
    fn prop_layout_keeps_natural_widths_when_they_fit(
        columns in prop::collection::vec(constraint(), 1..6),
    ) {
        let natural: Vec<usize> = columns.iter().map(|c| c.measurement.max()).collect();
        let padding: usize = columns.iter().map(|c| c.padding).sum();
        let budget = natural.iter().sum::<usize>() + padding;
        prop_assert_eq!(resolve_widths(&columns, budget, false), ColumnWidths::Fitted(natural));
    }

    #[test]
    fn prop_escape_then_remove_is_identity(text in ".*") {
        prop_assert_eq!(markup::remove(&markup::escape(&text)).unwrap(), text);
    }

    #[test]
    fn prop_escaped_text_parses_literally(text in ".*") {
        let segments = markup::parse(&markup::escape(&text)).unwrap();
        prop_assert_eq!(Segment::plain_text(&segments), text);
    }

    #[test]
    fn prop_paragraph_lines_fit_width(text in "[a-z ]{0,80}", width in 1usize..40) {
        let paragraph = Paragraph::plain(&text);
        let ctx = RenderContext::new(Capabilities::default());
        for line in render_lines(&paragraph, &ctx, width) {
            prop_assert!(line_width(&line) <= width);
        }
    }

    #[test]
    fn prop_render_at_max_does_not_wrap(words in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let text = words.join(" ");
        let paragraph = Paragraph::plain(&text);
        let ctx = RenderContext::new(Capabilities::default());
        let max = tessera::Renderable::measure(&paragraph, &ctx, 200).max();
        prop_assert_eq!(render_lines(&paragraph, &ctx, max).len(), 1);
    }
}
