//! Unit tests for colors and degradation

use tessera::{Color, ColorSystem};

#[test]
fn pure_red_degrades_to_palette_red() {
    let red = Color::Rgb(255, 0, 0);
    assert_eq!(red.degrade(ColorSystem::EightBit).index(), Some(9));
    assert_eq!(red.degrade(ColorSystem::Standard).index(), Some(9));
    assert_eq!(red.degrade(ColorSystem::Legacy).index(), Some(1));
    assert_eq!(red.degrade(ColorSystem::NoColors), Color::Default);
    assert_eq!(red.degrade(ColorSystem::TrueColor), red);
}

#[test]
fn near_colors_pick_the_closest_entry() {
    let orange = Color::Rgb(255, 135, 0);
    assert_eq!(orange.degrade(ColorSystem::EightBit).index(), Some(208));
    let dark_grey = Color::Rgb(20, 20, 20);
    assert_eq!(dark_grey.degrade(ColorSystem::EightBit).index(), Some(233));
}

#[test]
fn index_outside_palette_is_degraded() {
    let bright = Color::Indexed(196);
    assert_eq!(bright.degrade(ColorSystem::Standard).index(), Some(9));
    assert_eq!(Color::Indexed(12).degrade(ColorSystem::Standard).index(), Some(12));
    assert_eq!(Color::Indexed(12).degrade(ColorSystem::Legacy).index(), Some(4));
}

#[test]
fn default_never_becomes_a_color() {
    for system in ColorSystem::ALL {
        assert_eq!(Color::Default.degrade(system), Color::Default);
    }
}

#[test]
fn hex_and_names() {
    assert_eq!(Color::from_hex("#f00"), Some(Color::RED));
    assert_eq!(Color::from_hex("#0000ff"), Some(Color::BLUE));
    assert_eq!(Color::from_hex("#12"), None);
    assert_eq!(Color::from_hex("#gg0000"), None);
    assert_eq!(Color::RED.name(), Some("red"));
    assert_eq!(Color::Indexed(100).name(), None);
}

#[test]
fn markup_tokens() {
    assert_eq!(Color::NAVY.to_markup(), "navy");
    assert_eq!(Color::Indexed(208).to_markup(), "color(208)");
    assert_eq!(Color::Rgb(255, 136, 0).to_markup(), "#ff8800");
    assert_eq!(Color::Default.to_string(), "default");
}

#[test]
fn color_system_names_parse() {
    for system in ColorSystem::ALL {
        assert_eq!(system.name().parse::<ColorSystem>(), Ok(system));
    }
    assert!("sepia".parse::<ColorSystem>().is_err());
    assert!(ColorSystem::Legacy < ColorSystem::TrueColor);
}
