//! Text decorations as a bit mask.

bitflags::bitflags! {
    /// Independent text attributes. Combining is a bitwise OR; there is no
    /// "off" bit, decorations only accumulate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decoration: u16 {
        const BOLD = 1;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const SLOW_BLINK = 1 << 4;
        const RAPID_BLINK = 1 << 5;
        const INVERT = 1 << 6;
        const CONCEAL = 1 << 7;
        const STRIKETHROUGH = 1 << 8;
    }
}

/// Canonical name and SGR code of every decoration, in SGR order.
const TABLE: [(&str, Decoration, u8); 9] = [
    ("bold", Decoration::BOLD, 1),
    ("dim", Decoration::DIM, 2),
    ("italic", Decoration::ITALIC, 3),
    ("underline", Decoration::UNDERLINE, 4),
    ("slowblink", Decoration::SLOW_BLINK, 5),
    ("rapidblink", Decoration::RAPID_BLINK, 6),
    ("invert", Decoration::INVERT, 7),
    ("conceal", Decoration::CONCEAL, 8),
    ("strikethrough", Decoration::STRIKETHROUGH, 9),
];

const ALIASES: [(&str, Decoration); 5] = [
    ("b", Decoration::BOLD),
    ("i", Decoration::ITALIC),
    ("u", Decoration::UNDERLINE),
    ("reverse", Decoration::INVERT),
    ("strike", Decoration::STRIKETHROUGH),
];

impl Decoration {
    /// Look up a decoration by name (case-insensitive). `none` is the empty set.
    pub fn by_name(name: &str) -> Option<Decoration> {
        let name = name.to_ascii_lowercase();
        if name == "none" {
            return Some(Decoration::empty());
        }
        TABLE
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, d, _)| *d)
            .or_else(|| ALIASES.iter().find(|(n, _)| *n == name).map(|(_, d)| *d))
    }

    /// SGR codes for each active bit, lowest first.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        TABLE
            .iter()
            .filter(move |(_, d, _)| self.contains(*d))
            .map(|(_, _, code)| *code)
    }

    /// Canonical names of each active bit.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        TABLE
            .iter()
            .filter(move |(_, d, _)| self.contains(*d))
            .map(|(name, _, _)| *name)
    }
}
