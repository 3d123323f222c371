//! The fixed xterm 256-color palette and the names of its standard entries.
//!
//! - 0..=15: the standard and bright colors
//! - 16..=231: a 6x6x6 color cube
//! - 232..=255: a 24-step grayscale ramp

/// RGB values of the 16 standard palette entries.
const STANDARD: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel levels of the 6x6x6 cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Names of the 16 standard entries, indexed by palette number.
pub(crate) const NAMES: [&str; 16] = [
    "black", "maroon", "green", "olive", "navy", "purple", "teal", "silver", "grey", "red",
    "lime", "yellow", "blue", "fuchsia", "aqua", "white",
];

/// Extra spellings accepted by the style parser.
pub(crate) const ALIASES: [(&str, u8); 5] = [
    ("gray", 8),
    ("magenta", 13),
    ("cyan", 14),
    ("darkred", 1),
    ("darkblue", 4),
];

/// RGB value of a palette entry.
pub fn rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => STANDARD[index as usize],
        16..=231 => {
            let i = (index - 16) as usize;
            (
                CUBE_LEVELS[i / 36],
                CUBE_LEVELS[(i / 6) % 6],
                CUBE_LEVELS[i % 6],
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    }
}

/// Look up a palette number by name or alias (case-insensitive).
pub fn lookup(name: &str) -> Option<u8> {
    let name = name.to_ascii_lowercase();
    NAMES
        .iter()
        .position(|n| *n == name)
        .map(|i| i as u8)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, index)| *index)
        })
}

/// Squared Euclidean distance between two RGB triples.
fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Index of the nearest entry among the first `size` palette entries.
///
/// Ties resolve to the lowest index, so exact matches in the standard range
/// win over their duplicates in the cube.
pub fn nearest(target: (u8, u8, u8), size: usize) -> u8 {
    let mut best = 0u8;
    let mut best_distance = u32::MAX;
    for index in 0..size.min(256) {
        let d = distance(target, rgb(index as u8));
        if d < best_distance {
            best = index as u8;
            best_distance = d;
            if d == 0 {
                break;
            }
        }
    }
    best
}
