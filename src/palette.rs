//! Block colors
//!
//! The simulation never looks inside a [`ColorToken`]; it only asks a
//! [`ColorSource`] for a fresh one each time a block is placed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Opaque color carried on a block (packed 0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorToken(pub u32);

impl ColorToken {
    pub fn rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

/// Anything that can hand out block colors
pub trait ColorSource {
    fn next_color(&mut self) -> ColorToken;
}

impl<F> ColorSource for F
where
    F: FnMut() -> ColorToken,
{
    fn next_color(&mut self) -> ColorToken {
        self()
    }
}

/// Arcade palette
pub const ARCADE_COLORS: [ColorToken; 19] = [
    ColorToken(0xDC143C), // crimson
    ColorToken(0xFF4500), // orange red
    ColorToken(0xFFD700), // gold
    ColorToken(0x32CD32), // lime green
    ColorToken(0x00BFFF), // deep sky blue
    ColorToken(0x7B68EE), // medium slate blue
    ColorToken(0xDA70D6), // orchid
    ColorToken(0xFF7F50), // coral
    ColorToken(0x7FFF00), // chartreuse
    ColorToken(0x00FFFF), // aqua
    ColorToken(0x1E90FF), // dodger blue
    ColorToken(0x6A5ACD), // slate blue
    ColorToken(0xFF69B4), // hot pink
    ColorToken(0xC71585), // medium violet red
    ColorToken(0xFF6347), // tomato
    ColorToken(0x00FF7F), // spring green
    ColorToken(0x40E0D0), // turquoise
    ColorToken(0x5F9EA0), // cadet blue
    ColorToken(0xDDA0DD), // plum
];

/// Uniform pick from [`ARCADE_COLORS`], deterministic per seed
#[derive(Debug, Clone)]
pub struct Palette {
    rng: Pcg32,
}

impl Palette {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl ColorSource for Palette {
    fn next_color(&mut self) -> ColorToken {
        ARCADE_COLORS[self.rng.random_range(0..ARCADE_COLORS.len())]
    }
}

/// Cycles through a fixed list (for tests and replays)
#[derive(Debug, Clone)]
pub struct FixedColors {
    colors: Vec<ColorToken>,
    next: usize,
}

impl FixedColors {
    /// An empty list yields the default token forever
    pub fn new(colors: Vec<ColorToken>) -> Self {
        Self { colors, next: 0 }
    }
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> ColorToken {
        if self.colors.is_empty() {
            return ColorToken::default();
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_deterministic() {
        let mut a = Palette::new(42);
        let mut b = Palette::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_palette_stays_in_set() {
        let mut palette = Palette::new(7);
        for _ in 0..200 {
            assert!(ARCADE_COLORS.contains(&palette.next_color()));
        }
    }

    #[test]
    fn test_fixed_colors_cycle() {
        let mut fixed = FixedColors::new(vec![ColorToken(1), ColorToken(2)]);
        assert_eq!(fixed.next_color(), ColorToken(1));
        assert_eq!(fixed.next_color(), ColorToken(2));
        assert_eq!(fixed.next_color(), ColorToken(1));

        let mut empty = FixedColors::new(Vec::new());
        assert_eq!(empty.next_color(), ColorToken::default());
    }

    #[test]
    fn test_closure_source() {
        let mut n = 0;
        let mut source = || {
            n += 1;
            ColorToken(n)
        };
        assert_eq!(source.next_color(), ColorToken(1));
        assert_eq!(source.next_color(), ColorToken(2));
    }

    #[test]
    fn test_rgb_unpack() {
        assert_eq!(ColorToken(0xDC143C).rgb(), (0xDC, 0x14, 0x3C));
    }
}
