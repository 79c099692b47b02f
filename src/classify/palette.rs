use crate::constants::classification::SHADE_COUNT;
use crossterm::style::Color;

/// Sequential choropleth palette, lightest first.
const SHADES: [(u8, u8, u8); SHADE_COUNT] = [
    (0xff, 0xff, 0xcc),
    (0xff, 0xed, 0xa0),
    (0xfe, 0xd9, 0x76),
    (0xfe, 0xb2, 0x4c),
    (0xfd, 0x8d, 0x3c),
    (0xfc, 0x4e, 0x2a),
    (0xe3, 0x1a, 0x1c),
    (0xbd, 0x00, 0x26),
    (0x80, 0x00, 0x26),
];

const NO_DATA: (u8, u8, u8) = (0xd9, 0xd9, 0xd9);

/// Fill color for a country-year total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorBucket {
    /// Zero, negative or absent total.
    NoData,
    /// Index into the palette, `0` lightest.
    Shade(u8),
}

impl ColorBucket {
    pub const DARKEST: ColorBucket = ColorBucket::Shade((SHADE_COUNT - 1) as u8);

    pub fn shade(index: usize) -> Self {
        ColorBucket::Shade(index.min(SHADE_COUNT - 1) as u8)
    }

    /// Palette position, `None` for no data.
    pub fn index(&self) -> Option<usize> {
        match self {
            ColorBucket::NoData => None,
            ColorBucket::Shade(i) => Some(*i as usize),
        }
    }

    fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorBucket::NoData => NO_DATA,
            ColorBucket::Shade(i) => SHADES[(*i as usize).min(SHADE_COUNT - 1)],
        }
    }

    /// CSS-style hex color, e.g. `"#ffffcc"`.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Terminal color for swatches.
    pub fn terminal_color(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb { r, g, b }
    }
}

/// Every shaded bucket, lightest first.
pub fn shades() -> impl Iterator<Item = ColorBucket> {
    (0..SHADE_COUNT).map(ColorBucket::shade)
}
