use ratatui::style::Color;
use storage_compare::System;

pub const BACKGROUND: Color = Color::Rgb(0x0A, 0x0C, 0x10);
pub const TEXT: Color = Color::Rgb(0xE8, 0xEA, 0xF0);
pub const MUTED: Color = Color::Rgb(0x6B, 0x72, 0x80);
pub const FAINT: Color = Color::Rgb(0x37, 0x3D, 0x4A);
pub const GRID: Color = Color::Rgb(0x2A, 0x2F, 0x3A);

/// Brand colour, gray when the dataset colour does not parse
pub fn system_color(system: &System) -> Color {
    system
        .rgb()
        .map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

pub fn accent_color(system: &System) -> Color {
    storage_compare::dataset::parse_hex_color(&system.accent)
        .map_or(Color::DarkGray, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Mixes `color` over the background, `alpha` in 0..=1
pub fn blend(color: Color, alpha: f64) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let Color::Rgb(br, bg, bb) = BACKGROUND else {
        return color;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, back: u8| -> u8 {
        let value = f64::from(back) + (f64::from(fg) - f64::from(back)) * alpha;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = value.round().clamp(0.0, 255.0) as u8;
        channel
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
