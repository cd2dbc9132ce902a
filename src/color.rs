use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Type badge colours
// ---------------------------------------------------------------------------

const TYPE_COLORS: &[(&str, &str)] = &[
    ("fire", "#EE8130"),
    ("water", "#6390F0"),
    ("grass", "#7AC74C"),
    ("electric", "#F7D02C"),
    ("ice", "#96D9D6"),
    ("fighting", "#C22E28"),
    ("poison", "#A33EA1"),
    ("ground", "#E2BF65"),
    ("flying", "#A98FF3"),
    ("psychic", "#F95587"),
    ("bug", "#A6B91A"),
    ("rock", "#B6A136"),
    ("ghost", "#735797"),
    ("dragon", "#6F35FC"),
    ("dark", "#705746"),
    ("steel", "#B7B7CE"),
    ("fairy", "#D685AD"),
    ("normal", "#A8A77A"),
];

/// Badge fill for types missing from the table.
pub const UNKNOWN_TYPE_COLOR: Color32 = Color32::from_rgb(0xAA, 0xAA, 0xAA);

fn hex_to_color32(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Badge colour for a type tag (exact, lowercase match).
pub fn type_color(type_tag: &str) -> Color32 {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_tag)
        .and_then(|(_, hex)| hex_to_color32(hex))
        .unwrap_or(UNKNOWN_TYPE_COLOR)
}

// ---------------------------------------------------------------------------
// Stat bar colours
// ---------------------------------------------------------------------------

/// Red for an empty bar through to green for a full one.
pub fn stat_fill(fraction: f32) -> Color32 {
    let hue = fraction.clamp(0.0, 1.0) * 120.0;
    let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
