//! # Theme Catalog
//!
//! Predefined color palettes, background options, and the custom-theme
//! override.
//!
//! ## Overview
//!
//! A [`Theme`] is a named set of eight colors plus two gradient stop pairs
//! (header band, page background). Rendering code never hardcodes colors;
//! it resolves everything through the active theme, so switching palettes
//! restyles the preview and the exported PDF alike.
//!
//! Six predefined palettes ship with the app. A [`CustomTheme`], when
//! active, replaces the resolved palette entirely with user-chosen colors,
//! a background option, and a solid-vs-gradient header toggle.

use ratatui::style::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The eight named colors every palette provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_secondary: String,
    pub background: String,
    pub surface: String,
    pub border: String,
}

/// Two hex stops; a solid fill is a gradient whose stops are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

impl Gradient {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn solid(color: &str) -> Self {
        Self::new(color, color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradients {
    pub header: Gradient,
    pub background: Gradient,
}

/// A named palette. Predefined themes come from [`predefined_themes`];
/// the synthesized custom theme uses the reserved id `custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub colors: ColorSet,
    pub gradients: Gradients,
}

/// How a background option paints the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Color,
    Gradient,
    Image,
}

/// Glyph tile used for image-pattern backgrounds in the terminal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternStyle {
    Dots,
    Diagonal,
}

/// One selectable page background: a solid color, a two-stop gradient, or
/// a tiled glyph pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundOption {
    pub id: String,
    pub name: String,
    pub kind: BackgroundKind,
    /// Solid fill, or the gradient's first stop.
    pub color: String,
    /// Gradient's second stop; equals `color` for solid fills.
    pub color_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternStyle>,
    /// Swatch shown in pickers.
    pub preview: String,
}

impl BackgroundOption {
    fn color(id: &str, name: &str, hex: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: BackgroundKind::Color,
            color: hex.to_string(),
            color_end: hex.to_string(),
            pattern: None,
            preview: hex.to_string(),
        }
    }

    fn gradient(id: &str, name: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: BackgroundKind::Gradient,
            color: start.to_string(),
            color_end: end.to_string(),
            pattern: None,
            preview: start.to_string(),
        }
    }

    fn image(id: &str, name: &str, base: &str, pattern: PatternStyle, preview: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: BackgroundKind::Image,
            color: base.to_string(),
            color_end: base.to_string(),
            pattern: Some(pattern),
            preview: preview.to_string(),
        }
    }
}

/// Header band fill for custom themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Solid,
    #[default]
    Gradient,
}

/// A user-authored theme override: full color set, background choice, and
/// header style. Persisted verbatim so it survives reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    pub colors: ColorSet,
    pub background: BackgroundOption,
    pub header_style: HeaderStyle,
}

impl Theme {
    /// Synthesize the effective theme from a custom override: gradient
    /// headers blend primary into secondary, solid headers use primary
    /// alone, and the page background comes from the chosen option.
    pub fn from_custom(custom: &CustomTheme) -> Self {
        let header = match custom.header_style {
            HeaderStyle::Gradient => {
                Gradient::new(&custom.colors.primary, &custom.colors.secondary)
            }
            HeaderStyle::Solid => Gradient::solid(&custom.colors.primary),
        };
        Theme {
            id: "custom".to_string(),
            name: "Custom".to_string(),
            colors: custom.colors.clone(),
            gradients: Gradients {
                header,
                background: Gradient::new(&custom.background.color, &custom.background.color_end),
            },
        }
    }
}

fn theme(
    id: &str,
    name: &str,
    colors: [&str; 8],
    header: (&str, &str),
    background: (&str, &str),
) -> Theme {
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        colors: ColorSet {
            primary: colors[0].to_string(),
            secondary: colors[1].to_string(),
            accent: colors[2].to_string(),
            text: colors[3].to_string(),
            text_secondary: colors[4].to_string(),
            background: colors[5].to_string(),
            surface: colors[6].to_string(),
            border: colors[7].to_string(),
        },
        gradients: Gradients {
            header: Gradient::new(header.0, header.1),
            background: Gradient::new(background.0, background.1),
        },
    }
}

/// The six predefined palettes, in picker order. The first is the default.
pub fn predefined_themes() -> Vec<Theme> {
    vec![
        theme(
            "classic-blue",
            "Classic Blue",
            [
                "#2563eb", "#1e40af", "#3b82f6", "#1f2937", "#6b7280", "#ffffff", "#f8fafc",
                "#e5e7eb",
            ],
            ("#2563eb", "#1e40af"),
            ("#f8fafc", "#e2e8f0"),
        ),
        theme(
            "emerald-fresh",
            "Emerald Fresh",
            [
                "#10b981", "#059669", "#34d399", "#1f2937", "#6b7280", "#ffffff", "#f0fdf4",
                "#d1fae5",
            ],
            ("#10b981", "#059669"),
            ("#f0fdf4", "#dcfce7"),
        ),
        theme(
            "purple-modern",
            "Purple Modern",
            [
                "#8b5cf6", "#7c3aed", "#a78bfa", "#1f2937", "#6b7280", "#ffffff", "#faf5ff",
                "#e9d5ff",
            ],
            ("#8b5cf6", "#7c3aed"),
            ("#faf5ff", "#f3e8ff"),
        ),
        theme(
            "rose-elegant",
            "Rose Elegant",
            [
                "#f43f5e", "#e11d48", "#fb7185", "#1f2937", "#6b7280", "#ffffff", "#fff1f2",
                "#fecdd3",
            ],
            ("#f43f5e", "#e11d48"),
            ("#fff1f2", "#ffe4e6"),
        ),
        theme(
            "dark-professional",
            "Dark Professional",
            [
                "#3b82f6", "#1d4ed8", "#60a5fa", "#f9fafb", "#d1d5db", "#111827", "#1f2937",
                "#374151",
            ],
            ("#1f2937", "#111827"),
            ("#111827", "#0f172a"),
        ),
        theme(
            "orange-creative",
            "Orange Creative",
            [
                "#f97316", "#ea580c", "#fb923c", "#1f2937", "#6b7280", "#ffffff", "#fff7ed",
                "#fed7aa",
            ],
            ("#f97316", "#ea580c"),
            ("#fff7ed", "#ffedd5"),
        ),
    ]
}

/// Background options, in picker order. The first ("white") is the default
/// used whenever no custom theme is active.
pub fn background_options() -> Vec<BackgroundOption> {
    vec![
        BackgroundOption::color("white", "Clean White", "#ffffff"),
        BackgroundOption::color("light-gray", "Light Gray", "#f8fafc"),
        BackgroundOption::color("warm-white", "Warm White", "#fefcf3"),
        BackgroundOption::gradient("gradient-blue", "Blue Gradient", "#f0f9ff", "#e0f2fe"),
        BackgroundOption::gradient("gradient-green", "Green Gradient", "#f0fdf4", "#dcfce7"),
        BackgroundOption::gradient("gradient-purple", "Purple Gradient", "#faf5ff", "#f3e8ff"),
        BackgroundOption::image(
            "subtle-pattern",
            "Subtle Pattern",
            "#f8fafc",
            PatternStyle::Dots,
            "#f8fafc",
        ),
        BackgroundOption::image(
            "geometric-pattern",
            "Geometric Pattern",
            "#f1f5f9",
            PatternStyle::Diagonal,
            "#f1f5f9",
        ),
    ]
}

/// Find a predefined theme by id.
pub fn theme_by_id(id: &str) -> Option<Theme> {
    predefined_themes().into_iter().find(|t| t.id == id)
}

/// Find a background option by id.
pub fn background_by_id(id: &str) -> Option<BackgroundOption> {
    background_options().into_iter().find(|b| b.id == id)
}

/// The fallback background: clean white.
pub fn default_background() -> BackgroundOption {
    BackgroundOption::color("white", "Clean White", "#ffffff")
}

/// Validate a user-entered `#rrggbb` color.
pub fn is_valid_hex(value: &str) -> bool {
    Regex::new(r"^#[0-9a-fA-F]{6}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Parse `#rrggbb` into a terminal color. Invalid input yields `None`;
/// callers fall back to the terminal default.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    if !is_valid_hex(hex) {
        return None;
    }
    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse `#rrggbb` into 0–255 components for the PDF writer.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    match hex_to_color(hex) {
        Some(Color::Rgb(r, g, b)) => Some((r, g, b)),
        _ => None,
    }
}

/// Linear blend between two hex colors, `t` in [0,1]. Used to approximate
/// gradients as horizontal strips.
pub fn blend_hex(start: &str, end: &str, t: f32) -> Option<(u8, u8, u8)> {
    let (r1, g1, b1) = hex_to_rgb(start)?;
    let (r2, g2, b2) = hex_to_rgb(end)?;
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    Some((mix(r1, r2), mix(g1, g2), mix(b1, b2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_predefined_themes() {
        assert_eq!(predefined_themes().len(), 6);
    }

    #[test]
    fn test_theme_ids_are_distinct() {
        let ids: Vec<String> = predefined_themes().into_iter().map(|t| t.id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(ids.len(), unique.len(), "duplicate theme ids found");
    }

    #[test]
    fn test_purple_modern_primary() {
        let theme = theme_by_id("purple-modern").expect("theme exists");
        assert_eq!(theme.colors.primary, "#8b5cf6");
    }

    #[test]
    fn test_unknown_theme_id() {
        assert!(theme_by_id("neon-nonexistent").is_none());
    }

    #[test]
    fn test_eight_background_options() {
        let options = background_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0].id, "white");
        assert_eq!(
            options
                .iter()
                .filter(|o| o.kind == BackgroundKind::Gradient)
                .count(),
            3
        );
        assert_eq!(
            options
                .iter()
                .filter(|o| o.kind == BackgroundKind::Image)
                .count(),
            2
        );
    }

    #[test]
    fn test_default_background_is_white() {
        let bg = default_background();
        assert_eq!(bg.id, "white");
        assert_eq!(bg.kind, BackgroundKind::Color);
        assert_eq!(bg.color, "#ffffff");
    }

    #[test]
    fn test_custom_theme_gradient_header() {
        let base = theme_by_id("classic-blue").expect("theme exists");
        let custom = CustomTheme {
            colors: base.colors.clone(),
            background: default_background(),
            header_style: HeaderStyle::Gradient,
        };
        let resolved = Theme::from_custom(&custom);
        assert_eq!(resolved.id, "custom");
        assert_eq!(resolved.gradients.header.start, base.colors.primary);
        assert_eq!(resolved.gradients.header.end, base.colors.secondary);
    }

    #[test]
    fn test_custom_theme_solid_header() {
        let base = theme_by_id("classic-blue").expect("theme exists");
        let custom = CustomTheme {
            colors: base.colors.clone(),
            background: default_background(),
            header_style: HeaderStyle::Solid,
        };
        let resolved = Theme::from_custom(&custom);
        assert_eq!(resolved.gradients.header.start, resolved.gradients.header.end);
        assert_eq!(resolved.gradients.header.start, base.colors.primary);
    }

    #[test]
    fn test_hex_validation() {
        assert!(is_valid_hex("#8b5cf6"));
        assert!(is_valid_hex("#FFFFFF"));
        assert!(!is_valid_hex("8b5cf6"));
        assert!(!is_valid_hex("#8b5cf"));
        assert!(!is_valid_hex("#8b5cg6"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#8b5cf6"), Some(Color::Rgb(0x8b, 0x5c, 0xf6)));
        assert_eq!(hex_to_color("nope"), None);
    }

    #[test]
    fn test_blend_hex_endpoints() {
        assert_eq!(blend_hex("#000000", "#ffffff", 0.0), Some((0, 0, 0)));
        assert_eq!(blend_hex("#000000", "#ffffff", 1.0), Some((255, 255, 255)));
        let mid = blend_hex("#000000", "#ffffff", 0.5).expect("valid stops");
        assert!(mid.0 >= 127 && mid.0 <= 128);
    }

    #[test]
    fn test_custom_theme_serializes_wire_shape() {
        let custom = CustomTheme {
            colors: theme_by_id("rose-elegant").expect("theme exists").colors,
            background: default_background(),
            header_style: HeaderStyle::Solid,
        };
        let json = serde_json::to_string(&custom).expect("serialize");
        assert!(json.contains("\"headerStyle\":\"solid\""));
        assert!(json.contains("\"textSecondary\""));
    }
}
