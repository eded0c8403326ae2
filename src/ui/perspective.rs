//! Decorative perspective ("3D") preview.
//!
//! Paints the same document the 2D preview consumes as a tilted card
//! receding toward the top of the pane: upper rows shrink, indent, and
//! fade. Pure presentation; nothing here feeds back into application
//! state, and the export adapter never captures this view.

use crate::catalog::{hex_to_rgb, Theme};
use crate::preview::Document;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Fraction of the card width lost at the far (top) edge.
const FAR_SCALE: f32 = 0.55;
/// Horizontal shear applied at the far edge, in cells.
const SHEAR: f32 = 6.0;

fn shade(rgb: (u8, u8, u8), factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    let apply = |c: u8| -> u8 { (f32::from(c) * factor) as u8 };
    Color::Rgb(apply(rgb.0), apply(rgb.1), apply(rgb.2))
}

/// Paint the document as a depth-shaded card filling `width` x `height`.
pub fn paint(doc: &Document, theme: &Theme, width: usize, height: usize) -> Vec<Line<'static>> {
    if width < 16 || height < 4 {
        return vec![Line::from("(window too small for the 3D view)")];
    }

    let text_rgb = hex_to_rgb(&theme.colors.text).unwrap_or((205, 214, 244));
    let primary_rgb = hex_to_rgb(&theme.colors.primary).unwrap_or((37, 99, 235));
    let surface_rgb = hex_to_rgb(&theme.colors.surface).unwrap_or((248, 250, 252));

    let content = doc.plain_lines();
    let rows = height.saturating_sub(1);
    let base_width = width.saturating_sub(SHEAR as usize + 4);

    let mut out = Vec::with_capacity(height);
    for row in 0..rows {
        // 0.0 at the far (top) edge, 1.0 at the near (bottom) edge.
        let t = row as f32 / rows.max(1) as f32;
        let scale = FAR_SCALE + (1.0 - FAR_SCALE) * t;
        let card_width = ((base_width as f32) * scale) as usize;
        let shear = (SHEAR * (1.0 - t)) as usize;
        let indent = (width.saturating_sub(card_width)) / 2 + shear;

        let text = content.get(row).cloned().unwrap_or_default();
        let clipped: String = text.chars().take(card_width.saturating_sub(2)).collect();
        let fill = card_width.saturating_sub(2 + clipped.chars().count());

        // The first rows belong to the header band; tint them with the
        // primary color, the rest with the shaded text color.
        let ink = if row < 3 {
            shade(primary_rgb, 0.55 + 0.45 * t)
        } else {
            shade(text_rgb, 0.4 + 0.6 * t)
        };
        let face = shade(surface_rgb, 0.35 + 0.65 * t);

        out.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled("▌", Style::default().fg(face)),
            Span::styled(clipped, Style::default().fg(ink)),
            Span::raw(" ".repeat(fill)),
            Span::styled("▐", Style::default().fg(face)),
        ]));
    }

    // Drop shadow under the near edge.
    let shadow_width = base_width + 2;
    let shadow_indent = (width.saturating_sub(shadow_width)) / 2 + 1;
    out.push(Line::from(vec![
        Span::raw(" ".repeat(shadow_indent)),
        Span::styled(
            "▀".repeat(shadow_width),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::theme_by_id;
    use crate::preview::{Block, Line as DocLine, Role};

    fn sample_doc() -> Document {
        Document {
            blocks: vec![Block::Text(DocLine::from_span("Ada Lovelace", Role::Title))],
        }
    }

    #[test]
    fn test_paint_fills_requested_height() {
        let theme = theme_by_id("classic-blue").expect("theme exists");
        let lines = paint(&sample_doc(), &theme, 80, 24);
        assert_eq!(lines.len(), 24);
    }

    #[test]
    fn test_tiny_pane_degrades_gracefully() {
        let theme = theme_by_id("classic-blue").expect("theme exists");
        let lines = paint(&sample_doc(), &theme, 10, 2);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_rows_shrink_toward_top() {
        let theme = theme_by_id("classic-blue").expect("theme exists");
        let lines = paint(&sample_doc(), &theme, 80, 20);
        fn row_width(line: &Line<'_>) -> usize {
            line.spans
                .iter()
                .map(|s| s.content.chars().count())
                .sum()
        }
        // The top row (far edge) occupies fewer cells than the bottom row.
        assert!(row_width(&lines[0]) < row_width(&lines[17]));
    }
}
