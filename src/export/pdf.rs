//! Minimal PDF writer.
//!
//! Assembles a complete PDF by hand: numbered objects, content streams
//! with text and fill operators, a cross-reference table, and a trailer.
//! Only what the resume export needs is implemented: Helvetica base
//! fonts, filled rectangles, and left-aligned text runs. Gradients are
//! approximated as stacked horizontal strips.
//!
//! ```text
//! Document blocks
//!     ↓
//! PageComposer (blocks → per-page content streams)
//!     ↓
//! ObjectTable (assembles objects, xref, trailer)
//!     ↓
//! PDF bytes
//! ```

use crate::catalog::{blend_hex, hex_to_rgb, BackgroundKind, BackgroundOption, Theme};
use crate::preview::{Block, Document, Line, Role};
use chrono::Utc;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 54.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const GRADIENT_STRIPS: u32 = 24;

/// Object bodies in insertion order; index + 1 is the object id.
struct ObjectTable {
    objects: Vec<String>,
}

impl ObjectTable {
    fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    fn push(&mut self, body: String) -> usize {
        self.objects.push(body);
        self.objects.len()
    }

    /// Reserve an id to be filled in later (Pages needs its kids first).
    fn reserve(&mut self) -> usize {
        self.objects.push(String::new());
        self.objects.len()
    }

    fn set(&mut self, id: usize, body: String) {
        self.objects[id - 1] = body;
    }

    /// Serialize header, objects, xref table, and trailer.
    fn finish(self, root_id: usize, info_id: usize) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");
        // Binary marker comment so transports treat the file as binary.
        out.extend_from_slice(&[b'%', 0xe2, 0xe3, 0xcf, 0xd3, b'\n']);

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (index, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
            out.extend_from_slice(body.as_bytes());
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_pos = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", self.objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                self.objects.len() + 1,
                root_id,
                info_id,
                xref_pos
            )
            .as_bytes(),
        );
        out
    }
}

/// Accumulates content-stream operators for one page.
#[derive(Default)]
struct ContentStream {
    ops: String,
}

impl ContentStream {
    fn set_fill(&mut self, rgb: (u8, u8, u8)) {
        self.ops.push_str(&format!(
            "{:.3} {:.3} {:.3} rg\n",
            f32::from(rgb.0) / 255.0,
            f32::from(rgb.1) / 255.0,
            f32::from(rgb.2) / 255.0
        ));
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops
            .push_str(&format!("{x:.2} {y:.2} {w:.2} {h:.2} re f\n"));
    }

    fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.ops.push_str(&format!(
            "BT /{} {size:.1} Tf {x:.2} {y:.2} Td ({}) Tj ET\n",
            font.resource_name(),
            escape_text(text)
        ));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Oblique => "F3",
        }
    }

    fn base_name(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Oblique => "Helvetica-Oblique",
        }
    }
}

/// Escape PDF string delimiters and reduce to ASCII. Helvetica with the
/// default encoding covers everything the escape emits.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '•' | '·' => out.push('-'),
            '★' | '☆' => out.push('*'),
            c if c.is_ascii() && !c.is_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Rough Helvetica advance: average glyph width is close to half the font
/// size. Good enough for wrapping and centering body text.
fn estimated_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

fn wrap_to_width(text: &str, size: f32, width: f32) -> Vec<String> {
    let budget = (width / (size * 0.5)).max(8.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Role-specific print styling.
fn style_for(role: Role, theme: &Theme) -> (Font, f32, (u8, u8, u8)) {
    let text = hex_to_rgb(&theme.colors.text).unwrap_or((31, 41, 55));
    let dim = hex_to_rgb(&theme.colors.text_secondary).unwrap_or((107, 114, 128));
    let accent = hex_to_rgb(&theme.colors.accent).unwrap_or((59, 130, 246));
    match role {
        Role::Title => (Font::Bold, 22.0, (255, 255, 255)),
        Role::Subtitle => (Font::Regular, 10.0, (255, 255, 255)),
        Role::Emphasis => (Font::Bold, 10.5, text),
        Role::Body => (Font::Regular, 10.0, text),
        Role::Dim => (Font::Regular, 9.0, dim),
        Role::Accent => (Font::Regular, 9.5, accent),
    }
}

/// Walks the document blocks and produces one content stream per page.
struct PageComposer<'a> {
    theme: &'a Theme,
    background: &'a BackgroundOption,
    pages: Vec<ContentStream>,
    y: f32,
}

impl<'a> PageComposer<'a> {
    fn new(theme: &'a Theme, background: &'a BackgroundOption) -> Self {
        let mut composer = Self {
            theme,
            background,
            pages: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        };
        composer.new_page();
        composer
    }

    fn current(&mut self) -> &mut ContentStream {
        // A page always exists; new_page runs in the constructor.
        let index = self.pages.len() - 1;
        &mut self.pages[index]
    }

    fn new_page(&mut self) {
        let mut stream = ContentStream::default();
        paint_background(&mut stream, self.theme, self.background);
        self.pages.push(stream);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Claim vertical space, starting a fresh page when the current one is
    /// out of room.
    fn advance(&mut self, height: f32) -> f32 {
        if self.y - height < MARGIN {
            self.new_page();
        }
        self.y -= height;
        self.y
    }

    fn compose(&mut self, doc: &Document) {
        self.blocks(&doc.blocks);
    }

    fn blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Header { lines, tall } => self.header_band(lines, *tall),
                Block::SectionTitle(title) => self.section_title(title),
                Block::Text(line) => self.text_line(line),
                Block::SkillBar { name, level } => self.skill_bar(name, *level),
                Block::Spacer => {
                    self.advance(7.0);
                }
                Block::Columns { sidebar, main } => {
                    // Print flows one column after the other; the on-screen
                    // side-by-side arrangement is a screen affordance.
                    self.blocks(sidebar);
                    self.blocks(main);
                }
            }
        }
    }

    fn header_band(&mut self, lines: &[Line], tall: bool) {
        let band_height = if tall { 132.0 } else { 96.0 };
        // The band bleeds over the top margin to the page edge.
        let band_top = PAGE_HEIGHT;
        let band_bottom = band_top - band_height;

        let header = self.theme.gradients.header.clone();
        let stream = self.current();
        let strip_height = band_height / GRADIENT_STRIPS as f32;
        for strip in 0..GRADIENT_STRIPS {
            let t = strip as f32 / (GRADIENT_STRIPS - 1).max(1) as f32;
            let color = blend_hex(&header.start, &header.end, t).unwrap_or((37, 99, 235));
            stream.set_fill(color);
            stream.rect(
                0.0,
                band_top - (strip + 1) as f32 * strip_height,
                PAGE_WIDTH,
                strip_height + 0.5,
            );
        }

        let mut text_y = band_top - if tall { 52.0 } else { 40.0 };
        for line in lines {
            let text = line.plain_text();
            let role = line.spans.first().map_or(Role::Subtitle, |s| s.role);
            let (font, size, color) = style_for(role, self.theme);
            let x = (PAGE_WIDTH - estimated_width(&text, size)).max(MARGIN) / 2.0;
            let stream = self.current();
            stream.set_fill(color);
            stream.text(font, size, x, text_y, &text);
            text_y -= size * 1.5;
        }

        self.y = band_bottom - 16.0;
    }

    fn section_title(&mut self, title: &str) {
        let primary = hex_to_rgb(&self.theme.colors.primary).unwrap_or((37, 99, 235));
        let border = hex_to_rgb(&self.theme.colors.border).unwrap_or((229, 231, 235));
        let y = self.advance(24.0);
        let stream = self.current();
        stream.set_fill(primary);
        stream.text(Font::Bold, 13.0, MARGIN, y + 6.0, &title.to_uppercase());
        stream.set_fill(border);
        stream.rect(MARGIN, y + 1.0, CONTENT_WIDTH, 1.0);
    }

    fn text_line(&mut self, line: &Line) {
        let text = line.plain_text();
        if text.is_empty() {
            self.advance(6.0);
            return;
        }
        let role = line.spans.first().map_or(Role::Body, |s| s.role);
        let (font, size, color) = style_for(role, self.theme);
        for wrapped in wrap_to_width(&text, size, CONTENT_WIDTH) {
            let y = self.advance(size * 1.45);
            let stream = self.current();
            stream.set_fill(color);
            stream.text(font, size, MARGIN, y, &wrapped);
        }
    }

    fn skill_bar(&mut self, name: &str, level: u8) {
        let (font, size, color) = style_for(Role::Body, self.theme);
        let primary = hex_to_rgb(&self.theme.colors.primary).unwrap_or((37, 99, 235));
        let border = hex_to_rgb(&self.theme.colors.border).unwrap_or((229, 231, 235));
        let level = level.clamp(1, 5);

        let y = self.advance(size * 1.6);
        let bar_x = MARGIN + 180.0;
        let bar_width = 120.0;
        let stream = self.current();
        stream.set_fill(color);
        stream.text(font, size, MARGIN, y, name);
        stream.set_fill(border);
        stream.rect(bar_x, y, bar_width, 5.0);
        stream.set_fill(primary);
        stream.rect(bar_x, y, bar_width * f32::from(level) / 5.0, 5.0);
        stream.set_fill(color);
        let stars: String = (1..=5).map(|i| if i <= level { '*' } else { '.' }).collect();
        stream.text(Font::Regular, size, bar_x + bar_width + 12.0, y, &stars);
    }
}

fn paint_background(stream: &mut ContentStream, theme: &Theme, background: &BackgroundOption) {
    match background.kind {
        BackgroundKind::Color | BackgroundKind::Image => {
            let color = hex_to_rgb(&background.color).unwrap_or((255, 255, 255));
            stream.set_fill(color);
            stream.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);
        }
        BackgroundKind::Gradient => {
            let strip_height = PAGE_HEIGHT / GRADIENT_STRIPS as f32;
            for strip in 0..GRADIENT_STRIPS {
                let t = strip as f32 / (GRADIENT_STRIPS - 1) as f32;
                let color =
                    blend_hex(&background.color, &background.color_end, t).unwrap_or((255, 255, 255));
                stream.set_fill(color);
                stream.rect(
                    0.0,
                    PAGE_HEIGHT - (strip + 1) as f32 * strip_height,
                    PAGE_WIDTH,
                    strip_height + 0.5,
                );
            }
        }
    }
    // Dark palettes carry their own page color; a plain background option
    // defers to it so exported text stays readable.
    if let Some(color) = hex_to_rgb(&theme.colors.background) {
        if color != (255, 255, 255) && background.kind == BackgroundKind::Color {
            stream.set_fill(color);
            stream.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);
        }
    }
}

/// Render the document to complete PDF bytes.
pub fn render_pdf(doc: &Document, theme: &Theme, background: &BackgroundOption) -> Vec<u8> {
    let mut composer = PageComposer::new(theme, background);
    composer.compose(doc);

    let mut table = ObjectTable::new();
    let catalog_id = table.reserve();
    let pages_id = table.reserve();
    let info_id = table.push(format!(
        "<< /Producer (vitae) /CreationDate (D:{}) >>",
        Utc::now().format("%Y%m%d%H%M%SZ")
    ));

    let font_ids: Vec<(Font, usize)> = [Font::Regular, Font::Bold, Font::Oblique]
        .into_iter()
        .map(|font| {
            let id = table.push(format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
                font.base_name()
            ));
            (font, id)
        })
        .collect();
    let font_resources: String = font_ids
        .iter()
        .map(|(font, id)| format!("/{} {} 0 R ", font.resource_name(), id))
        .collect();

    let mut page_ids = Vec::new();
    for stream in composer.pages {
        let content_id = table.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            stream.ops.len(),
            stream.ops
        ));
        let page_id = table.push(format!(
            "<< /Type /Page /Parent {pages_id} 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << {font_resources}>> >> /Contents {content_id} 0 R >>"
        ));
        page_ids.push(page_id);
    }

    let kids: String = page_ids.iter().map(|id| format!("{id} 0 R ")).collect();
    table.set(
        pages_id,
        format!(
            "<< /Type /Pages /Kids [{kids}] /Count {} >>",
            page_ids.len()
        ),
    );
    table.set(
        catalog_id,
        format!("<< /Type /Catalog /Pages {pages_id} 0 R >>"),
    );

    table.finish(catalog_id, info_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_background, theme_by_id};
    use crate::preview::Span;

    fn sample_doc() -> Document {
        Document {
            blocks: vec![
                Block::Header {
                    lines: vec![Line::from_span("Ada Lovelace", Role::Title)],
                    tall: false,
                },
                Block::SectionTitle("Experience".to_string()),
                Block::Text(Line::from_span("Programmer (1842)", Role::Body)),
                Block::SkillBar {
                    name: "Mathematics".to_string(),
                    level: 5,
                },
            ],
        }
    }

    fn sample_theme() -> Theme {
        theme_by_id("classic-blue").expect("theme exists")
    }

    #[test]
    fn test_pdf_structure() {
        let bytes = render_pdf(&sample_doc(), &sample_theme(), &default_background());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Type /Pages"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("startxref"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        // Work on raw bytes: the binary marker comment is not valid UTF-8,
        // so lossy conversion would shift every offset.
        let bytes = render_pdf(&sample_doc(), &sample_theme(), &default_background());
        // First occurrence is the table itself ("startxref" comes later).
        let xref_at = bytes
            .windows(5)
            .position(|w| w == b"xref\n")
            .expect("xref present");
        let tail = String::from_utf8_lossy(&bytes[xref_at..]).into_owned();
        let entries: Vec<String> = tail
            .lines()
            .skip(3) // "xref", "0 n", free entry
            .take_while(|l| l.ends_with("n "))
            .map(str::to_string)
            .collect();
        assert!(!entries.is_empty());
        for (index, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().expect("numeric offset");
            let expected = format!("{} 0 obj", index + 1);
            assert_eq!(
                &bytes[offset..offset + expected.len()],
                expected.as_bytes(),
                "offset {offset} does not start object {}",
                index + 1
            );
        }
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_text("a • b"), "a - b");
        assert_eq!(escape_text("naïve"), "na?ve");
    }

    #[test]
    fn test_wrap_to_width() {
        let lines = wrap_to_width("one two three four five six", 10.0, 60.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_long_document_paginates() {
        let mut doc = sample_doc();
        for i in 0..200 {
            doc.blocks
                .push(Block::Text(Line {
                    spans: vec![Span::new(format!("Filler line {i}"), Role::Body)],
                }));
        }
        let bytes = render_pdf(&doc, &sample_theme(), &default_background());
        let text = String::from_utf8_lossy(&bytes);
        let count_marker = text.find("/Count ").expect("count present");
        let count: usize = text[count_marker + 7..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .expect("numeric count");
        assert!(count > 1, "expected pagination, got {count} page(s)");
    }
}
