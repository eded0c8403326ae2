//! The layout model produced by the preview renderer.
//!
//! A [`Document`] is presentation-agnostic: semantic roles instead of
//! colors, blocks instead of widgets. The terminal painter and the PDF
//! exporter both consume this model, so the preview on screen and the
//! exported file come from the same data.

/// Semantic text role. Painters map roles onto the active theme's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The name line in the header band.
    Title,
    /// Position or tagline under the title.
    Subtitle,
    /// Record headings (company, institution, project name).
    Emphasis,
    /// Regular body text.
    Body,
    /// Secondary text (dates, locations, issuers).
    Dim,
    /// Accent-colored text (links, technology tags).
    Accent,
}

/// One styled fragment of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub role: Role,
}

impl Span {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// One line of spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn from_span(text: impl Into<String>, role: Role) -> Self {
        Self {
            spans: vec![Span::new(text, role)],
        }
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One layout element.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// The header band, painted with the theme's header gradient.
    /// `tall` requests extra vertical padding (header-focus templates).
    Header { lines: Vec<Line>, tall: bool },
    /// A section heading with a rule under it.
    SectionTitle(String),
    /// One line of styled text.
    Text(Line),
    /// A named proficiency: filled-fraction bar (`level`/5) plus a star
    /// row. Painters decide glyphs vs. rectangles.
    SkillBar { name: String, level: u8 },
    /// Vertical breathing room.
    Spacer,
    /// The two-column region: sidebar plus main flow. Appears at most once,
    /// at the top level, for two-column/sidebar templates.
    Columns {
        sidebar: Vec<Block>,
        main: Vec<Block>,
    },
}

/// The rendered resume: a flat list of blocks (single-column layouts) or a
/// header plus one [`Block::Columns`] region (two-column layouts).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// All text content, flattened. Used by tests and the perspective view.
    pub fn plain_lines(&self) -> Vec<String> {
        fn walk(blocks: &[Block], out: &mut Vec<String>) {
            for block in blocks {
                match block {
                    Block::Header { lines, .. } => {
                        for line in lines {
                            out.push(line.plain_text());
                        }
                    }
                    Block::SectionTitle(title) => out.push(title.clone()),
                    Block::Text(line) => out.push(line.plain_text()),
                    Block::SkillBar { name, .. } => out.push(name.clone()),
                    Block::Spacer => {}
                    Block::Columns { sidebar, main } => {
                        walk(sidebar, out);
                        walk(main, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }

    /// True when the document contains a section with the given title.
    pub fn has_section(&self, title: &str) -> bool {
        fn contains(blocks: &[Block], title: &str) -> bool {
            blocks.iter().any(|block| match block {
                Block::SectionTitle(t) => t == title,
                Block::Columns { sidebar, main } => {
                    contains(sidebar, title) || contains(main, title)
                }
                _ => false,
            })
        }
        contains(&self.blocks, title)
    }
}
