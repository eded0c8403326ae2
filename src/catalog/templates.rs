//! # Template Catalog
//!
//! Static list of layout/visual-style descriptors. Templates are fixed at
//! compile time; only the selected id is persisted.

use std::fmt;

/// Grouping shown in the template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemplateCategory::Modern => "Modern",
            TemplateCategory::Classic => "Classic",
            TemplateCategory::Creative => "Creative",
            TemplateCategory::Minimal => "Minimal",
            TemplateCategory::Professional => "Professional",
        };
        f.write_str(label)
    }
}

/// How a template arranges the resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    SingleColumn,
    TwoColumn,
    Sidebar,
    HeaderFocus,
}

impl LayoutKind {
    /// Two-column and sidebar templates share the sidebar layout strategy;
    /// everything else renders single-column.
    pub fn uses_sidebar(self) -> bool {
        matches!(self, LayoutKind::TwoColumn | LayoutKind::Sidebar)
    }
}

/// One selectable template. `preview` is the swatch gradient shown in the
/// picker, unrelated to the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub preview: (&'static str, &'static str),
    pub layout: LayoutKind,
    pub features: &'static [&'static str],
}

/// The template applied when nothing is stored.
pub const DEFAULT_TEMPLATE_ID: &str = "modern-professional";

static TEMPLATES: [TemplateDescriptor; 12] = [
    TemplateDescriptor {
        id: "modern-professional",
        name: "Modern Professional",
        description: "Clean, modern design perfect for tech and business professionals",
        category: TemplateCategory::Modern,
        preview: ("#667eea", "#764ba2"),
        layout: LayoutKind::SingleColumn,
        features: &[
            "Clean typography",
            "Skill bars",
            "Modern icons",
            "Professional layout",
        ],
    },
    TemplateDescriptor {
        id: "executive-classic",
        name: "Executive Classic",
        description: "Traditional, elegant design for senior executives and managers",
        category: TemplateCategory::Classic,
        preview: ("#2c3e50", "#34495e"),
        layout: LayoutKind::SingleColumn,
        features: &[
            "Traditional layout",
            "Elegant typography",
            "Conservative design",
            "Executive focus",
        ],
    },
    TemplateDescriptor {
        id: "creative-designer",
        name: "Creative Designer",
        description: "Bold, creative layout perfect for designers and creative professionals",
        category: TemplateCategory::Creative,
        preview: ("#ff6b6b", "#ee5a24"),
        layout: LayoutKind::TwoColumn,
        features: &[
            "Creative layout",
            "Bold colors",
            "Visual elements",
            "Portfolio focus",
        ],
    },
    TemplateDescriptor {
        id: "minimal-clean",
        name: "Minimal Clean",
        description: "Ultra-clean, minimal design focusing on content over decoration",
        category: TemplateCategory::Minimal,
        preview: ("#f8f9fa", "#e9ecef"),
        layout: LayoutKind::SingleColumn,
        features: &[
            "Minimal design",
            "Focus on content",
            "Clean lines",
            "Subtle accents",
        ],
    },
    TemplateDescriptor {
        id: "tech-innovator",
        name: "Tech Innovator",
        description: "Modern tech-focused design with clean lines and tech aesthetics",
        category: TemplateCategory::Modern,
        preview: ("#00d2ff", "#3a7bd5"),
        layout: LayoutKind::Sidebar,
        features: &[
            "Tech aesthetic",
            "Sidebar layout",
            "Modern icons",
            "Skill visualization",
        ],
    },
    TemplateDescriptor {
        id: "corporate-blue",
        name: "Corporate Blue",
        description: "Professional corporate design in classic blue theme",
        category: TemplateCategory::Professional,
        preview: ("#1e3c72", "#2a5298"),
        layout: LayoutKind::HeaderFocus,
        features: &[
            "Corporate style",
            "Professional blue",
            "Header emphasis",
            "Business focused",
        ],
    },
    TemplateDescriptor {
        id: "creative-purple",
        name: "Creative Purple",
        description: "Vibrant purple theme for creative and marketing professionals",
        category: TemplateCategory::Creative,
        preview: ("#667eea", "#764ba2"),
        layout: LayoutKind::TwoColumn,
        features: &[
            "Purple theme",
            "Creative layout",
            "Visual hierarchy",
            "Modern design",
        ],
    },
    TemplateDescriptor {
        id: "elegant-green",
        name: "Elegant Green",
        description: "Sophisticated green design for environmental and consulting roles",
        category: TemplateCategory::Professional,
        preview: ("#11998e", "#38ef7d"),
        layout: LayoutKind::SingleColumn,
        features: &[
            "Green theme",
            "Elegant design",
            "Professional layout",
            "Sophisticated",
        ],
    },
    TemplateDescriptor {
        id: "startup-orange",
        name: "Startup Orange",
        description: "Dynamic orange theme perfect for startup and entrepreneurial roles",
        category: TemplateCategory::Modern,
        preview: ("#ff9a9e", "#fecfef"),
        layout: LayoutKind::Sidebar,
        features: &[
            "Orange theme",
            "Dynamic design",
            "Startup vibe",
            "Modern layout",
        ],
    },
    TemplateDescriptor {
        id: "academic-scholar",
        name: "Academic Scholar",
        description: "Traditional academic design for researchers and educators",
        category: TemplateCategory::Classic,
        preview: ("#8360c3", "#2ebf91"),
        layout: LayoutKind::SingleColumn,
        features: &[
            "Academic style",
            "Traditional layout",
            "Research focused",
            "Scholar design",
        ],
    },
    TemplateDescriptor {
        id: "finance-gold",
        name: "Finance Gold",
        description: "Luxurious gold theme for finance and banking professionals",
        category: TemplateCategory::Professional,
        preview: ("#f093fb", "#f5576c"),
        layout: LayoutKind::HeaderFocus,
        features: &[
            "Gold accents",
            "Finance focused",
            "Luxurious design",
            "Professional",
        ],
    },
    TemplateDescriptor {
        id: "healthcare-teal",
        name: "Healthcare Teal",
        description: "Calming teal design for healthcare and medical professionals",
        category: TemplateCategory::Professional,
        preview: ("#4facfe", "#00f2fe"),
        layout: LayoutKind::TwoColumn,
        features: &[
            "Teal theme",
            "Healthcare focused",
            "Calming design",
            "Medical professional",
        ],
    },
];

/// All templates, in picker order.
pub fn all_templates() -> &'static [TemplateDescriptor] {
    &TEMPLATES
}

/// Find a template by id.
pub fn template_by_id(id: &str) -> Option<&'static TemplateDescriptor> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates in the given category, in picker order.
pub fn templates_by_category(category: TemplateCategory) -> Vec<&'static TemplateDescriptor> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_templates() {
        assert_eq!(all_templates().len(), 12);
    }

    #[test]
    fn test_template_ids_are_distinct() {
        let ids: Vec<&str> = all_templates().iter().map(|t| t.id).collect();
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(ids.len(), unique.len(), "duplicate template ids found");
    }

    #[test]
    fn test_default_template_exists() {
        let template = template_by_id(DEFAULT_TEMPLATE_ID).expect("default exists");
        assert_eq!(template.name, "Modern Professional");
        assert_eq!(template.layout, LayoutKind::SingleColumn);
    }

    #[test]
    fn test_unknown_id_yields_none() {
        assert!(template_by_id("holographic-future").is_none());
    }

    #[test]
    fn test_by_category_filters() {
        let professional = templates_by_category(TemplateCategory::Professional);
        assert_eq!(professional.len(), 4);
        assert!(professional.iter().all(|t| t.category == TemplateCategory::Professional));
    }

    #[test]
    fn test_sidebar_dispatch() {
        assert!(LayoutKind::TwoColumn.uses_sidebar());
        assert!(LayoutKind::Sidebar.uses_sidebar());
        assert!(!LayoutKind::SingleColumn.uses_sidebar());
        assert!(!LayoutKind::HeaderFocus.uses_sidebar());
    }

    #[test]
    fn test_every_template_has_features() {
        assert!(all_templates().iter().all(|t| !t.features.is_empty()));
    }
}
