//! # Preview Renderer
//!
//! Pure function from (resume, template) to a presentation-agnostic
//! [`Document`]. The active template's layout kind picks the strategy:
//! two-column and sidebar templates use the sidebar layout, everything
//! else renders single-column (header-focus gets a taller header band).
//!
//! Theme colors are applied later, by the painters: the terminal preview
//! maps semantic [`Role`]s onto the active palette, and the PDF exporter
//! does the same for print. Both consume the same document, so what you
//! see is what exports.

pub mod document;
mod sections;
mod single_column;
mod two_column;

pub use document::{Block, Document, Line, Role, Span};

use crate::catalog::TemplateDescriptor;
use crate::resume::Resume;

/// Render the resume under the given template.
pub fn render(resume: &Resume, template: &TemplateDescriptor) -> Document {
    if template.layout.uses_sidebar() {
        two_column::render(resume)
    } else {
        single_column::render(resume, template.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template_by_id;
    use crate::resume::{new_id, Experience, PersonalInfo, Project, Skill};

    fn sample_resume() -> Resume {
        let mut resume = Resume::default();
        resume.personal_info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            summary: "Analytical engine programmer.".to_string(),
            ..PersonalInfo::default()
        };
        resume.experience.push(Experience {
            id: new_id(),
            position: "Programmer".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            start_date: "1842-01".to_string(),
            end_date: "1843-09".to_string(),
            ..Experience::default()
        });
        resume.skills.push(Skill {
            id: new_id(),
            name: "Mathematics".to_string(),
            level: 5,
            ..Skill::default()
        });
        resume.projects.push(Project {
            id: new_id(),
            name: "Notes on the Analytical Engine".to_string(),
            description: "First published algorithm.".to_string(),
            ..Project::default()
        });
        resume
    }

    #[test]
    fn test_single_column_section_order() {
        let template = template_by_id("modern-professional").expect("template exists");
        let doc = render(&sample_resume(), template);

        let titles: Vec<String> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::SectionTitle(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            titles,
            vec!["Professional Summary", "Experience", "Skills", "Projects"]
        );
    }

    #[test]
    fn test_two_column_dispatch() {
        let template = template_by_id("creative-designer").expect("template exists");
        let doc = render(&sample_resume(), template);
        assert!(doc
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Columns { .. })));

        // Sidebar holds skills; main holds experience and projects.
        if let Some(Block::Columns { sidebar, main }) = doc
            .blocks
            .iter()
            .find(|b| matches!(b, Block::Columns { .. }))
        {
            let sidebar_doc = Document {
                blocks: sidebar.clone(),
            };
            let main_doc = Document {
                blocks: main.clone(),
            };
            assert!(sidebar_doc.has_section("Skills"));
            assert!(sidebar_doc.has_section("Contact"));
            assert!(main_doc.has_section("Experience"));
            assert!(main_doc.has_section("Projects"));
        }
    }

    #[test]
    fn test_sidebar_layout_uses_two_columns_too() {
        let template = template_by_id("tech-innovator").expect("template exists");
        let doc = render(&sample_resume(), template);
        assert!(doc
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Columns { .. })));
    }

    #[test]
    fn test_header_focus_requests_tall_header() {
        let template = template_by_id("corporate-blue").expect("template exists");
        let doc = render(&sample_resume(), template);
        assert!(matches!(
            doc.blocks.first(),
            Some(Block::Header { tall: true, .. })
        ));
    }

    #[test]
    fn test_empty_resume_renders_header_only() {
        let template = template_by_id("modern-professional").expect("template exists");
        let doc = render(&Resume::default(), template);
        let titles = doc
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::SectionTitle(_)))
            .count();
        assert_eq!(titles, 0);
    }
}
