//! Two-column layout strategy: a fixed left sidebar (contact, skills,
//! education) beside the main flow (summary, experience, projects).

use super::document::{Block, Document};
use super::sections;
use crate::resume::Resume;

pub fn render(resume: &Resume) -> Document {
    let mut sidebar = Vec::new();
    sidebar.extend(sections::contact_sidebar(&resume.personal_info));
    sidebar.extend(sections::skills_flat(resume));
    sidebar.extend(sections::education(&resume.education));

    let mut main = Vec::new();
    main.extend(sections::summary(&resume.personal_info));
    main.extend(sections::experience(&resume.experience));
    main.extend(sections::projects(&resume.projects));

    Document {
        blocks: vec![
            sections::header(&resume.personal_info, false),
            Block::Spacer,
            Block::Columns { sidebar, main },
        ],
    }
}
