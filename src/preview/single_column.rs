//! Single-column layout strategy: a centered header band followed by
//! stacked full-width sections in a fixed order.

use super::document::{Block, Document};
use super::sections;
use crate::catalog::LayoutKind;
use crate::resume::Resume;

pub fn render(resume: &Resume, layout: LayoutKind) -> Document {
    let tall = layout == LayoutKind::HeaderFocus;
    let mut blocks = vec![sections::header(&resume.personal_info, tall)];
    blocks.push(Block::Spacer);

    blocks.extend(sections::summary(&resume.personal_info));
    blocks.extend(sections::experience(&resume.experience));
    blocks.extend(sections::education(&resume.education));
    blocks.extend(sections::skills(resume));
    blocks.extend(sections::projects(&resume.projects));
    blocks.extend(sections::certifications(&resume.certifications));
    blocks.extend(sections::languages(&resume.languages));
    blocks.extend(sections::awards(&resume.awards));
    blocks.extend(sections::volunteer(&resume.volunteer));
    blocks.extend(sections::references(&resume.references));

    Document { blocks }
}
