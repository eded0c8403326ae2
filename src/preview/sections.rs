//! Per-section block builders shared by the layout strategies.
//!
//! Every builder returns an empty vec for an empty section, so empty
//! sections contribute nothing to the document.

use super::document::{Block, Line, Role, Span};
use crate::resume::{
    Award, Certification, Education, Experience, Language, PersonalInfo, Project, Reference,
    Resume, SkillCategory, VolunteerEntry,
};

/// The header band: name, contact row, link row.
pub fn header(info: &PersonalInfo, tall: bool) -> Block {
    let mut lines = vec![Line::from_span(info.full_name(), Role::Title)];

    let contact: Vec<&str> = [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(Line::from_span(contact.join("  •  "), Role::Subtitle));
    }

    let links: Vec<&str> = [
        info.website.as_str(),
        info.linkedin.as_str(),
        info.github.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect();
    if !links.is_empty() {
        lines.push(Line::from_span(links.join("  •  "), Role::Subtitle));
    }

    Block::Header { lines, tall }
}

pub fn summary(info: &PersonalInfo) -> Vec<Block> {
    if info.summary.trim().is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Professional Summary".to_string())];
    blocks.extend(paragraph(&info.summary, Role::Body));
    blocks.push(Block::Spacer);
    blocks
}

pub fn experience(entries: &[Experience]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Experience".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.position, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.company, Role::Accent),
            (&entry.location, Role::Dim),
        ])));
        blocks.push(Block::Text(Line::from_span(entry.date_range(), Role::Dim)));
        blocks.extend(paragraph(&entry.description, Role::Body));
        blocks.push(Block::Spacer);
    }
    blocks
}

pub fn education(entries: &[Education]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Education".to_string())];
    for entry in entries {
        let degree = if entry.field.is_empty() {
            entry.degree.clone()
        } else {
            format!("{} in {}", entry.degree, entry.field)
        };
        blocks.push(Block::Text(Line::from_span(degree, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.institution, Role::Accent),
            (&entry.location, Role::Dim),
        ])));
        blocks.push(Block::Text(Line::from_span(
            format!("{} - {}", entry.start_date, entry.end_date),
            Role::Dim,
        )));
        if let Some(gpa) = &entry.gpa {
            if !gpa.is_empty() {
                blocks.push(Block::Text(Line::from_span(format!("GPA: {gpa}"), Role::Dim)));
            }
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

/// Skills grouped by category, each as a level bar.
pub fn skills(resume: &Resume) -> Vec<Block> {
    if resume.skills.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Skills".to_string())];
    for category in SkillCategory::ALL {
        let in_category = resume.skills_in_category(category);
        if in_category.is_empty() {
            continue;
        }
        blocks.push(Block::Text(Line::from_span(
            category.to_string(),
            Role::Emphasis,
        )));
        for skill in in_category {
            blocks.push(Block::SkillBar {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

/// Skills as one flat list of bars, for the sidebar.
pub fn skills_flat(resume: &Resume) -> Vec<Block> {
    if resume.skills.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Skills".to_string())];
    for skill in &resume.skills {
        blocks.push(Block::SkillBar {
            name: skill.name.clone(),
            level: skill.level,
        });
    }
    blocks.push(Block::Spacer);
    blocks
}

pub fn projects(entries: &[Project]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Projects".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.name, Role::Emphasis)));
        blocks.extend(paragraph(&entry.description, Role::Body));
        if !entry.technologies.is_empty() {
            blocks.push(Block::Text(Line::from_span(
                entry.technologies.join(" · "),
                Role::Accent,
            )));
        }
        for link in [&entry.url, &entry.github].into_iter().flatten() {
            if !link.is_empty() {
                blocks.push(Block::Text(Line::from_span(link, Role::Accent)));
            }
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

pub fn certifications(entries: &[Certification]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Certifications".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.name, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.issuer, Role::Accent),
            (&entry.date, Role::Dim),
        ])));
        if let Some(expiry) = &entry.expiry_date {
            if !expiry.is_empty() {
                blocks.push(Block::Text(Line::from_span(
                    format!("Expires {expiry}"),
                    Role::Dim,
                )));
            }
        }
        if let Some(credential) = &entry.credential_id {
            if !credential.is_empty() {
                blocks.push(Block::Text(Line::from_span(
                    format!("Credential {credential}"),
                    Role::Dim,
                )));
            }
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

pub fn languages(entries: &[Language]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Languages".to_string())];
    for entry in entries {
        blocks.push(Block::SkillBar {
            name: format!("{} ({})", entry.name, entry.proficiency),
            level: entry.level,
        });
    }
    blocks.push(Block::Spacer);
    blocks
}

pub fn awards(entries: &[Award]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Awards".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.title, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.issuer, Role::Accent),
            (&entry.date, Role::Dim),
        ])));
        if let Some(description) = &entry.description {
            blocks.extend(paragraph(description, Role::Body));
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

pub fn volunteer(entries: &[VolunteerEntry]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Volunteer Experience".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.position, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.organization, Role::Accent),
            (&entry.location, Role::Dim),
        ])));
        blocks.push(Block::Text(Line::from_span(entry.date_range(), Role::Dim)));
        blocks.extend(paragraph(&entry.description, Role::Body));
        blocks.push(Block::Spacer);
    }
    blocks
}

pub fn references(entries: &[Reference]) -> Vec<Block> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("References".to_string())];
    for entry in entries {
        blocks.push(Block::Text(Line::from_span(&entry.name, Role::Emphasis)));
        blocks.push(Block::Text(joined_line(&[
            (&entry.position, Role::Dim),
            (&entry.company, Role::Accent),
        ])));
        blocks.push(Block::Text(joined_line(&[
            (&entry.email, Role::Accent),
            (&entry.phone, Role::Dim),
        ])));
        if !entry.relationship.is_empty() {
            blocks.push(Block::Text(Line::from_span(&entry.relationship, Role::Dim)));
        }
        blocks.push(Block::Spacer);
    }
    blocks
}

/// Contact details as a sidebar section.
pub fn contact_sidebar(info: &PersonalInfo) -> Vec<Block> {
    let details: Vec<(&str, Role)> = [
        (info.email.as_str(), Role::Accent),
        (info.phone.as_str(), Role::Body),
        (info.location.as_str(), Role::Body),
        (info.website.as_str(), Role::Accent),
        (info.linkedin.as_str(), Role::Accent),
        (info.github.as_str(), Role::Accent),
    ]
    .into_iter()
    .filter(|(v, _)| !v.is_empty())
    .collect();

    if details.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![Block::SectionTitle("Contact".to_string())];
    for (value, role) in details {
        blocks.push(Block::Text(Line::from_span(value, role)));
    }
    blocks.push(Block::Spacer);
    blocks
}

/// Split multi-line text into body lines, dropping blank edges.
fn paragraph(text: &str, role: Role) -> Vec<Block> {
    text.trim()
        .lines()
        .map(|line| Block::Text(Line::from_span(line.trim_end(), role)))
        .collect()
}

/// Join the non-empty parts with a separator, keeping per-part roles.
fn joined_line(parts: &[(&str, Role)]) -> Line {
    let mut spans = Vec::new();
    for (text, role) in parts.iter().filter(|(t, _)| !t.is_empty()) {
        if !spans.is_empty() {
            spans.push(Span::new("  •  ", Role::Dim));
        }
        spans.push(Span::new(*text, *role));
    }
    Line { spans }
}
