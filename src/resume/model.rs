//! # Resume Data Model
//!
//! The [`Resume`] aggregate and its section record types.
//!
//! ## Overview
//!
//! A resume is a single nested record: one [`PersonalInfo`] block plus nine
//! ordered lists (experience, education, skills, projects, certifications,
//! languages, awards, volunteer work, references). Every list record carries
//! a generated string id that is unique within its list and never changes
//! after creation.
//!
//! All types serialize with camelCase field names so the persisted JSON
//! stays readable by earlier versions of the stored data.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a fresh record id. Ids are assigned once at creation time.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Clamp a proficiency level into the valid 1–5 range.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(1, 5)
}

/// Name, contact fields, and summary. Always present on a resume; every
/// field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

impl PersonalInfo {
    /// "First Last", trimmed; empty when both parts are empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A single work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl Experience {
    /// Enforce the current/end-date exclusivity: a current position has no
    /// end date, regardless of what was typed into the form.
    pub fn normalize(mut self) -> Self {
        if self.current {
            self.end_date.clear();
        }
        self
    }

    /// Date range as shown in previews ("2021-03 - Present").
    pub fn date_range(&self) -> String {
        let end = if self.current {
            "Present"
        } else {
            self.end_date.as_str()
        };
        format!("{} - {}", self.start_date, end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Fixed set of skill groupings. Previews render skills grouped by category
/// in this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    Languages,
    Tools,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Technical,
        SkillCategory::Languages,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
        SkillCategory::Other,
    ];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 1–5; clamped on construction.
    pub level: u8,
    pub category: SkillCategory,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: 3,
            category: SkillCategory::Technical,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Spoken-language proficiency labels, highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    #[default]
    Intermediate,
    Basic,
}

impl Proficiency {
    pub const ALL: [Proficiency; 5] = [
        Proficiency::Native,
        Proficiency::Fluent,
        Proficiency::Advanced,
        Proficiency::Intermediate,
        Proficiency::Basic,
    ];

    /// Label derived from a 1–5 star level. `Native` is never derived; it
    /// can only be chosen explicitly.
    pub fn from_level(level: u8) -> Self {
        match clamp_level(level) {
            1 | 2 => Proficiency::Basic,
            3 => Proficiency::Intermediate,
            4 => Proficiency::Advanced,
            _ => Proficiency::Fluent,
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: Proficiency,
    /// 1–5; clamped on construction.
    pub level: u8,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            proficiency: Proficiency::Intermediate,
            level: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A volunteer position. Shares the current/end-date exclusivity rule with
/// [`Experience`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerEntry {
    pub id: String,
    pub organization: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl VolunteerEntry {
    pub fn normalize(mut self) -> Self {
        if self.current {
            self.end_date.clear();
        }
        self
    }

    pub fn date_range(&self) -> String {
        let end = if self.current {
            "Present"
        } else {
            self.end_date.as_str()
        };
        format!("{} - {}", self.start_date, end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

/// The complete resume aggregate: one personal-info block plus nine ordered
/// section lists. Created once at startup (loaded or defaulted), mutated by
/// the section editors through [`ResumePatch`](crate::resume::ResumePatch)
/// application, and persisted after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub awards: Vec<Award>,
    pub volunteer: Vec<VolunteerEntry>,
    pub references: Vec<Reference>,
}

impl Resume {
    /// Skills in the given category, in insertion order.
    pub fn skills_in_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// True when every section (including personal info) is empty.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
            && self.languages.is_empty()
            && self.awards.is_empty()
            && self.volunteer.is_empty()
            && self.references.is_empty()
    }
}
