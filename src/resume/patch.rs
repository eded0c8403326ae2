//! Typed partial updates for the [`Resume`] aggregate.
//!
//! The store's update operation replaces exactly one top-level field per
//! call: the personal-info block as a whole, or an entire section list.
//! Per-item edits are the section editors' concern; by the time a change
//! reaches the store it is already a whole-list replacement.

use super::model::{
    Award, Certification, Education, Experience, Language, PersonalInfo, Project, Reference,
    Resume, Skill, VolunteerEntry,
};

/// One field-replacement update. Applying a patch never touches any other
/// field of the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumePatch {
    PersonalInfo(PersonalInfo),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Certifications(Vec<Certification>),
    Languages(Vec<Language>),
    Awards(Vec<Award>),
    Volunteer(Vec<VolunteerEntry>),
    References(Vec<Reference>),
}

impl Resume {
    /// Replace the field named by the patch, leaving the rest untouched.
    pub fn apply(&mut self, patch: ResumePatch) {
        match patch {
            ResumePatch::PersonalInfo(info) => self.personal_info = info,
            ResumePatch::Experience(list) => self.experience = list,
            ResumePatch::Education(list) => self.education = list,
            ResumePatch::Skills(list) => self.skills = list,
            ResumePatch::Projects(list) => self.projects = list,
            ResumePatch::Certifications(list) => self.certifications = list,
            ResumePatch::Languages(list) => self.languages = list,
            ResumePatch::Awards(list) => self.awards = list,
            ResumePatch::Volunteer(list) => self.volunteer = list,
            ResumePatch::References(list) => self.references = list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::model::new_id;

    #[test]
    fn test_apply_replaces_only_named_field() {
        let mut resume = Resume::default();
        resume.personal_info.first_name = "Ada".to_string();
        resume.education.push(Education {
            id: new_id(),
            institution: "Cambridge".to_string(),
            ..Education::default()
        });

        let experience = vec![Experience {
            id: new_id(),
            company: "Analytical Engines Ltd".to_string(),
            ..Experience::default()
        }];
        resume.apply(ResumePatch::Experience(experience.clone()));

        assert_eq!(resume.experience, experience);
        // Untouched fields keep their prior values.
        assert_eq!(resume.personal_info.first_name, "Ada");
        assert_eq!(resume.education.len(), 1);
    }

    #[test]
    fn test_apply_matches_manual_merge() {
        let mut via_patch = Resume::default();
        via_patch.skills.push(Skill {
            id: new_id(),
            name: "Rust".to_string(),
            ..Skill::default()
        });

        let mut manual = via_patch.clone();
        let info = PersonalInfo {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            ..PersonalInfo::default()
        };

        via_patch.apply(ResumePatch::PersonalInfo(info.clone()));
        manual.personal_info = info;

        assert_eq!(via_patch, manual);
    }

    #[test]
    fn test_apply_empty_list_clears_section() {
        let mut resume = Resume::default();
        resume.awards.push(Award {
            id: new_id(),
            title: "Turing Award".to_string(),
            ..Award::default()
        });
        resume.apply(ResumePatch::Awards(Vec::new()));
        assert!(resume.awards.is_empty());
    }
}
