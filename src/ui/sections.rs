//! # Section Schemas
//!
//! One tab per resume section plus the template and theme pickers. For each
//! list section this module defines the form fields, the record-to-form and
//! form-to-record conversions, and the commit/delete operations that turn a
//! finished form into a whole-list [`ResumePatch`].
//!
//! The repetition across sections is the point: every editor behaves
//! identically, only the field list differs.

use crate::resume::{
    clamp_level, new_id, Award, Certification, Education, EditorMode, Experience, Field,
    FieldValue, FormBuffer, Language, PersonalInfo, Proficiency, Project, Reference, Resume,
    ResumePatch, Skill, SkillCategory, VolunteerEntry,
};

const SKILL_CATEGORIES: [&str; 5] = ["Technical", "Languages", "Tools", "Soft Skills", "Other"];
const PROFICIENCIES: [&str; 5] = ["Native", "Fluent", "Advanced", "Intermediate", "Basic"];

/// The edit-step tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTab {
    Personal,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Volunteer,
    Awards,
    References,
    Template,
    Theme,
}

impl SectionTab {
    pub const ALL: [SectionTab; 12] = [
        SectionTab::Personal,
        SectionTab::Experience,
        SectionTab::Education,
        SectionTab::Skills,
        SectionTab::Projects,
        SectionTab::Certifications,
        SectionTab::Languages,
        SectionTab::Volunteer,
        SectionTab::Awards,
        SectionTab::References,
        SectionTab::Template,
        SectionTab::Theme,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionTab::Personal => "Personal Info",
            SectionTab::Experience => "Experience",
            SectionTab::Education => "Education",
            SectionTab::Skills => "Skills",
            SectionTab::Projects => "Projects",
            SectionTab::Certifications => "Certifications",
            SectionTab::Languages => "Languages",
            SectionTab::Volunteer => "Volunteer",
            SectionTab::Awards => "Awards",
            SectionTab::References => "References",
            SectionTab::Template => "Template",
            SectionTab::Theme => "Theme",
        }
    }

    pub fn index(self) -> usize {
        SectionTab::ALL
            .iter()
            .position(|t| *t == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        SectionTab::ALL[(self.index() + 1) % SectionTab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        SectionTab::ALL[index.checked_sub(1).unwrap_or(SectionTab::ALL.len() - 1)]
    }

    /// Tabs that edit a record list (everything except personal info and
    /// the two pickers).
    pub fn is_list_section(self) -> bool {
        !matches!(
            self,
            SectionTab::Personal | SectionTab::Template | SectionTab::Theme
        )
    }
}

/// Number of records in the active tab's list.
pub fn record_count(resume: &Resume, tab: SectionTab) -> usize {
    match tab {
        SectionTab::Experience => resume.experience.len(),
        SectionTab::Education => resume.education.len(),
        SectionTab::Skills => resume.skills.len(),
        SectionTab::Projects => resume.projects.len(),
        SectionTab::Certifications => resume.certifications.len(),
        SectionTab::Languages => resume.languages.len(),
        SectionTab::Volunteer => resume.volunteer.len(),
        SectionTab::Awards => resume.awards.len(),
        SectionTab::References => resume.references.len(),
        _ => 0,
    }
}

/// Display row for a record in the list pane: name plus a context hint.
pub fn record_label(resume: &Resume, tab: SectionTab, index: usize) -> Option<String> {
    fn pair(primary: &str, secondary: &str) -> String {
        if secondary.is_empty() {
            primary.to_string()
        } else {
            format!("{primary}  ({secondary})")
        }
    }
    match tab {
        SectionTab::Experience => resume
            .experience
            .get(index)
            .map(|e| pair(&e.position, &e.company)),
        SectionTab::Education => resume
            .education
            .get(index)
            .map(|e| pair(&e.degree, &e.institution)),
        SectionTab::Skills => resume
            .skills
            .get(index)
            .map(|s| pair(&s.name, &s.category.to_string())),
        SectionTab::Projects => resume.projects.get(index).map(|p| p.name.clone()),
        SectionTab::Certifications => resume
            .certifications
            .get(index)
            .map(|c| pair(&c.name, &c.issuer)),
        SectionTab::Languages => resume
            .languages
            .get(index)
            .map(|l| pair(&l.name, &l.proficiency.to_string())),
        SectionTab::Volunteer => resume
            .volunteer
            .get(index)
            .map(|v| pair(&v.position, &v.organization)),
        SectionTab::Awards => resume.awards.get(index).map(|a| pair(&a.title, &a.issuer)),
        SectionTab::References => resume
            .references
            .get(index)
            .map(|r| pair(&r.name, &r.company)),
        _ => None,
    }
}

/// Id of the record at `index` in the active tab's list.
pub fn record_id(resume: &Resume, tab: SectionTab, index: usize) -> Option<String> {
    match tab {
        SectionTab::Experience => resume.experience.get(index).map(|e| e.id.clone()),
        SectionTab::Education => resume.education.get(index).map(|e| e.id.clone()),
        SectionTab::Skills => resume.skills.get(index).map(|s| s.id.clone()),
        SectionTab::Projects => resume.projects.get(index).map(|p| p.id.clone()),
        SectionTab::Certifications => resume.certifications.get(index).map(|c| c.id.clone()),
        SectionTab::Languages => resume.languages.get(index).map(|l| l.id.clone()),
        SectionTab::Volunteer => resume.volunteer.get(index).map(|v| v.id.clone()),
        SectionTab::Awards => resume.awards.get(index).map(|a| a.id.clone()),
        SectionTab::References => resume.references.get(index).map(|r| r.id.clone()),
        _ => None,
    }
}

/// The personal-info form, preloaded from the current resume. The personal
/// tab edits the whole block at once instead of a record list.
pub fn personal_form(resume: &Resume) -> Vec<Field> {
    personal_fields(&resume.personal_info)
}

/// Empty form for adding a record to the given section.
pub fn blank_form(tab: SectionTab) -> Vec<Field> {
    match tab {
        SectionTab::Personal => personal_fields(&PersonalInfo::default()),
        SectionTab::Experience => experience_fields(&Experience::default()),
        SectionTab::Education => education_fields(&Education::default()),
        SectionTab::Skills => skill_fields(&Skill::default()),
        SectionTab::Projects => project_fields(&Project::default()),
        SectionTab::Certifications => certification_fields(&Certification::default()),
        SectionTab::Languages => language_fields(&Language::default()),
        SectionTab::Volunteer => volunteer_fields(&VolunteerEntry::default()),
        SectionTab::Awards => award_fields(&Award::default()),
        SectionTab::References => reference_fields(&Reference::default()),
        SectionTab::Template | SectionTab::Theme => Vec::new(),
    }
}

/// Form preloaded with an existing record's fields.
pub fn form_for_record(resume: &Resume, tab: SectionTab, id: &str) -> Option<Vec<Field>> {
    match tab {
        SectionTab::Experience => resume
            .experience
            .iter()
            .find(|e| e.id == id)
            .map(experience_fields),
        SectionTab::Education => resume
            .education
            .iter()
            .find(|e| e.id == id)
            .map(education_fields),
        SectionTab::Skills => resume.skills.iter().find(|s| s.id == id).map(skill_fields),
        SectionTab::Projects => resume
            .projects
            .iter()
            .find(|p| p.id == id)
            .map(project_fields),
        SectionTab::Certifications => resume
            .certifications
            .iter()
            .find(|c| c.id == id)
            .map(certification_fields),
        SectionTab::Languages => resume
            .languages
            .iter()
            .find(|l| l.id == id)
            .map(language_fields),
        SectionTab::Volunteer => resume
            .volunteer
            .iter()
            .find(|v| v.id == id)
            .map(volunteer_fields),
        SectionTab::Awards => resume.awards.iter().find(|a| a.id == id).map(award_fields),
        SectionTab::References => resume
            .references
            .iter()
            .find(|r| r.id == id)
            .map(reference_fields),
        _ => None,
    }
}

fn personal_fields(info: &PersonalInfo) -> Vec<Field> {
    vec![
        Field::new("First Name", FieldValue::text(&info.first_name)),
        Field::new("Last Name", FieldValue::text(&info.last_name)),
        Field::new("Email", FieldValue::text(&info.email)),
        Field::new("Phone", FieldValue::text(&info.phone)),
        Field::new("Location", FieldValue::text(&info.location)),
        Field::new("Website", FieldValue::text(&info.website)),
        Field::new("LinkedIn", FieldValue::text(&info.linkedin)),
        Field::new("GitHub", FieldValue::text(&info.github)),
        Field::new("Summary", FieldValue::multiline(&info.summary)),
    ]
}

fn experience_fields(entry: &Experience) -> Vec<Field> {
    vec![
        Field::required("Company", FieldValue::text(&entry.company)),
        Field::required("Position", FieldValue::text(&entry.position)),
        Field::new("Location", FieldValue::text(&entry.location)),
        Field::required("Start Date", FieldValue::text(&entry.start_date)),
        Field::new("End Date", FieldValue::text(&entry.end_date)),
        Field::new("Current Position", FieldValue::Flag(entry.current)),
        Field::new("Description", FieldValue::multiline(&entry.description)),
    ]
}

fn education_fields(entry: &Education) -> Vec<Field> {
    vec![
        Field::required("Institution", FieldValue::text(&entry.institution)),
        Field::required("Degree", FieldValue::text(&entry.degree)),
        Field::new("Field of Study", FieldValue::text(&entry.field)),
        Field::new("Location", FieldValue::text(&entry.location)),
        Field::required("Start Date", FieldValue::text(&entry.start_date)),
        Field::new("End Date", FieldValue::text(&entry.end_date)),
        Field::new(
            "GPA",
            FieldValue::text(entry.gpa.clone().unwrap_or_default()),
        ),
    ]
}

fn skill_fields(entry: &Skill) -> Vec<Field> {
    vec![
        Field::required("Name", FieldValue::text(&entry.name)),
        Field::new("Level", FieldValue::Stars(clamp_level(entry.level))),
        Field::new(
            "Category",
            FieldValue::choice(&SKILL_CATEGORIES, &entry.category.to_string()),
        ),
    ]
}

fn project_fields(entry: &Project) -> Vec<Field> {
    vec![
        Field::required("Name", FieldValue::text(&entry.name)),
        Field::required("Description", FieldValue::multiline(&entry.description)),
        Field::new(
            "Technologies",
            FieldValue::text(entry.technologies.join(", ")),
        ),
        Field::new(
            "URL",
            FieldValue::text(entry.url.clone().unwrap_or_default()),
        ),
        Field::new(
            "GitHub",
            FieldValue::text(entry.github.clone().unwrap_or_default()),
        ),
    ]
}

fn certification_fields(entry: &Certification) -> Vec<Field> {
    vec![
        Field::required("Name", FieldValue::text(&entry.name)),
        Field::required("Issuer", FieldValue::text(&entry.issuer)),
        Field::required("Date", FieldValue::text(&entry.date)),
        Field::new(
            "Expiry Date",
            FieldValue::text(entry.expiry_date.clone().unwrap_or_default()),
        ),
        Field::new(
            "Credential ID",
            FieldValue::text(entry.credential_id.clone().unwrap_or_default()),
        ),
        Field::new(
            "URL",
            FieldValue::text(entry.url.clone().unwrap_or_default()),
        ),
    ]
}

fn language_fields(entry: &Language) -> Vec<Field> {
    vec![
        Field::required("Name", FieldValue::text(&entry.name)),
        Field::new("Level", FieldValue::Stars(clamp_level(entry.level))),
        Field::new(
            "Proficiency",
            FieldValue::choice(&PROFICIENCIES, &entry.proficiency.to_string()),
        ),
    ]
}

fn volunteer_fields(entry: &VolunteerEntry) -> Vec<Field> {
    vec![
        Field::required("Organization", FieldValue::text(&entry.organization)),
        Field::required("Position", FieldValue::text(&entry.position)),
        Field::new("Location", FieldValue::text(&entry.location)),
        Field::required("Start Date", FieldValue::text(&entry.start_date)),
        Field::new("End Date", FieldValue::text(&entry.end_date)),
        Field::new("Current Position", FieldValue::Flag(entry.current)),
        Field::new("Description", FieldValue::multiline(&entry.description)),
    ]
}

fn award_fields(entry: &Award) -> Vec<Field> {
    vec![
        Field::required("Title", FieldValue::text(&entry.title)),
        Field::required("Issuer", FieldValue::text(&entry.issuer)),
        Field::required("Date", FieldValue::text(&entry.date)),
        Field::new(
            "Description",
            FieldValue::multiline(entry.description.clone().unwrap_or_default()),
        ),
    ]
}

fn reference_fields(entry: &Reference) -> Vec<Field> {
    vec![
        Field::required("Name", FieldValue::text(&entry.name)),
        Field::required("Position", FieldValue::text(&entry.position)),
        Field::required("Company", FieldValue::text(&entry.company)),
        Field::required("Email", FieldValue::text(&entry.email)),
        Field::new("Phone", FieldValue::text(&entry.phone)),
        Field::new("Relationship", FieldValue::text(&entry.relationship)),
    ]
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn skill_category_from(label: &str) -> SkillCategory {
    match label {
        "Languages" => SkillCategory::Languages,
        "Tools" => SkillCategory::Tools,
        "Soft Skills" => SkillCategory::SoftSkills,
        "Other" => SkillCategory::Other,
        _ => SkillCategory::Technical,
    }
}

fn proficiency_from(label: &str) -> Proficiency {
    match label {
        "Native" => Proficiency::Native,
        "Fluent" => Proficiency::Fluent,
        "Advanced" => Proficiency::Advanced,
        "Basic" => Proficiency::Basic,
        _ => Proficiency::Intermediate,
    }
}

/// After a star-level change in the language form, derive the proficiency
/// label from the rating. The label stays independently editable afterwards.
pub fn sync_language_proficiency(form: &mut FormBuffer) {
    let level = form.stars_of("Level");
    let label = Proficiency::from_level(level).to_string();
    if let Some(field) = form.fields.iter_mut().find(|f| f.label == "Proficiency") {
        if let FieldValue::Choice { options, index } = &mut field.value {
            if let Some(position) = options.iter().position(|o| *o == label) {
                *index = position;
            }
        }
    }
}

/// Build the section's replacement list from a validated form and produce
/// the store patch. `mode` decides between append (fresh id) and in-place
/// replace (id preserved).
pub fn commit(
    resume: &Resume,
    tab: SectionTab,
    form: &FormBuffer,
    mode: &EditorMode,
) -> Option<ResumePatch> {
    let id = match mode {
        EditorMode::Adding => new_id(),
        EditorMode::Editing(id) => id.clone(),
        EditorMode::Idle => return None,
    };
    let replacing = matches!(mode, EditorMode::Editing(_));

    fn replace_or_push<T: Clone>(
        list: &[T],
        record: T,
        id_of: impl Fn(&T) -> &str,
        id: &str,
        replacing: bool,
    ) -> Vec<T> {
        if replacing {
            list.iter()
                .map(|existing| {
                    if id_of(existing) == id {
                        record.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect()
        } else {
            let mut out = list.to_vec();
            out.push(record);
            out
        }
    }

    let patch = match tab {
        SectionTab::Personal => ResumePatch::PersonalInfo(PersonalInfo {
            first_name: form.value_of("First Name"),
            last_name: form.value_of("Last Name"),
            email: form.value_of("Email"),
            phone: form.value_of("Phone"),
            location: form.value_of("Location"),
            website: form.value_of("Website"),
            linkedin: form.value_of("LinkedIn"),
            github: form.value_of("GitHub"),
            summary: form.value_of("Summary"),
        }),
        SectionTab::Experience => {
            let record = Experience {
                id: id.clone(),
                company: form.value_of("Company"),
                position: form.value_of("Position"),
                location: form.value_of("Location"),
                start_date: form.value_of("Start Date"),
                end_date: form.value_of("End Date"),
                current: form.flag_of("Current Position"),
                description: form.value_of("Description"),
            }
            .normalize();
            ResumePatch::Experience(replace_or_push(
                &resume.experience,
                record,
                |e| e.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Education => {
            let record = Education {
                id: id.clone(),
                institution: form.value_of("Institution"),
                degree: form.value_of("Degree"),
                field: form.value_of("Field of Study"),
                location: form.value_of("Location"),
                start_date: form.value_of("Start Date"),
                end_date: form.value_of("End Date"),
                gpa: optional(form.value_of("GPA")),
            };
            ResumePatch::Education(replace_or_push(
                &resume.education,
                record,
                |e| e.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Skills => {
            let record = Skill {
                id: id.clone(),
                name: form.value_of("Name"),
                level: clamp_level(form.stars_of("Level")),
                category: skill_category_from(&form.value_of("Category")),
            };
            ResumePatch::Skills(replace_or_push(
                &resume.skills,
                record,
                |s| s.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Projects => {
            let technologies: Vec<String> = form
                .value_of("Technologies")
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let record = Project {
                id: id.clone(),
                name: form.value_of("Name"),
                description: form.value_of("Description"),
                technologies,
                url: optional(form.value_of("URL")),
                github: optional(form.value_of("GitHub")),
            };
            ResumePatch::Projects(replace_or_push(
                &resume.projects,
                record,
                |p| p.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Certifications => {
            let record = Certification {
                id: id.clone(),
                name: form.value_of("Name"),
                issuer: form.value_of("Issuer"),
                date: form.value_of("Date"),
                expiry_date: optional(form.value_of("Expiry Date")),
                credential_id: optional(form.value_of("Credential ID")),
                url: optional(form.value_of("URL")),
            };
            ResumePatch::Certifications(replace_or_push(
                &resume.certifications,
                record,
                |c| c.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Languages => {
            let record = Language {
                id: id.clone(),
                name: form.value_of("Name"),
                proficiency: proficiency_from(&form.value_of("Proficiency")),
                level: clamp_level(form.stars_of("Level")),
            };
            ResumePatch::Languages(replace_or_push(
                &resume.languages,
                record,
                |l| l.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Volunteer => {
            let record = VolunteerEntry {
                id: id.clone(),
                organization: form.value_of("Organization"),
                position: form.value_of("Position"),
                location: form.value_of("Location"),
                start_date: form.value_of("Start Date"),
                end_date: form.value_of("End Date"),
                current: form.flag_of("Current Position"),
                description: form.value_of("Description"),
            }
            .normalize();
            ResumePatch::Volunteer(replace_or_push(
                &resume.volunteer,
                record,
                |v| v.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Awards => {
            let record = Award {
                id: id.clone(),
                title: form.value_of("Title"),
                issuer: form.value_of("Issuer"),
                date: form.value_of("Date"),
                description: optional(form.value_of("Description")),
            };
            ResumePatch::Awards(replace_or_push(
                &resume.awards,
                record,
                |a| a.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::References => {
            let record = Reference {
                id: id.clone(),
                name: form.value_of("Name"),
                position: form.value_of("Position"),
                company: form.value_of("Company"),
                email: form.value_of("Email"),
                phone: form.value_of("Phone"),
                relationship: form.value_of("Relationship"),
            };
            ResumePatch::References(replace_or_push(
                &resume.references,
                record,
                |r| r.id.as_str(),
                &id,
                replacing,
            ))
        }
        SectionTab::Template | SectionTab::Theme => return None,
    };
    Some(patch)
}

/// Remove the record with the given id from the tab's list. Returns `None`
/// for non-list tabs; removing an unknown id yields an unchanged list.
pub fn delete(resume: &Resume, tab: SectionTab, id: &str) -> Option<ResumePatch> {
    match tab {
        SectionTab::Experience => Some(ResumePatch::Experience(
            resume
                .experience
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Education => Some(ResumePatch::Education(
            resume
                .education
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Skills => Some(ResumePatch::Skills(
            resume
                .skills
                .iter()
                .filter(|s| s.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Projects => Some(ResumePatch::Projects(
            resume
                .projects
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Certifications => Some(ResumePatch::Certifications(
            resume
                .certifications
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Languages => Some(ResumePatch::Languages(
            resume
                .languages
                .iter()
                .filter(|l| l.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Volunteer => Some(ResumePatch::Volunteer(
            resume
                .volunteer
                .iter()
                .filter(|v| v.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::Awards => Some(ResumePatch::Awards(
            resume
                .awards
                .iter()
                .filter(|a| a.id != id)
                .cloned()
                .collect(),
        )),
        SectionTab::References => Some(ResumePatch::References(
            resume
                .references
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect(),
        )),
        _ => None,
    }
}
