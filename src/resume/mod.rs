//! Resume data model, typed updates, and the shared section-editor state
//! machine.

pub mod editor;
pub mod model;
pub mod patch;

pub use editor::{EditorMode, EditorState, Field, FieldValue, FormBuffer};
pub use model::{
    clamp_level, new_id, Award, Certification, Education, Experience, Language, PersonalInfo,
    Proficiency, Project, Reference, Resume, Skill, SkillCategory, VolunteerEntry,
};
pub use patch::ResumePatch;
