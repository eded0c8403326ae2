//! # Section Editor State Machine
//!
//! Transient add/edit state shared by all ten section editors.
//!
//! ## Overview
//!
//! Each resume section owns one [`EditorState`]: the mode (idle, adding a
//! new record, or editing an existing record by id) and a [`FormBuffer`] of
//! typed fields. The mode flags are mutually exclusive by construction;
//! a section can never be adding and editing at the same time.
//!
//! The editor never touches the resume itself. Committing a form produces a
//! whole-list replacement which the caller applies through the store, so
//! data flows one direction: form → list → store → preview.

use std::fmt;

/// What the editor is currently doing. `Editing` carries the id of the
/// record being edited; the id is preserved verbatim on commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    Adding,
    Editing(String),
}

impl EditorMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorMode::Idle)
    }
}

/// The value held by one form field. Text-like kinds edit a string buffer;
/// the others are toggled or cycled with dedicated keys.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Single-line text input.
    Text(String),
    /// Multi-line text input (summary, descriptions).
    Multiline(String),
    /// Boolean toggle (the `current` checkbox).
    Flag(bool),
    /// 1–5 star rating.
    Stars(u8),
    /// One of a fixed set of options, cycled left/right.
    Choice { options: Vec<String>, index: usize },
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn multiline(value: impl Into<String>) -> Self {
        FieldValue::Multiline(value.into())
    }

    /// Build a choice field preselecting `selected` if it is one of the
    /// options, the first option otherwise.
    pub fn choice(options: &[&str], selected: &str) -> Self {
        let index = options.iter().position(|o| *o == selected).unwrap_or(0);
        FieldValue::Choice {
            options: options.iter().map(|o| (*o).to_string()).collect(),
            index,
        }
    }

    /// The string the field contributes to a committed record.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::Multiline(s) => s.clone(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Stars(level) => level.to_string(),
            FieldValue::Choice { options, index } => {
                options.get(*index).cloned().unwrap_or_default()
            }
        }
    }

    /// Empty for validation purposes. Flags, stars, and choices always have
    /// a value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Multiline(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// One labelled input in a section form.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
    pub required: bool,
}

impl Field {
    pub fn new(label: &'static str, value: FieldValue) -> Self {
        Self {
            label,
            value,
            required: false,
        }
    }

    pub fn required(label: &'static str, value: FieldValue) -> Self {
        Self {
            label,
            value,
            required: true,
        }
    }
}

/// A required field was left empty; blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub label: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.label)
    }
}

/// The fields of the open form plus the cursor over them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBuffer {
    pub fields: Vec<Field>,
    pub active: usize,
}

impl FormBuffer {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, active: 0 }
    }

    pub fn active_field(&self) -> Option<&Field> {
        self.fields.get(self.active)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.active)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = self
                .active
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    /// Type into the active field. Text fields append; star fields accept
    /// the digits 1–5 directly.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Multiline(s) => s.push(c),
                FieldValue::Stars(level) => {
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=5).contains(&digit) {
                            *level = digit as u8;
                        }
                    }
                }
                FieldValue::Flag(_) | FieldValue::Choice { .. } => {}
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field_mut() {
            if let FieldValue::Text(s) | FieldValue::Multiline(s) = &mut field.value {
                s.pop();
            }
        }
    }

    /// Toggle the active flag field; no-op on other kinds.
    pub fn toggle_flag(&mut self) {
        if let Some(field) = self.active_field_mut() {
            if let FieldValue::Flag(flag) = &mut field.value {
                *flag = !*flag;
            }
        }
    }

    /// Cycle the active choice field, or adjust a star rating by one.
    pub fn cycle(&mut self, forward: bool) {
        if let Some(field) = self.active_field_mut() {
            match &mut field.value {
                FieldValue::Choice { options, index } => {
                    if options.is_empty() {
                        return;
                    }
                    *index = if forward {
                        (*index + 1) % options.len()
                    } else {
                        index.checked_sub(1).unwrap_or(options.len() - 1)
                    };
                }
                FieldValue::Stars(level) => {
                    *level = if forward {
                        (*level + 1).min(5)
                    } else {
                        level.saturating_sub(1).max(1)
                    };
                }
                _ => {}
            }
        }
    }

    /// First empty required field, if any. Submission is blocked until this
    /// returns `Ok`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in &self.fields {
            if field.required && field.value.is_empty() {
                return Err(ValidationError { label: field.label });
            }
        }
        Ok(())
    }

    /// Value of the field with the given label. Schema and form are built
    /// from the same field list, so a miss is a bug; returns empty text to
    /// keep commit paths total.
    pub fn value_of(&self, label: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_text())
            .unwrap_or_default()
    }

    pub fn flag_of(&self, label: &str) -> bool {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| matches!(f.value, FieldValue::Flag(true)))
            .unwrap_or(false)
    }

    pub fn stars_of(&self, label: &str) -> u8 {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .and_then(|f| match f.value {
                FieldValue::Stars(level) => Some(level),
                _ => None,
            })
            .unwrap_or(3)
    }
}

/// Mode plus form for one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub form: FormBuffer,
    /// Cursor over the section's record list while the form is closed.
    pub selected: usize,
}

impl EditorState {
    /// Open an empty add form. Closes any edit in progress.
    pub fn open_add(&mut self, fields: Vec<Field>) {
        self.mode = EditorMode::Adding;
        self.form = FormBuffer::new(fields);
    }

    /// Load an existing record's fields and mark its id as being edited.
    /// Closes the add panel.
    pub fn start_edit(&mut self, id: impl Into<String>, fields: Vec<Field>) {
        self.mode = EditorMode::Editing(id.into());
        self.form = FormBuffer::new(fields);
    }

    /// Discard the transient form without touching the list.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Idle;
        self.form = FormBuffer::default();
    }

    /// Close after a successful commit.
    pub fn close(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormBuffer {
        FormBuffer::new(vec![
            Field::required("Company", FieldValue::text("")),
            Field::new("Location", FieldValue::text("")),
            Field::new("Current", FieldValue::Flag(false)),
            Field::new("Level", FieldValue::Stars(3)),
            Field::new(
                "Category",
                FieldValue::choice(&["Technical", "Tools"], "Tools"),
            ),
        ])
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut editor = EditorState::default();
        editor.open_add(Vec::new());
        assert_eq!(editor.mode, EditorMode::Adding);

        editor.start_edit("abc", Vec::new());
        assert_eq!(editor.mode, EditorMode::Editing("abc".to_string()));

        editor.cancel();
        assert_eq!(editor.mode, EditorMode::Idle);
        assert!(!editor.mode.is_open());
    }

    #[test]
    fn test_validate_blocks_empty_required() {
        let mut form = sample_form();
        let err = form.validate().expect_err("Company is empty");
        assert_eq!(err.to_string(), "Company is required");

        form.fields[0].value = FieldValue::text("Acme");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut form = sample_form();
        form.fields[0].value = FieldValue::text("   ");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut form = sample_form();
        form.push_char('A');
        form.push_char('c');
        assert_eq!(form.value_of("Company"), "Ac");
        form.pop_char();
        assert_eq!(form.value_of("Company"), "A");
    }

    #[test]
    fn test_stars_accept_digits_and_cycle() {
        let mut form = sample_form();
        form.active = 3;
        form.push_char('5');
        assert_eq!(form.stars_of("Level"), 5);
        form.cycle(true);
        assert_eq!(form.stars_of("Level"), 5); // capped
        form.cycle(false);
        assert_eq!(form.stars_of("Level"), 4);
    }

    #[test]
    fn test_stars_ignore_out_of_range_digits() {
        let mut form = sample_form();
        form.active = 3;
        form.push_char('9');
        assert_eq!(form.stars_of("Level"), 3);
        form.push_char('0');
        assert_eq!(form.stars_of("Level"), 3);
    }

    #[test]
    fn test_flag_toggle() {
        let mut form = sample_form();
        form.active = 2;
        form.toggle_flag();
        assert!(form.flag_of("Current"));
        form.toggle_flag();
        assert!(!form.flag_of("Current"));
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut form = sample_form();
        form.active = 4;
        assert_eq!(form.value_of("Category"), "Tools");
        form.cycle(true);
        assert_eq!(form.value_of("Category"), "Technical");
        form.cycle(false);
        assert_eq!(form.value_of("Category"), "Tools");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = sample_form();
        assert_eq!(form.active, 0);
        form.prev_field();
        assert_eq!(form.active, form.fields.len() - 1);
        form.next_field();
        assert_eq!(form.active, 0);
    }
}
