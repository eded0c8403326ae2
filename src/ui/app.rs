//! Application state: the three stores, the step/tab navigation, the
//! per-section editors, and the preview/export controls.

use crate::catalog::{
    background_options, is_valid_hex, predefined_themes, BackgroundOption, ColorSet, CustomTheme,
    HeaderStyle, TemplateDescriptor, Theme,
};
use crate::export::{self, ExportError, DEFAULT_EXPORT_FILENAME};
use crate::preview::{self, Document};
use crate::resume::{EditorState, Field, FieldValue, FormBuffer, Resume};
use crate::store::{ResumeStore, TemplateStore, ThemeStore};
use crate::ui::sections::{self, SectionTab};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// The three top-level steps, mirrored in the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Edit,
    Preview,
    Export,
}

/// Preview pane mode. Only the 2D document can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    TwoD,
    ThreeD,
}

pub struct App {
    pub resume_store: ResumeStore,
    pub template_store: TemplateStore,
    pub theme_store: ThemeStore,
    pub step: Step,
    pub tab: SectionTab,
    /// One editor per tab; only the active tab's editor is ever open.
    pub editors: Vec<EditorState>,
    /// Cursor in the template/theme picker lists.
    pub picker_index: usize,
    /// The custom-theme form, when the customizer is open.
    pub theme_form: Option<FormBuffer>,
    pub preview_mode: PreviewMode,
    pub preview_scroll: u16,
    /// Transient one-line message in the footer.
    pub status: Option<String>,
    /// Blocking message overlay; any key dismisses it.
    pub modal: Option<String>,
    pub should_quit: bool,
    pub last_saved: Option<DateTime<Local>>,
    /// Directory the exported PDF is written into.
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(
        resume_store: ResumeStore,
        template_store: TemplateStore,
        theme_store: ThemeStore,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            resume_store,
            template_store,
            theme_store,
            step: Step::Edit,
            tab: SectionTab::Personal,
            editors: SectionTab::ALL
                .iter()
                .map(|_| EditorState::default())
                .collect(),
            picker_index: 0,
            theme_form: None,
            preview_mode: PreviewMode::TwoD,
            preview_scroll: 0,
            status: None,
            modal: None,
            should_quit: false,
            last_saved: None,
            export_dir,
        }
    }

    pub fn resume(&self) -> &Resume {
        self.resume_store.get()
    }

    pub fn current_template(&self) -> &'static TemplateDescriptor {
        self.template_store.selected()
    }

    pub fn current_theme(&self) -> Theme {
        self.theme_store.current_theme()
    }

    pub fn current_background(&self) -> BackgroundOption {
        self.theme_store.current_background()
    }

    /// The 2D document for the active template. This is what the preview
    /// pane paints and what the export adapter captures.
    pub fn render_document(&self) -> Document {
        preview::render(self.resume(), self.current_template())
    }

    pub fn editor(&self) -> &EditorState {
        &self.editors[self.tab.index()]
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editors[self.tab.index()]
    }

    // -- Step and tab navigation ------------------------------------------

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
        self.status = None;
        self.preview_scroll = 0;
    }

    pub fn next_tab(&mut self) {
        self.leave_tab();
        self.tab = self.tab.next();
        self.enter_tab();
    }

    pub fn prev_tab(&mut self) {
        self.leave_tab();
        self.tab = self.tab.prev();
        self.enter_tab();
    }

    fn leave_tab(&mut self) {
        // Switching sections discards any transient form state.
        self.editor_mut().cancel();
        self.theme_form = None;
        self.status = None;
        self.picker_index = 0;
    }

    fn enter_tab(&mut self) {
        if self.tab == SectionTab::Template {
            // Start the picker on the active selection.
            self.picker_index = crate::catalog::all_templates()
                .iter()
                .position(|t| t.id == self.template_store.selected_id())
                .unwrap_or(0);
        }
    }

    /// The personal tab has no record list; editing loads the whole block.
    fn open_personal_form(&mut self) {
        let fields = sections::personal_form(self.resume());
        let editor = &mut self.editors[SectionTab::Personal.index()];
        editor.start_edit("personal", fields);
    }

    // -- List operations ---------------------------------------------------

    pub fn list_len(&self) -> usize {
        sections::record_count(self.resume(), self.tab)
    }

    pub fn select_next(&mut self) {
        match self.tab {
            SectionTab::Template => {
                let len = crate::catalog::all_templates().len();
                self.picker_index = (self.picker_index + 1) % len;
            }
            SectionTab::Theme => {
                // Predefined themes plus the trailing "Customize" entry.
                let len = predefined_themes().len() + 1;
                self.picker_index = (self.picker_index + 1) % len;
            }
            _ => {
                let len = self.list_len();
                if len > 0 {
                    let editor = self.editor_mut();
                    editor.selected = (editor.selected + 1) % len;
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.tab {
            SectionTab::Template => {
                let len = crate::catalog::all_templates().len();
                self.picker_index = self.picker_index.checked_sub(1).unwrap_or(len - 1);
            }
            SectionTab::Theme => {
                let len = predefined_themes().len() + 1;
                self.picker_index = self.picker_index.checked_sub(1).unwrap_or(len - 1);
            }
            _ => {
                let len = self.list_len();
                if len > 0 {
                    let editor = self.editor_mut();
                    editor.selected = editor.selected.checked_sub(1).unwrap_or(len - 1);
                }
            }
        }
    }

    /// Open the add form for the active list section.
    pub fn open_add(&mut self) {
        if !self.tab.is_list_section() {
            return;
        }
        let fields = sections::blank_form(self.tab);
        self.editor_mut().open_add(fields);
        self.status = None;
    }

    /// Load the selected record into the edit form. On the personal tab
    /// this opens the whole personal-info block.
    pub fn start_edit_selected(&mut self) {
        if self.tab == SectionTab::Personal {
            self.open_personal_form();
            self.status = None;
            return;
        }
        if !self.tab.is_list_section() {
            return;
        }
        let selected = self.editor().selected;
        let Some(id) = sections::record_id(self.resume(), self.tab, selected) else {
            return;
        };
        if let Some(fields) = sections::form_for_record(self.resume(), self.tab, &id) {
            self.editor_mut().start_edit(id, fields);
            self.status = None;
        }
    }

    /// Delete the selected record. No confirmation, no undo.
    pub fn delete_selected(&mut self) {
        if !self.tab.is_list_section() || self.editor().mode.is_open() {
            return;
        }
        let selected = self.editor().selected;
        let Some(id) = sections::record_id(self.resume(), self.tab, selected) else {
            return;
        };
        if let Some(patch) = sections::delete(self.resume(), self.tab, &id) {
            self.apply_patch(patch);
            let len = self.list_len();
            let editor = self.editor_mut();
            if editor.selected >= len && len > 0 {
                editor.selected = len - 1;
            }
        }
    }

    /// Validate and commit the open form, replacing the section list.
    pub fn commit_form(&mut self) {
        if self.theme_form.is_some() {
            self.commit_theme_customizer();
            return;
        }
        let editor = self.editor();
        if !editor.mode.is_open() {
            return;
        }
        if let Err(err) = editor.form.validate() {
            self.status = Some(err.to_string());
            return;
        }
        let patch = sections::commit(self.resume(), self.tab, &editor.form, &editor.mode);
        if let Some(patch) = patch {
            self.apply_patch(patch);
        }
        self.editor_mut().close();
        if self.tab == SectionTab::Personal {
            self.status = Some("Saved".to_string());
        }
    }

    pub fn cancel_form(&mut self) {
        if self.theme_form.is_some() {
            self.cancel_theme_customizer();
            return;
        }
        self.editor_mut().cancel();
        self.status = None;
    }

    fn apply_patch(&mut self, patch: crate::resume::ResumePatch) {
        match self.resume_store.update(patch) {
            Ok(()) => self.last_saved = Some(Local::now()),
            Err(e) => self.status = Some(format!("Save failed: {e:#}")),
        }
    }

    // -- Form input --------------------------------------------------------

    pub fn form_input(&mut self, c: char) {
        if let Some(form) = self.active_form_mut() {
            form.push_char(c);
            self.after_form_change();
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.pop_char();
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.next_field();
        }
    }

    pub fn form_prev_field(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.prev_field();
        }
    }

    /// Space toggles a flag field; on text fields it types a space.
    pub fn form_space(&mut self) {
        let Some(form) = self.active_form_mut() else {
            return;
        };
        let on_flag = matches!(
            form.active_field().map(|f| &f.value),
            Some(FieldValue::Flag(_))
        );
        if on_flag {
            form.toggle_flag();
        } else {
            form.push_char(' ');
        }
    }

    pub fn form_cycle(&mut self, forward: bool) {
        if let Some(form) = self.active_form_mut() {
            form.cycle(forward);
            self.after_form_change();
        }
    }

    /// The form currently receiving input: the theme customizer when open,
    /// the active section's form otherwise.
    pub fn active_form_mut(&mut self) -> Option<&mut FormBuffer> {
        if self.theme_form.is_some() {
            return self.theme_form.as_mut();
        }
        let index = self.tab.index();
        let editor = &mut self.editors[index];
        if editor.mode.is_open() {
            Some(&mut editor.form)
        } else {
            None
        }
    }

    pub fn form_open(&self) -> bool {
        self.theme_form.is_some() || self.editor().mode.is_open()
    }

    fn after_form_change(&mut self) {
        // Star-rating edits in the language form re-derive the label.
        if self.tab == SectionTab::Languages && self.theme_form.is_none() {
            let on_level = self
                .editor()
                .form
                .active_field()
                .map(|f| f.label == "Level")
                .unwrap_or(false);
            if on_level {
                sections::sync_language_proficiency(&mut self.editor_mut().form);
            }
        }
    }

    // -- Template and theme pickers ---------------------------------------

    /// Enter on the template picker: select and persist.
    pub fn choose_template(&mut self) {
        let templates = crate::catalog::all_templates();
        if let Some(template) = templates.get(self.picker_index) {
            match self.template_store.select(template.id) {
                Ok(()) => self.status = Some(format!("Template: {}", template.name)),
                Err(e) => self.status = Some(format!("Save failed: {e:#}")),
            }
        }
    }

    /// Enter on the theme picker: apply a predefined theme, or open the
    /// customizer when the cursor sits on the trailing "Customize" entry.
    pub fn choose_theme(&mut self) {
        let themes = predefined_themes();
        if self.picker_index < themes.len() {
            let theme = &themes[self.picker_index];
            match self.theme_store.apply_theme(&theme.id) {
                Ok(()) => self.status = Some(format!("Theme: {}", theme.name)),
                Err(e) => self.status = Some(format!("Save failed: {e:#}")),
            }
        } else {
            self.open_theme_customizer();
        }
    }

    /// Build the customizer form from the currently effective theme.
    pub fn open_theme_customizer(&mut self) {
        let theme = self.current_theme();
        let background = self.current_background();
        let header_label = if theme.gradients.header.start == theme.gradients.header.end {
            "Solid"
        } else {
            "Gradient"
        };
        let background_names: Vec<String> =
            background_options().into_iter().map(|b| b.name).collect();
        let background_refs: Vec<&str> = background_names.iter().map(String::as_str).collect();
        let fields = vec![
            Field::required("Primary", FieldValue::text(&theme.colors.primary)),
            Field::required("Secondary", FieldValue::text(&theme.colors.secondary)),
            Field::required("Accent", FieldValue::text(&theme.colors.accent)),
            Field::required("Text", FieldValue::text(&theme.colors.text)),
            Field::required(
                "Secondary Text",
                FieldValue::text(&theme.colors.text_secondary),
            ),
            Field::required("Background", FieldValue::text(&theme.colors.background)),
            Field::required("Surface", FieldValue::text(&theme.colors.surface)),
            Field::required("Border", FieldValue::text(&theme.colors.border)),
            Field::new(
                "Page Background",
                FieldValue::choice(&background_refs, &background.name),
            ),
            Field::new(
                "Header Style",
                FieldValue::choice(&["Gradient", "Solid"], header_label),
            ),
        ];
        self.theme_form = Some(FormBuffer::new(fields));
        self.status = None;
    }

    /// Validate and persist the customizer form as the active custom theme.
    pub fn commit_theme_customizer(&mut self) {
        let Some(form) = self.theme_form.as_ref() else {
            return;
        };
        let color_labels = [
            "Primary",
            "Secondary",
            "Accent",
            "Text",
            "Secondary Text",
            "Background",
            "Surface",
            "Border",
        ];
        for label in color_labels {
            let value = form.value_of(label);
            if !is_valid_hex(&value) {
                self.status = Some(format!("{label} must be a #rrggbb color"));
                return;
            }
        }
        let colors = ColorSet {
            primary: form.value_of("Primary"),
            secondary: form.value_of("Secondary"),
            accent: form.value_of("Accent"),
            text: form.value_of("Text"),
            text_secondary: form.value_of("Secondary Text"),
            background: form.value_of("Background"),
            surface: form.value_of("Surface"),
            border: form.value_of("Border"),
        };
        let background = background_options()
            .into_iter()
            .find(|b| b.name == form.value_of("Page Background"))
            .unwrap_or_else(crate::catalog::default_background);
        let header_style = if form.value_of("Header Style") == "Solid" {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Gradient
        };

        let custom = CustomTheme {
            colors,
            background,
            header_style,
        };
        match self.theme_store.apply_custom(custom) {
            Ok(()) => {
                self.theme_form = None;
                self.status = Some("Custom theme applied".to_string());
            }
            Err(e) => self.status = Some(format!("Save failed: {e:#}")),
        }
    }

    pub fn cancel_theme_customizer(&mut self) {
        self.theme_form = None;
        self.status = None;
    }

    // -- Preview -----------------------------------------------------------

    pub fn toggle_preview_mode(&mut self) {
        self.preview_mode = match self.preview_mode {
            PreviewMode::TwoD => PreviewMode::ThreeD,
            PreviewMode::ThreeD => PreviewMode::TwoD,
        };
        self.preview_scroll = 0;
    }

    pub fn scroll_preview_down(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_add(1);
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(1);
    }

    // -- Export ------------------------------------------------------------

    /// One-shot PDF export of the mounted 2D preview. Fails with a blocking
    /// message when the perspective view is active or the write fails.
    pub fn export_pdf(&mut self) {
        let mounted = match self.preview_mode {
            PreviewMode::TwoD => Some(self.render_document()),
            PreviewMode::ThreeD => None,
        };
        let theme = self.current_theme();
        let background = self.current_background();
        let path = self.export_dir.join(DEFAULT_EXPORT_FILENAME);

        match export::export_to_pdf(mounted.as_ref(), &theme, &background, &path) {
            Ok(written) => {
                self.status = Some(format!("Exported {}", written.display()));
            }
            Err(ExportError::PreviewUnavailable) => {
                self.modal =
                    Some("Please switch to the 2D preview mode to export a PDF.".to_string());
            }
            Err(e) => {
                self.modal = Some(format!("Failed to export PDF: {e}. Please try again."));
            }
        }
    }

    // -- Reset -------------------------------------------------------------

    /// Clear the stored resume and restore the default empty state.
    pub fn reset_resume(&mut self) {
        match self.resume_store.reset() {
            Ok(()) => {
                self.editor_mut().cancel();
                self.status = Some("Resume data cleared".to_string());
            }
            Err(e) => self.status = Some(format!("Reset failed: {e:#}")),
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorePaths;
    use tempfile::TempDir;

    fn test_app(temp_dir: &TempDir) -> App {
        let paths = StorePaths::in_dir(temp_dir.path());
        App::new(
            ResumeStore::load(&paths.resume),
            TemplateStore::load(&paths.template),
            ThemeStore::load(&paths.theme),
            temp_dir.path().to_path_buf(),
        )
    }

    #[test]
    fn test_starts_on_personal_tab_browsing() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let app = test_app(&temp_dir);
        assert_eq!(app.tab, SectionTab::Personal);
        assert_eq!(app.step, Step::Edit);
        assert!(!app.editor().mode.is_open());
    }

    #[test]
    fn test_personal_edit_commit_saves() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);

        app.start_edit_selected();
        assert!(app.editor().mode.is_open());
        app.form_input('A');
        app.form_input('d');
        app.form_input('a');
        app.commit_form();

        assert_eq!(app.resume().personal_info.first_name, "Ada");
        assert!(!app.editor().mode.is_open());
        assert_eq!(app.status.as_deref(), Some("Saved"));
        assert!(app.last_saved.is_some());
    }

    #[test]
    fn test_personal_edit_reloads_saved_values() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);

        app.start_edit_selected();
        app.form_input('A');
        app.commit_form();

        // Reopening shows the persisted value.
        app.start_edit_selected();
        assert_eq!(app.editor().form.value_of("First Name"), "A");
    }

    #[test]
    fn test_add_record_through_form() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.next_tab(); // Experience
        assert_eq!(app.tab, SectionTab::Experience);

        app.open_add();
        for c in "Acme".chars() {
            app.form_input(c);
        }
        app.form_next_field(); // Position
        for c in "Engineer".chars() {
            app.form_input(c);
        }
        app.form_next_field(); // Location
        app.form_next_field(); // Start Date
        for c in "2020-01".chars() {
            app.form_input(c);
        }
        app.commit_form();

        assert_eq!(app.resume().experience.len(), 1);
        assert_eq!(app.resume().experience[0].company, "Acme");
        assert!(!app.editor().mode.is_open());
    }

    #[test]
    fn test_required_field_blocks_commit() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.next_tab(); // Experience
        app.open_add();
        app.commit_form();

        assert_eq!(app.resume().experience.len(), 0);
        assert!(app.editor().mode.is_open(), "form stays open");
        assert_eq!(app.status.as_deref(), Some("Company is required"));
    }

    #[test]
    fn test_tab_switch_discards_form() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.next_tab(); // Experience
        app.open_add();
        app.form_input('X');
        app.next_tab(); // Education: experience form is gone
        app.prev_tab(); // back to Experience
        assert!(!app.editor().mode.is_open());
    }

    #[test]
    fn test_choose_template_persists() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.tab = SectionTab::Template;
        app.picker_index = 4; // tech-innovator
        app.choose_template();
        assert_eq!(app.template_store.selected_id(), "tech-innovator");
    }

    #[test]
    fn test_choose_theme_and_customize_entry() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.tab = SectionTab::Theme;
        app.picker_index = 2; // purple-modern
        app.choose_theme();
        assert_eq!(app.current_theme().id, "purple-modern");

        app.picker_index = predefined_themes().len(); // "Customize"
        app.choose_theme();
        assert!(app.theme_form.is_some());
    }

    #[test]
    fn test_theme_customizer_rejects_bad_hex() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.open_theme_customizer();
        if let Some(form) = app.theme_form.as_mut() {
            form.fields[0].value = FieldValue::text("not-a-color");
        }
        app.commit_theme_customizer();
        assert!(app.theme_form.is_some(), "form stays open");
        assert!(app.status.as_deref().is_some_and(|s| s.contains("#rrggbb")));
        assert!(!app.theme_store.is_custom());
    }

    #[test]
    fn test_theme_customizer_commit_applies_custom() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.open_theme_customizer();
        app.commit_theme_customizer();
        assert!(app.theme_store.is_custom());
        assert!(app.theme_form.is_none());
    }

    #[test]
    fn test_export_in_3d_mode_raises_modal_without_writing() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.preview_mode = PreviewMode::ThreeD;
        app.export_pdf();
        assert!(app
            .modal
            .as_deref()
            .is_some_and(|m| m.contains("2D preview")));
        assert!(!temp_dir.path().join(DEFAULT_EXPORT_FILENAME).exists());
    }

    #[test]
    fn test_export_in_2d_mode_writes_pdf() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.export_pdf();
        assert!(app.modal.is_none());
        let path = temp_dir.path().join(DEFAULT_EXPORT_FILENAME);
        assert!(path.exists());
        let bytes = std::fs::read(&path).expect("read pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_reset_clears_data() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.start_edit_selected();
        app.form_input('Z');
        app.commit_form();
        assert!(!app.resume().is_empty());

        app.reset_resume();
        assert!(app.resume().is_empty());
    }

    #[test]
    fn test_delete_selected_shrinks_list() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut app = test_app(&temp_dir);
        app.next_tab();
        for _ in 0..2 {
            app.open_add();
            for c in "Acme".chars() {
                app.form_input(c);
            }
            app.form_next_field();
            app.form_input('E');
            app.form_next_field();
            app.form_next_field();
            app.form_input('2');
            app.commit_form();
        }
        assert_eq!(app.resume().experience.len(), 2);

        app.delete_selected();
        assert_eq!(app.resume().experience.len(), 1);
    }
}
