//! Application flow tests
//!
//! End-to-end flows through the [`App`] state: editing, template and theme
//! selection, preview modes, and export.

use tempfile::TempDir;
use vitae::catalog::predefined_themes;
use vitae::export::DEFAULT_EXPORT_FILENAME;
use vitae::store::{ResumeStore, StorePaths, TemplateStore, ThemeStore};
use vitae::ui::sections::SectionTab;
use vitae::ui::{App, PreviewMode, Step};

fn test_app(temp_dir: &TempDir) -> App {
    let paths = StorePaths::in_dir(temp_dir.path());
    App::new(
        ResumeStore::load(&paths.resume),
        TemplateStore::load(&paths.template),
        ThemeStore::load(&paths.theme),
        temp_dir.path().to_path_buf(),
    )
}

fn type_into(app: &mut App, text: &str) {
    for c in text.chars() {
        app.form_input(c);
    }
}

#[test]
fn test_full_edit_preview_export_flow() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);

    // Edit: personal info.
    app.start_edit_selected();
    type_into(&mut app, "Ada");
    app.form_next_field();
    type_into(&mut app, "Lovelace");
    app.commit_form();

    // Edit: one experience entry.
    app.next_tab();
    app.open_add();
    type_into(&mut app, "Analytical Engines Ltd");
    app.form_next_field();
    type_into(&mut app, "Programmer");
    app.form_next_field();
    app.form_next_field();
    type_into(&mut app, "1842-01");
    app.commit_form();

    // Preview: the document carries the entered data.
    app.set_step(Step::Preview);
    let doc = app.render_document();
    let lines = doc.plain_lines();
    assert!(lines.iter().any(|l| l.contains("Ada Lovelace")));
    assert!(lines.iter().any(|l| l.contains("Programmer")));

    // Export: writes the fixed filename into the export directory.
    app.set_step(Step::Export);
    app.export_pdf();
    assert!(app.modal.is_none());
    assert!(temp_dir.path().join(DEFAULT_EXPORT_FILENAME).exists());
}

#[test]
fn test_export_blocked_in_3d_until_switched_back() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);

    app.set_step(Step::Preview);
    app.toggle_preview_mode();
    assert_eq!(app.preview_mode, PreviewMode::ThreeD);

    app.set_step(Step::Export);
    app.export_pdf();
    assert!(app.modal.is_some(), "blocking message raised");
    assert!(!temp_dir.path().join(DEFAULT_EXPORT_FILENAME).exists());
    app.dismiss_modal();

    // Back to 2D, the export goes through.
    app.preview_mode = PreviewMode::TwoD;
    app.export_pdf();
    assert!(app.modal.is_none());
    assert!(temp_dir.path().join(DEFAULT_EXPORT_FILENAME).exists());
}

#[test]
fn test_template_selection_survives_restart() {
    let temp_dir = TempDir::new().expect("create temp dir");
    {
        let mut app = test_app(&temp_dir);
        app.tab = SectionTab::Template;
        app.picker_index = 2; // creative-designer
        app.choose_template();
        assert_eq!(app.current_template().id, "creative-designer");
    }

    let app = test_app(&temp_dir);
    assert_eq!(app.current_template().id, "creative-designer");
}

#[test]
fn test_two_column_template_changes_preview_shape() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);

    app.start_edit_selected();
    type_into(&mut app, "Ada");
    app.commit_form();

    app.tab = SectionTab::Template;
    app.picker_index = 2; // creative-designer, two-column
    app.choose_template();

    let doc = app.render_document();
    assert!(doc
        .blocks
        .iter()
        .any(|b| matches!(b, vitae::preview::Block::Columns { .. })));
}

#[test]
fn test_theme_selection_and_customization_flow() {
    let temp_dir = TempDir::new().expect("create temp dir");
    {
        let mut app = test_app(&temp_dir);
        app.tab = SectionTab::Theme;
        app.picker_index = 4; // dark-professional
        app.choose_theme();
        assert_eq!(app.current_theme().id, "dark-professional");

        // Open the customizer and commit it unchanged: the palette becomes
        // a custom theme seeded from dark-professional.
        app.picker_index = predefined_themes().len();
        app.choose_theme();
        assert!(app.theme_form.is_some());
        app.commit_theme_customizer();
        assert!(app.theme_store.is_custom());
        assert_eq!(app.current_theme().colors.primary, "#3b82f6");
    }

    // The custom theme survives a restart.
    let app = test_app(&temp_dir);
    assert!(app.theme_store.is_custom());
    assert_eq!(app.current_theme().id, "custom");
}

#[test]
fn test_selecting_predefined_clears_custom() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);

    app.open_theme_customizer();
    app.commit_theme_customizer();
    assert!(app.theme_store.is_custom());

    app.tab = SectionTab::Theme;
    app.picker_index = 1; // emerald-fresh
    app.choose_theme();
    assert!(!app.theme_store.is_custom());
    assert_eq!(app.current_theme().id, "emerald-fresh");
}

#[test]
fn test_preview_scroll_and_mode_reset_on_step_change() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);

    app.set_step(Step::Preview);
    app.scroll_preview_down();
    app.scroll_preview_down();
    assert_eq!(app.preview_scroll, 2);
    app.scroll_preview_up();
    assert_eq!(app.preview_scroll, 1);

    app.set_step(Step::Edit);
    assert_eq!(app.preview_scroll, 0);
}

#[test]
fn test_delete_keeps_selection_in_bounds() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);
    app.next_tab(); // Experience

    for company in ["Acme", "Initech"] {
        app.open_add();
        type_into(&mut app, company);
        app.form_next_field();
        type_into(&mut app, "Engineer");
        app.form_next_field();
        app.form_next_field();
        type_into(&mut app, "2020-01");
        app.commit_form();
    }

    // Select the last record, delete it, and the cursor clamps.
    app.select_next();
    assert_eq!(app.editor().selected, 1);
    app.delete_selected();
    assert_eq!(app.resume().experience.len(), 1);
    assert_eq!(app.editor().selected, 0);
}

#[test]
fn test_edit_through_app_preserves_id() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut app = test_app(&temp_dir);
    app.next_tab(); // Experience

    app.open_add();
    type_into(&mut app, "Acme");
    app.form_next_field();
    type_into(&mut app, "Engineer");
    app.form_next_field();
    app.form_next_field();
    type_into(&mut app, "2020-01");
    app.commit_form();
    let original_id = app.resume().experience[0].id.clone();

    app.start_edit_selected();
    // The position field gets an extra suffix.
    app.form_next_field();
    type_into(&mut app, " II");
    app.commit_form();

    assert_eq!(app.resume().experience[0].id, original_id);
    assert_eq!(app.resume().experience[0].position, "Engineer II");
}
