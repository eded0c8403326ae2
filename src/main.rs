//! # Vitae CLI Entry Point
//!
//! This is the main entry point for the Vitae TUI application.
//!
//! ## Overview
//!
//! Vitae is a terminal resume builder: fill in structured sections, pick a
//! template and a color theme, watch the live preview, and export the
//! result as a PDF. Everything is stored locally; there is no account and
//! no network access.
//!
//! ## Usage
//!
//! ```bash
//! # Open the editor
//! vitae
//!
//! # Keep data somewhere else (also handy for throwaway experiments)
//! vitae --data-dir /tmp/vitae-demo
//!
//! # Export the stored resume to a PDF without opening the TUI
//! vitae --export
//! vitae --export --output resume-for-acme.pdf
//!
//! # Clear all stored data
//! vitae --reset
//!
//! # Print storage paths and a summary of the stored resume, then exit
//! vitae --debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Everywhere
//! - `1` / `2` / `3` - Switch between Edit, Preview, and Export
//! - `q` / `Q` - Quit (outside forms)
//!
//! ### Edit step
//! - `h` / `l` or `←` / `→` - Previous / next section tab
//! - `j` / `k` or `↓` / `↑` - Move the record selection
//! - `a` - Add a new record to the section
//! - `Enter` - Edit the selected record (or apply template/theme)
//! - `d` - Delete the selected record
//! - `Ctrl+r` - Reset all resume data
//!
//! ### Inside a form
//! - `Tab` / `↓` and `Shift+Tab` / `↑` - Move between fields
//! - `Space` - Toggle a checkbox field (types a space elsewhere)
//! - `←` / `→` - Cycle a choice field, adjust a star rating
//! - `1`-`5` - Set a star rating directly
//! - `Enter` - Validate and save
//! - `Esc` - Cancel without saving
//!
//! ### Preview step
//! - `v` - Toggle between the 2D preview and the decorative 3D view
//! - `j` / `k` - Scroll

use vitae::export::DEFAULT_EXPORT_FILENAME;
use vitae::store::{ResumeStore, StorePaths, TemplateStore, ThemeStore};
use vitae::ui::{self, App, Step};
use vitae::{export, preview};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Vitae - build, preview, and export a resume from your terminal
#[derive(Parser, Debug)]
#[command(name = "vitae")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal resume builder with themed preview and PDF export", long_about = None)]
struct Args {
    /// Directory for the stored resume/template/theme files
    /// (defaults to the platform config directory)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Export the stored resume to a PDF and exit without opening the TUI
    #[arg(long, conflicts_with = "reset")]
    export: bool,

    /// Output file for --export (defaults to my-resume.pdf)
    #[arg(short, long, value_name = "FILE", requires = "export")]
    output: Option<PathBuf>,

    /// Clear all stored resume, template, and theme data and exit
    #[arg(long)]
    reset: bool,

    /// Print storage paths and a summary of the stored data and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

fn resolve_paths(data_dir: Option<&PathBuf>) -> Result<StorePaths> {
    match data_dir {
        Some(dir) => Ok(StorePaths::in_dir(dir)),
        None => StorePaths::resolve(),
    }
}

async fn run_application(args: Args) -> Result<()> {
    let paths = resolve_paths(args.data_dir.as_ref())?;

    if args.reset {
        let mut resume_store = ResumeStore::load(&paths.resume);
        resume_store.reset().context("Failed to reset resume data")?;
        for path in [&paths.template, &paths.theme] {
            if path.exists() {
                std::fs::remove_file(path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        println!("Cleared stored resume, template, and theme data.");
        return Ok(());
    }

    let resume_store = ResumeStore::load(&paths.resume);
    let template_store = TemplateStore::load(&paths.template);
    let theme_store = ThemeStore::load(&paths.theme);

    if args.debug {
        let resume = resume_store.get();
        println!("=== Storage ===");
        println!("  Resume:   {}", paths.resume.display());
        println!("  Template: {}", paths.template.display());
        println!("  Theme:    {}", paths.theme.display());
        println!("\n=== Selection ===");
        println!("  Template: {}", template_store.selected().name);
        println!("  Theme:    {}", theme_store.current_theme().name);
        println!("\n=== Resume ===");
        println!("  Name:           {}", resume.personal_info.full_name());
        println!("  Experience:     {}", resume.experience.len());
        println!("  Education:      {}", resume.education.len());
        println!("  Skills:         {}", resume.skills.len());
        println!("  Projects:       {}", resume.projects.len());
        println!("  Certifications: {}", resume.certifications.len());
        println!("  Languages:      {}", resume.languages.len());
        println!("  Awards:         {}", resume.awards.len());
        println!("  Volunteer:      {}", resume.volunteer.len());
        println!("  References:     {}", resume.references.len());
        return Ok(());
    }

    if args.export {
        // Headless export: render with the persisted selection, no TUI.
        let doc = preview::render(resume_store.get(), template_store.selected());
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILENAME));
        let written = export::export_to_pdf(
            Some(&doc),
            &theme_store.current_theme(),
            &theme_store.current_background(),
            &path,
        )
        .context("Failed to export PDF")?;
        println!("Exported {}", written.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut app = App::new(resume_store, template_store, theme_store, export_dir);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event(Duration::from_millis(100))?;

        // If no event, continue the loop and re-render
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            handle_key(app, key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch one key press against the application state.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // A blocking message swallows the next key.
    if app.modal.is_some() {
        app.dismiss_modal();
        return;
    }

    // Form input mode
    if app.form_open() {
        match code {
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Enter => app.commit_form(),
            KeyCode::Tab | KeyCode::Down => app.form_next_field(),
            KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
            KeyCode::Backspace => app.form_backspace(),
            KeyCode::Left => app.form_cycle(false),
            KeyCode::Right => app.form_cycle(true),
            KeyCode::Char(' ') => app.form_space(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.form_input(c),
            _ => {}
        }
        return;
    }

    // Browse mode
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('1') => app.set_step(Step::Edit),
        KeyCode::Char('2') => app.set_step(Step::Preview),
        KeyCode::Char('3') => app.set_step(Step::Export),
        _ => match app.step {
            Step::Edit => handle_edit_key(app, code, modifiers),
            Step::Preview => handle_preview_key(app, code),
            Step::Export => {
                if code == KeyCode::Enter {
                    app.export_pdf();
                }
            }
        },
    }
}

fn handle_edit_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let has_ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('r') if has_ctrl => app.reset_resume(),
        KeyCode::Enter => {
            use vitae::ui::sections::SectionTab;
            match app.tab {
                SectionTab::Template => app.choose_template(),
                SectionTab::Theme => app.choose_theme(),
                _ => app.start_edit_selected(),
            }
        }
        _ => {}
    }
}

fn handle_preview_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('v') => app.toggle_preview_mode(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_preview_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_preview_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use std::collections::VecDeque;
    use tempfile::TempDir;
    use vitae::ui::sections::SectionTab;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

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
    fn test_mock_event_reader() {
        let events = vec![
            key_event(KeyCode::Char('a')),
            key_event(KeyCode::Enter),
        ];

        let mut reader = MockEventReader::new(events);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_q_quits_in_browse_mode() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::empty());
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_inside_a_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('l'), KeyModifiers::empty()); // Experience
        handle_key(&mut app, KeyCode::Char('a'), KeyModifiers::empty()); // open form
        handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::empty());
        assert!(!app.should_quit);
        assert_eq!(app.editor().form.value_of("Company"), "q");
    }

    #[test]
    fn test_step_switching_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('2'), KeyModifiers::empty());
        assert_eq!(app.step, Step::Preview);
        handle_key(&mut app, KeyCode::Char('3'), KeyModifiers::empty());
        assert_eq!(app.step, Step::Export);
        handle_key(&mut app, KeyCode::Char('1'), KeyModifiers::empty());
        assert_eq!(app.step, Step::Edit);
    }

    #[test]
    fn test_tab_navigation_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('l'), KeyModifiers::empty());
        assert_eq!(app.tab, SectionTab::Experience);
        handle_key(&mut app, KeyCode::Char('h'), KeyModifiers::empty());
        assert_eq!(app.tab, SectionTab::Personal);
        handle_key(&mut app, KeyCode::Char('h'), KeyModifiers::empty());
        assert_eq!(app.tab, SectionTab::Theme);
    }

    #[test]
    fn test_add_edit_flow_via_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('l'), KeyModifiers::empty()); // Experience
        handle_key(&mut app, KeyCode::Char('a'), KeyModifiers::empty()); // add form
        for c in "Acme".chars() {
            handle_key(&mut app, KeyCode::Char(c), KeyModifiers::empty());
        }
        handle_key(&mut app, KeyCode::Tab, KeyModifiers::empty());
        handle_key(&mut app, KeyCode::Char('E'), KeyModifiers::empty());
        handle_key(&mut app, KeyCode::Tab, KeyModifiers::empty()); // Location
        handle_key(&mut app, KeyCode::Tab, KeyModifiers::empty()); // Start Date
        handle_key(&mut app, KeyCode::Char('2'), KeyModifiers::empty());
        handle_key(&mut app, KeyCode::Enter, KeyModifiers::empty());

        assert_eq!(app.resume().experience.len(), 1);
        assert_eq!(app.resume().experience[0].company, "Acme");
    }

    #[test]
    fn test_modal_swallows_next_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        app.modal = Some("Notice".to_string());
        handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::empty());
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_preview_toggle_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        handle_key(&mut app, KeyCode::Char('2'), KeyModifiers::empty());
        handle_key(&mut app, KeyCode::Char('v'), KeyModifiers::empty());
        assert_eq!(app.preview_mode, vitae::ui::PreviewMode::ThreeD);
    }

    #[tokio::test]
    async fn test_run_application_debug_mode() {
        let temp_dir = TempDir::new().unwrap();
        let args = Args {
            data_dir: Some(temp_dir.path().to_path_buf()),
            export: false,
            output: None,
            reset: false,
            debug: true,
        };
        assert!(run_application(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_application_headless_export() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.pdf");
        let args = Args {
            data_dir: Some(temp_dir.path().to_path_buf()),
            export: true,
            output: Some(out.clone()),
            reset: false,
            debug: false,
        };
        run_application(args).await.expect("export succeeds");
        assert!(out.exists());
    }

    #[tokio::test]
    async fn test_run_application_reset() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::in_dir(temp_dir.path());
        std::fs::create_dir_all(temp_dir.path()).unwrap();
        std::fs::write(&paths.resume, "{}").unwrap();
        std::fs::write(&paths.template, "{\"templateId\":\"finance-gold\"}").unwrap();

        let args = Args {
            data_dir: Some(temp_dir.path().to_path_buf()),
            export: false,
            output: None,
            reset: true,
            debug: false,
        };
        run_application(args).await.expect("reset succeeds");
        assert!(!paths.resume.exists());
        assert!(!paths.template.exists());
    }
}
