//! # Rendering
//!
//! Draws the TUI. The application chrome (header, tabs, borders, footer)
//! uses fixed terminal colors; the preview pane is painted entirely from
//! the active theme, which is the terminal counterpart of the original's
//! CSS-variable styling.

use crate::catalog::{hex_to_color, predefined_themes, Theme};
use crate::preview::{Block as DocBlock, Document, Line as DocLine, Role};
use crate::resume::{EditorMode, FieldValue, FormBuffer};
use crate::ui::app::{App, PreviewMode, Step};
use crate::ui::perspective;
use crate::ui::sections::{self, SectionTab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const CHROME_ACCENT: Color = Color::Cyan;
const CHROME_DIM: Color = Color::Gray;
const SIDEBAR_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with step bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    match app.step {
        Step::Edit => render_edit(frame, app, main_chunks[1]),
        Step::Preview => render_preview(frame, app, main_chunks[1]),
        Step::Export => render_export(frame, app, main_chunks[1]),
    }

    render_footer(frame, app, main_chunks[2]);

    if let Some(message) = &app.modal {
        render_modal(frame, message);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let step_span = |step: Step, label: &str| -> Span<'static> {
        if app.step == step {
            Span::styled(
                format!("[{label}]"),
                Style::default()
                    .fg(CHROME_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(CHROME_DIM))
        }
    };

    let line = Line::from(vec![
        Span::styled(
            "  VITAE ",
            Style::default()
                .fg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("resume builder   ", Style::default().fg(CHROME_DIM)),
        step_span(Step::Edit, "1 Edit"),
        Span::raw("  "),
        step_span(Step::Preview, "2 Preview"),
        Span::raw("  "),
        step_span(Step::Export, "3 Export"),
    ]);

    let header = Paragraph::new(vec![line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CHROME_ACCENT)),
    );
    frame.render_widget(header, area);
}

fn render_edit(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_tab_bar(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    match app.tab {
        SectionTab::Template => {
            render_template_picker(frame, app, body[0]);
            render_template_details(frame, app, body[1]);
        }
        SectionTab::Theme => {
            render_theme_picker(frame, app, body[0]);
            if let Some(form) = &app.theme_form {
                render_form(frame, form, "Customize Theme", body[1]);
            } else {
                render_theme_swatches(frame, app, body[1]);
            }
        }
        SectionTab::Personal => {
            render_section_hint(frame, app, body[0]);
            if app.editor().mode.is_open() {
                render_form(frame, &app.editor().form, "Personal Info", body[1]);
            } else {
                // Read-only view of the saved values; Enter opens the form.
                let saved = FormBuffer::new(sections::personal_form(app.resume()));
                render_form(frame, &saved, "Personal Info (Enter to edit)", body[1]);
            }
        }
        _ => {
            render_record_list(frame, app, body[0]);
            if app.editor().mode.is_open() {
                let title = match app.editor().mode {
                    EditorMode::Adding => format!("Add {}", app.tab.title()),
                    _ => format!("Edit {}", app.tab.title()),
                };
                render_form(frame, &app.editor().form, &title, body[1]);
            } else {
                render_section_hint(frame, app, body[1]);
            }
        }
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for tab in SectionTab::ALL {
        let style = if tab == app.tab {
            Style::default()
                .fg(Color::Black)
                .bg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CHROME_DIM)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    let bar = Paragraph::new(vec![Line::from(spans)]).wrap(Wrap { trim: false });
    frame.render_widget(bar, area);
}

fn render_record_list(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.list_len();
    let items: Vec<ListItem> = (0..count)
        .map(|index| {
            let label = sections::record_label(app.resume(), app.tab, index)
                .unwrap_or_default();
            let style = if index == app.editor().selected && !app.editor().mode.is_open() {
                Style::default()
                    .fg(Color::Black)
                    .bg(CHROME_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {label}")).style(style)
        })
        .collect();

    let title = format!(" {} ({count}) ", app.tab.title());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(CHROME_ACCENT)),
    );
    frame.render_widget(list, area);
}

fn render_section_hint(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.tab {
        SectionTab::Personal => vec![
            Line::from("Fill in your contact details."),
            Line::from(""),
            Line::from("Every field is optional; the preview"),
            Line::from("only shows what you provide."),
        ],
        _ => vec![
            Line::from("a: add a new entry"),
            Line::from("Enter: edit the selected entry"),
            Line::from("d: delete the selected entry"),
            Line::from(""),
            Line::from("Entries appear in the preview in the"),
            Line::from("order they were added."),
        ],
    };
    let hint = Paragraph::new(lines)
        .style(Style::default().fg(CHROME_DIM))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CHROME_DIM)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, area);
}

fn render_form(frame: &mut Frame, form: &FormBuffer, title: &str, area: Rect) {
    let mut lines = Vec::new();
    for (index, field) in form.fields.iter().enumerate() {
        let active = index == form.active;
        let marker = if field.required { "*" } else { " " };
        let label_style = if active {
            Style::default()
                .fg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CHROME_DIM)
        };

        let value_span = match &field.value {
            FieldValue::Text(s) | FieldValue::Multiline(s) => {
                let cursor = if active { "▏" } else { "" };
                Span::styled(format!("{s}{cursor}"), Style::default().fg(Color::White))
            }
            FieldValue::Flag(flag) => Span::styled(
                if *flag { "[x]" } else { "[ ]" },
                Style::default().fg(Color::White),
            ),
            FieldValue::Stars(level) => {
                let stars: String = (1..=5)
                    .map(|i| if i <= *level { '★' } else { '☆' })
                    .collect();
                Span::styled(stars, Style::default().fg(Color::Yellow))
            }
            FieldValue::Choice { options, index } => Span::styled(
                format!("◂ {} ▸", options.get(*index).cloned().unwrap_or_default()),
                Style::default().fg(Color::White),
            ),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker}{:<16} ", field.label), label_style),
            value_span,
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: save   Esc: cancel   Tab/↓↑: fields   Space: toggle   ◂▸: choose",
        Style::default().fg(CHROME_DIM),
    )));

    let form_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(Style::default().fg(CHROME_ACCENT)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(form_widget, area);
}

fn render_template_picker(frame: &mut Frame, app: &App, area: Rect) {
    let selected_id = app.template_store.selected_id();
    let items: Vec<ListItem> = crate::catalog::all_templates()
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let marker = if template.id == selected_id { "●" } else { " " };
            let style = if index == app.picker_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(CHROME_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                " {marker} {}  ({})",
                template.name, template.category
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Templates ")
            .border_style(Style::default().fg(CHROME_ACCENT)),
    );
    frame.render_widget(list, area);
}

fn render_template_details(frame: &mut Frame, app: &App, area: Rect) {
    let templates = crate::catalog::all_templates();
    let template = templates
        .get(app.picker_index)
        .unwrap_or(&templates[0]);

    let swatch_start = hex_to_color(template.preview.0).unwrap_or(CHROME_ACCENT);
    let swatch_end = hex_to_color(template.preview.1).unwrap_or(CHROME_ACCENT);

    let mut lines = vec![
        Line::from(Span::styled(
            template.name,
            Style::default()
                .fg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("██████", Style::default().fg(swatch_start)),
            Span::styled("██████", Style::default().fg(swatch_end)),
        ]),
        Line::from(""),
        Line::from(template.description),
        Line::from(""),
        Line::from(vec![
            Span::styled("Layout: ", Style::default().fg(CHROME_DIM)),
            Span::raw(format!("{:?}", template.layout)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Features:", Style::default().fg(CHROME_DIM))),
    ];
    for feature in template.features {
        lines.push(Line::from(format!("  - {feature}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: use this template",
        Style::default().fg(CHROME_DIM),
    )));

    let details = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Template Details ")
                .border_style(Style::default().fg(CHROME_DIM)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn render_theme_picker(frame: &mut Frame, app: &App, area: Rect) {
    let themes = predefined_themes();
    let is_custom = app.theme_store.is_custom();
    let active_id = app.current_theme().id;

    let mut items: Vec<ListItem> = themes
        .iter()
        .enumerate()
        .map(|(index, theme)| {
            let marker = if !is_custom && theme.id == active_id {
                "●"
            } else {
                " "
            };
            let swatch_color = hex_to_color(&theme.colors.primary).unwrap_or(CHROME_ACCENT);
            let style = if index == app.picker_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(CHROME_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {marker} ")),
                Span::styled("██ ", Style::default().fg(swatch_color)),
                Span::raw(theme.name.clone()),
            ]))
            .style(style)
        })
        .collect();

    let customize_marker = if is_custom { "●" } else { " " };
    let customize_style = if app.picker_index == themes.len() {
        Style::default()
            .fg(Color::Black)
            .bg(CHROME_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    items.push(
        ListItem::new(format!(" {customize_marker} Customize current palette…"))
            .style(customize_style),
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Themes ")
            .border_style(Style::default().fg(CHROME_ACCENT)),
    );
    frame.render_widget(list, area);
}

fn render_theme_swatches(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.current_theme();
    let swatch = |label: &str, hex: &str| -> Line<'static> {
        let color = hex_to_color(hex).unwrap_or(CHROME_DIM);
        Line::from(vec![
            Span::styled(format!(" {label:<16}"), Style::default().fg(CHROME_DIM)),
            Span::styled("██████  ", Style::default().fg(color)),
            Span::raw(hex.to_string()),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            theme.name.clone(),
            Style::default()
                .fg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        swatch("Primary", &theme.colors.primary),
        swatch("Secondary", &theme.colors.secondary),
        swatch("Accent", &theme.colors.accent),
        swatch("Text", &theme.colors.text),
        swatch("Secondary Text", &theme.colors.text_secondary),
        swatch("Background", &theme.colors.background),
        swatch("Surface", &theme.colors.surface),
        swatch("Border", &theme.colors.border),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: apply theme / open customizer",
            Style::default().fg(CHROME_DIM),
        )),
    ];

    let details = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Palette ")
            .border_style(Style::default().fg(CHROME_DIM)),
    );
    frame.render_widget(details, area);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.current_theme();
    let background = app.current_background();
    let doc = app.render_document();

    let (mode_label, lines) = match app.preview_mode {
        PreviewMode::TwoD => (
            "2D",
            paint_document(&doc, &theme, area.width.saturating_sub(2) as usize),
        ),
        PreviewMode::ThreeD => (
            "3D",
            perspective::paint(
                &doc,
                &theme,
                area.width.saturating_sub(2) as usize,
                area.height.saturating_sub(2) as usize,
            ),
        ),
    };

    let bg = hex_to_color(&background.color).unwrap_or(Color::Reset);
    let title = format!(
        " Preview [{mode_label}] - {} / {} (v toggles 2D/3D) ",
        app.current_template().name,
        theme.name
    );
    let preview = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(CHROME_ACCENT)),
        )
        .scroll((app.preview_scroll, 0));
    frame.render_widget(preview, area);
}

fn render_export(frame: &mut Frame, app: &App, area: Rect) {
    let template = app.current_template();
    let theme = app.current_theme();
    let mode = match app.preview_mode {
        PreviewMode::TwoD => "2D",
        PreviewMode::ThreeD => "3D (switch to 2D before exporting)",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your resume is ready to export",
            Style::default()
                .fg(CHROME_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Template:     {}", template.name)),
        Line::from(format!("  Theme:        {}", theme.name)),
        Line::from(format!("  Preview mode: {mode}")),
        Line::from(format!(
            "  Output:       {}",
            app.export_dir
                .join(crate::export::DEFAULT_EXPORT_FILENAME)
                .display()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: export PDF",
            Style::default().fg(Color::White),
        )),
    ];

    let export = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Export ")
            .border_style(Style::default().fg(CHROME_ACCENT)),
    );
    frame.render_widget(export, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.step {
        Step::Edit => {
            if app.form_open() {
                "[Enter] Save  [Esc] Cancel  [Tab] Next field"
            } else {
                "[h/l] Section  [j/k] Select  [a] Add  [Enter] Edit  [d] Delete  [1-3] Step  [Q] Quit"
            }
        }
        Step::Preview => "[v] 2D/3D  [j/k] Scroll  [1-3] Step  [Q] Quit",
        Step::Export => "[Enter] Export PDF  [1-3] Step  [Q] Quit",
    };

    let mut spans = vec![Span::styled(help, Style::default().fg(CHROME_DIM))];
    if let Some(status) = &app.status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(saved) = &app.last_saved {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Saved {}", saved.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(vec![Line::from(spans)]), area);
}

fn render_modal(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);
    let modal = Paragraph::new(vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(CHROME_DIM),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(modal, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

// ---------------------------------------------------------------------------
// Document painting (2D preview)
// ---------------------------------------------------------------------------

fn role_style(role: Role, theme: &Theme) -> Style {
    let text = hex_to_color(&theme.colors.text).unwrap_or(Color::White);
    let dim = hex_to_color(&theme.colors.text_secondary).unwrap_or(CHROME_DIM);
    let accent = hex_to_color(&theme.colors.accent).unwrap_or(CHROME_ACCENT);
    match role {
        Role::Title => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Role::Subtitle => Style::default().fg(Color::White),
        Role::Emphasis => Style::default().fg(text).add_modifier(Modifier::BOLD),
        Role::Body => Style::default().fg(text),
        Role::Dim => Style::default().fg(dim),
        Role::Accent => Style::default().fg(accent),
    }
}

fn styled_line(line: &DocLine, theme: &Theme, bg: Option<Color>) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|span| {
            let mut style = role_style(span.role, theme);
            if let Some(bg) = bg {
                style = style.bg(bg);
            }
            Span::styled(span.text.clone(), style)
        })
        .collect();
    Line::from(spans)
}

fn skill_bar_line(name: &str, level: u8, theme: &Theme) -> Line<'static> {
    let primary = hex_to_color(&theme.colors.primary).unwrap_or(CHROME_ACCENT);
    let border = hex_to_color(&theme.colors.border).unwrap_or(CHROME_DIM);
    let level = level.clamp(1, 5) as usize;

    let filled = "█".repeat(level * 4);
    let empty = "░".repeat((5 - level) * 4);
    let stars: String = (1..=5)
        .map(|i| if i <= level { '★' } else { '☆' })
        .collect();

    Line::from(vec![
        Span::styled(
            format!("{name:<24} "),
            role_style(Role::Body, theme),
        ),
        Span::styled(filled, Style::default().fg(primary)),
        Span::styled(empty, Style::default().fg(border)),
        Span::styled(format!("  {stars}"), Style::default().fg(Color::Yellow)),
    ])
}

/// Paint the document into terminal lines using the theme palette.
pub fn paint_document(doc: &Document, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    paint_blocks(&doc.blocks, theme, width, &mut out);
    out
}

fn paint_blocks(blocks: &[DocBlock], theme: &Theme, width: usize, out: &mut Vec<Line<'static>>) {
    for block in blocks {
        match block {
            DocBlock::Header { lines, tall } => {
                let header_bg =
                    hex_to_color(&theme.gradients.header.start).unwrap_or(CHROME_ACCENT);
                let pad = if *tall { 2 } else { 1 };
                let blank = Line::from(Span::styled(
                    " ".repeat(width.max(1)),
                    Style::default().bg(header_bg),
                ));
                for _ in 0..pad {
                    out.push(blank.clone());
                }
                for line in lines {
                    let text = line.plain_text();
                    let indent = width.saturating_sub(text.chars().count()) / 2;
                    let role = line.spans.first().map_or(Role::Subtitle, |s| s.role);
                    let trailing = width.saturating_sub(indent + text.chars().count());
                    out.push(Line::from(vec![
                        Span::styled(" ".repeat(indent), Style::default().bg(header_bg)),
                        Span::styled(text, role_style(role, theme).bg(header_bg)),
                        Span::styled(" ".repeat(trailing), Style::default().bg(header_bg)),
                    ]));
                }
                for _ in 0..pad {
                    out.push(blank.clone());
                }
            }
            DocBlock::SectionTitle(title) => {
                let primary = hex_to_color(&theme.colors.primary).unwrap_or(CHROME_ACCENT);
                let border = hex_to_color(&theme.colors.border).unwrap_or(CHROME_DIM);
                out.push(Line::from(Span::styled(
                    title.to_uppercase(),
                    Style::default().fg(primary).add_modifier(Modifier::BOLD),
                )));
                out.push(Line::from(Span::styled(
                    "─".repeat(width.max(1)),
                    Style::default().fg(border),
                )));
            }
            DocBlock::Text(line) => out.push(styled_line(line, theme, None)),
            DocBlock::SkillBar { name, level } => {
                out.push(skill_bar_line(name, *level, theme));
            }
            DocBlock::Spacer => out.push(Line::from("")),
            DocBlock::Columns { sidebar, main } => {
                paint_columns(sidebar, main, theme, width, out);
            }
        }
    }
}

/// Merge the sidebar and main flows side by side. Sidebar text is clipped
/// to a fixed width; the main column takes the rest.
fn paint_columns(
    sidebar: &[DocBlock],
    main: &[DocBlock],
    theme: &Theme,
    width: usize,
    out: &mut Vec<Line<'static>>,
) {
    let main_width = width.saturating_sub(SIDEBAR_WIDTH + 3);
    let mut left = Vec::new();
    paint_blocks(sidebar, theme, SIDEBAR_WIDTH, &mut left);
    let mut right = Vec::new();
    paint_blocks(main, theme, main_width, &mut right);

    let border = hex_to_color(&theme.colors.border).unwrap_or(CHROME_DIM);
    let rows = left.len().max(right.len());
    for row in 0..rows {
        let mut spans = Vec::new();
        let mut used = 0;
        if let Some(line) = left.get(row) {
            for span in &line.spans {
                if used >= SIDEBAR_WIDTH {
                    break;
                }
                let take: String = span.content.chars().take(SIDEBAR_WIDTH - used).collect();
                used += take.chars().count();
                spans.push(Span::styled(take, span.style));
            }
        }
        spans.push(Span::raw(" ".repeat(SIDEBAR_WIDTH.saturating_sub(used))));
        spans.push(Span::styled(" │ ", Style::default().fg(border)));
        if let Some(line) = right.get(row) {
            spans.extend(line.spans.iter().cloned());
        }
        out.push(Line::from(spans));
    }
}
