// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Window chrome for the TUI: focus handling, header and tab strip, footer entries, the help
// overlay, modal dialogs, and the empty-workspace placeholder. Included into `tui::mod` so the
// helpers share its imports and constants.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Tabs,
    Documents,
    Detail,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Tabs => Self::Documents,
            Self::Documents => Self::Detail,
            Self::Detail => Self::Tabs,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Tabs => Self::Detail,
            Self::Documents => Self::Tabs,
            Self::Detail => Self::Documents,
        }
    }
}

fn panel_border_style_for_focus(current: Focus, panel: Focus) -> Style {
    if current == panel {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn documents_cursor_highlight_style(focus: Focus) -> Style {
    let base = Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    if focus == Focus::Documents {
        base.fg(FOCUS_COLOR)
    } else {
        base
    }
}

/// Panel title in the shared `[key] Label — suffix` shape.
fn view_title(label: &str, key: char, suffix: Option<&str>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("[{key}] "), Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(label.to_owned(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(suffix) = suffix {
        spans.push(Span::styled(format!(" {suffix}"), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

fn header_line(app: &App) -> Line<'static> {
    let applications = app.workspace.applications().len();
    let documents = query::total_documents(&app.workspace);
    Line::from(vec![
        Span::styled(" Dossier", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" · {applications} applications · {documents} documents"),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn application_tabs_line(app: &App) -> Line<'static> {
    let selected = app.workspace.cursor().application;
    let mut spans = vec![Span::raw(" ")];

    for (idx, application) in app.workspace.applications().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        let label = format!("{} ({})", application.name(), application.documents().len());
        let style = if idx == selected {
            let color = if app.focus == Focus::Tabs { FOCUS_COLOR } else { Color::White };
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}

fn render_empty_workspace(frame: &mut Frame<'_>, area: Rect) {
    let text = "\nNo applications yet.\n\nPress a to create your first application.";
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(view_title("Applications", '0', None)));
    frame.render_widget(placeholder, area);
}

fn modal_chrome(kind: ModalKind) -> (&'static str, &'static str) {
    match kind {
        ModalKind::NewApplication => ("New Application", "Application name:"),
        ModalKind::NewDocument => ("New Document", "Document name:"),
        ModalKind::AttachFile => ("Attach File", "File path:"),
    }
}

fn render_modal(frame: &mut Frame<'_>, modal: &Modal, area: Rect) {
    let (title, prompt) = modal_chrome(modal.kind);
    let dialog = centered_rect(50, area).intersection(area);
    let dialog = Rect { height: dialog.height.min(7), ..dialog };

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), Style::default().add_modifier(Modifier::BOLD)))
        .border_style(Style::default().fg(FOCUS_COLOR));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let lines = vec![
        Line::from(Span::styled(prompt, Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(FOOTER_KEY_COLOR)),
            Span::raw(modal.input.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Enter save · Esc cancel", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    if inner.width > 2 {
        let cursor_x = inner
            .x
            .saturating_add(2)
            .saturating_add(modal.input.chars().count() as u16)
            .min(inner.x.saturating_add(inner.width.saturating_sub(1)));
        frame.set_cursor(cursor_x, inner.y.saturating_add(1));
    }
}

fn help_kv(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(description.to_owned(), Style::default().fg(Color::White)),
    ])
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = vec![
        Line::from(""),
        help_kv("←/h →/l", "step backward / forward through documents"),
        help_kv("[ ]", "previous / next application tab"),
        help_kv("↑/k ↓/j", "select document in the side panel"),
        help_kv("Home End", "first / last document"),
        help_kv("Tab", "cycle focus (tabs, documents, detail)"),
        Line::from(""),
        help_kv("a", "add application"),
        help_kv("d", "add document to the current application"),
        help_kv("x", "remove what the focus points at"),
        help_kv("u", "attach (or replace) a file on the current document"),
        help_kv("U", "detach the current document's file"),
        Line::from(""),
        help_kv("/", "search applications and documents"),
        help_kv("\\", "fuzzy search"),
        help_kv("n N", "next / previous search result"),
        Line::from(""),
        help_kv("s", "toggle the documents side panel"),
        help_kv("?", "toggle this help"),
        help_kv("q", "quit"),
    ];

    let dialog = centered_rect(70, area).intersection(area);
    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Help ", Style::default().add_modifier(Modifier::BOLD)))
        .border_style(Style::default().fg(FOCUS_COLOR));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    app.help_scroll = app.help_scroll.min(max_scroll);

    let help = Paragraph::new(lines).scroll((app.help_scroll, 0));
    frame.render_widget(help, inner);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, keys: &str) {
    push_footer_entry_maybe_disabled(spans, label, keys, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    keys: &str,
    disabled: bool,
) {
    if spans.is_empty() {
        spans.push(Span::raw(" "));
    } else {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
    }

    let (label_style, key_style) = if disabled {
        let dim = Style::default().fg(Color::DarkGray);
        (dim, dim)
    } else {
        (Style::default().fg(FOOTER_LABEL_COLOR), Style::default().fg(FOOTER_KEY_COLOR))
    };
    spans.push(Span::styled(format!("{label}:"), label_style));
    spans.push(Span::styled(keys.to_owned(), key_style));
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::new();
    push_footer_entry_maybe_disabled(&mut spans, "back", "←", query::at_global_start(&app.workspace));
    push_footer_entry_maybe_disabled(&mut spans, "next", "→", query::at_global_end(&app.workspace));
    push_footer_entry(&mut spans, "add", "a/d");
    push_footer_entry(&mut spans, "file", "u/U");
    push_footer_entry(&mut spans, "del", "x");
    push_footer_entry(&mut spans, "find", "/");
    push_footer_entry(&mut spans, "help", "?");
    push_footer_entry(&mut spans, "quit", "q");

    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            toast_suffix.to_owned(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn search_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{}{}", app.search_prefix(), app.search_query),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} matches)", app.search_results.len()),
            Style::default().fg(Color::Gray),
        ),
    ];

    if app.search_mode == SearchMode::Results && !app.search_results.is_empty() {
        spans.push(Span::styled(
            format!(
                "  result {}/{} · n/N cycle · Esc clear",
                app.search_result_index + 1,
                app.search_results.len()
            ),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            "  Enter jump · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            toast_suffix.to_owned(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)))
}

/// Centers a dialog of the given percentage width inside `area`, with a fixed-ish height set by
/// the caller.
fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let width = width.max(20).min(area.width);
    let height = area.height.saturating_mul(60) / 100;
    let height = height.max(5).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
