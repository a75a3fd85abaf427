// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive TUI shell (ratatui + crossterm): an application tab strip, a
//! collapsible documents side panel, a document detail pane, modal name entry, search, and footer
//! navigation. Every key event applies one op batch against the workspace and the next frame
//! re-derives everything from the resulting snapshot.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::Direction as LayoutDirection,
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::{FileRef, Workspace};
use crate::ops::{apply_ops, Direction, EntryRef, Op};
use crate::query;

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅳 🅾 🆂 🆂 🅸 🅴 🆁 ";
const FOOTER_BRAND_WIDTH: u16 = 22;
const SIDE_PANEL_WIDTH: u16 = 34;
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Runs the interactive terminal UI against an empty workspace.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    run_with_workspace(Workspace::new())
}

pub fn run_with_workspace(workspace: Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(workspace);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Raw-mode/alternate-screen guard around the ratatui terminal.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<(), io::Error> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = layout[0];
    let tabs_area = layout[1];
    let main_area = layout[2];
    let status_area = layout[3];

    frame.render_widget(Paragraph::new(header_line(app)), header_area);

    if app.workspace.applications().is_empty() {
        render_empty_workspace(frame, main_area);
    } else {
        frame.render_widget(Paragraph::new(application_tabs_line(app)), tabs_area);

        let (panel_area, detail_area) = if app.side_panel_visible {
            let panes = Layout::default()
                .direction(LayoutDirection::Horizontal)
                .constraints([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Min(0)])
                .split(main_area);
            (Some(panes[0]), panes[1])
        } else {
            (None, main_area)
        };

        if let Some(panel_area) = panel_area {
            render_documents_panel(frame, app, panel_area);
        }
        render_detail_pane(frame, app, detail_area);
    }

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    let status_panes = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_BRAND_WIDTH)])
        .split(status_area);
    let status_left = status_panes[0];
    let brand_area = status_panes[1];

    if app.search_mode != SearchMode::Inactive {
        frame.render_widget(Paragraph::new(search_footer_line(app, &toast_suffix)), status_left);
        if app.search_mode == SearchMode::Editing {
            let cursor_x = status_left
                .x
                .saturating_add(1)
                .saturating_add(app.search_query.chars().count() as u16)
                .min(status_left.x.saturating_add(status_left.width.saturating_sub(1)));
            frame.set_cursor(cursor_x, status_left.y);
        }
    } else {
        frame.render_widget(Paragraph::new(footer_help_line(app, &toast_suffix)), status_left);
    }
    frame.render_widget(Paragraph::new(footer_brand_line()).alignment(Alignment::Right), brand_area);

    if let Some(modal) = app.modal.clone() {
        render_modal(frame, &modal, main_area);
    }

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_documents_panel(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let border_style = panel_border_style_for_focus(app.focus, Focus::Documents);
    let total = query::document_count(&app.workspace, app.workspace.cursor().application);
    let suffix = format!("— {total} total");
    let title = view_title("Documents", '2', Some(&suffix));

    let documents = query::current_application(&app.workspace)
        .map(crate::model::Application::documents)
        .unwrap_or_default();

    if documents.is_empty() {
        let empty = Paragraph::new("\nNo documents yet.\n\nPress d to add one.")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style));
        frame.render_widget(empty, area);
        return;
    }

    let marker_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let items = documents
        .iter()
        .map(|doc| {
            let marker = if doc.file().is_some() { "◼" } else { "◻" };
            let line = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(doc.name().to_owned(), Style::default().fg(Color::White)),
            ]);
            ListItem::new(line)
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style))
        .highlight_style(documents_cursor_highlight_style(app.focus));
    frame.render_stateful_widget(list, area, &mut app.documents_state);
}

fn render_detail_pane(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let border_style = panel_border_style_for_focus(app.focus, Focus::Detail);

    let (title, text) = match query::current_document(&app.workspace) {
        Some(doc) => {
            let suffix = format!("— {}", doc.name());
            let file_lines = match doc.file() {
                Some(file) => format!(
                    "File: {}\nPath: {}\n\nU detach · u replace · x delete document",
                    file.display_name(),
                    file.path()
                ),
                None => "No file attached.\n\nu attach · x delete document".to_owned(),
            };
            (
                view_title("Document", '1', Some(&suffix)),
                format!("Name: {}\n\n{file_lines}", doc.name()),
            )
        }
        None => (
            view_title("Document", '1', None),
            "Select a document from the side panel or press d to add one.".to_owned(),
        ),
    };

    let detail = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style));
    frame.render_widget(detail, area);
}

// Extracted panel/header/footer/help/modal rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalKind {
    NewApplication,
    NewDocument,
    AttachFile,
}

#[derive(Debug, Clone)]
struct Modal {
    kind: ModalKind,
    input: String,
}

impl Modal {
    fn new(kind: ModalKind) -> Self {
        Self { kind, input: String::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Regular,
    Fuzzy,
}

#[derive(Debug, Clone)]
struct SearchCandidate {
    entry: EntryRef,
    haystack: String,
}

pub(crate) struct App {
    workspace: Workspace,
    focus: Focus,
    side_panel_visible: bool,
    documents_state: ListState,
    modal: Option<Modal>,
    toast: Option<Toast>,
    show_help: bool,
    help_scroll: u16,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    search_candidates: Vec<SearchCandidate>,
    search_results: Vec<EntryRef>,
    search_result_index: usize,
    should_quit: bool,
}

impl App {
    fn new(workspace: Workspace) -> Self {
        let mut documents_state = ListState::default();
        if query::current_document(&workspace).is_some() {
            documents_state.select(Some(workspace.cursor().document));
        }

        Self {
            workspace,
            focus: Focus::Tabs,
            side_panel_visible: true,
            documents_state,
            modal: None,
            toast: None,
            show_help: false,
            help_scroll: 0,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_query: String::new(),
            search_candidates: Vec::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            should_quit: false,
        }
    }

    /// Applies one op batch at the current revision and re-syncs the documents list cursor.
    ///
    /// The batch carries only positions the UI is currently rendering, so an error here is a
    /// bug, not a user-facing failure; it is surfaced as a toast and the workspace stays as it
    /// was (failed batches never apply partially).
    fn apply(&mut self, ops: &[Op]) {
        let base_rev = self.workspace.rev();
        match apply_ops(&mut self.workspace, base_rev, ops) {
            Ok(_result) => self.sync_documents_state(),
            Err(err) => {
                debug_assert!(false, "op batch rejected: {err}");
                self.set_toast(format!("Internal error: {err}"));
            }
        }
    }

    fn sync_documents_state(&mut self) {
        if query::current_document(&self.workspace).is_some() {
            self.documents_state.select(Some(self.workspace.cursor().document));
        } else {
            self.documents_state.select(None);
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        if self.modal.is_some() {
            self.handle_modal_key(code);
            return false;
        }

        match self.search_mode {
            SearchMode::Editing => {
                self.handle_search_edit_key(code);
                return false;
            }
            SearchMode::Results => {
                if matches!(code, KeyCode::Esc) {
                    self.clear_search();
                    return false;
                }
            }
            SearchMode::Inactive => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('a') => self.open_modal(ModalKind::NewApplication),
            KeyCode::Char('d') => self.open_new_document_modal(),
            KeyCode::Char('u') => self.open_attach_file_modal(),
            KeyCode::Char('U') => self.detach_current_file(),
            KeyCode::Char('x') => self.remove_current(),
            KeyCode::Char('s') => self.toggle_side_panel(),
            KeyCode::Char('[') => self.switch_application_prev(),
            KeyCode::Char(']') => self.switch_application_next(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate(Direction::Backward),
            KeyCode::Right | KeyCode::Char('l') => self.navigate(Direction::Forward),
            KeyCode::Down | KeyCode::Char('j') => self.select_document_delta(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_document_delta(-1),
            KeyCode::Home => self.select_document_first(),
            KeyCode::End => self.select_document_last(),
            KeyCode::Char('/') => self.enter_search_mode(SearchKind::Regular),
            KeyCode::Char('\\') => self.enter_search_mode(SearchKind::Fuzzy),
            KeyCode::Char('n') => self.search_next(),
            KeyCode::Char('N') => self.search_prev(),
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),
            _ => {}
        }

        false
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            if self.search_mode != SearchMode::Inactive {
                self.clear_search();
            }
            self.help_scroll = 0;
        }
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub((-delta) as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn toggle_side_panel(&mut self) {
        self.side_panel_visible = !self.side_panel_visible;
        if !self.side_panel_visible && self.focus == Focus::Documents {
            self.focus = Focus::Detail;
        }
        self.set_toast(if self.side_panel_visible { "Side panel shown" } else { "Side panel hidden" });
    }

    fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(Modal::new(kind));
    }

    fn open_new_document_modal(&mut self) {
        if query::current_application(&self.workspace).is_none() {
            self.set_toast("Add an application first (a)");
            return;
        }
        self.open_modal(ModalKind::NewDocument);
    }

    fn open_attach_file_modal(&mut self) {
        if query::current_document(&self.workspace).is_none() {
            self.set_toast("No document selected");
            return;
        }
        self.open_modal(ModalKind::AttachFile);
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.modal = None;
            }
            KeyCode::Enter => self.submit_modal(),
            KeyCode::Backspace => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.input.push(ch);
                }
            }
            _ => {}
        }
    }

    /// Empty or whitespace-only input is silently ignored and the dialog stays open.
    fn submit_modal(&mut self) {
        let Some(modal) = self.modal.as_ref() else {
            return;
        };
        let value = modal.input.trim().to_owned();
        if value.is_empty() {
            return;
        }

        let kind = modal.kind;
        self.modal = None;
        let cursor = self.workspace.cursor();
        match kind {
            ModalKind::NewApplication => {
                self.apply(&[Op::AddApplication { name: value.clone() }]);
                self.set_toast(format!("Added application: {value}"));
            }
            ModalKind::NewDocument => {
                self.apply(&[Op::AddDocument { application: cursor.application, name: value.clone() }]);
                self.set_toast(format!("Added document: {value}"));
            }
            ModalKind::AttachFile => {
                let file = FileRef::new(value);
                let display = file.display_name().to_owned();
                self.apply(&[Op::AttachFile {
                    application: cursor.application,
                    document: cursor.document,
                    file,
                }]);
                self.set_toast(format!("Attached file: {display}"));
            }
        }
    }

    fn detach_current_file(&mut self) {
        let Some(doc) = query::current_document(&self.workspace) else {
            self.set_toast("No document selected");
            return;
        };
        if doc.file().is_none() {
            self.set_toast("No file attached");
            return;
        }

        let cursor = self.workspace.cursor();
        self.apply(&[Op::DetachFile { application: cursor.application, document: cursor.document }]);
        self.set_toast("File detached");
    }

    /// Deletes what the focus points at: the current application from the tab strip, the current
    /// document from the side panel or detail pane.
    fn remove_current(&mut self) {
        let cursor = self.workspace.cursor();
        match self.focus {
            Focus::Tabs => {
                let Some(application) = query::current_application(&self.workspace) else {
                    self.set_toast("No application to remove");
                    return;
                };
                let name = application.name().to_owned();
                self.apply(&[Op::RemoveApplication { application: cursor.application }]);
                self.set_toast(format!("Removed application: {name}"));
            }
            Focus::Documents | Focus::Detail => {
                let Some(document) = query::current_document(&self.workspace) else {
                    self.set_toast("No document to remove");
                    return;
                };
                let name = document.name().to_owned();
                self.apply(&[Op::RemoveDocument {
                    application: cursor.application,
                    document: cursor.document,
                }]);
                self.set_toast(format!("Removed document: {name}"));
            }
        }
    }

    fn switch_application_prev(&mut self) {
        let len = self.workspace.applications().len();
        if len == 0 {
            return;
        }
        let current = self.workspace.cursor().application;
        let prev = match current {
            0 => len - 1,
            n => n - 1,
        };
        self.apply(&[Op::SelectApplication { application: prev }]);
    }

    fn switch_application_next(&mut self) {
        let len = self.workspace.applications().len();
        if len == 0 {
            return;
        }
        let next = (self.workspace.cursor().application + 1) % len;
        self.apply(&[Op::SelectApplication { application: next }]);
    }

    fn navigate(&mut self, direction: Direction) {
        if self.workspace.applications().is_empty() {
            return;
        }
        self.apply(&[Op::Navigate { direction }]);
    }

    fn select_document_delta(&mut self, delta: i64) {
        let count = query::document_count(&self.workspace, self.workspace.cursor().application);
        if count == 0 {
            return;
        }
        let current = self.workspace.cursor().document as i64;
        let next = (current + delta).clamp(0, count as i64 - 1) as usize;
        if next != current as usize {
            self.apply(&[Op::SelectDocument { document: next }]);
        }
    }

    fn select_document_first(&mut self) {
        if query::current_document(&self.workspace).is_some() {
            self.apply(&[Op::SelectDocument { document: 0 }]);
        }
    }

    fn select_document_last(&mut self) {
        let count = query::document_count(&self.workspace, self.workspace.cursor().application);
        if count > 0 {
            self.apply(&[Op::SelectDocument { document: count - 1 }]);
        }
    }

    fn search_prefix(&self) -> char {
        match self.search_kind {
            SearchKind::Regular => '/',
            SearchKind::Fuzzy => '\\',
        }
    }

    fn enter_search_mode(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_result_index = 0;
        self.search_results.clear();
        self.search_candidates = search_candidates_from_workspace(&self.workspace);
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => {
                if self.search_results.is_empty() {
                    self.clear_search();
                    return;
                }
                self.search_mode = SearchMode::Results;
                self.jump_to_search_result();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.recompute_search_results();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.recompute_search_results();
            }
            _ => {}
        }
    }

    fn recompute_search_results(&mut self) {
        self.search_results = ranked_search_results(
            &self.search_candidates,
            &self.search_query,
            self.search_kind,
            self.workspace.cursor().application,
        );
        self.search_result_index = 0;
    }

    fn search_next(&mut self) {
        if self.search_mode != SearchMode::Results || self.search_results.is_empty() {
            return;
        }
        self.search_result_index = (self.search_result_index + 1) % self.search_results.len();
        self.jump_to_search_result();
    }

    fn search_prev(&mut self) {
        if self.search_mode != SearchMode::Results || self.search_results.is_empty() {
            return;
        }
        self.search_result_index = match self.search_result_index {
            0 => self.search_results.len() - 1,
            n => n - 1,
        };
        self.jump_to_search_result();
    }

    fn jump_to_search_result(&mut self) {
        let Some(entry) = self.search_results.get(self.search_result_index).copied() else {
            return;
        };
        self.jump_to_entry(entry);
    }

    fn jump_to_entry(&mut self, entry: EntryRef) {
        // Results can go stale if entries are removed while they are shown.
        let Some(application) = self.workspace.applications().get(entry.application) else {
            self.clear_search();
            self.set_toast("Search results are stale");
            return;
        };
        if entry.document.is_some_and(|document| document >= application.documents().len()) {
            self.clear_search();
            self.set_toast("Search results are stale");
            return;
        }

        let mut ops = vec![Op::SelectApplication { application: entry.application }];
        if let Some(document) = entry.document {
            ops.push(Op::SelectDocument { document });
        }
        self.apply(&ops);
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_candidates.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }
}

fn search_candidates_from_workspace(workspace: &Workspace) -> Vec<SearchCandidate> {
    let mut candidates = Vec::new();
    for (app_idx, application) in workspace.applications().iter().enumerate() {
        candidates.push(SearchCandidate {
            entry: EntryRef::application(app_idx),
            haystack: application.name().to_lowercase(),
        });
        for (doc_idx, document) in application.documents().iter().enumerate() {
            candidates.push(SearchCandidate {
                entry: EntryRef::document(app_idx, doc_idx),
                haystack: format!(
                    "{}/{}",
                    application.name().to_lowercase(),
                    document.name().to_lowercase()
                ),
            });
        }
    }
    candidates
}

fn ranked_search_results(
    candidates: &[SearchCandidate],
    query: &str,
    kind: SearchKind,
    current_application: usize,
) -> Vec<EntryRef> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored = Vec::new();
    for (idx, candidate) in candidates.iter().enumerate() {
        let score = match kind {
            SearchKind::Regular => regular_score(&needle, &candidate.haystack),
            SearchKind::Fuzzy => fuzzy_score(&needle, &candidate.haystack),
        };
        let Some(mut score) = score else {
            continue;
        };
        // Matches in the application the user is already looking at rank first.
        if candidate.entry.application == current_application {
            score += 5_000;
        }
        scored.push((score, idx));
    }

    scored.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| candidates[*idx_a].haystack.cmp(&candidates[*idx_b].haystack))
    });

    scored.into_iter().map(|(_, idx)| candidates[idx].entry).collect()
}

fn regular_score(needle: &str, haystack: &str) -> Option<i64> {
    let first = haystack.find(needle)?;
    let starts = first == 0;
    let start_boundary =
        if starts { true } else { haystack[..first].chars().last().is_some_and(is_boundary_char) };

    let mut score = 200_000i64.saturating_sub((first as i64) * 1000);
    score -= haystack.chars().count() as i64;
    if starts {
        score += 50_000;
    }
    if start_boundary {
        score += 20_000;
    }
    if haystack == needle {
        score += 100_000;
    }

    Some(score)
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    if !is_subsequence(needle, haystack) {
        return None;
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    if haystack.contains(needle) {
        score += 2000;
    }

    Some(score)
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut needle_iter = needle.chars().peekable();
    for ch in haystack.chars() {
        let Some(&want) = needle_iter.peek() else {
            return true;
        };
        if ch == want {
            needle_iter.next();
        }
    }
    needle_iter.peek().is_none()
}

fn is_boundary_char(ch: char) -> bool {
    matches!(ch, '/' | ':' | '-' | '_' | ' ')
}

/// Sample workspace for `--demo`.
pub fn demo_workspace() -> Workspace {
    let mut workspace = Workspace::new();
    let ops = [
        Op::AddApplication { name: "Ada Lovelace".to_owned() },
        Op::AddDocument { application: 0, name: "Resume".to_owned() },
        Op::AddDocument { application: 0, name: "Cover Letter".to_owned() },
        Op::AttachFile {
            application: 0,
            document: 0,
            file: FileRef::new("~/files/ada/resume.pdf"),
        },
        Op::AddApplication { name: "Grace Hopper".to_owned() },
        Op::AddDocument { application: 1, name: "Resume".to_owned() },
        Op::AddDocument { application: 1, name: "References".to_owned() },
        Op::AddDocument { application: 1, name: "Portfolio".to_owned() },
        Op::AddApplication { name: "Alan Turing".to_owned() },
    ];
    apply_ops(&mut workspace, 0, &ops).expect("demo workspace ops");
    workspace
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{App, Workspace};
    use crate::ops::EntryRef;
    use crossterm::event::KeyCode;

    /// Drives the TUI key handling without a terminal.
    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(workspace: Workspace) -> Self {
            Self { app: App::new(workspace) }
        }

        pub(crate) fn press(&mut self, code: KeyCode) -> bool {
            self.app.handle_key_code(code)
        }

        pub(crate) fn type_str(&mut self, text: &str) {
            for ch in text.chars() {
                self.press(KeyCode::Char(ch));
            }
        }

        pub(crate) fn workspace(&self) -> &Workspace {
            &self.app.workspace
        }

        pub(crate) fn modal_open(&self) -> bool {
            self.app.modal.is_some()
        }

        pub(crate) fn search_results(&self) -> &[EntryRef] {
            &self.app.search_results
        }

        pub(crate) fn app_mut(&mut self) -> &mut App {
            &mut self.app
        }
    }
}
