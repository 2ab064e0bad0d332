// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm) wires the panel reducer, the
//! scene store, and the route client together. All state transitions go through
//! the reducer; the shell only executes the effects it gets back.

use std::collections::BTreeMap;
use std::error::Error;
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
};

use crate::model::{Segment, BOARD_MAX};
use crate::panel::{reduce, PanelAction, PanelEffect, PanelMode, PanelState, RequestTicket};
use crate::render::{color_for_label, Renderer};
use crate::route::{RouteClient, RouteError};
use crate::scene::SceneStore;

const FOCUS_COLOR: Color = Color::LightGreen;
const NOTICE_COLOR: Color = Color::LightRed;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆃 🆁 🅸 🆃 🅾 🅽 ";
const TOAST_TTL: Duration = Duration::from_secs(2);
const SUGGESTION_LIMIT: usize = 5;

/// Runs the interactive terminal UI until the user quits.
///
/// `directory` is the route service's place directory, fetched once up front;
/// an empty directory simply disables suggestions.
pub fn run(
    client: RouteClient,
    runtime: tokio::runtime::Handle,
    directory: BTreeMap<String, String>,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(client, runtime, directory);

    while !app.should_quit {
        app.drain_route_outcomes();
        app.expire_toast();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

/// The TUI-side renderer: keeps the latest repaint snapshot for the canvas
/// widget to paint from.
#[derive(Debug, Default)]
struct BoardView {
    segments: Vec<Segment>,
}

impl BoardView {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Renderer for BoardView {
    fn repaint(&mut self, segments: &[Segment]) {
        self.segments = segments.to_vec();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    EdgeText,
    RouteStart,
    RouteEnd,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::EdgeText => Self::RouteStart,
            Self::RouteStart => Self::RouteEnd,
            Self::RouteEnd => Self::EdgeText,
        }
    }

    fn mode(self) -> PanelMode {
        match self {
            Self::EdgeText => PanelMode::EdgeText,
            Self::RouteStart | Self::RouteEnd => PanelMode::Route,
        }
    }
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct RouteOutcome {
    ticket: RequestTicket,
    outcome: Result<Vec<Segment>, RouteError>,
}

struct App {
    store: SceneStore<BoardView>,
    panel: PanelState,
    focus: Focus,
    route_client: RouteClient,
    runtime: tokio::runtime::Handle,
    outcome_tx: mpsc::Sender<RouteOutcome>,
    outcome_rx: mpsc::Receiver<RouteOutcome>,
    directory: Vec<(String, String)>,
    suggestions: Vec<usize>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(
        route_client: RouteClient,
        runtime: tokio::runtime::Handle,
        directory: BTreeMap<String, String>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            store: SceneStore::new(BoardView::default()),
            panel: PanelState::default(),
            focus: Focus::EdgeText,
            route_client,
            runtime,
            outcome_tx,
            outcome_rx,
            directory: directory.into_iter().collect(),
            suggestions: Vec::new(),
            toast: None,
            should_quit: false,
        }
    }

    fn dispatch(&mut self, action: PanelAction) {
        let transition = reduce(&self.panel, action);
        self.panel = transition.state;
        for effect in transition.effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: PanelEffect) {
        match effect {
            PanelEffect::AppendScene(batch) => {
                let added = batch.len();
                self.store.append(&batch);
                self.set_toast(format!("Added {added} segment(s)"));
            }
            PanelEffect::ResetScene => {
                self.store.reset();
                self.set_toast("Cleared board");
            }
            PanelEffect::FetchRoute { ticket, start, end } => {
                let client = self.route_client.clone();
                let tx = self.outcome_tx.clone();
                self.runtime.spawn(async move {
                    let outcome = client.find_path(&start, &end).await;
                    // The UI may have quit while the request was in flight.
                    let _ = tx.send(RouteOutcome { ticket, outcome });
                });
            }
        }
    }

    /// Feeds resolved route requests back into the reducer. Called once per UI
    /// tick, so resolutions land on the single UI execution context.
    fn drain_route_outcomes(&mut self) {
        while let Ok(RouteOutcome { ticket, outcome }) = self.outcome_rx.try_recv() {
            self.dispatch(PanelAction::RouteResolved { ticket, outcome });
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('d') => self.dispatch(PanelAction::Draw),
                KeyCode::Char('l') => self.dispatch(PanelAction::ClearBoard),
                KeyCode::Char('u') => {
                    self.dispatch(PanelAction::ClearInput);
                    self.refresh_suggestions();
                }
                KeyCode::Char('y') => self.copy_scene_to_clipboard(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Esc => self.dispatch(PanelAction::DismissNotice),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.edit_focused(|text| {
                text.pop();
            }),
            KeyCode::Char(ch) => self.edit_focused(|text| text.push(ch)),
            _ => {}
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = self.focus.cycle();
        if self.panel.mode() != self.focus.mode() {
            self.dispatch(PanelAction::SetMode(self.focus.mode()));
        }
        self.refresh_suggestions();
    }

    fn handle_enter(&mut self) {
        match self.focus {
            Focus::EdgeText => self.edit_focused(|text| text.push('\n')),
            Focus::RouteStart | Focus::RouteEnd => {
                if let Some(&index) = self.suggestions.first() {
                    let short = self.directory[index].0.clone();
                    self.set_focused_field(short);
                    self.suggestions.clear();
                } else {
                    self.dispatch(PanelAction::Draw);
                }
            }
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let mut text = self.focused_field().to_owned();
        edit(&mut text);
        self.set_focused_field(text);
    }

    fn focused_field(&self) -> &str {
        match self.focus {
            Focus::EdgeText => self.panel.edge_text(),
            Focus::RouteStart => self.panel.route_start(),
            Focus::RouteEnd => self.panel.route_end(),
        }
    }

    fn set_focused_field(&mut self, text: String) {
        let action = match self.focus {
            Focus::EdgeText => PanelAction::EditEdgeText(text),
            Focus::RouteStart => PanelAction::EditRouteStart(text),
            Focus::RouteEnd => PanelAction::EditRouteEnd(text),
        };
        self.dispatch(action);
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        let query = match self.focus {
            Focus::EdgeText => "",
            Focus::RouteStart => self.panel.route_start(),
            Focus::RouteEnd => self.panel.route_end(),
        };
        self.suggestions = ranked_place_suggestions(&self.directory, query);
    }

    fn copy_scene_to_clipboard(&mut self) {
        let segments = self.store.scene().segments();
        if segments.is_empty() {
            self.set_toast("Board is empty");
            return;
        }

        let line_count = segments.len();
        let text = scene_to_edge_list(segments);
        match copy_to_clipboard(&text) {
            Ok(via) => self.set_toast(format!("Copied {line_count} line(s) ({via})")),
            Err(err) => self.set_toast(format!("Copy failed: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self) {
        if matches!(&self.toast, Some(toast) if toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = rows[0];
    let status_area = rows[1];

    let panes = Layout::default()
        .direction(if main_area.width < 90 {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_area);

    draw_board(frame, panes[0], app);
    draw_panel(frame, panes[1], app);

    let status = Paragraph::new(footer_line(app));
    frame.render_widget(status, status_area);
}

fn draw_board(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let view = app.store.renderer();
    let title = format!(
        " Board ({} segments, rev {}) ",
        view.segments().len(),
        app.store.rev()
    );

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds([0.0, BOARD_MAX])
        .y_bounds([0.0, BOARD_MAX])
        .paint(|ctx| {
            for segment in view.segments() {
                // Board coordinates are top-left origin; the canvas widget's
                // are bottom-left.
                ctx.draw(&CanvasLine {
                    x1: segment.start().x,
                    y1: BOARD_MAX - segment.start().y,
                    x2: segment.end().x,
                    y2: BOARD_MAX - segment.end().y,
                    color: color_for_label(segment.color()),
                });
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let notice_height = if app.panel.notice().is_some() { 4 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(notice_height)])
        .split(area);

    match app.panel.mode() {
        PanelMode::EdgeText => draw_edge_panel(frame, rows[0], app),
        PanelMode::Route => draw_route_panel(frame, rows[0], app),
    }

    if let Some(notice) = app.panel.notice() {
        let paragraph = Paragraph::new(notice.to_owned())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(NOTICE_COLOR))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Notice (Esc to dismiss) "),
            );
        frame.render_widget(paragraph, rows[1]);
    }
}

fn draw_edge_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus == Focus::EdgeText;
    let mut text = app.panel.edge_text().to_owned();
    if focused {
        text.push('▏');
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Edges (x1 y1 x2 y2 COLOR per line) ")
        .border_style(border_style(focused));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_route_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mut lines = vec![
        field_line("Start", app.panel.route_start(), app.focus == Focus::RouteStart),
        field_line("End  ", app.panel.route_end(), app.focus == Focus::RouteEnd),
        Line::from(""),
    ];

    if app.suggestions.is_empty() {
        if !app.directory.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{} places known, type to search", app.directory.len()),
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        for (rank, &index) in app.suggestions.iter().enumerate() {
            let (short, long) = &app.directory[index];
            let style = if rank == 0 {
                Style::default().fg(FOCUS_COLOR)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(format!("{short}  {long}"), style)));
        }
    }

    let focused = matches!(app.focus, Focus::RouteStart | Focus::RouteEnd);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Route (short place names) ")
        .border_style(border_style(focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let mut value = value.to_owned();
    if focused {
        value.push('▏');
    }
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled(
            value,
            Style::default().fg(if focused { FOCUS_COLOR } else { Color::White }),
        ),
    ])
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    spans.push(Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)));

    push_footer_entry(&mut spans, "DRAW", "^d");
    push_footer_entry(&mut spans, "CLEAR BOARD", "^l");
    push_footer_entry(&mut spans, "CLEAR INPUT", "^u");
    push_footer_entry(&mut spans, "COPY", "^y");
    push_footer_entry(&mut spans, "SWITCH", "⇥");
    push_footer_entry(&mut spans, "QUIT", "^q");

    if app.panel.inflight().is_some() {
        spans.push(Span::styled(" fetching route…", Style::default().fg(Color::Yellow)));
    }
    if let Some(toast) = &app.toast {
        spans.push(Span::styled(
            format!("  {}", toast.message),
            Style::default().fg(FOCUS_COLOR),
        ));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str) {
    spans.push(Span::styled(
        format!("{label} "),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        format!("{key}  "),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

/// Serializes the scene back into edge-list text, one segment per line.
fn scene_to_edge_list(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Ranks directory entries against the query; returns directory indices, best
/// first, at most [`SUGGESTION_LIMIT`].
fn ranked_place_suggestions(directory: &[(String, String)], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(i64, usize)> = directory
        .iter()
        .enumerate()
        .filter_map(|(index, (short, long))| {
            place_score(&needle, short, long).map(|score| (score, index))
        })
        .collect();

    scored.sort_by(|(score_a, index_a), (score_b, index_b)| {
        score_b.cmp(score_a).then_with(|| index_a.cmp(index_b))
    });
    scored.truncate(SUGGESTION_LIMIT);
    scored.into_iter().map(|(_, index)| index).collect()
}

fn place_score(needle: &str, short: &str, long: &str) -> Option<i64> {
    let haystack = format!("{short} {long}").to_lowercase();
    if !is_subsequence(needle, &haystack) {
        return None;
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    if haystack.starts_with(needle) {
        score += 50_000;
    }
    if short.to_lowercase() == needle {
        score += 100_000;
    }
    Some(score)
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|needed| chars.any(|ch| ch == needed))
}
