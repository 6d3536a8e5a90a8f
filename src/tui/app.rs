// src/tui/app.rs — Portal shell: page state, key handling, event loop, frame layout.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, TableState, Tabs},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::charts::{compute_line_chart, compute_pie_chart, LineChartLayout, PieLayout};
use crate::chat::{ChatSession, ReplyTicket, TokioReplyScheduler};
use crate::infra::config::{ChatConfig, Config};
use crate::portal::data::PortalDataSource;
use crate::portal::graph::EntityKind;
use crate::portal::navigation::{Navigate, Navigator, Page};
use crate::portal::theme::{ThemeContext, ThemeMode, ThemeSubscription};

use super::data::{self, PortalSnapshot};
use super::theme::Theme;
use super::widgets;

// ── App state ────────────────────────────────────────────────────

pub struct App {
    nav: Navigator,
    theme: ThemeContext,
    theme_view: ThemeSubscription,
    snapshot: PortalSnapshot,
    started: Instant,

    chat_config: ChatConfig,
    line_layout: LineChartLayout,
    pie_layout: PieLayout,

    scheduler: TokioReplyScheduler,
    replies: mpsc::UnboundedReceiver<ReplyTicket>,
    chat: Option<ChatSession<TokioReplyScheduler>>,
    chat_input: String,

    // Per-page interactive state
    home_selected: usize,
    line_hover: Option<usize>,
    pie_hover: Option<usize>,
    catalog_query: String,
    catalog_state: TableState,
    graph_query: String,
    graph_kind: Option<EntityKind>,
}

impl App {
    /// Build the shell. Must run inside a tokio runtime: the chat session
    /// schedules replies as tokio tasks.
    pub fn new(config: &Config, snapshot: PortalSnapshot) -> Self {
        let (scheduler, replies) = TokioReplyScheduler::channel();
        let theme = ThemeContext::new(config.portal.theme);
        let theme_view = theme.subscribe();
        let mut app = Self {
            nav: Navigator::new(Page::Home),
            theme,
            theme_view,
            snapshot,
            started: Instant::now(),
            chat_config: config.chat.clone(),
            line_layout: config.charts.line.clone(),
            pie_layout: config.charts.pie.clone(),
            scheduler,
            replies,
            chat: None,
            chat_input: String::new(),
            home_selected: 0,
            line_hover: None,
            pie_hover: None,
            catalog_query: String::new(),
            catalog_state: TableState::default(),
            graph_query: String::new(),
            graph_kind: None,
        };
        app.go(config.portal.start_page());
        app
    }

    pub fn page(&self) -> Page {
        self.nav.current()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_view.current()
    }

    pub fn chat(&self) -> Option<&ChatSession<TokioReplyScheduler>> {
        self.chat.as_ref()
    }

    pub fn catalog_query(&self) -> &str {
        &self.catalog_query
    }

    pub fn graph_kind(&self) -> Option<EntityKind> {
        self.graph_kind
    }

    pub fn hovered(&self) -> (Option<usize>, Option<usize>) {
        (self.line_hover, self.pie_hover)
    }

    /// Switch pages. Leaving the assistant discards its session; entering
    /// it starts a fresh one.
    fn go(&mut self, page: Page) {
        let from = self.nav.current();
        let to = self.nav.go(page);
        self.on_page_change(from, to);
    }

    fn on_page_change(&mut self, from: Page, to: Page) {
        if from == Page::AiAssistant && to != Page::AiAssistant {
            if let Some(mut session) = self.chat.take() {
                session.teardown();
            }
            self.chat_input.clear();
        }
        if to == Page::AiAssistant && self.chat.is_none() {
            self.chat = Some(ChatSession::new(
                &self.chat_config,
                self.scheduler.clone(),
            ));
        }
    }

    /// Hand any due reply tickets to the live session.
    pub fn pump_replies(&mut self) {
        while let Ok(ticket) = self.replies.try_recv() {
            match self.chat.as_mut() {
                Some(session) => {
                    session.reply_ready(ticket);
                }
                None => tracing::debug!("Reply for closed session dropped"),
            }
        }
    }

    fn takes_text(&self) -> bool {
        matches!(
            self.page(),
            Page::AiAssistant | Page::ProductCatalog | Page::KnowledgeGraph
        )
    }

    fn text_buffer(&mut self) -> Option<&mut String> {
        match self.page() {
            Page::AiAssistant => Some(&mut self.chat_input),
            Page::ProductCatalog => Some(&mut self.catalog_query),
            Page::KnowledgeGraph => Some(&mut self.graph_query),
            _ => None,
        }
    }

    /// Apply one key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Char('c') if ctrl => return false,
            KeyCode::Char('t') if ctrl => {
                self.theme.toggle();
                return true;
            }
            KeyCode::Tab => {
                self.go(self.page().next());
                return true;
            }
            KeyCode::BackTab => {
                self.go(self.page().prev());
                return true;
            }
            KeyCode::Home => {
                self.go(Page::Home);
                return true;
            }
            _ => {}
        }

        if self.takes_text() {
            self.handle_text_page_key(key);
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('t') => {
                self.theme.toggle();
            }
            KeyCode::Right => self.go(self.page().next()),
            KeyCode::Left => self.go(self.page().prev()),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = c as usize - '1' as usize;
                self.go(Page::from_index(idx));
            }
            _ => match self.page() {
                Page::Home => self.handle_home_key(key),
                Page::DataVisualization => self.handle_charts_key(key),
                _ => {}
            },
        }
        true
    }

    fn handle_text_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(buf) = self.text_buffer() {
                    buf.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(buf) = self.text_buffer() {
                    buf.pop();
                }
            }
            _ => match self.page() {
                Page::AiAssistant => self.handle_chat_key(key),
                Page::ProductCatalog => self.handle_catalog_key(key),
                Page::KnowledgeGraph => self.handle_graph_key(key),
                _ => {}
            },
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        let Some(session) = self.chat.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.chat_input);
                if session.submit(&text) == crate::chat::SubmitOutcome::Ignored {
                    // keep what was typed when nothing was sent
                    self.chat_input = text;
                }
            }
            KeyCode::F(n @ 1..=3) => {
                session.quick_suggestion(n as usize - 1);
            }
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => {
                let i = self.catalog_state.selected().map_or(0, |i| i + 1);
                self.catalog_state.select(Some(i));
            }
            KeyCode::Up => {
                let i = self.catalog_state.selected().unwrap_or(0);
                self.catalog_state.select(Some(i.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn handle_graph_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.graph_kind = widgets::graph::next_kind(self.graph_kind),
            KeyCode::Up => self.graph_kind = widgets::graph::prev_kind(self.graph_kind),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let count = self.snapshot.capabilities.len();
        match key.code {
            KeyCode::Down if count > 0 => {
                self.home_selected = (self.home_selected + 1) % count;
            }
            KeyCode::Up if count > 0 => {
                self.home_selected = (self.home_selected + count - 1) % count;
            }
            KeyCode::Enter => {
                if let Some(cap) = self.snapshot.capabilities.get(self.home_selected) {
                    let key = cap.page.key();
                    let from = self.nav.current();
                    let to = self.nav.set_page(key);
                    self.on_page_change(from, to);
                }
            }
            _ => {}
        }
    }

    fn handle_charts_key(&mut self, key: KeyEvent) {
        let points = self.snapshot.line.len();
        let slices = self.snapshot.pie.len();
        match key.code {
            KeyCode::Char(']') => self.line_hover = step(self.line_hover, points, true),
            KeyCode::Char('[') => self.line_hover = step(self.line_hover, points, false),
            KeyCode::Char('}') => self.pie_hover = step(self.pie_hover, slices, true),
            KeyCode::Char('{') => self.pie_hover = step(self.pie_hover, slices, false),
            _ => {}
        }
    }
}

/// Move a hover cursor through `len` items; stepping off either end clears it.
fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) => (i + 1 < len).then_some(i + 1),
        (Some(i), false) => i.checked_sub(1),
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the portal. Blocks until the user quits (q / Esc / Ctrl-C).
pub async fn run_portal(config: &Config, source: Arc<dyn PortalDataSource>) -> anyhow::Result<()> {
    let snapshot = data::fetch_all(source.as_ref()).await;
    tracing::info!("Portal data loaded from {}", snapshot.source);
    let mut app = App::new(config, snapshot);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(mut session) = app.chat.take() {
        session.teardown();
    }
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.pump_replies();
        terminal.draw(|f| render(f, app))?;

        // Short poll keeps the typing indicator and counters moving
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let theme = Theme::new(app.theme_mode());
    let size = f.area();
    f.render_widget(Block::default().style(theme.base()), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + tabs
            Constraint::Min(10),   // Page content
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    render_header(f, chunks[0], app, &theme);
    render_page(f, chunks[1], app, &theme);
    render_footer(f, chunks[2], app, &theme);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let label = format!(" {} {} ", i + 1, page.title());
            if *page == app.page() {
                Line::from(Span::styled(label, theme.tab_active()))
            } else {
                Line::from(Span::styled(label, theme.tab_inactive()))
            }
        })
        .collect();

    let title = format!(" MOSDAC AI Portal · {} ", app.theme_mode());
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(title, theme.header()))
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .select(app.page().index())
        .highlight_style(theme.tab_active())
        .divider(Span::styled("|", theme.text_dim()));

    f.render_widget(tabs, area);
}

fn render_page(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    match app.page() {
        Page::Home => widgets::home::render(
            f,
            area,
            &app.snapshot.stats,
            &app.snapshot.capabilities,
            app.started.elapsed(),
            app.home_selected,
            theme,
        ),
        Page::AiAssistant => {
            if let Some(session) = app.chat.as_ref() {
                let view = widgets::chat::ChatView {
                    messages: session.messages(),
                    state: session.state(),
                    suggestions: session.quick_suggestions(),
                    input: &app.chat_input,
                };
                widgets::chat::render(f, area, &view, theme);
            }
        }
        Page::DataVisualization => {
            let line = compute_line_chart(&app.snapshot.line, &app.line_layout);
            let pie = compute_pie_chart(&app.snapshot.pie, &app.pie_layout, app.pie_hover);
            widgets::charts::render(
                f,
                area,
                line.as_ref()
                    .map(|c| (c, &app.line_layout))
                    .map_err(|e| e.to_string()),
                pie.as_ref()
                    .map(|c| (c, &app.pie_layout))
                    .map_err(|e| e.to_string()),
                app.line_hover,
                theme,
            );
        }
        Page::KnowledgeGraph => widgets::graph::render(
            f,
            area,
            &app.snapshot.graph,
            &app.graph_query,
            app.graph_kind,
            theme,
        ),
        Page::ProductCatalog => widgets::catalog::render(
            f,
            area,
            &app.snapshot.products,
            &app.catalog_query,
            &mut app.catalog_state,
            theme,
        ),
        Page::LiveSatelliteTracker | Page::MissionExplorer => {
            widgets::placeholder::render(f, area, app.page().title(), theme)
        }
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        Span::styled(" Esc", theme.key_hint()),
        Span::styled(" quit  ", theme.key_desc()),
        Span::styled("Tab", theme.key_hint()),
        Span::styled(" switch  ", theme.key_desc()),
        Span::styled("Ctrl-T", theme.key_hint()),
        Span::styled(" theme  ", theme.key_desc()),
    ];
    let extra: &[(&str, &str)] = match app.page() {
        Page::Home => &[("1-7", " jump  "), ("↑↓ Enter", " open")],
        Page::AiAssistant => &[("Enter", " send  "), ("F1-F3", " suggestions")],
        Page::DataVisualization => &[("[ ]", " point  "), ("{ }", " slice")],
        Page::KnowledgeGraph => &[("↑↓", " type filter")],
        Page::ProductCatalog => &[("↑↓", " select")],
        _ => &[("1-7", " jump")],
    };
    for (k, d) in extra {
        spans.push(Span::styled(*k, theme.key_hint()));
        spans.push(Span::styled(*d, theme.key_desc()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
