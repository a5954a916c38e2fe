//! Interactive viewer renderer.
//!
//! Owns the UI state (input buffer, current card, open notice) and the event
//! loop. Lookups are handed to a `SearchBackend`, which reports back over the
//! channel; results stamped with a superseded ticket are discarded.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pokedex_types::LookupKey;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use tracing::debug;

use crate::presentation::presenters::present_error;
use crate::presentation::view_models::{Notice, RecordScreen};
use crate::presentation::views::tui::{
    HeaderView, InfoGridView, NoticeModal, SearchBarView, SpriteView, StatsView,
};
use crate::search::{SearchTracker, Ticket};

const SPRITE_PANEL_WIDTH: u16 = 30;

/// Results sent from search workers back to the renderer
pub enum TuiEvent {
    Loaded {
        ticket: Ticket,
        screen: Box<RecordScreen>,
    },
    Failed {
        ticket: Ticket,
        notice: Notice,
    },
}

/// Runs one lookup and eventually sends exactly one `TuiEvent` for `ticket`.
pub trait SearchBackend {
    fn search(&self, key: LookupKey, ticket: Ticket, events: Sender<TuiEvent>);
}

pub struct TuiRenderer<B: SearchBackend> {
    backend: B,
    events_tx: Sender<TuiEvent>,
    events_rx: Receiver<TuiEvent>,

    input: String,
    screen: Option<RecordScreen>,
    notice: Option<Notice>,
    tracker: SearchTracker,
    should_quit: bool,
}

impl<B: SearchBackend> TuiRenderer<B> {
    pub fn new(backend: B) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            backend,
            events_tx,
            events_rx,
            input: String::new(),
            screen: None,
            notice: None,
            tracker: SearchTracker::new(),
            should_quit: false,
        }
    }

    /// Pre-fill the search box and submit it once the loop starts.
    pub fn with_initial_query(mut self, query: Option<String>) -> Self {
        if let Some(query) = query {
            self.input = query;
            self.submit();
        }
        self
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            while let Ok(tui_event) = self.events_rx.try_recv() {
                self.apply(tui_event);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // An open notice swallows input until dismissed
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Validate the search box locally, then hand the key to the backend.
    pub fn submit(&mut self) {
        let key = match pokedex_client::resolve_query(&self.input) {
            Ok(key) => key,
            Err(err) => {
                self.notice = Some(present_error(&err));
                return;
            }
        };

        let ticket = self.tracker.begin();
        debug!(%key, ?ticket, "submitting search");
        self.backend.search(key, ticket, self.events_tx.clone());
    }

    pub fn apply(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Loaded { ticket, screen } => {
                if !self.tracker.finish(ticket) {
                    debug!(?ticket, "discarding stale result");
                    return;
                }
                self.screen = Some(*screen);
                self.notice = None;
            }
            TuiEvent::Failed { ticket, notice } => {
                if !self.tracker.finish(ticket) {
                    debug!(?ticket, "discarding stale failure");
                    return;
                }
                self.notice = Some(notice);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Option<&RecordScreen> {
        self.screen.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Layout: [search bar | sprite + card | key help], notice on top
    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        let [search_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(
            SearchBarView::new(&self.input, self.tracker.is_pending()),
            search_area,
        );

        match &self.screen {
            Some(screen) => render_card(f, body_area, screen),
            None => {
                let welcome = Paragraph::new(
                    "Type a Pokémon name or National Pokédex number and press Enter.",
                )
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Gray))
                .block(Block::bordered().title(" Pokédex "));
                f.render_widget(welcome, body_area);
            }
        }

        let help = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" search  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" dismiss/quit  "),
            Span::styled("[Ctrl+C]", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]);
        f.render_widget(Paragraph::new(help), help_area);

        if let Some(notice) = &self.notice {
            f.render_widget(NoticeModal::new(notice), area);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, screen: &RecordScreen) {
    let [sprite_area, details_area] =
        Layout::horizontal([Constraint::Length(SPRITE_PANEL_WIDTH), Constraint::Min(0)])
            .areas(area);

    f.render_widget(SpriteView::new(&screen.image), sprite_area);

    let stats_height = screen.stats.len() as u16 + 2;
    let [header_area, stats_area, info_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(stats_height),
        Constraint::Min(6),
    ])
    .areas(details_area);

    f.render_widget(HeaderView::new(screen), header_area);
    f.render_widget(StatsView::new(&screen.stats), stats_area);
    f.render_widget(InfoGridView::new(&screen.info), info_area);
}
