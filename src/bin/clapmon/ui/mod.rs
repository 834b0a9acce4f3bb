//! TUI module for clapmon
//!
//! Live peak meter, detection banner and flash, and a scrolling event log.

mod banner;
mod meter;
pub mod state;

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    DefaultTerminal, Frame,
};

use double_clap::{
    feedback::AckView,
    frame::{Clock, FrameReadFailure, RingFrameSource},
    monitor::{Monitor, Tick},
};

pub use state::UiState;

use banner::render_banner;
use meter::render_meter;

/// UI application state
pub struct UiApp {
    monitor: Monitor<RingFrameSource, UiState>,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(monitor: Monitor<RingFrameSource, UiState>) -> Self {
        Self {
            monitor,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Blocks for at most one read timeout
            let wait = match self.monitor.tick() {
                Tick::Frame { .. } => Duration::ZERO,
                Tick::Backoff {
                    error: FrameReadFailure::Disconnected,
                    ..
                } => return Err(eyre!("audio input disconnected")),
                Tick::Backoff { error, delay } => {
                    self.monitor.sink_mut().record_failure(&error);
                    delay
                }
            };

            terminal.draw(|frame| self.render(frame))?;

            // Backoff doubles as the key poll timeout so the UI stays live
            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.monitor.detector_mut().reset();
                let now = self.monitor.sink().now;
                self.monitor
                    .sink_mut()
                    .push_event(format!("{now:>8} ms  detector reset"));
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now = self.monitor.source().clock().now_ms();
        let threshold = self.monitor.detector().config().clap_threshold;
        let view = self.monitor.sink_mut().ack_view(now);
        let state = self.monitor.sink();

        if let AckView::Flash(color) = view {
            let flash = Block::default().style(Style::default().bg(Color::Rgb(color.r, color.g, color.b)));
            frame.render_widget(flash, area);
            return;
        }

        // Main layout: banner, meter, event log, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Banner
                Constraint::Length(3), // Peak meter
                Constraint::Min(4),    // Event log
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_banner(frame, chunks[0], state, view == AckView::Banner);
        render_meter(frame, chunks[1], &state.meter, state.peak, threshold);

        // Newest events at the bottom, trimmed to fit
        let visible = chunks[2].height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = state
            .events
            .iter()
            .skip(state.events.len().saturating_sub(visible))
            .map(|line| ListItem::new(Line::raw(line.as_str())))
            .collect();
        let log = List::new(items).block(Block::default().title(" Events ").borders(Borders::ALL));
        frame.render_widget(log, chunks[2]);

        let help = Paragraph::new(" [Q] Quit  [R] Reset detector")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
