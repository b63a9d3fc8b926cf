use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::components::block_advanced::BlockAdvancedView;
use crate::components::help::HelpOverlay;
use crate::components::status_bar::StatusBar;
use crate::data::types::BlockDetails;
use crate::data::{self, InputFormat};
use crate::events::AppEvent;
use crate::i18n::Translations;
use crate::panel::{BlockAdvancedProps, Section, Slots, block_advanced};
use crate::theme::THEME;

/// Everything the block panel is built from.
pub struct PanelContext {
    pub source: PathBuf,
    pub format: InputFormat,
    pub block: BlockDetails,
    pub latest_eth_price: Option<f64>,
    pub translations: Translations,
    pub locale: String,
    pub eth_symbol: String,
    pub slots: Slots,
    pub link_host: String,
}

impl PanelContext {
    pub fn build(&self) -> Section {
        block_advanced(&BlockAdvancedProps {
            block: &self.block,
            latest_eth_price: self.latest_eth_price,
            translation: &self.translations,
            locale: &self.locale,
            eth_symbol: &self.eth_symbol,
            slots: &self.slots,
            link_host: &self.link_host,
        })
    }

    /// Re-read the block from its source file.
    pub fn reload(&mut self) -> Result<()> {
        self.block = data::load_block_details(&self.source, self.format)?;
        Ok(())
    }
}

pub struct App {
    context: PanelContext,

    // Components
    panel: BlockAdvancedView,
    status_bar: StatusBar,
    help: HelpOverlay,

    // State
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(context: PanelContext, tick_rate_ms: u64) -> Self {
        let panel = BlockAdvancedView::new(context.build());
        let status_bar = StatusBar::new(
            context.translations.locale(),
            &context.eth_symbol,
            context.latest_eth_price,
        );
        Self {
            context,
            panel,
            status_bar,
            help: HelpOverlay::new(),
            should_quit: false,
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub async fn run(&mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        let mut interval = tokio::time::interval(self.tick_rate);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                Some(Ok(event)) = events.next() => {
                    self.handle_terminal_event(event);
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Fill background
        frame.render_widget(
            Block::default().style(Style::default().bg(THEME.bg)),
            area,
        );

        // Layout: content (fill) | status bar (1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.panel.render(frame, chunks[0]);
        self.status_bar.render(frame, chunks[1]);

        // Overlays (rendered on top)
        self.help.render(frame, area);
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only handle key press events (not release/repeat) for cross-platform compat
            if key.kind != KeyEventKind::Press {
                return;
            }

            // Help overlay consumes all keys when visible
            if self.help.handle_key(key) {
                return;
            }

            let app_event = match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(AppEvent::Quit)
                }
                KeyCode::Char('?') => {
                    self.help.toggle();
                    None
                }
                KeyCode::Char('r') => Some(AppEvent::Reload),
                _ => self.panel.handle_key(key),
            };

            if let Some(event) = app_event {
                self.handle_app_event(event);
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Follow(target) => {
                tracing::info!(%target, "following link");
                self.status_bar.clear_messages();
                self.status_bar.info_message = Some(target.to_string());
            }
            AppEvent::Reload => {
                self.status_bar.clear_messages();
                match self.context.reload() {
                    Ok(()) => {
                        self.panel.set_section(self.context.build());
                        self.status_bar.info_message =
                            Some(format!("Reloaded {}", self.context.source.display()));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "reload failed");
                        self.status_bar.error_message = Some(format!("{err:#}"));
                    }
                }
            }
            AppEvent::Quit => {
                self.should_quit = true;
            }
        }
    }
}
