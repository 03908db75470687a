//! Interactive runner: draws the host shell on a real-time clock until the
//! user quits.

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crt_boot::HostShell;
use futures::Stream;
use futures::StreamExt;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::widgets::Clear;
use ratatui::widgets::WidgetRef;
use tokio::time::MissedTickBehavior;
use tracing::debug;
use tracing::info;

use crate::cli::AppConfig;
use crate::clock::ScaledClock;
use crate::widgets::BootScreen;
use crate::widgets::MainContent;
use crate::widgets::content_width;

/// Redraw interval, roughly 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    host: HostShell,
    clock: ScaledClock,
}

impl App {
    /// Mount the host and start the clock.
    pub fn new(config: &AppConfig) -> Self {
        let mut host = HostShell::new(config.host.clone());
        host.mount();
        Self {
            host,
            clock: ScaledClock::start(config.speed),
        }
    }

    pub fn host(&self) -> &HostShell {
        &self.host
    }

    /// Bring the host up to the current (scaled) time.
    pub fn tick(&mut self) {
        self.host.advance_to(self.clock.elapsed());
    }

    /// Returns `true` when the key asks to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.render_ref(frame.area(), frame.buffer_mut());
    }

    /// Cancel every pending timer.
    pub fn shutdown(&mut self) {
        self.host.teardown();
    }
}

impl WidgetRef for App {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if let Some(loader) = self.host.loader() {
            let frame = loader.frame();
            let width = content_width(loader.script(), frame.bar_width);
            BootScreen::new(&frame)
                .content_width(width)
                .render_ref(area, buf);
        } else if let Some(fade_in) = self.host.main_fade_in() {
            MainContent::new(fade_in).render_ref(area, buf);
        } else {
            Clear.render(area, buf);
        }
    }
}

/// Take over the terminal and run until the user quits.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let mut app = App::new(&config);
    info!(speed = config.speed, "boot screen started");

    let result = run_loop(&mut terminal, &mut app, EventStream::new()).await;

    app.shutdown();
    ratatui::try_restore().context("failed to restore terminal")?;
    result
}

/// Redraw on every frame tick and stop on a quit key or when `events` ends.
pub async fn run_loop<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: S,
) -> anyhow::Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                app.tick();
                terminal
                    .draw(|frame| app.render(frame))
                    .context("failed to draw frame")?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if app.handle_key(key) {
                        debug!(?key.code, "quit requested");
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                None => return Ok(()),
            }
        }
    }
}
