//! Drives the interactive loop against a test backend on tokio's paused clock.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crt_boot::Phase;
use crt_boot_tui::Cli;
use crt_boot_tui::app::App;
use crt_boot_tui::app::run_loop;
use futures::Stream;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn app(args: &[&str]) -> App {
    let mut argv = vec!["crt-boot"];
    argv.extend_from_slice(args);
    let config = Cli::parse_from(argv)
        .into_config()
        .unwrap_or_else(|err| panic!("{err}"));
    App::new(&config)
}

/// A single key press after `delay`, then silence.
fn key_after(
    delay: Duration,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> impl Stream<Item = io::Result<Event>> + Unpin {
    Box::pin(
        futures::stream::once(async move {
            tokio::time::sleep(delay).await;
            Ok(Event::Key(KeyEvent::new(code, modifiers)))
        })
        .chain(futures::stream::pending()),
    )
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap_or_else(|err| panic!("{err}"))
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test(start_paused = true)]
async fn plays_through_to_main_view() {
    let mut app = app(&[]);
    let mut terminal = terminal();

    let quit = key_after(Duration::from_secs(15), KeyCode::Char('q'), KeyModifiers::NONE);
    run_loop(&mut terminal, &mut app, quit)
        .await
        .unwrap_or_else(|err| panic!("{err}"));

    assert!(app.host().is_main_visible());
    assert_eq!(
        app.host().main_visible_since(),
        Some(Duration::from_millis(14_660))
    );
    assert!(screen_text(terminal.backend().buffer()).contains("SYSTEM ONLINE"));
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_during_typing_stops_early() {
    let mut app = app(&["--ready-after-ms", "500"]);
    let mut terminal = terminal();

    let quit = key_after(Duration::from_secs(1), KeyCode::Char('c'), KeyModifiers::CONTROL);
    run_loop(&mut terminal, &mut app, quit)
        .await
        .unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(
        app.host().loader().map(|loader| loader.phase()),
        Some(Phase::Typing)
    );
    assert!(screen_text(terminal.backend().buffer()).contains("Flash BIOS"));

    app.shutdown();
    assert_eq!(app.host().next_deadline(), None);
}

#[tokio::test(start_paused = true)]
async fn speed_multiplier_shortens_the_sequence() {
    let mut app = app(&["--speed", "4"]);
    let mut terminal = terminal();

    // 14.66 s of sequence time at four times speed.
    let quit = key_after(Duration::from_secs(4), KeyCode::Esc, KeyModifiers::NONE);
    run_loop(&mut terminal, &mut app, quit)
        .await
        .unwrap_or_else(|err| panic!("{err}"));

    assert!(app.host().is_main_visible());
}
