use crate::clipboard::{ClipboardHandler, ClipboardWriter};
use crate::config::Config;
use crate::generation::GenerationClient;
use crate::ui::app::App;
use crate::ui::effects::EffectRunner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Run one interactive session until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = GenerationClient::new(&config.endpoint).context("failed to build HTTP client")?;
    let clipboard: Option<Box<dyn ClipboardWriter>> = match ClipboardHandler::new() {
        Ok(handler) => Some(Box::new(handler)),
        Err(err) => {
            tracing::warn!(error = %err, "Clipboard unavailable, copy disabled");
            None
        }
    };

    tracing::info!(endpoint = client.endpoint(), "Session starting");

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let mut effects = EffectRunner::new(
        runtime.handle().clone(),
        Arc::new(client),
        clipboard,
        events.sender(),
    );
    let mut app = App::new(config.ui.default_tone);

    let startup = app.start();
    effects.run(&mut app, startup);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                let requested = handle_key(&mut app, key);
                effects.run(&mut app, requested);
            }
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ReplyReady { ticket, result }) => app.on_reply_ready(ticket, result),
            Ok(AppEvent::Scheduled(event)) => app.on_scheduled(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Abort timers and any in-flight call before the session goes away.
    effects.shutdown();
    drop(events);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Session ended");
    Ok(())
}
