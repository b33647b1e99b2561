//! Shared test utilities and stubs.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use replygen::clipboard::{ClipboardError, ClipboardWriter};
use replygen::config::EndpointConfig;
use replygen::generation::{GenerationRequest, GenerationResult, ReplyGenerator, Tone};
use replygen::ui::app::{App, ScheduledEvent, UiEffect};
use replygen::ui::events::AppEvent;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn endpoint_config(url: String) -> EndpointConfig {
    EndpointConfig {
        url,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

// -- App helpers --------------------------------------------------------------

/// App with the reveal sequence already completed.
pub fn ready_app() -> App {
    let mut app = App::new(Tone::None);
    app.start();
    app.on_scheduled(ScheduledEvent::RevealForm);
    app
}

/// Ticket of the single `Generate` effect, panicking otherwise.
pub fn generate_ticket(effects: &[UiEffect]) -> u64 {
    match effects {
        [UiEffect::Generate { ticket, .. }] => *ticket,
        other => panic!("Expected exactly one Generate effect, got {:?}", other),
    }
}

/// Count `Generate` effects in a batch.
pub fn generate_count(effects: &[UiEffect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, UiEffect::Generate { .. }))
        .count()
}

/// Poll the event channel while letting runtime tasks make progress.
pub async fn next_event(rx: &mpsc::Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let step = Duration::from_millis(5);
    let mut waited = Duration::ZERO;
    loop {
        if let Ok(event) = rx.try_recv() {
            return Some(event);
        }
        if waited >= timeout {
            return None;
        }
        tokio::time::sleep(step).await;
        waited += step;
    }
}

// -- Generator stub -----------------------------------------------------------

/// Generator that returns queued results and records every request.
#[derive(Default)]
pub struct StubGenerator {
    results: Mutex<VecDeque<GenerationResult>>,
    requests: Mutex<Vec<GenerationRequest>>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn with_results(results: Vec<GenerationResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ReplyGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| GenerationResult::Failure("no stub result".to_string()))
    }
}

// -- Clipboard stubs ----------------------------------------------------------

/// Clipboard that records written text.
#[derive(Clone, Default)]
pub struct RecordingClipboard(pub Arc<Mutex<Vec<String>>>);

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.lock().push(text.to_string());
        Ok(())
    }
}

/// Clipboard whose writes always fail.
pub struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write(arboard::Error::ClipboardOccupied))
    }
}
