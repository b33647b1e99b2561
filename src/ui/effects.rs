//! Executes the side effects the session asks for.
//!
//! Generation calls and timers run as tokio tasks and report back through the
//! session's event channel; they never touch session state directly. Every
//! spawned task is tracked so teardown can abort it, which keeps a destroyed
//! session from receiving late timers or replies.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::clipboard::ClipboardWriter;
use crate::generation::{GenerationRequest, ReplyGenerator};
use crate::ui::app::{App, ScheduledEvent, UiEffect};
use crate::ui::events::AppEvent;

pub struct EffectRunner {
    handle: Handle,
    generator: Arc<dyn ReplyGenerator>,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    events: mpsc::Sender<AppEvent>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    shut_down: AtomicBool,
}

impl EffectRunner {
    /// `clipboard` is `None` when no system clipboard could be opened; copy
    /// requests then fail without acknowledging.
    pub fn new(
        handle: Handle,
        generator: Arc<dyn ReplyGenerator>,
        clipboard: Option<Box<dyn ClipboardWriter>>,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            handle,
            generator,
            clipboard,
            events,
            tasks: Mutex::new(Vec::new()),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Execute effects in order, including follow-ups the app emits while
    /// they run (a successful copy schedules its own expiry).
    pub fn run(&mut self, app: &mut App, effects: Vec<UiEffect>) {
        let mut queue: VecDeque<UiEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                UiEffect::Generate { ticket, request } => self.spawn_generation(ticket, request),
                UiEffect::CopyToClipboard { text } => {
                    if self.write_clipboard(&text) {
                        queue.extend(app.on_copied());
                    }
                }
                UiEffect::Schedule { delay, event } => self.schedule(delay, event),
            }
        }
    }

    /// Issue one generation call on the runtime.
    pub fn spawn_generation(&self, ticket: u64, request: GenerationRequest) {
        if self.is_shut_down() {
            return;
        }
        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        let task = self.handle.spawn(async move {
            let result = generator.generate(&request).await;
            let _ = events.send(AppEvent::ReplyReady { ticket, result });
        });
        self.track(task);
    }

    /// Deliver `event` after `delay`.
    pub fn schedule(&self, delay: Duration, event: ScheduledEvent) {
        if self.is_shut_down() {
            return;
        }
        let events = self.events.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::Scheduled(event));
        });
        self.track(task);
    }

    /// Number of spawned tasks that have not finished yet.
    pub fn pending_tasks(&self) -> usize {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.len()
    }

    /// Abort every outstanding task and refuse new ones.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        let tasks = std::mem::take(&mut *self.tasks.lock());
        let aborted = tasks.iter().filter(|task| !task.is_finished()).count();
        for task in tasks {
            task.abort();
        }
        tracing::debug!(aborted, "Effect runner shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    fn track(&self, task: JoinHandle<()>) {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(task);
    }

    fn write_clipboard(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::warn!("Copy requested but no clipboard is available");
            return false;
        };
        match clipboard.set_text(text) {
            Ok(()) => {
                tracing::debug!(len = text.len(), "Reply copied to clipboard");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                false
            }
        }
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
