use crate::generation::{GenerationRequest, GenerationResult, Tone};
use crate::ui::copy_ack::{CopyAckIntent, CopyAckReducer, CopyAckState, COPY_ACK_WINDOW};
use crate::ui::form::RequestForm;
use crate::ui::lifecycle::{LifecycleIntent, LifecycleReducer, LifecycleState};
use crate::ui::mvi::Reducer;
use crate::ui::reveal::{RevealFlags, RevealIntent, RevealReducer, FORM_REVEAL_DELAY};
use std::time::Duration;

/// Events delivered back to the session by a timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScheduledEvent {
    RevealForm,
    CopyAckExpired { epoch: u64 },
}

/// Side effects requested by the session. The runtime executes them;
/// `App` itself never does I/O or spawns tasks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UiEffect {
    /// Issue one generation call and report back with `ticket`.
    Generate {
        ticket: u64,
        request: GenerationRequest,
    },
    /// Write text to the system clipboard; call `App::on_copied` on success.
    CopyToClipboard { text: String },
    /// Deliver `event` after `delay`.
    Schedule {
        delay: Duration,
        event: ScheduledEvent,
    },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// One UI session: the request form plus the lifecycle, reveal and copy
/// acknowledgement state machines.
pub struct App {
    should_quit: bool,
    started: bool,
    form: RequestForm,
    /// Request lifecycle (MVI pattern).
    lifecycle: LifecycleState,
    /// Section visibility (MVI pattern).
    reveal: RevealFlags,
    /// Copy acknowledgement (MVI pattern).
    copy_ack: CopyAckState,
    next_ticket: u64,
    animation_tick: u8,
}

impl App {
    pub fn new(default_tone: Tone) -> Self {
        Self {
            should_quit: false,
            started: false,
            form: RequestForm::new(default_tone),
            lifecycle: LifecycleState::default(),
            reveal: RevealFlags::default(),
            copy_ack: CopyAckState::default(),
            next_ticket: 0,
            animation_tick: 0,
        }
    }

    /// Begin the reveal sequence: title now, form after [`FORM_REVEAL_DELAY`].
    ///
    /// Only the first call has any effect.
    pub fn start(&mut self) -> Vec<UiEffect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        self.dispatch_reveal(RevealIntent::Start);
        vec![UiEffect::Schedule {
            delay: FORM_REVEAL_DELAY,
            event: ScheduledEvent::RevealForm,
        }]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &RequestForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RequestForm {
        &mut self.form
    }

    pub fn lifecycle(&self) -> &LifecycleState {
        &self.lifecycle
    }

    pub fn reveal(&self) -> RevealFlags {
        self.reveal
    }

    pub fn is_copied(&self) -> bool {
        self.copy_ack.is_copied()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Submit control state: content present and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.lifecycle.is_submitting() && self.form.to_request().is_submittable()
    }

    /// Copy control state: a non-empty reply is current.
    pub fn can_copy(&self) -> bool {
        self.current_reply().is_some()
    }

    pub fn on_tick(&mut self) {
        if self.lifecycle.is_submitting() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Request lifecycle
    // ========================================================================

    /// User pressed submit.
    ///
    /// Rejected (no effect, no state change) when content is empty or a
    /// request is already in flight. Otherwise clears the previous
    /// reply/error and emits exactly one `Generate` effect.
    pub fn submit(&mut self) -> Vec<UiEffect> {
        let request = self.form.to_request();
        if self.lifecycle.is_submitting() || !request.is_submittable() {
            tracing::debug!(
                submitting = self.lifecycle.is_submitting(),
                empty = !request.is_submittable(),
                "Submit rejected"
            );
            return Vec::new();
        }

        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = self.next_ticket;

        self.dispatch_lifecycle(LifecycleIntent::Submit { ticket });
        self.dispatch_reveal(RevealIntent::ReplyWithdrawn);
        self.animation_tick = 0;

        tracing::info!(ticket, tone = request.tone.wire_name(), "Request submitted");
        vec![UiEffect::Generate { ticket, request }]
    }

    /// The generation call for `ticket` resolved.
    pub fn on_reply_ready(&mut self, ticket: u64, result: GenerationResult) {
        if self.lifecycle.outstanding_ticket() != Some(ticket) {
            tracing::debug!(ticket, "Ignoring result for stale request");
            return;
        }

        let succeeded = result.is_success();
        self.dispatch_lifecycle(LifecycleIntent::Resolved { ticket, result });
        if self.current_reply().is_some() {
            self.dispatch_reveal(RevealIntent::ReplyAvailable);
            tracing::info!(ticket, "Request succeeded");
        } else {
            // An empty reply has nothing to show or copy.
            self.dispatch_reveal(RevealIntent::ReplyWithdrawn);
            if succeeded {
                tracing::warn!(ticket, "Service returned an empty reply");
            } else {
                tracing::info!(ticket, "Request failed");
            }
        }
    }

    /// Reply text to show and copy. `None` while no non-empty reply is current.
    pub fn current_reply(&self) -> Option<&str> {
        self.lifecycle.reply().filter(|reply| !reply.is_empty())
    }

    // ========================================================================
    // Clipboard acknowledgement
    // ========================================================================

    /// User pressed copy. No-op when there is no reply text.
    pub fn request_copy(&self) -> Vec<UiEffect> {
        match self.current_reply() {
            Some(reply) => vec![UiEffect::CopyToClipboard {
                text: reply.to_string(),
            }],
            None => Vec::new(),
        }
    }

    /// Clipboard write succeeded: raise the acknowledgement and schedule its
    /// expiry. A later copy restarts the window.
    pub fn on_copied(&mut self) -> Vec<UiEffect> {
        self.dispatch_copy_ack(CopyAckIntent::Copied);
        vec![UiEffect::Schedule {
            delay: COPY_ACK_WINDOW,
            event: ScheduledEvent::CopyAckExpired {
                epoch: self.copy_ack.epoch(),
            },
        }]
    }

    // ========================================================================
    // Timers
    // ========================================================================

    pub fn on_scheduled(&mut self, event: ScheduledEvent) {
        match event {
            ScheduledEvent::RevealForm => self.dispatch_reveal(RevealIntent::FormDelayElapsed),
            ScheduledEvent::CopyAckExpired { epoch } => {
                self.dispatch_copy_ack(CopyAckIntent::Expired { epoch })
            }
        }
    }

    fn dispatch_lifecycle(&mut self, intent: LifecycleIntent) {
        dispatch_mvi!(self, lifecycle, LifecycleReducer, intent);
    }

    fn dispatch_reveal(&mut self, intent: RevealIntent) {
        dispatch_mvi!(self, reveal, RevealReducer, intent);
    }

    fn dispatch_copy_ack(&mut self, intent: CopyAckIntent) {
        dispatch_mvi!(self, copy_ack, CopyAckReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        app
    }

    fn submitted_ticket(effects: &[UiEffect]) -> u64 {
        match effects {
            [UiEffect::Generate { ticket, .. }] => *ticket,
            other => panic!("Expected one Generate effect, got {:?}", other),
        }
    }

    #[test]
    fn start_is_one_shot() {
        let mut app = App::new(Tone::None);
        assert_eq!(app.start().len(), 1);
        assert!(app.start().is_empty());
    }

    #[test]
    fn tickets_increase_per_submission() {
        let mut app = make_app();
        app.form_mut().set_content("Hi");
        let first = submitted_ticket(&app.submit());
        app.on_reply_ready(first, GenerationResult::Failure("x".into()));
        let second = submitted_ticket(&app.submit());
        assert!(second > first);
    }

    #[test]
    fn animation_only_advances_while_submitting() {
        let mut app = make_app();
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);

        app.form_mut().set_content("Hi");
        app.submit();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.animation_tick(), 2);
    }

    #[test]
    fn stale_reply_does_not_touch_reveal() {
        let mut app = make_app();
        app.form_mut().set_content("Hi");
        let ticket = submitted_ticket(&app.submit());
        app.on_reply_ready(ticket + 7, GenerationResult::Success("nope".into()));
        assert!(app.lifecycle().is_submitting());
        assert!(!app.reveal().reply_visible);
    }

    #[test]
    fn empty_reply_is_not_revealed_or_copyable() {
        let mut app = make_app();
        app.form_mut().set_content("Hi");
        let ticket = submitted_ticket(&app.submit());
        app.on_reply_ready(ticket, GenerationResult::Success(String::new()));
        assert!(!app.lifecycle().is_submitting());
        assert!(!app.reveal().reply_visible);
        assert_eq!(app.current_reply(), None);
        assert!(app.request_copy().is_empty());
    }

    #[test]
    fn request_copy_without_reply_is_noop() {
        let app = make_app();
        assert!(app.request_copy().is_empty());
        assert!(!app.can_copy());
    }
}
