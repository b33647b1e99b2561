//! Editable request fields.

use crate::generation::{GenerationRequest, Tone};

/// Which form control receives keystrokes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormField {
    #[default]
    Content,
    Tone,
}

/// Content and tone as currently entered. Editing is allowed at any time,
/// including while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    content: String,
    tone: Tone,
    focus: FormField,
}

impl RequestForm {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.content.push(ch);
    }

    /// Insert pasted text. Carriage returns are normalised to newlines.
    pub fn insert_str(&mut self, text: &str) {
        self.content.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn backspace(&mut self) {
        self.content.pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Content => FormField::Tone,
            FormField::Tone => FormField::Content,
        };
    }

    pub fn cycle_tone(&mut self, forward: bool) {
        self.tone = if forward {
            self.tone.next()
        } else {
            self.tone.previous()
        };
    }

    /// Snapshot the form into a fresh request.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.content.clone(), self.tone)
    }
}
