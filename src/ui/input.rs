use crate::ui::app::{App, UiEffect};
use crate::ui::form::FormField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to session actions. Returns the effects to execute.
///
/// Form keys are ignored until the form has been revealed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return Vec::new();
    }

    if !app.reveal().form_visible {
        return Vec::new();
    }

    if is_ctrl_char(key, 'g') {
        return app.submit();
    }
    if is_ctrl_char(key, 'y') {
        return app.request_copy();
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.form_mut().toggle_focus();
        return Vec::new();
    }

    match app.form().focus() {
        FormField::Content => edit_content(app, key),
        FormField::Tone => match key.code {
            KeyCode::Left | KeyCode::Up => app.form_mut().cycle_tone(false),
            KeyCode::Right | KeyCode::Down => app.form_mut().cycle_tone(true),
            _ => {}
        },
    }
    Vec::new()
}

/// Bracketed paste goes into the content editor when it has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.reveal().form_visible && app.form().focus() == FormField::Content {
        app.form_mut().insert_str(text);
    }
}

fn edit_content(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.form_mut().insert_char(ch)
        }
        KeyCode::Enter => app.form_mut().insert_char('\n'),
        KeyCode::Backspace => app.form_mut().backspace(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
