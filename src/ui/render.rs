use crate::generation::Tone;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::FormField;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::lifecycle::LifecycleState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HINT_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Insertion mark at the end of the content editor.
const CURSOR: char = '▏';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let reveal = app.reveal();

    frame.render_widget(Header::new().widget(reveal.title_visible), header);

    if reveal.form_visible {
        let regions = body_regions(body);
        render_content(frame, app, regions.content);
        render_tone(frame, app, regions.tone);
        render_status(frame, app, regions.status);

        if reveal.reply_visible {
            if let Some(reply) = app.current_reply() {
                render_reply(frame, reply, regions.reply);
            }
        }

        // Footer appears together with the form.
        frame.render_widget(Footer::new().widget(footer, app.is_copied()), footer);
    }
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(BODY_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.form().focus() == FormField::Content;
    let block = field_block(" Original Email Content ", focused);
    let inner = block.inner(area);

    let mut text = app.form().content().to_string();
    if focused {
        text.push(CURSOR);
    }
    let rows = wrap_rows(&text, inner.width as usize);
    // Keep the end of the text (where typing happens) in view
    let scroll = rows.len().saturating_sub(inner.height as usize) as u16;

    let last = rows.len().saturating_sub(1);
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if focused && i == last {
                if let Some(body) = row.strip_suffix(CURSOR) {
                    return Line::from(vec![
                        Span::raw(body.to_string()),
                        Span::styled(CURSOR.to_string(), Style::default().fg(FOCUS_BORDER)),
                    ]);
                }
            }
            Line::from(row)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(BODY_TEXT))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(widget, area);
}

/// Split `text` into display rows of at most `width` chars, breaking on
/// newlines first. An empty line still takes one row.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

fn render_tone(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.form().focus() == FormField::Tone;
    let selected = app.form().tone();

    let mut spans = Vec::with_capacity(Tone::ALL.len() * 2);
    for tone in Tone::ALL {
        let style = if tone == selected {
            Style::default()
                .fg(BODY_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HINT_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
        spans.push(Span::raw(" "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(field_block(" Tone (Optional) ", focused));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match app.lifecycle() {
        LifecycleState::Submitting { .. } => {
            let spinner =
                SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled("Generating reply...", Style::default().fg(BODY_TEXT)),
            ])
        }
        LifecycleState::Failed { reason } => Line::from(Span::styled(
            format!(" ⚠️ {}", reason),
            Style::default().fg(STATUS_ERROR),
        )),
        _ if app.can_submit() => Line::from(Span::styled(
            " Ctrl+G: Generate Reply",
            Style::default().fg(STATUS_OK),
        )),
        _ => Line::from(Span::styled(
            " Enter the email you received to generate a reply",
            Style::default().fg(HINT_TEXT),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_reply(frame: &mut Frame<'_>, reply: &str, area: Rect) {
    let widget = Paragraph::new(reply.to_string())
        .style(Style::default().fg(BODY_TEXT))
        .wrap(Wrap { trim: false })
        .block(field_block(" Generated Reply ", false));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationResult;
    use crate::ui::app::{ScheduledEvent, UiEffect};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn title_shown_before_form() {
        let mut app = App::new(Tone::None);
        app.start();
        let text = screen_text(&app);
        assert!(text.contains("Email Reply Generator"));
        assert!(!text.contains("Original Email Content"));
        assert!(!text.contains("Ctrl+Q: Quit"));

        app.on_scheduled(ScheduledEvent::RevealForm);
        assert!(screen_text(&app).contains("Ctrl+Q: Quit"));
    }

    #[test]
    fn wrap_rows_splits_long_lines() {
        assert_eq!(wrap_rows("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_rows("ab\n\ncd", 4), vec!["ab", "", "cd"]);
        assert_eq!(wrap_rows("", 4), vec![""]);
        assert_eq!(wrap_rows("abcd", 4), vec!["abcd"]);
    }

    #[test]
    fn long_content_line_stays_visible() {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        app.form_mut().set_content(format!("{}TAIL", "a".repeat(150)));
        assert!(screen_text(&app).contains("TAIL"));
    }

    #[test]
    fn editor_scrolls_to_last_wrapped_row() {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        // One line far taller than the editor once wrapped
        app.form_mut().set_content(format!("HEAD{}LAST", "b".repeat(98 * 10)));
        let text = screen_text(&app);
        assert!(text.contains("LAST"));
        assert!(!text.contains("HEAD"));
    }

    #[test]
    fn empty_reply_shows_no_panel() {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        app.form_mut().set_content("Hi");
        let ticket = match app.submit().as_slice() {
            [UiEffect::Generate { ticket, .. }] => *ticket,
            other => panic!("Expected Generate, got {:?}", other),
        };
        app.on_reply_ready(ticket, GenerationResult::Success(String::new()));
        assert!(!screen_text(&app).contains("Generated Reply"));
    }

    #[test]
    fn reply_panel_appears_after_success() {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        app.form_mut().set_content("Hi");
        let ticket = match app.submit().as_slice() {
            [UiEffect::Generate { ticket, .. }] => *ticket,
            other => panic!("Expected Generate, got {:?}", other),
        };
        assert!(screen_text(&app).contains("Generating reply..."));

        app.on_reply_ready(ticket, GenerationResult::Success("Thanks Bob".into()));
        let text = screen_text(&app);
        assert!(text.contains("Generated Reply"));
        assert!(text.contains("Thanks Bob"));

        assert!(!text.contains("Copied!"));
        app.on_copied();
        assert!(screen_text(&app).contains("Copied!"));
    }

    #[test]
    fn failure_message_in_status_line() {
        let mut app = App::new(Tone::None);
        app.start();
        app.on_scheduled(ScheduledEvent::RevealForm);
        app.form_mut().set_content("Hi");
        let ticket = match app.submit().as_slice() {
            [UiEffect::Generate { ticket, .. }] => *ticket,
            other => panic!("Expected Generate, got {:?}", other),
        };
        app.on_reply_ready(
            ticket,
            GenerationResult::Failure(crate::generation::GENERATION_FAILED_MESSAGE.into()),
        );
        let text = screen_text(&app);
        assert!(text.contains("Failed to generate email reply."));
        assert!(!text.contains("Generated Reply"));
    }
}
