use crate::ui::theme::{GLOBAL_BORDER, HINT_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left; copy acknowledgement and version on the right.
    pub fn widget(&self, area: Rect, copied: bool) -> Paragraph<'static> {
        let hints = " Ctrl+G: Generate │ Ctrl+Y: Copy │ Tab: Tone │ Ctrl+Q: Quit";
        let ack = if copied { "✅ Copied!  " } else { "" };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = ack.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(ack, Style::default().fg(STATUS_OK)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
