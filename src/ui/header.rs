use crate::ui::theme::{GLOBAL_BORDER, SUBTITLE_TEXT, TITLE_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Email Reply Generator";
const SUBTITLE: &str = "AI-powered email responses in seconds";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar. Renders only the border until the title is revealed.
    pub fn widget(&self, title_visible: bool) -> Paragraph<'static> {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        if !title_visible {
            return Paragraph::new("").block(block);
        }

        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(SUBTITLE_TEXT))),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
    }
}
