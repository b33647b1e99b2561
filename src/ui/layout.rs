use ratatui::layout::{Constraint, Layout, Rect};

/// Rows used by the content editor, including borders.
const CONTENT_HEIGHT: u16 = 8;
/// Rows used by the tone selector, including borders.
const TONE_HEIGHT: u16 = 3;
/// Rows used by the submit/status line.
const STATUS_HEIGHT: u16 = 1;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Body sections: content editor, tone selector, status line, reply panel.
pub struct BodyRegions {
    pub content: Rect,
    pub tone: Rect,
    pub status: Rect,
    pub reply: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let [content, tone, status, reply] = Layout::vertical([
        Constraint::Length(CONTENT_HEIGHT),
        Constraint::Length(TONE_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(body);

    BodyRegions {
        content,
        tone,
        status,
        reply,
    }
}
