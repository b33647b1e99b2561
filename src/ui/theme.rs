use ratatui::style::Color;

pub const TITLE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const SUBTITLE_TEXT: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
