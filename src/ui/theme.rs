use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x67, 0x50, 0xa4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TITLE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xc4, 0xc4, 0xc4);
pub const LABEL_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const SNACKBAR_BG: Color = Color::Rgb(0x31, 0x30, 0x33);
pub const SNACKBAR_TEXT: Color = Color::Rgb(0xf4, 0xef, 0xf4);
