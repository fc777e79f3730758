use crate::ui::theme::{GLOBAL_BORDER, TITLE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SCREEN_HINTS: &str = " ↑/↓: Select │ Enter: Edit │ q: Quit";
const DIALOG_HINTS: &str = " Enter: Confirm │ Esc: Dismiss";

pub struct Footer {
    dialog_open: bool,
}

impl Footer {
    pub fn new(dialog_open: bool) -> Self {
        Self { dialog_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.dialog_open {
            DIALOG_HINTS
        } else {
            SCREEN_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TITLE_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
