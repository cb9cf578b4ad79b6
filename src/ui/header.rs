use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    policy: &'static str,
}

impl Header {
    pub fn new(policy: &'static str) -> Self {
        Self { policy }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Sign up", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("validation: {}", self.policy), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
