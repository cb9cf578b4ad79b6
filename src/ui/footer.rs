use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, STATUS_OK, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Tab/↑↓: Move │ Enter: Next/Submit │ Ctrl+S: Submit │ Esc: Quit";

pub struct Footer {
    submit_count: usize,
    /// Errors pending at the last submission.
    error_count: usize,
}

impl Footer {
    pub fn new(submit_count: usize, error_count: usize) -> Self {
        Self {
            submit_count,
            error_count,
        }
    }

    fn status(&self) -> Option<Span<'static>> {
        if self.submit_count == 0 {
            return None;
        }
        let (text, color) = if self.error_count == 0 {
            (format!(" Submitted ×{} │", self.submit_count), STATUS_OK)
        } else {
            (
                format!(
                    " Submitted ×{} with {} error(s) │",
                    self.submit_count, self.error_count
                ),
                STATUS_ERROR,
            )
        };
        Some(Span::styled(text, Style::default().fg(color)))
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let status = self.status();

        // Calculate padding using char count, not byte count (for Unicode)
        let status_width = status.as_ref().map_or(0, |span| span.content.chars().count());
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(status_width)
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let mut spans: Vec<Span<'static>> = status.into_iter().collect();
        spans.push(Span::styled(HINTS, text_style));
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_status_before_first_submit() {
        assert!(Footer::new(0, 2).status().is_none());
    }

    #[test]
    fn status_mentions_pending_errors() {
        let status = Footer::new(2, 1).status().unwrap();
        assert_eq!(status.content, " Submitted ×2 with 1 error(s) │");
    }
}
