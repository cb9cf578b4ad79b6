use crate::form::Field;
use crate::ui::app::App;
use crate::ui::focus::FocusState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, STATUS_ERROR, TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FORM_WIDTH: u16 = 48;
/// Label row, bordered input (3 rows), error row.
const FIELD_HEIGHT: u16 = 5;
const SUBMIT_HEIGHT: u16 = 1;
const MASK: char = '*';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.form().validation_name()).widget(), header);
    frame.render_widget(Clear, body);
    draw_form(frame, body, app);
    let footer_widget = Footer::new(app.submit_count(), app.submit_errors());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_form(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let height = FIELD_HEIGHT * Field::ALL.len() as u16 + SUBMIT_HEIGHT + 2;
    let area = centered_rect_by_size(body, FORM_WIDTH, height);
    if area.width < 4 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .title(Span::styled(" Sign up ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for field in Field::ALL {
        let slot = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: FIELD_HEIGHT.min(inner.bottom().saturating_sub(y)),
        };
        draw_field(frame, slot, app, field);
        y = y.saturating_add(FIELD_HEIGHT);
    }

    if y < inner.bottom() {
        let submit = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: SUBMIT_HEIGHT,
        };
        frame.render_widget(submit_button(app.focus() == FocusState::Submit), submit);
    }
}

fn draw_field(frame: &mut Frame<'_>, slot: Rect, app: &App, field: Field) {
    if slot.height == 0 {
        return;
    }
    let focused = app.focus() == FocusState::Field(field);
    let text = display_value(field, app.form().value(field));

    let label = Rect { height: 1, ..slot };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(field.label(), Style::default().fg(TEXT)))),
        label,
    );

    let input = Rect {
        y: slot.y + 1,
        height: 3.min(slot.height.saturating_sub(1)),
        ..slot
    };
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let input_inner = input_block.inner(input);
    let offset = cursor_offset(&text, input_inner.width);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(TEXT)).block(input_block),
        input,
    );
    if focused && input_inner.width > 0 && input_inner.height > 0 {
        let x = input_inner.x + offset;
        frame.set_cursor_position((x, input_inner.y));
    }

    if let Some(error) = app.form().error(field) {
        if slot.height >= 5 {
            let error_row = Rect {
                y: slot.y + 4,
                height: 1,
                ..slot
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.to_string(),
                    Style::default().fg(STATUS_ERROR),
                )),
                error_row,
            );
        }
    }
}

fn submit_button(focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default()
            .fg(TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Paragraph::new(Line::from(Span::styled(" Submit ", style))).alignment(Alignment::Center)
}

/// Column of the cursor after `text`, in terminal cells, kept inside `width`.
fn cursor_offset(text: &str, width: u16) -> u16 {
    let cells = u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX);
    cells.min(width.saturating_sub(1))
}

/// Text shown inside the input box; secret fields are masked.
fn display_value(field: Field, value: &str) -> String {
    if field.is_secret() {
        std::iter::repeat(MASK).take(value.chars().count()).collect()
    } else {
        value.to_string()
    }
}
