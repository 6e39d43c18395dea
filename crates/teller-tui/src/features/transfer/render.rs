//! Transfer feature view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use teller_core::format;

use super::TransferField;
use crate::common::layout::centered;
use crate::state::AppState;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 9;

/// Width of the field label column.
const LABEL_WIDTH: u16 = 11;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default().borders(Borders::ALL).title(" Send money ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let available = app
        .session
        .as_ref()
        .map_or_else(|| "-".to_string(), |s| format::usd(s.balance));

    let lines = vec![
        field_line(
            "Recipient",
            &app.transfer.recipient.value(),
            app.transfer.focus == TransferField::Recipient,
        ),
        Line::default(),
        field_line(
            "Amount",
            &app.transfer.amount.value(),
            app.transfer.focus == TransferField::Amount,
        ),
        Line::default(),
        Line::from(Span::styled(
            format!("Available: {available}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let (row, field) = match app.transfer.focus {
        TransferField::Recipient => (0, &app.transfer.recipient),
        TransferField::Amount => (2, &app.transfer.amount),
    };
    frame.set_cursor_position(Position::new(
        inner.x + LABEL_WIDTH + field.width_before_cursor() as u16,
        inner.y + row,
    ));
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("{label:<10} "), label_style),
        Span::raw(value.to_string()),
    ])
}
