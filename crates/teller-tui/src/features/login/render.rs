//! Login feature view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::LoginField;
use crate::common::layout::centered;
use crate::state::AppState;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 7;

/// Width of the field label column ("Name  " / "PIN   ").
const LABEL_WIDTH: u16 = 6;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default().borders(Borders::ALL).title(" Teller ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let masked = "•".repeat(app.login.pin.len());
    let lines = vec![
        Line::from("Sign in to your account"),
        Line::default(),
        field_line("Name", &app.login.name.value(), app.login.focus == LoginField::Name),
        Line::default(),
        field_line("PIN", &masked, app.login.focus == LoginField::Pin),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    // Each mask char is one column wide, so the cursor column for the PIN
    // is its char index rather than the hidden text's display width.
    let (row, col) = match app.login.focus {
        LoginField::Name => (2, app.login.name.width_before_cursor()),
        LoginField::Pin => (4, app.login.pin.cursor()),
    };
    frame.set_cursor_position(Position::new(
        inner.x + LABEL_WIDTH + col as u16,
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
        Span::styled(format!("{label:<5} "), label_style),
        Span::raw(value.to_string()),
    ])
}
