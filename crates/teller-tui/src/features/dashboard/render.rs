//! Dashboard feature view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use teller_core::format;

use crate::common::layout::centered;
use crate::state::AppState;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 6;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default().borders(Borders::ALL).title(" Dashboard ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let Some(session) = &app.session else {
        frame.render_widget(Paragraph::new("No active session."), inner);
        return;
    };

    let lines = vec![
        Line::from(format!("Hello, {}!", session.name)),
        Line::default(),
        Line::from(Span::styled(
            format::usd(session.balance),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Last updated: {}", format::last_updated(session.last_updated)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
