//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{AppState, RequestKind, RequestState, View};
use crate::{dashboard, login, notify, transfer};

/// Height of the notification banner above the view.
const NOTICE_HEIGHT: u16 = 1;

/// Height of the status line below the view.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame; slows the animation to a readable speed.
const SPINNER_SPEED_DIVISOR: usize = 2;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(NOTICE_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    if let Some(notice) = app.notice.current() {
        frame.render_widget(notify::banner(notice), chunks[0]);
    }

    match app.view {
        View::Login => login::render(app, frame, chunks[1]),
        View::Dashboard => dashboard::render(app, frame, chunks[1]),
        View::Transfer => transfer::render(app, frame, chunks[1]),
    }

    render_status_line(app, frame, chunks[2]);
}

/// Renders the status line: the busy spinner while a request is in flight,
/// key hints otherwise.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = if let RequestState::InFlight { kind, .. } = &app.request {
        let spinner_idx = (app.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
        let label = match kind {
            RequestKind::Authenticate => "Signing in...",
            RequestKind::Transfer => "Sending transfer...",
        };
        vec![
            Span::styled(SPINNER_FRAMES[spinner_idx], Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::Yellow)),
        ]
    } else {
        let hints: &[(&str, &str)] = match app.view {
            View::Login => &[("Tab", "next field"), ("Enter", "sign in"), ("Ctrl+C", "quit")],
            View::Dashboard => &[("t", "transfer"), ("l", "log out"), ("q", "quit")],
            View::Transfer => &[("Enter", "send"), ("Esc", "back"), ("Ctrl+L", "log out")],
        };
        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!(" {action}")));
        }
        spans
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
