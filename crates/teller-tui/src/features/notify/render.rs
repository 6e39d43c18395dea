//! Notification banner rendering.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use super::{Notice, NoticeKind};

/// Builds the one-line banner for the current notification.
pub fn banner(notice: &Notice) -> Paragraph<'static> {
    let style = match notice.kind {
        NoticeKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        NoticeKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
    };
    Paragraph::new(notice.message.clone())
        .style(style)
        .alignment(Alignment::Center)
}
