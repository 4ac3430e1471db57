use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use shopme_core::notify::{Severity, ToastBoard};
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;

const MAX_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Blue,
    }
}

/// Draws visible toasts stacked downward from the top-right corner, oldest first.
pub fn render_toasts(frame: &mut Frame, area: Rect, board: &ToastBoard) {
    let max_width = MAX_WIDTH.min(area.width);
    let mut y = area.y;
    for toast in board.visible() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let text = truncate_with_ellipsis(&toast.message, max_width.saturating_sub(6) as usize);
        let width = (text.width() as u16 + 6).min(max_width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = severity_color(toast.severity);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", toast.severity.icon()), Style::default().fg(color)),
                Span::raw(text),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
        y += TOAST_HEIGHT;
    }
}
