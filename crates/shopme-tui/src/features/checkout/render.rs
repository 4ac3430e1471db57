use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use shopme_core::cart::format_price;

use super::state::CheckoutState;
use crate::cart::render_summary;
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, render_hints, render_message};

pub fn render_checkout(frame: &mut Frame, area: Rect, state: &CheckoutState, spinner: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(rows[0]);

    let width = columns[0].width.saturating_sub(16) as usize;
    let lines: Vec<Line> = if state.loading {
        vec![Line::from(Span::styled(
            format!("{spinner} Loading order..."),
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        state
            .lines
            .iter()
            .map(|line| {
                Line::from(vec![
                    Span::raw(format!("{} × ", line.quantity)),
                    Span::raw(truncate_with_ellipsis(&line.product.name, width)),
                    Span::styled(
                        format!("  {}", format_price(line.line_total())),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Your Order ")),
        columns[0],
    );
    render_summary(frame, columns[1], &state.summary(), "Enter: place order");

    if state.placing.is_running() {
        render_message(frame, rows[1], Some("Placing order..."), Color::Yellow);
    } else {
        render_message(frame, rows[1], state.error.as_deref(), Color::Red);
    }

    let hints = [
        InputHint::new("Enter", "place order"),
        InputHint::new("Esc", "back to cart"),
    ];
    render_hints(frame, rows[2], &hints, Color::Cyan);
}
