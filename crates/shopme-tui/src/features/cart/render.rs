use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use shopme_core::cart::{CartLine, CartSummary, format_price};

use super::state::CartState;
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, render_hints};

const SUMMARY_WIDTH: u16 = 32;

pub fn render_cart(frame: &mut Frame, area: Rect, state: &CartState, spinner: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SUMMARY_WIDTH)])
        .split(rows[0]);

    if state.loading && state.lines.is_empty() {
        render_notice(frame, columns[0], &format!("{spinner} Loading cart..."), Color::Yellow);
    } else if let Some(error) = &state.error {
        render_notice(frame, columns[0], error, Color::Red);
    } else if state.lines.is_empty() {
        render_notice(
            frame,
            columns[0],
            "Your cart is empty. Press Ctrl+P to browse products.",
            Color::DarkGray,
        );
    } else {
        render_lines(frame, columns[0], state);
    }

    render_summary(frame, columns[1], &state.summary(), "Enter: checkout");

    let hints = [
        InputHint::new("↑↓", "select"),
        InputHint::new("+/-", "quantity"),
        InputHint::new("x", "remove"),
        InputHint::new("r", "reload"),
        InputHint::new("Enter", "checkout"),
    ];
    render_hints(frame, rows[1], &hints, Color::Cyan);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Cart ")),
        area,
    );
}

fn render_lines(frame: &mut Frame, area: Rect, state: &CartState) {
    let name_width = area.width.saturating_sub(40).max(10) as usize;
    let rows = state
        .lines
        .iter()
        .map(|line| line_row(line, state.is_line_busy(&line.product.id), name_width));
    let header = Row::new(["Product", "Price", "Qty", "Total"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Cart "))
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn line_row<'a>(line: &CartLine, busy: bool, name_width: usize) -> Row<'a> {
    let style = if busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(truncate_with_ellipsis(&line.product.name, name_width)),
        Cell::from(format_price(line.product.price)),
        Cell::from(format!("‹{}›", line.quantity)),
        Cell::from(format_price(line.line_total())),
    ])
    .style(style)
}

/// Order summary box shared with checkout.
pub fn render_summary(frame: &mut Frame, area: Rect, summary: &CartSummary, footer: &str) {
    let entry = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };
    let shipping = if summary.shipping.is_zero() {
        "Free".to_string()
    } else {
        format_price(summary.shipping)
    };
    let lines = vec![
        entry("Items", summary.item_count.to_string()),
        entry("Subtotal", format_price(summary.subtotal)),
        entry("Shipping", shipping),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{:<12}", "Total"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_price(summary.total),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            footer.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Order Summary "),
        ),
        area,
    );
}
