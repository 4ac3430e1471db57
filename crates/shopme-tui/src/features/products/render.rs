//! Catalog view: filter bar, product table, and key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use shopme_core::api::Product;
use shopme_core::cart::format_price;

use super::state::ProductsState;
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, render_hints};

pub fn render_products(frame: &mut Frame, area: Rect, state: &ProductsState, spinner: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_filter_bar(frame, chunks[0], state);

    if state.loading && state.products.is_empty() {
        render_notice(
            frame,
            chunks[1],
            &format!("{spinner} Loading products..."),
            Color::Yellow,
        );
    } else if let Some(error) = &state.error {
        render_notice(frame, chunks[1], error, Color::Red);
    } else {
        render_table(frame, chunks[1], state);
    }

    let hints = [
        InputHint::new("↑↓", "select"),
        InputHint::new("←→", "category"),
        InputHint::new("Enter", "add to cart"),
        InputHint::new("^N", "new"),
        InputHint::new("^E", "edit"),
        InputHint::new("^D", "delete"),
        InputHint::new("^R", "reload"),
    ];
    render_hints(frame, chunks[2], &hints, Color::Cyan);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &ProductsState) {
    let search = if state.search.is_empty() {
        Span::styled("type to search", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.search.clone())
    };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        search,
        Span::raw("   "),
        Span::styled("Category: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("‹ {} ›", state.category_label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )))
        .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_table(frame: &mut Frame, area: Rect, state: &ProductsState) {
    let visible = state.visible();
    if visible.is_empty() {
        let message = if state.products.is_empty() {
            "No products yet. Press Ctrl+N to add one."
        } else {
            "No products match your filters."
        };
        render_notice(frame, area, message, Color::DarkGray);
        return;
    }

    let name_width = area.width.saturating_sub(40).max(10) as usize;
    let rows = visible
        .iter()
        .map(|product| product_row(product, state, name_width));
    let header = Row::new(["Name", "Category", "Price", "Stock"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn product_row<'a>(product: &Product, state: &ProductsState, name_width: usize) -> Row<'a> {
    let status = if state.adding.contains(&product.id) {
        Cell::from(Span::styled("Adding...", Style::default().fg(Color::Yellow)))
    } else if product.in_stock() {
        Cell::from(Span::styled(
            format!("{} in stock", product.stock),
            Style::default().fg(Color::Green),
        ))
    } else {
        Cell::from(Span::styled("Out of stock", Style::default().fg(Color::Red)))
    };
    Row::new(vec![
        Cell::from(truncate_with_ellipsis(&product.name, name_width)),
        Cell::from(product.category.to_string()),
        Cell::from(format_price(product.price)),
        status,
    ])
}
