use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use shopme_core::routes::Route;

pub const NAVBAR_HEIGHT: u16 = 3;

/// Tabs in display order with their shortcut.
const TABS: [(Route, &str); 2] = [(Route::Products, "^P"), (Route::Cart, "^B")];

pub fn render_navbar(frame: &mut Frame, area: Rect, active: Route) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            " ShopMe ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (route, shortcut) in TABS {
        // Checkout is reached from the cart and highlights it.
        let is_active = route == active || (route == Route::Cart && active == Route::Checkout);
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(route.title(), style));
        spans.push(Span::styled(
            format!(" {shortcut}   "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let logout = Line::from(vec![
        Span::styled("Logout ", Style::default().fg(Color::Red)),
        Span::styled("^X ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(logout).alignment(Alignment::Right),
        inner,
    );
}
