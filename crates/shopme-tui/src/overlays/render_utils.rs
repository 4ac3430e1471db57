use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::{mask, truncate_start_with_ellipsis};

/// Calculates a centered area of at most `width` x `height` inside `area`.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let overlay_x = area.x + (area.width.saturating_sub(width)) / 2;
    let overlay_y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for an overlay.
pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
}

/// Render a standard overlay container and return its layout.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(footer_height),
    );

    OverlayLayout { popup, body }
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// A labelled single-line form field.
pub struct InputLine<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub secret: bool,
    pub focused: bool,
    /// Shown instead of an editable value (e.g. a picker choice).
    pub choice: bool,
}

/// Renders `label  value█` with the cursor on the focused field.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    const LABEL_WIDTH: usize = 11;

    let accent = if input.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let prompt = if input.focused { "▶ " } else { "  " };
    let label = format!("{:<LABEL_WIDTH$}", input.label);

    let shown = if input.secret {
        mask(input.value)
    } else {
        input.value.to_string()
    };
    let max_text_width = (area.width as usize).saturating_sub(prompt.len() + LABEL_WIDTH + 4);

    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(accent)),
        Span::styled(label, Style::default().fg(accent)),
    ];
    if input.choice {
        spans.push(Span::styled("‹ ", Style::default().fg(accent)));
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&shown, max_text_width),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(" ›", Style::default().fg(accent)));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&shown, max_text_width),
            Style::default().fg(Color::White),
        ));
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders a line of keyboard hints at the bottom of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders an inline error (red) or status line.
pub fn render_message(frame: &mut Frame, area: Rect, message: Option<&str>, color: Color) {
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(color),
            ))),
            area,
        );
    }
}

/// Renders a separator line.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}

/// Returns the one-line row at `offset` inside `area`, or an empty rect.
pub fn row(area: Rect, offset: u16) -> Rect {
    if offset >= area.height {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x, area.y + offset, area.width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_area_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = calculate_overlay_area(area, 60, 10);
        assert_eq!(popup, Rect::new(20, 15, 60, 10));

        let small = calculate_overlay_area(Rect::new(0, 0, 30, 8), 60, 20);
        assert_eq!(small.width, 26);
        assert_eq!(small.height, 6);
    }

    #[test]
    fn test_row_outside_area_is_empty() {
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(row(area, 1), Rect::new(2, 4, 10, 1));
        assert_eq!(row(area, 2).height, 0);
    }
}
