//! Auth feature view.
//!
//! Sign-in and sign-up cards, centered on screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use shopme_core::forms::{Form, FormField};

use super::state::{LoginState, RegisterState};
use crate::overlays::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_message, render_overlay, row,
};

const CARD_WIDTH: u16 = 60;

pub fn render_login(frame: &mut Frame, area: Rect, state: &LoginState) {
    let hints = [
        InputHint::new("Tab", "next field"),
        InputHint::new("Enter", "sign in"),
        InputHint::new("Ctrl+R", "create account"),
    ];
    render_card(
        frame,
        area,
        "Sign In",
        "Welcome back to ShopMe",
        &state.form,
        state.focus,
        state.error.as_deref(),
        state.submit.is_running().then_some("Signing in..."),
        &hints,
    );
}

pub fn render_register(frame: &mut Frame, area: Rect, state: &RegisterState) {
    let hints = [
        InputHint::new("Tab", "next field"),
        InputHint::new("Enter", "create account"),
        InputHint::new("Ctrl+L", "sign in"),
    ];
    render_card(
        frame,
        area,
        "Create Account",
        "Join ShopMe",
        &state.form,
        state.focus,
        state.error.as_deref(),
        state.submit.is_running().then_some("Creating account..."),
        &hints,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_card<F: Form>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    form: &F,
    focus: F::Field,
    error: Option<&str>,
    busy: Option<&str>,
    hints: &[InputHint<'_>],
) {
    let fields = F::Field::ALL;
    // subtitle, blank, fields, blank, message, blank, hints
    let height = fields.len() as u16 + 8;
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title,
            border_color: Color::Cyan,
            width: CARD_WIDTH,
            height,
            hints,
        },
    );
    let body = layout.body;

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        ))),
        row(body, 0),
    );

    for (i, field) in fields.iter().enumerate() {
        render_input_line(
            frame,
            row(body, 2 + i as u16),
            &InputLine {
                label: field.label(),
                value: form.text(*field).unwrap_or_default(),
                secret: field.is_secret(),
                focused: *field == focus,
                choice: false,
            },
        );
    }

    let message_row = row(body, 3 + fields.len() as u16);
    if let Some(busy) = busy {
        render_message(frame, message_row, Some(busy), Color::Yellow);
    } else {
        render_message(frame, message_row, error, Color::Red);
    }
}
