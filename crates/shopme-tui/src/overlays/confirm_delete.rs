use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use shopme_core::api::{Product, ProductId};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_message, render_overlay, row};
use crate::common::{TaskId, TaskState, truncate_with_ellipsis};
use crate::effects::UiEffect;

/// "Delete this product?" confirmation.
#[derive(Debug)]
pub struct ConfirmDeleteState {
    pub visit: TaskId,
    pub id: ProductId,
    pub name: String,
    pub deleting: TaskState,
}

impl ConfirmDeleteState {
    pub fn open(visit: TaskId, product: &Product) -> Self {
        Self {
            visit,
            id: product.id.clone(),
            name: product.name.clone(),
            deleting: TaskState::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        if self.deleting.is_running() {
            return OverlayUpdate::stay();
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('n' | 'N') => OverlayUpdate::close(),
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                self.deleting.try_start();
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::DeleteProduct {
                    visit: self.visit,
                    id: self.id.clone(),
                }])
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("y", "delete"), InputHint::new("n", "cancel")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Delete Product",
                border_color: Color::Red,
                width: 50,
                height: 7,
                hints: &hints,
            },
        );

        let name = truncate_with_ellipsis(&self.name, layout.body.width.saturating_sub(10) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Delete "),
                Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("?"),
            ])),
            row(layout.body, 0),
        );
        if self.deleting.is_running() {
            render_message(frame, row(layout.body, 2), Some("Deleting..."), Color::Yellow);
        }
    }
}
