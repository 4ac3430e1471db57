use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use shopme_core::api::{Product, ProductId};
use shopme_core::forms::{Form, FormField, ProductField, ProductForm};

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_message, render_overlay, row,
};
use crate::common::{TaskId, TaskState, edit_form, paste_form};
use crate::effects::UiEffect;

/// Create/edit product modal.
#[derive(Debug)]
pub struct ProductFormState {
    /// Catalog visit that opened the modal.
    pub visit: TaskId,
    /// `Some` when editing an existing product.
    pub editing: Option<ProductId>,
    pub form: ProductForm,
    pub focus: ProductField,
    pub error: Option<String>,
    pub saving: TaskState,
}

impl ProductFormState {
    pub fn create(visit: TaskId) -> Self {
        Self {
            visit,
            editing: None,
            form: ProductForm::default(),
            focus: ProductField::Name,
            error: None,
            saving: TaskState::default(),
        }
    }

    pub fn edit(visit: TaskId, product: &Product) -> Self {
        Self {
            editing: Some(product.id.clone()),
            form: ProductForm::from_product(product),
            ..Self::create(visit)
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        // The form is locked while the save is in flight.
        if self.saving.is_running() {
            return OverlayUpdate::stay();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.focus == ProductField::Category =>
            {
                self.form.category = if key.code == KeyCode::Left {
                    self.form.category.prev()
                } else {
                    self.form.category.next()
                };
                OverlayUpdate::stay()
            }
            _ => {
                edit_form(&mut self.form, &mut self.focus, key);
                OverlayUpdate::stay()
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if !self.saving.is_running() {
            paste_form(&mut self.form, self.focus, text);
        }
    }

    fn submit(&mut self) -> OverlayUpdate {
        match self.form.validate() {
            Err(e) => {
                self.error = Some(e.to_string());
                OverlayUpdate::stay()
            }
            Ok(payload) => {
                self.error = None;
                self.saving.try_start();
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::SaveProduct {
                    visit: self.visit,
                    id: self.editing.clone(),
                    payload,
                }])
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("Tab", "next"),
            InputHint::new("←→", "category"),
            InputHint::new("Enter", "save"),
            InputHint::new("Esc", "cancel"),
        ];
        let fields = ProductField::ALL;
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: self.title(),
                border_color: Color::Magenta,
                width: 64,
                height: fields.len() as u16 + 6,
                hints: &hints,
            },
        );

        for (i, field) in fields.iter().enumerate() {
            let category = self.form.category.as_str();
            render_input_line(
                frame,
                row(layout.body, i as u16),
                &InputLine {
                    label: field.label(),
                    value: self.form.text(*field).unwrap_or(category),
                    secret: false,
                    focused: *field == self.focus,
                    choice: *field == ProductField::Category,
                },
            );
        }

        let message_row = row(layout.body, fields.len() as u16 + 1);
        if self.saving.is_running() {
            render_message(frame, message_row, Some("Saving..."), Color::Yellow);
        } else {
            render_message(frame, message_row, self.error.as_deref(), Color::Red);
        }
    }
}
