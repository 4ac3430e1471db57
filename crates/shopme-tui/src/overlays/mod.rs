//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `product_form.rs`: create/edit product modal
//! - `confirm_delete.rs`: delete confirmation modal
//! - `render_utils.rs`: shared rendering utilities for overlays and form cards

pub mod confirm_delete;
pub mod product_form;
pub mod render_utils;

pub use confirm_delete::ConfirmDeleteState;
use crossterm::event::KeyEvent;
pub use product_form::ProductFormState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::common::TaskId;
use crate::effects::UiEffect;

// ============================================================================
// OverlayTransition / OverlayUpdate
// ============================================================================

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    ProductForm(ProductFormState),
    ConfirmDelete(ConfirmDeleteState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::ProductForm(f) => f.render(frame, area),
            Overlay::ConfirmDelete(c) => c.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::ProductForm(f) => f.handle_key(key),
            Overlay::ConfirmDelete(c) => c.handle_key(key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Overlay::ProductForm(f) = self {
            f.handle_paste(text);
        }
    }

    /// The screen visit that opened this overlay.
    pub fn visit(&self) -> TaskId {
        match self {
            Overlay::ProductForm(f) => f.visit,
            Overlay::ConfirmDelete(c) => c.visit,
        }
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
