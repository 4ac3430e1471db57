use shopme_core::api::ProductId;
use shopme_core::cart::{CartLine, CartSummary};

use crate::common::{BusySet, TaskId};

/// Cart screen state.
#[derive(Debug)]
pub struct CartState {
    pub visit: TaskId,
    pub lines: Vec<CartLine>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
    /// Lines with a quantity update in flight.
    pub updating: BusySet<ProductId>,
    /// Lines with a removal in flight.
    pub removing: BusySet<ProductId>,
}

impl CartState {
    pub fn new(visit: TaskId) -> Self {
        Self {
            visit,
            lines: Vec::new(),
            loading: true,
            error: None,
            selected: 0,
            updating: BusySet::default(),
            removing: BusySet::default(),
        }
    }

    pub fn selected_line(&self) -> Option<&CartLine> {
        self.lines.get(self.selected)
    }

    pub fn is_line_busy(&self, id: &ProductId) -> bool {
        self.updating.contains(id) || self.removing.contains(id)
    }

    /// True while any line mutation is in flight.
    pub fn is_busy(&self) -> bool {
        !self.updating.is_empty() || !self.removing.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.lines)
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.lines.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.lines.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
