use shopme_core::cart::{CartLine, CartSummary};

use crate::common::{TaskId, TaskState};

/// Checkout confirmation screen state.
#[derive(Debug)]
pub struct CheckoutState {
    pub visit: TaskId,
    pub lines: Vec<CartLine>,
    pub loading: bool,
    pub error: Option<String>,
    pub placing: TaskState,
}

impl CheckoutState {
    pub fn new(visit: TaskId) -> Self {
        Self {
            visit,
            lines: Vec::new(),
            loading: true,
            error: None,
            placing: TaskState::default(),
        }
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.lines)
    }
}
