//! Shared leaf types for TUI features.
//!
//! Contains types with no feature dependencies (tasks, busy flags, text helpers).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod form;
pub mod task;
pub mod text;

pub use form::{edit_form, paste_form};
pub use task::{BusySet, TaskId, TaskSeq, TaskState};
pub use text::{
    edit_field, mask, paste_into, truncate_start_with_ellipsis, truncate_with_ellipsis,
};
