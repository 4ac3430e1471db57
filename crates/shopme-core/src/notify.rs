//! Transient user notifications ("toasts").
//!
//! Any code path that holds a [`Notifier`] can publish a message. Messages are
//! delivered to the single live [`ToastBoard`] (the display mount), which owns
//! the visible list and expires each entry on its own deadline.
//!
//! ```text
//! Notifier (cloned into handlers) ──mpsc──▶ ToastBoard (owned by the UI)
//! ```
//!
//! Publishing while no board is mounted drops the message.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// How long a toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "i",
        }
    }
}

/// Unique, strictly increasing toast id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// When the toast was published; its timer starts here.
    pub created_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.created_at + TOAST_TTL
    }
}

#[derive(Debug, Default)]
struct Shared {
    mount: Mutex<Option<mpsc::UnboundedSender<Toast>>>,
    next_id: AtomicU64,
}

/// Publishing handle. Cheap to clone; inject it wherever feedback is needed.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    shared: Arc<Shared>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a new display, replacing any previously mounted board.
    ///
    /// The replaced board stops receiving messages.
    pub fn mount(&self) -> ToastBoard {
        let (tx, rx) = mpsc::unbounded_channel();
        *self
            .shared
            .mount
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(tx);
        ToastBoard {
            rx,
            toasts: Vec::new(),
        }
    }

    /// Returns true if a live board is mounted.
    pub fn is_mounted(&self) -> bool {
        self.shared
            .mount
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|tx| !tx.is_closed())
    }

    /// Publishes a toast. Silently dropped when nothing is mounted.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let mut mount = self
            .shared
            .mount
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(tx) = mount.as_ref() else {
            return;
        };
        if tx.is_closed() {
            *mount = None;
            return;
        }
        // Id allocation happens under the mount lock so ids reach the board in order.
        let id = ToastId(self.shared.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let toast = Toast {
            id,
            message: message.into(),
            severity,
            created_at: Instant::now(),
        };
        if tx.send(toast).is_err() {
            *mount = None;
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }
}

/// The display mount: receives published toasts and tracks which are visible.
#[derive(Debug)]
pub struct ToastBoard {
    rx: mpsc::UnboundedReceiver<Toast>,
    toasts: Vec<Toast>,
}

impl ToastBoard {
    /// Pulls newly published toasts into the visible list.
    pub fn receive(&mut self) {
        while let Ok(toast) = self.rx.try_recv() {
            self.toasts.push(toast);
        }
    }

    /// Removes every toast whose own deadline has passed.
    ///
    /// Returns the ids that were removed.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let expired: Vec<ToastId> = self
            .toasts
            .iter()
            .filter(|t| t.expires_at() <= now)
            .map(|t| t.id)
            .collect();
        if !expired.is_empty() {
            self.toasts.retain(|t| !expired.contains(&t.id));
        }
        expired
    }

    /// Receives pending toasts and expires stale ones.
    pub fn sync(&mut self, now: Instant) {
        self.receive();
        self.expire(now);
    }

    /// Visible toasts in insertion order.
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
