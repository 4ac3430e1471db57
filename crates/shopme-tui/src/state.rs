//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Arc<Session>  (token shared with the API client)
//! │   ├── screen: Screen         (the one screen on display)
//! │   ├── task_seq: TaskSeq      (screen visit id generator)
//! │   └── toasts: ToastBoard     (the notification mount)
//! └── overlay: Option<Overlay>   (modal overlays)
//! ```
//!
//! Navigating replaces `screen` with a fresh state carrying a new visit id, so
//! results issued by the previous visit no longer match and are dropped.

use std::sync::Arc;

use shopme_core::notify::ToastBoard;
use shopme_core::routes::Route;
use shopme_core::session::Session;

use crate::auth::{LoginState, RegisterState};
use crate::cart::{self, CartState};
use crate::checkout::{self, CheckoutState};
use crate::common::{TaskId, TaskSeq};
use crate::effects::UiEffect;
use crate::overlays::Overlay;
use crate::products::{self, ProductsState};

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(session: Arc<Session>, toasts: ToastBoard) -> Self {
        Self {
            tui: TuiState::new(session, toasts),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

pub struct TuiState {
    pub should_quit: bool,
    pub session: Arc<Session>,
    pub screen: Screen,
    pub task_seq: TaskSeq,
    pub toasts: ToastBoard,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    /// Starts on a placeholder sign-in screen; the runtime's first
    /// navigation replaces it.
    pub fn new(session: Arc<Session>, toasts: ToastBoard) -> Self {
        let mut task_seq = TaskSeq::default();
        let screen = Screen::Login(LoginState::new(task_seq.next_id()));
        Self {
            should_quit: false,
            session,
            screen,
            task_seq,
            toasts,
            spinner_frame: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// True while anything is loading or in flight (drives the frame rate).
    pub fn is_busy(&self) -> bool {
        self.screen.is_busy() || !self.toasts.is_empty()
    }
}

// ============================================================================
// Screen
// ============================================================================

#[derive(Debug)]
pub enum Screen {
    Login(LoginState),
    Register(RegisterState),
    Products(ProductsState),
    Cart(CartState),
    Checkout(CheckoutState),
}

impl Screen {
    /// Builds a fresh screen for `route` and the effects it runs on entry.
    pub fn open(route: Route, visit: TaskId) -> (Screen, Vec<UiEffect>) {
        match route {
            Route::Login => (Screen::Login(LoginState::new(visit)), Vec::new()),
            Route::Register => (Screen::Register(RegisterState::new(visit)), Vec::new()),
            Route::Products => {
                let mut state = ProductsState::new(visit);
                let load = products::load(&mut state);
                (Screen::Products(state), vec![load])
            }
            Route::Cart => {
                let mut state = CartState::new(visit);
                let load = cart::load(&mut state);
                (Screen::Cart(state), vec![load])
            }
            Route::Checkout => {
                let mut state = CheckoutState::new(visit);
                let load = checkout::load(&mut state);
                (Screen::Checkout(state), vec![load])
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Register(_) => Route::Register,
            Screen::Products(_) => Route::Products,
            Screen::Cart(_) => Route::Cart,
            Screen::Checkout(_) => Route::Checkout,
        }
    }

    pub fn visit(&self) -> TaskId {
        match self {
            Screen::Login(s) => s.visit,
            Screen::Register(s) => s.visit,
            Screen::Products(s) => s.visit,
            Screen::Cart(s) => s.visit,
            Screen::Checkout(s) => s.visit,
        }
    }

    pub fn is_busy(&self) -> bool {
        match self {
            Screen::Login(s) => s.submit.is_running(),
            Screen::Register(s) => s.submit.is_running(),
            Screen::Products(s) => s.loading || !s.adding.is_empty(),
            Screen::Cart(s) => s.loading || s.is_busy(),
            Screen::Checkout(s) => s.loading || s.placing.is_running(),
        }
    }
}
