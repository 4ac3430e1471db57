//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Feature handlers return a [`ScreenUpdate`]; this module applies the
//! navigation and overlay requests it carries and hands the effects back.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shopme_core::routes::Route;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{Overlay, OverlayTransition, OverlayUpdate};
use crate::state::{AppState, Screen};
use crate::{auth, cart, checkout, products};

// ============================================================================
// ScreenUpdate
// ============================================================================

/// Result of a feature handler: effects plus optional navigation/overlay requests.
#[derive(Debug, Default)]
pub struct ScreenUpdate {
    pub effects: Vec<UiEffect>,
    pub navigate: Option<Route>,
    pub open_overlay: Option<Overlay>,
    pub close_overlay: bool,
}

impl ScreenUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effects(effects: Vec<UiEffect>) -> Self {
        Self {
            effects,
            ..Self::default()
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self::none().and_navigate(route)
    }

    #[must_use]
    pub fn and_navigate(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }

    #[must_use]
    pub fn open(mut self, overlay: Overlay) -> Self {
        self.open_overlay = Some(overlay);
        self
    }

    #[must_use]
    pub fn closing_overlay(mut self) -> Self {
        self.close_overlay = true;
        self
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.toasts.sync(Instant::now());
            enforce_guard(app)
        }
        UiEvent::Navigate(route) => navigate(app, route),
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::Auth(event) => {
            let update = auth::handle_auth_event(&mut app.tui.screen, event);
            apply_screen_update(app, update)
        }
        UiEvent::Products(event) => {
            let state = match &mut app.tui.screen {
                Screen::Products(state) => Some(state),
                _ => None,
            };
            let update = products::handle_products_event(state, app.overlay.as_mut(), event);
            apply_screen_update(app, update)
        }
        UiEvent::Cart(event) => {
            let state = match &mut app.tui.screen {
                Screen::Cart(state) => Some(state),
                _ => None,
            };
            let update = cart::handle_cart_event(state, event);
            apply_screen_update(app, update)
        }
        UiEvent::Checkout(event) => {
            let state = match &mut app.tui.screen {
                Screen::Checkout(state) => Some(state),
                _ => None,
            };
            let update = checkout::handle_checkout_event(state, event);
            apply_screen_update(app, update)
        }
    }
}

/// Shows the screen for `requested`, after the route guard has had its say.
///
/// Staying on the current route is a no-op; any other target starts a new
/// visit, runs the screen's entry effects, and closes open overlays.
pub fn navigate(app: &mut AppState, requested: Route) -> Vec<UiEffect> {
    let resolved = requested.resolve(app.tui.is_authenticated());
    if resolved.is_redirect() {
        tracing::debug!(%requested, to = %resolved.route(), "route guard redirect");
    }
    let target = resolved.route();
    if target == app.tui.screen.route() {
        return Vec::new();
    }
    let visit = app.tui.task_seq.next_id();
    let (screen, effects) = Screen::open(target, visit);
    tracing::debug!(route = %target, visit = visit.0, "navigate");
    app.tui.screen = screen;
    app.overlay = None;
    effects
}

/// Re-evaluates the current screen's guard (e.g. after logout).
fn enforce_guard(app: &mut AppState) -> Vec<UiEffect> {
    let current = app.tui.screen.route();
    let resolved = current.resolve(app.tui.is_authenticated());
    if resolved.is_redirect() {
        navigate(app, resolved.route())
    } else {
        Vec::new()
    }
}

fn apply_screen_update(app: &mut AppState, update: ScreenUpdate) -> Vec<UiEffect> {
    let ScreenUpdate {
        mut effects,
        navigate: route,
        open_overlay,
        close_overlay,
    } = update;
    if close_overlay {
        app.overlay = None;
    }
    if let Some(overlay) = open_overlay
        && app.overlay.is_none()
    {
        app.overlay = Some(overlay);
    }
    if let Some(route) = route {
        effects.extend(navigate(app, route));
    }
    effects
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    if matches!(update.transition, OverlayTransition::Close) {
        app.overlay = None;
    }
    update.effects
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        app.tui.should_quit = true;
        return vec![UiEffect::Quit];
    }

    // Try to dispatch to the active overlay
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        return apply_overlay_update(app, update);
    }

    if ctrl && app.tui.is_authenticated() {
        match key.code {
            KeyCode::Char('p') => return navigate(app, Route::Products),
            KeyCode::Char('b') => return navigate(app, Route::Cart),
            KeyCode::Char('x') => return vec![UiEffect::Logout],
            _ => {}
        }
    }

    let update = match &mut app.tui.screen {
        Screen::Login(state) => auth::handle_login_key(state, key),
        Screen::Register(state) => auth::handle_register_key(state, key),
        Screen::Products(state) => products::handle_products_key(state, key),
        Screen::Cart(state) => cart::handle_cart_key(state, key),
        Screen::Checkout(state) => checkout::handle_checkout_key(state, key),
    };
    apply_screen_update(app, update)
}

fn handle_paste(app: &mut AppState, text: &str) {
    if let Some(overlay) = app.overlay.as_mut() {
        overlay.handle_paste(text);
        return;
    }
    match &mut app.tui.screen {
        Screen::Login(state) => crate::common::paste_form(&mut state.form, state.focus, text),
        Screen::Register(state) => crate::common::paste_form(&mut state.form, state.focus, text),
        Screen::Products(state) => products::handle_products_paste(state, text),
        Screen::Cart(_) | Screen::Checkout(_) => {}
    }
}
