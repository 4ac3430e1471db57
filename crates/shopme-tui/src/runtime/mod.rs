//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (one API call each)

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use shopme_core::api::ApiClient;
use shopme_core::notify::Notifier;
use shopme_core::routes::Route;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame cadence while something is loading or a toast is visible.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    api: ApiClient,
    notifier: Notifier,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and mounts its toast board on `notifier`.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(api: ApiClient, notifier: Notifier) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(Arc::clone(api.session()), notifier.mount());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            api,
            notifier,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        self.dispatch_event(UiEvent::Navigate(Route::HOME));

        let mut dirty = true; // Start dirty to ensure initial render
        while !self.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render - this caps frame rate at tick cadence
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.tui.is_busy() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let _ = tx.send(f(api).await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::Notify { message, severity } => {
                self.notifier.notify(message, severity);
                self.state.tui.toasts.receive();
            }

            // Auth
            UiEffect::Login { visit, request } => {
                self.spawn_effect(move |api| handlers::login(api, visit, request));
            }
            UiEffect::Register { visit, request } => {
                self.spawn_effect(move |api| handlers::register(api, visit, request));
            }
            UiEffect::Logout => {
                if let Err(e) = self.api.session().logout() {
                    tracing::warn!(error = %e, "failed to remove persisted session");
                }
                self.dispatch_event(UiEvent::Auth(AuthUiEvent::LoggedOut));
            }

            // Catalog
            UiEffect::LoadProducts { visit } => {
                self.spawn_effect(move |api| handlers::load_products(api, visit));
            }
            UiEffect::SaveProduct { visit, id, payload } => {
                self.spawn_effect(move |api| handlers::save_product(api, visit, id, payload));
            }
            UiEffect::DeleteProduct { visit, id } => {
                self.spawn_effect(move |api| handlers::delete_product(api, visit, id));
            }
            UiEffect::AddToCart { visit, id } => {
                self.spawn_effect(move |api| handlers::add_to_cart(api, visit, id));
            }

            // Cart
            UiEffect::LoadCart { visit } => {
                self.spawn_effect(move |api| handlers::load_cart(api, visit));
            }
            UiEffect::UpdateCartItem {
                visit,
                id,
                quantity,
            } => {
                self.spawn_effect(move |api| handlers::update_cart_item(api, visit, id, quantity));
            }
            UiEffect::RemoveCartItem { visit, id } => {
                self.spawn_effect(move |api| handlers::remove_cart_item(api, visit, id));
            }

            // Checkout
            UiEffect::LoadCheckout { visit } => {
                self.spawn_effect(move |api| handlers::load_checkout(api, visit));
            }
            UiEffect::PlaceOrder { visit } => {
                self.spawn_effect(move |api| handlers::place_order(api, visit));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
