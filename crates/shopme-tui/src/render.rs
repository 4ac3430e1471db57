//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::auth::{render_login, render_register};
use crate::cart::render_cart;
use crate::checkout::render_checkout;
use crate::navbar::{NAVBAR_HEIGHT, render_navbar};
use crate::overlays::OverlayExt;
use crate::products::render_products;
use crate::state::{AppState, Screen};
use crate::toasts::render_toasts;

/// Spinner frames for loading indicators.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];

    let body = match &state.screen {
        Screen::Login(login) => {
            render_login(frame, area, login);
            area
        }
        Screen::Register(register) => {
            render_register(frame, area, register);
            area
        }
        screen => {
            let [navbar, body] = split_navbar(area);
            render_navbar(frame, navbar, screen.route());
            match screen {
                Screen::Products(products) => render_products(frame, body, products, spinner),
                Screen::Cart(cart) => render_cart(frame, body, cart, spinner),
                Screen::Checkout(checkout) => render_checkout(frame, body, checkout, spinner),
                Screen::Login(_) | Screen::Register(_) => {}
            }
            body
        }
    };

    app.overlay.render(frame, body);
    render_toasts(frame, body, &state.toasts);
}

fn split_navbar(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(NAVBAR_HEIGHT), Constraint::Min(1)])
        .split(area);
    [chunks[0], chunks[1]]
}
