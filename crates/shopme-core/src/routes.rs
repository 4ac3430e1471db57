//! Client routes and the session-based route guard.
//!
//! The guard is a pure function of the requested route and whether a session
//! token is present. It never talks to the server and never caches.

use std::fmt;

/// A screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Products,
    Cart,
    Checkout,
}

/// Which sessions may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Only with a session; otherwise redirect to login.
    Authenticated,
    /// Only without a session; otherwise redirect home.
    Anonymous,
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn route(self) -> Route {
        match self {
            Navigation::Allow(route) | Navigation::Redirect(route) => route,
        }
    }

    pub fn is_redirect(self) -> bool {
        matches!(self, Navigation::Redirect(_))
    }
}

impl Route {
    /// Landing route for authenticated users.
    pub const HOME: Route = Route::Products;

    /// Parses a client path. Unknown paths fall through to home.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/cart" => Route::Cart,
            "/checkout" => Route::Checkout,
            _ => Route::HOME,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Products => "/",
            Route::Cart => "/cart",
            Route::Checkout => "/checkout",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Register => "Create Account",
            Route::Products => "Products",
            Route::Cart => "Shopping Cart",
            Route::Checkout => "Checkout",
        }
    }

    pub fn guard(self) -> Guard {
        match self {
            Route::Login | Route::Register => Guard::Anonymous,
            Route::Products | Route::Cart | Route::Checkout => Guard::Authenticated,
        }
    }

    /// Evaluates this route's guard for the given session state.
    pub fn resolve(self, authenticated: bool) -> Navigation {
        self.guard().check(self, authenticated)
    }
}

impl Guard {
    pub fn check(self, route: Route, authenticated: bool) -> Navigation {
        match (self, authenticated) {
            (Guard::Authenticated, false) => Navigation::Redirect(Route::Login),
            (Guard::Anonymous, true) => Navigation::Redirect(Route::HOME),
            _ => Navigation::Allow(route),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
