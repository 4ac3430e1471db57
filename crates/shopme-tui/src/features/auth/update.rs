//! Auth feature reducer.
//!
//! Handles sign-in/sign-up key input and the results of the auth calls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopme_core::routes::Route;

use super::state::{LoginState, RegisterState};
use crate::common::edit_form;
use crate::effects::UiEffect;
use crate::events::AuthUiEvent;
use crate::state::Screen;
use crate::update::ScreenUpdate;

const LOGIN_OK: &str = "Logged in successfully";
const LOGIN_INVALID: &str = "Invalid email or password.";
const LOGIN_FAILED: &str = "Login failed.";
const REGISTER_OK: &str = "Account created! Please sign in.";
const REGISTER_INVALID: &str = "Registration failed. Email may already exist";
const REGISTER_FAILED: &str = "Registration failed.";

pub fn handle_login_key(state: &mut LoginState, key: KeyEvent) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => ScreenUpdate::navigate(Route::Register),
        KeyCode::Enter => submit_login(state),
        _ => {
            edit_form(&mut state.form, &mut state.focus, key);
            ScreenUpdate::none()
        }
    }
}

fn submit_login(state: &mut LoginState) -> ScreenUpdate {
    if state.submit.is_running() {
        return ScreenUpdate::none();
    }
    match state.form.validate() {
        Err(e) => {
            state.error = Some(e.to_string());
            ScreenUpdate::none()
        }
        Ok(request) => {
            state.error = None;
            state.submit.try_start();
            ScreenUpdate::effects(vec![UiEffect::Login {
                visit: state.visit,
                request,
            }])
        }
    }
}

pub fn handle_register_key(state: &mut RegisterState, key: KeyEvent) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('l') if ctrl => ScreenUpdate::navigate(Route::Login),
        KeyCode::Enter => submit_register(state),
        _ => {
            edit_form(&mut state.form, &mut state.focus, key);
            ScreenUpdate::none()
        }
    }
}

fn submit_register(state: &mut RegisterState) -> ScreenUpdate {
    if state.submit.is_running() {
        return ScreenUpdate::none();
    }
    match state.form.validate() {
        Err(e) => {
            state.error = Some(e.to_string());
            ScreenUpdate::none()
        }
        Ok(request) => {
            state.error = None;
            state.submit.try_start();
            ScreenUpdate::effects(vec![UiEffect::Register {
                visit: state.visit,
                request,
            }])
        }
    }
}

/// Applies an auth result.
///
/// Toasts are published even when the issuing screen is gone; inline state
/// is only touched for the live visit.
pub fn handle_auth_event(screen: &mut Screen, event: AuthUiEvent) -> ScreenUpdate {
    match event {
        AuthUiEvent::LoginFinished { visit, result } => {
            if let Screen::Login(state) = screen
                && state.visit == visit
            {
                state.submit.finish();
                if result.is_err() {
                    state.error = Some(LOGIN_INVALID.to_string());
                }
            }
            match result {
                Ok(()) => ScreenUpdate::effects(vec![UiEffect::success(LOGIN_OK)])
                    .and_navigate(Route::HOME),
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error(LOGIN_FAILED)]),
            }
        }
        AuthUiEvent::RegisterFinished { visit, result } => {
            let live = matches!(screen, Screen::Register(state) if state.visit == visit);
            if let Screen::Register(state) = screen
                && live
            {
                state.submit.finish();
                if result.is_err() {
                    state.error = Some(REGISTER_INVALID.to_string());
                }
            }
            match result {
                Ok(()) => {
                    let update = ScreenUpdate::effects(vec![UiEffect::success(REGISTER_OK)]);
                    if live {
                        update.and_navigate(Route::Login)
                    } else {
                        update
                    }
                }
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error(REGISTER_FAILED)]),
            }
        }
        AuthUiEvent::LoggedOut => ScreenUpdate::navigate(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use shopme_core::notify::Severity;

    use super::*;
    use crate::common::TaskId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut LoginState, text: &str) {
        for c in text.chars() {
            handle_login_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_empty_login_sets_inline_error_without_request() {
        let mut state = LoginState::new(TaskId(1));
        let update = handle_login_key(&mut state, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Please fill details in all fields")
        );
    }

    #[test]
    fn test_login_submits_once_while_in_flight() {
        let mut state = LoginState::new(TaskId(1));
        type_text(&mut state, "a@b.com");
        handle_login_key(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "secret1");

        let first = handle_login_key(&mut state, key(KeyCode::Enter));
        assert_eq!(first.effects.len(), 1);
        assert!(matches!(
            &first.effects[0],
            UiEffect::Login { request, .. } if request.email == "a@b.com" && request.password == "secret1"
        ));

        let second = handle_login_key(&mut state, key(KeyCode::Enter));
        assert!(second.effects.is_empty());
    }

    #[test]
    fn test_login_failure_sets_inline_error_and_toast() {
        let mut screen = Screen::Login(LoginState::new(TaskId(4)));
        if let Screen::Login(state) = &mut screen {
            state.submit.try_start();
        }

        let update = handle_auth_event(
            &mut screen,
            AuthUiEvent::LoginFinished {
                visit: TaskId(4),
                result: Err("401".into()),
            },
        );

        let Screen::Login(state) = &screen else {
            panic!("expected login screen");
        };
        assert!(!state.submit.is_running());
        assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
        assert_eq!(
            update.effects,
            vec![UiEffect::Notify {
                message: "Login failed.".into(),
                severity: Severity::Error
            }]
        );
        assert!(update.navigate.is_none());
    }

    #[test]
    fn test_login_success_goes_home() {
        let mut screen = Screen::Login(LoginState::new(TaskId(4)));
        let update = handle_auth_event(
            &mut screen,
            AuthUiEvent::LoginFinished {
                visit: TaskId(4),
                result: Ok(()),
            },
        );
        assert_eq!(update.navigate, Some(Route::HOME));
        assert_eq!(update.effects, vec![UiEffect::success("Logged in successfully")]);
    }

    #[test]
    fn test_register_short_password_is_local() {
        let mut state = RegisterState::new(TaskId(2));
        state.form.name = "Ada".into();
        state.form.email = "a@b.com".into();
        state.form.password = "abc".into();

        let update = handle_register_key(&mut state, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn test_register_success_goes_to_login() {
        let mut screen = Screen::Register(RegisterState::new(TaskId(2)));
        let update = handle_auth_event(
            &mut screen,
            AuthUiEvent::RegisterFinished {
                visit: TaskId(2),
                result: Ok(()),
            },
        );
        assert_eq!(update.navigate, Some(Route::Login));
        assert_eq!(
            update.effects,
            vec![UiEffect::success("Account created! Please sign in.")]
        );
    }

    #[test]
    fn test_register_failure_unlocks_form_with_inline_error_and_toast() {
        let mut state = RegisterState::new(TaskId(2));
        state.form.name = "Ada".into();
        state.form.email = "a@b.com".into();
        state.form.password = "secret1".into();
        let submitted = handle_register_key(&mut state, key(KeyCode::Enter));
        assert_eq!(submitted.effects.len(), 1);
        assert!(state.submit.is_running());

        let mut screen = Screen::Register(state);
        let update = handle_auth_event(
            &mut screen,
            AuthUiEvent::RegisterFinished {
                visit: TaskId(2),
                result: Err("409".into()),
            },
        );

        let Screen::Register(state) = &screen else {
            panic!("expected register screen");
        };
        assert!(!state.submit.is_running());
        assert_eq!(
            state.error.as_deref(),
            Some("Registration failed. Email may already exist")
        );
        assert_eq!(update.effects, vec![UiEffect::error("Registration failed.")]);
        assert!(update.navigate.is_none());
    }

    #[test]
    fn test_ctrl_shortcuts_switch_auth_screens() {
        let mut login = LoginState::new(TaskId(1));
        let update = handle_login_key(
            &mut login,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(update.navigate, Some(Route::Register));
        assert!(login.form.email.is_empty());

        let mut register = RegisterState::new(TaskId(2));
        let update = handle_register_key(
            &mut register,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
        );
        assert_eq!(update.navigate, Some(Route::Login));
    }
}
