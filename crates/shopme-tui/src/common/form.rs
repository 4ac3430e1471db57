use crossterm::event::{KeyCode, KeyEvent};
use shopme_core::forms::{Form, FormField};

use super::text::{edit_field, paste_into};

/// Applies a key to a form: Tab/arrows move focus, everything else edits
/// the focused text field. Returns true if the key was consumed.
pub fn edit_form<F: Form>(form: &mut F, focus: &mut F::Field, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            *focus = focus.next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            *focus = focus.prev();
            true
        }
        _ => form
            .text_mut(*focus)
            .is_some_and(|value| edit_field(value, key)),
    }
}

/// Pastes into the focused text field, if it is one.
pub fn paste_form<F: Form>(form: &mut F, focus: F::Field, pasted: &str) {
    if let Some(value) = form.text_mut(focus) {
        paste_into(value, pasted);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use shopme_core::forms::{LoginField, LoginForm};

    use super::*;

    #[test]
    fn test_tab_moves_focus_and_typing_goes_to_focused_field() {
        let mut form = LoginForm::default();
        let mut focus = LoginField::Email;

        edit_form(&mut form, &mut focus, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        edit_form(&mut form, &mut focus, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        edit_form(&mut form, &mut focus, KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));

        assert_eq!(form.email, "a");
        assert_eq!(form.password, "p");
        assert_eq!(focus, LoginField::Password);
    }

    #[test]
    fn test_paste_targets_focus() {
        let mut form = LoginForm::default();
        paste_form(&mut form, LoginField::Password, "secret1");
        assert_eq!(form.password, "secret1");
    }
}
