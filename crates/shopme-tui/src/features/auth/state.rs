use shopme_core::forms::{LoginField, LoginForm, RegisterField, RegisterForm};

use crate::common::{TaskId, TaskState};

/// Sign-in screen.
#[derive(Debug)]
pub struct LoginState {
    pub visit: TaskId,
    pub form: LoginForm,
    pub focus: LoginField,
    /// Inline error under the form.
    pub error: Option<String>,
    pub submit: TaskState,
}

impl LoginState {
    pub fn new(visit: TaskId) -> Self {
        Self {
            visit,
            form: LoginForm::default(),
            focus: LoginField::Email,
            error: None,
            submit: TaskState::default(),
        }
    }
}

/// Account creation screen.
#[derive(Debug)]
pub struct RegisterState {
    pub visit: TaskId,
    pub form: RegisterForm,
    pub focus: RegisterField,
    pub error: Option<String>,
    pub submit: TaskState,
}

impl RegisterState {
    pub fn new(visit: TaskId) -> Self {
        Self {
            visit,
            form: RegisterForm::default(),
            focus: RegisterField::Name,
            error: None,
            submit: TaskState::default(),
        }
    }
}
