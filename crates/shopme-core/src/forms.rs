//! Typed input forms and their local validation.
//!
//! Each form knows its own fields and turns itself into a request body, or a
//! [`ValidationError`] that is shown inline without touching the network.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::api::{Category, LoginRequest, Product, ProductPayload, RegisterRequest};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A locally detected input problem. The message is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill details in all fields")]
    MissingFields,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("All fields are required.")]
    AllFieldsRequired,
    #[error("Price must be a non-negative number.")]
    InvalidPrice,
    #[error("Stock must be a non-negative whole number.")]
    InvalidStock,
    #[error("Quantity must be at least 1.")]
    QuantityBelowOne,
    #[error("Your cart is empty.")]
    EmptyCart,
}

/// A field of a form, in focus order.
pub trait FormField: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Masked on screen.
    fn is_secret(self) -> bool {
        false
    }

    /// Next field in focus order (wraps).
    #[must_use]
    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in focus order (wraps).
    #[must_use]
    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Text access to a form's fields.
pub trait Form {
    type Field: FormField;

    /// The text of a field, or `None` for fields that are not typed into.
    fn text(&self, field: Self::Field) -> Option<&str>;

    fn text_mut(&mut self, field: Self::Field) -> Option<&mut String>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl FormField for LoginField {
    const ALL: &'static [Self] = &[LoginField::Email, LoginField::Password];

    fn label(self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    fn is_secret(self) -> bool {
        matches!(self, LoginField::Password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] if either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

impl Form for LoginForm {
    type Field = LoginField;

    fn text(&self, field: LoginField) -> Option<&str> {
        Some(match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        })
    }

    fn text_mut(&mut self, field: LoginField) -> Option<&mut String> {
        Some(match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        })
    }
}

// ============================================================================
// Register
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Password,
}

impl FormField for RegisterField {
    const ALL: &'static [Self] = &[
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Password,
    ];

    fn label(self) -> &'static str {
        match self {
            RegisterField::Name => "Full name",
            RegisterField::Email => "Email",
            RegisterField::Password => "Password",
        }
    }

    fn is_secret(self) -> bool {
        matches!(self, RegisterField::Password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] for blank fields and
    /// [`ValidationError::PasswordTooShort`] for a short password.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if blank(&self.name) || blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

impl Form for RegisterForm {
    type Field = RegisterField;

    fn text(&self, field: RegisterField) -> Option<&str> {
        Some(match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
        })
    }

    fn text_mut(&mut self, field: RegisterField) -> Option<&mut String> {
        Some(match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
        })
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    ImageUrl,
    Category,
    Stock,
}

impl FormField for ProductField {
    const ALL: &'static [Self] = &[
        ProductField::Name,
        ProductField::Price,
        ProductField::ImageUrl,
        ProductField::Category,
        ProductField::Stock,
    ];

    fn label(self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Price => "Price",
            ProductField::ImageUrl => "Image URL",
            ProductField::Category => "Category",
            ProductField::Stock => "Stock",
        }
    }
}

/// Create/edit product form. Category is picked from the fixed set; an
/// edited product outside that set keeps its category until one is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub category: Category,
    pub stock: String,
}

impl ProductForm {
    /// Prefills the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.normalize().to_string(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
        }
    }

    /// # Errors
    /// Returns [`ValidationError::AllFieldsRequired`] for blank fields, or
    /// [`ValidationError::InvalidPrice`] / [`ValidationError::InvalidStock`]
    /// for numbers that do not parse or are negative.
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        if blank(&self.name) || blank(&self.price) || blank(&self.image_url) || blank(&self.stock)
        {
            return Err(ValidationError::AllFieldsRequired);
        }

        let price =
            Decimal::from_str(self.price.trim()).map_err(|_| ValidationError::InvalidPrice)?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ValidationError::InvalidPrice);
        }
        let stock: u32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidStock)?;

        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            price,
            image_url: self.image_url.trim().to_string(),
            category: self.category.clone(),
            stock,
        })
    }
}

impl Form for ProductForm {
    type Field = ProductField;

    fn text(&self, field: ProductField) -> Option<&str> {
        match field {
            ProductField::Name => Some(&self.name),
            ProductField::Price => Some(&self.price),
            ProductField::ImageUrl => Some(&self.image_url),
            ProductField::Category => None,
            ProductField::Stock => Some(&self.stock),
        }
    }

    fn text_mut(&mut self, field: ProductField) -> Option<&mut String> {
        match field {
            ProductField::Name => Some(&mut self.name),
            ProductField::Price => Some(&mut self.price),
            ProductField::ImageUrl => Some(&mut self.image_url),
            ProductField::Category => None,
            ProductField::Stock => Some(&mut self.stock),
        }
    }
}
