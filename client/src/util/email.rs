//! Email field validation for the magic-link form.
//!
//! DESIGN
//! ======
//! Rules are declared on [`EmailFormInput`] with `validator` derives and surfaced
//! through [`validate_email`], which collapses the field's errors into a single
//! inline message. Format is reported ahead of length so the user only ever
//! sees one message per field.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationErrors};

/// Address shape accepted by the form: a local part without leading, trailing
/// or doubled dots, then a dotted domain ending in a TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[A-Z0-9_'+-]+\.)*[A-Z0-9_'+-]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Form input for the magic-link request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct EmailFormInput {
    #[validate(
        regex(path = "*EMAIL_REGEX", message = "Invalid email"),
        length(min = 2, message = "Email must be at least 2 characters")
    )]
    pub email: String,
}

/// Reasons an email field is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid email")]
    InvalidFormat,
    #[error("Email must be at least 2 characters")]
    TooShort,
}

/// An email address that passed [`validate_email`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidEmail(String);

impl ValidEmail {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a raw email field value.
///
/// The value is checked as typed; no trimming or case folding is applied.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`] when the value does not parse as
/// an email address, otherwise [`ValidationError::TooShort`] when it is
/// shorter than two characters.
pub fn validate_email(raw: &str) -> Result<ValidEmail, ValidationError> {
    let form = EmailFormInput { email: raw.to_owned() };
    match form.validate() {
        Ok(()) => Ok(ValidEmail(form.email)),
        Err(errors) => Err(first_email_error(&errors)),
    }
}

fn first_email_error(errors: &ValidationErrors) -> ValidationError {
    let field_errors = errors.field_errors();
    let codes = field_errors
        .get("email")
        .map(|list| list.iter().map(|e| &*e.code).collect::<Vec<&str>>())
        .unwrap_or_default();

    if codes.contains(&"length") && !codes.contains(&"regex") {
        ValidationError::TooShort
    } else {
        ValidationError::InvalidFormat
    }
}
