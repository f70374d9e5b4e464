//! Credential types and pre-network form validation.
//!
//! Validation runs synchronously before any network traffic. A submission
//! that fails here never reaches the signup endpoint or the session
//! provider.

use serde::Serialize;

/// Which branch an auth form submission takes. Fixed when the form is
/// constructed, never changed by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignUp,
    Login,
}

/// Email and password entered into the form. Built fresh for each
/// submission attempt and dropped when the attempt resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validity derived from [`Credentials`] on each submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub email_invalid: bool,
    pub password_invalid: bool,
}

impl FieldValidity {
    pub fn is_valid(&self) -> bool {
        !self.email_invalid && !self.password_invalid
    }
}

/// Validate credentials before any network call.
///
/// Email is checked first; when it fails the password is not evaluated
/// this attempt, so at most one flag is set per call.
pub fn validate(credentials: &Credentials) -> FieldValidity {
    let mut validity = FieldValidity::default();

    if credentials.email.is_empty() || !credentials.email.contains('@') {
        validity.email_invalid = true;
        return validity;
    }

    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        validity.password_invalid = true;
    }

    validity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_invalid() {
        let validity = validate(&Credentials::new("", "longenough"));
        assert!(validity.email_invalid);
        assert!(!validity.is_valid());
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let validity = validate(&Credentials::new("someone.example.com", "longenough"));
        assert!(validity.email_invalid);
    }

    #[test]
    fn short_password_is_invalid() {
        let validity = validate(&Credentials::new("someone@example.com", "short"));
        assert!(!validity.email_invalid);
        assert!(validity.password_invalid);
    }

    #[test]
    fn six_character_password_is_accepted() {
        let validity = validate(&Credentials::new("someone@example.com", "sixsix"));
        assert!(validity.is_valid());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Six multibyte characters pass even though the byte count differs.
        let validity = validate(&Credentials::new("someone@example.com", "åéîøüñ"));
        assert!(validity.is_valid());
    }

    #[test]
    fn failed_email_short_circuits_password_check() {
        let validity = validate(&Credentials::new("not-an-email", "x"));
        assert!(validity.email_invalid);
        assert!(!validity.password_invalid);
    }
}
