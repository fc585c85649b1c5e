//! Sign-up and password-reset form checks.

use crate::error::AuthError;
use serde::{Deserialize, Serialize};

/// Fields collected when creating an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    /// Name shown for the account.
    pub display_name: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
}

impl SignUpForm {
    /// Creates a form.
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// True when both password fields are filled in and identical.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        !self.password.is_empty() && self.password == self.confirm_password
    }

    /// Checks the form before it reaches the identity provider.
    ///
    /// # Errors
    /// [`AuthError::MissingEmail`] for a blank email,
    /// [`AuthError::PasswordMismatch`] when the passwords differ.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if !self.passwords_match() {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Email collected when requesting a password reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetForm {
    /// Account email.
    pub email: String,
}

impl PasswordResetForm {
    /// Creates a form.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// # Errors
    /// [`AuthError::MissingEmail`] for a blank email.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_match() {
        assert!(SignUpForm::new("A", "a@x.io", "secret1", "secret1").passwords_match());
        assert!(!SignUpForm::new("A", "a@x.io", "secret1", "secret2").passwords_match());
        assert!(!SignUpForm::new("A", "a@x.io", "", "").passwords_match());
    }

    #[test]
    fn test_sign_up_validation() {
        assert!(matches!(
            SignUpForm::new("A", "  ", "secret1", "secret1").validate(),
            Err(AuthError::MissingEmail)
        ));
        assert!(matches!(
            SignUpForm::new("A", "a@x.io", "secret1", "other").validate(),
            Err(AuthError::PasswordMismatch)
        ));
        assert!(SignUpForm::new("A", "a@x.io", "secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn test_reset_validation() {
        assert!(matches!(
            PasswordResetForm::new("").validate(),
            Err(AuthError::MissingEmail)
        ));
        assert!(PasswordResetForm::new("a@x.io").validate().is_ok());
    }
}
