//! Authentication errors.

use thiserror::Error;

/// Errors raised by identity providers and the session layer.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair not recognised.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Email address is not well formed.
    #[error("Invalid email address")]
    InvalidEmail,
    /// Password is too short.
    #[error("Password should be at least {min_len} characters")]
    WeakPassword {
        /// Minimum accepted length.
        min_len: usize,
    },
    /// An account already exists for the email.
    #[error("Email already in use")]
    EmailAlreadyInUse,
    /// No account exists for the email.
    #[error("No user found for this email")]
    UserNotFound,
    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Email field left empty.
    #[error("Please enter your email")]
    MissingEmail,
    /// Persisting or restoring the session failed.
    #[error("Session storage failed: {0}")]
    Session(#[from] SessionError),
}

/// Errors raised by the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The session file does not hold a valid identity.
    #[error("Invalid session data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Operation an authentication error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Signing in.
    Login,
    /// Creating an account.
    Register,
    /// Signing out.
    Logout,
    /// Requesting a password reset email.
    ResetPassword,
}

/// Message shown to the user when `action` fails with `error`.
///
/// Sign-in failures never reveal which part of the credentials was wrong.
#[must_use]
pub fn user_message(action: AuthAction, error: &AuthError) -> String {
    match (action, error) {
        (AuthAction::Login, _) => "Invalid email or password".to_string(),
        (AuthAction::ResetPassword, AuthError::MissingEmail) => error.to_string(),
        (AuthAction::ResetPassword, _) => "Failed to send password reset email".to_string(),
        (AuthAction::Register | AuthAction::Logout, _) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_messages_are_uniform() {
        assert_eq!(
            user_message(AuthAction::Login, &AuthError::UserNotFound),
            "Invalid email or password"
        );
        assert_eq!(
            user_message(AuthAction::Login, &AuthError::InvalidEmail),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_reset_messages() {
        assert_eq!(
            user_message(AuthAction::ResetPassword, &AuthError::MissingEmail),
            "Please enter your email"
        );
        assert_eq!(
            user_message(AuthAction::ResetPassword, &AuthError::UserNotFound),
            "Failed to send password reset email"
        );
    }

    #[test]
    fn test_register_messages_pass_through() {
        assert_eq!(
            user_message(AuthAction::Register, &AuthError::WeakPassword { min_len: 6 }),
            "Password should be at least 6 characters"
        );
        assert_eq!(
            user_message(AuthAction::Register, &AuthError::PasswordMismatch),
            "Passwords do not match"
        );
    }
}
