//! Session-aware authentication workflow.

use crate::error::AuthError;
use crate::forms::{PasswordResetForm, SignUpForm};
use crate::identity::{IdentitySubscription, UserIdentity};
use crate::provider::IdentityProvider;
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Drives an [`IdentityProvider`] and keeps the [`SessionStore`] in step
/// with it.
pub struct AuthService<P: IdentityProvider> {
    provider: Arc<P>,
    store: SessionStore,
}

impl<P: IdentityProvider> AuthService<P> {
    /// Creates a service over `provider`, persisting sessions to `store`.
    pub fn new(provider: Arc<P>, store: SessionStore) -> Self {
        Self { provider, store }
    }

    /// The underlying provider.
    #[must_use]
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Restores the identity saved by an earlier run.
    ///
    /// A corrupt session file is discarded and treated as signed out.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be read or removed.
    pub async fn restore(&self) -> Result<Option<UserIdentity>, AuthError> {
        match self.store.load().await {
            Ok(identity) => Ok(identity),
            Err(crate::error::SessionError::Serialization(e)) => {
                warn!(error = %e, "Discarding unreadable session");
                self.store.clear().await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Signs in and persists the session.
    ///
    /// # Errors
    /// Returns the provider's error, or a session error if saving fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let identity = self.provider.sign_in(email, password).await?;
        self.store.save(&identity).await?;
        Ok(identity)
    }

    /// Validates `form`, creates the account and persists the session.
    ///
    /// # Errors
    /// Returns a validation error, the provider's error, or a session error.
    pub async fn register(&self, form: &SignUpForm) -> Result<UserIdentity, AuthError> {
        form.validate()?;
        let identity = self
            .provider
            .sign_up(&form.email, &form.password, &form.display_name)
            .await?;
        self.store.save(&identity).await?;
        info!(user = %identity.id, "Registered");
        Ok(identity)
    }

    /// Signs out and forgets the persisted session.
    ///
    /// # Errors
    /// Returns the provider's error, or a session error if clearing fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.store.clear().await?;
        Ok(())
    }

    /// Validates `form` and requests a password reset email.
    ///
    /// # Errors
    /// Returns a validation error or the provider's error.
    pub async fn reset_password(&self, form: &PasswordResetForm) -> Result<(), AuthError> {
        form.validate()?;
        self.provider.send_password_reset(form.email.trim()).await
    }

    /// Subscribes to identity changes from the provider.
    pub fn subscribe(&self) -> IdentitySubscription {
        self.provider.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthAction, user_message};
    use crate::provider::InMemoryIdentityProvider;
    use tempfile::{TempDir, tempdir};

    fn service() -> (AuthService<InMemoryIdentityProvider>, TempDir) {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (
            AuthService::new(Arc::new(InMemoryIdentityProvider::new()), store),
            dir,
        )
    }

    #[tokio::test]
    async fn test_register_persists_session() {
        let (auth, _dir) = service();
        let form = SignUpForm::new("Gus", "gus@example.com", "secret1", "secret1");

        let identity = auth.register(&form).await.unwrap();
        assert_eq!(auth.restore().await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_register_mismatch_never_reaches_provider() {
        let (auth, _dir) = service();
        let form = SignUpForm::new("Gus", "gus@example.com", "secret1", "secret2");

        let err = auth.register(&form).await.unwrap_err();
        assert_eq!(user_message(AuthAction::Register, &err), "Passwords do not match");
        assert_eq!(auth.provider().account_count().await, 0);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (auth, _dir) = service();
        let form = SignUpForm::new("Hana", "hana@example.com", "secret1", "secret1");
        auth.register(&form).await.unwrap();

        auth.logout().await.unwrap();
        assert_eq!(auth.restore().await.unwrap(), None);
        assert_eq!(auth.provider().current_identity(), None);

        let identity = auth.login("hana@example.com", "secret1").await.unwrap();
        assert_eq!(identity.display_name, "Hana");
        assert_eq!(auth.restore().await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_failed_login_message() {
        let (auth, _dir) = service();
        let err = auth.login("ivan@example.com", "secret1").await.unwrap_err();
        assert_eq!(
            user_message(AuthAction::Login, &err),
            "Invalid email or password"
        );
        assert_eq!(auth.restore().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reset_password_messages() {
        let (auth, _dir) = service();

        let err = auth
            .reset_password(&PasswordResetForm::new(" "))
            .await
            .unwrap_err();
        assert_eq!(
            user_message(AuthAction::ResetPassword, &err),
            "Please enter your email"
        );

        let err = auth
            .reset_password(&PasswordResetForm::new("nobody@example.com"))
            .await
            .unwrap_err();
        assert_eq!(
            user_message(AuthAction::ResetPassword, &err),
            "Failed to send password reset email"
        );
    }

    #[tokio::test]
    async fn test_corrupt_session_restores_as_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, b"{").await.unwrap();
        let auth = AuthService::new(
            Arc::new(InMemoryIdentityProvider::new()),
            SessionStore::new(&path),
        );

        assert_eq!(auth.restore().await.unwrap(), None);
        assert!(!path.exists());
    }
}
