//! Identity provider capability and an in-memory implementation.

use crate::error::AuthError;
use crate::identity::{IdentityChannel, IdentitySubscription, UserIdentity};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Minimum password length accepted by [`InMemoryIdentityProvider`].
pub const MIN_PASSWORD_LEN: usize = 6;

/// An external identity provider.
///
/// Passed explicitly to whatever needs authentication; there is no global
/// provider instance.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError>;

    /// Creates an account and signs it in.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserIdentity, AuthError>;

    /// Signs the current user out.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Sends a password reset email.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Returns the signed-in user, if any.
    fn current_identity(&self) -> Option<UserIdentity>;

    /// Subscribes to identity changes. Dropping the handle unsubscribes.
    fn subscribe(&self) -> IdentitySubscription;
}

#[derive(Debug, Clone)]
struct Account {
    // Plain text: this provider only lives in process memory.
    password: String,
    identity: UserIdentity,
}

/// Identity provider keeping accounts in memory.
///
/// Applies the usual hosted-provider rules: emails need an `@`, passwords at
/// least [`MIN_PASSWORD_LEN`] characters, one account per email.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    reset_requests: RwLock<Vec<String>>,
    channel: IdentityChannel,
}

impl InMemoryIdentityProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails that password resets were sent to, oldest first.
    pub async fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.read().await.clone()
    }

    /// Number of registered accounts.
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthError::InvalidEmail),
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let key = normalize_email(email)?;
        let accounts = self.accounts.read().await;
        let account = accounts.get(&key).ok_or(AuthError::UserNotFound)?;

        if account.password != password {
            warn!(email = %key, "Rejected sign-in");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = account.identity.clone();
        drop(accounts);

        info!(user = %identity.id, "Signed in");
        self.channel.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserIdentity, AuthError> {
        let key = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min_len: MIN_PASSWORD_LEN,
            });
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let identity = UserIdentity::new(
            Uuid::new_v4().to_string(),
            key.clone(),
            display_name.trim(),
        );
        accounts.insert(
            key,
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        drop(accounts);

        info!(user = %identity.id, "Account created");
        self.channel.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        debug!("Signed out");
        self.channel.publish(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let key = normalize_email(email)?;
        if !self.accounts.read().await.contains_key(&key) {
            return Err(AuthError::UserNotFound);
        }

        info!(email = %key, "Password reset requested");
        self.reset_requests.write().await.push(key);
        Ok(())
    }

    fn current_identity(&self) -> Option<UserIdentity> {
        self.channel.current()
    }

    fn subscribe(&self) -> IdentitySubscription {
        self.channel.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let provider = InMemoryIdentityProvider::new();
        let created = provider
            .sign_up("Alice@Example.com", "secret1", "Alice")
            .await
            .unwrap();

        assert_eq!(created.email, "alice@example.com");
        assert_eq!(created.display_name, "Alice");
        assert_eq!(provider.current_identity(), Some(created.clone()));

        provider.sign_out().await.unwrap();
        assert_eq!(provider.current_identity(), None);

        let signed_in = provider.sign_in(" alice@example.com ", "secret1").await.unwrap();
        assert_eq!(signed_in, created);
    }

    #[tokio::test]
    async fn test_sign_up_rules() {
        let provider = InMemoryIdentityProvider::new();

        assert!(matches!(
            provider.sign_up("no-at-sign", "secret1", "").await,
            Err(AuthError::InvalidEmail)
        ));
        assert!(matches!(
            provider.sign_up("bob@example.com", "123", "").await,
            Err(AuthError::WeakPassword { min_len: 6 })
        ));

        provider.sign_up("bob@example.com", "secret1", "Bob").await.unwrap();
        assert!(matches!(
            provider.sign_up("BOB@example.com", "secret2", "Bobby").await,
            Err(AuthError::EmailAlreadyInUse)
        ));
        assert_eq!(provider.account_count().await, 1);
    }

    #[tokio::test]
    async fn test_sign_in_failures() {
        let provider = InMemoryIdentityProvider::new();
        provider.sign_up("carol@example.com", "secret1", "Carol").await.unwrap();
        provider.sign_out().await.unwrap();

        assert!(matches!(
            provider.sign_in("carol@example.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            provider.sign_in("dave@example.com", "secret1").await,
            Err(AuthError::UserNotFound)
        ));
        assert_eq!(provider.current_identity(), None);
    }

    #[tokio::test]
    async fn test_password_reset() {
        let provider = InMemoryIdentityProvider::new();
        provider.sign_up("erin@example.com", "secret1", "Erin").await.unwrap();

        provider.send_password_reset("erin@example.com").await.unwrap();
        assert!(matches!(
            provider.send_password_reset("nobody@example.com").await,
            Err(AuthError::UserNotFound)
        ));
        assert_eq!(provider.reset_requests().await, vec!["erin@example.com"]);
    }

    #[tokio::test]
    async fn test_subscription_observes_sign_in_and_out() {
        let provider = InMemoryIdentityProvider::new();
        let mut sub = provider.subscribe();

        let identity = provider.sign_up("fay@example.com", "secret1", "Fay").await.unwrap();
        assert_eq!(sub.changed().await, Some(Some(identity)));

        provider.sign_out().await.unwrap();
        assert_eq!(sub.changed().await, Some(None));
    }
}
