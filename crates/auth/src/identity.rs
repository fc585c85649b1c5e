//! User identities and identity-change subscriptions.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Provider-assigned user ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Name shown in the interface.
    pub display_name: String,
}

impl UserIdentity {
    /// Creates a new identity.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Publisher side of the "current identity changed" event.
#[derive(Debug)]
pub struct IdentityChannel {
    tx: watch::Sender<Option<UserIdentity>>,
}

impl IdentityChannel {
    /// Creates a channel with no signed-in user.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Publishes a new current identity, notifying subscribers if it changed.
    pub fn publish(&self, identity: Option<UserIdentity>) {
        self.tx.send_if_modified(|current| {
            if *current == identity {
                false
            } else {
                *current = identity;
                true
            }
        });
    }

    /// Returns the current identity.
    #[must_use]
    pub fn current(&self) -> Option<UserIdentity> {
        self.tx.borrow().clone()
    }

    /// Opens a new subscription.
    #[must_use]
    pub fn subscribe(&self) -> IdentitySubscription {
        let subscription = IdentitySubscription {
            rx: self.tx.subscribe(),
        };
        debug!(subscribers = self.subscriber_count(), "Identity subscription opened");
        subscription
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for IdentityChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription to identity changes.
///
/// Holding the value keeps the subscription open; dropping it unsubscribes.
#[derive(Debug)]
pub struct IdentitySubscription {
    rx: watch::Receiver<Option<UserIdentity>>,
}

impl IdentitySubscription {
    /// Returns the identity as last seen by this subscription.
    #[must_use]
    pub fn current(&self) -> Option<UserIdentity> {
        self.rx.borrow().clone()
    }

    /// Waits for the next identity change and returns the new identity.
    ///
    /// Returns `None` once the provider has been dropped.
    pub async fn changed(&mut self) -> Option<Option<UserIdentity>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Closes the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for IdentitySubscription {
    fn drop(&mut self) {
        debug!("Identity subscription closed");
    }
}
