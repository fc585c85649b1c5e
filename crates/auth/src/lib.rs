//! # Fin Planner Auth
//!
//! Identity-provider boundary: the provider capability, identity change
//! subscriptions, form checks and a JSON-file session store.

/// Authentication errors and user-facing messages.
pub mod error;
/// Sign-up and password-reset form checks.
pub mod forms;
/// User identity and change notifications.
pub mod identity;
/// Identity provider trait and in-memory provider.
pub mod provider;
/// Session-aware authentication workflow.
pub mod service;
/// Persisted session storage.
pub mod session;

pub use error::{AuthAction, AuthError, SessionError, user_message};
pub use forms::{PasswordResetForm, SignUpForm};
pub use identity::{IdentityChannel, IdentitySubscription, UserIdentity};
pub use provider::{IdentityProvider, InMemoryIdentityProvider, MIN_PASSWORD_LEN};
pub use service::AuthService;
pub use session::SessionStore;
