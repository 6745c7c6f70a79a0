//! Session service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    session::{
        SessionError,
        models::{Actor, ActorId, Profile, Role},
    },
    storage::{self, LocalStore, keys},
};

/// Credential-checking capability. The shipped implementation accepts
/// any well-formed pair; a real verifier can be substituted without
/// touching callers.
#[automock]
pub trait Authenticator: Send + Sync {
    /// Resolve credentials to an actor identity. `name` is the chosen
    /// display name at registration; login passes `None` and the email
    /// local part is used instead.
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are rejected.
    fn authenticate<'a>(
        &self,
        email: &str,
        secret: &str,
        name: Option<&'a str>,
        role: Role,
    ) -> Result<Actor, SessionError>;
}

/// Mock authenticator: any well-formed email/secret pair succeeds, and
/// the actor id is derived from the clock and the email local part.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllAuthenticator;

impl Authenticator for AcceptAllAuthenticator {
    fn authenticate<'a>(
        &self,
        email: &str,
        secret: &str,
        name: Option<&'a str>,
        role: Role,
    ) -> Result<Actor, SessionError> {
        let email = email.trim();
        let local_part = email.split('@').next().unwrap_or_default();

        if local_part.is_empty() || !email.contains('@') {
            return Err(SessionError::Validation("email"));
        }

        if secret.trim().is_empty() {
            return Err(SessionError::Validation("secret"));
        }

        let display_name = match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => local_part.to_string(),
        };

        Ok(Actor {
            id: ActorId::derive(Timestamp::now(), email),
            email: email.to_string(),
            name: display_name,
            role,
            profile: None,
        })
    }
}

/// Session store operations. Every mutation persists the full actor
/// record in a single write, so readers never observe partial state.
#[automock]
pub trait SessionService: Send + Sync {
    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns an error when credentials are malformed or the session
    /// record cannot be persisted.
    fn register(
        &self,
        email: &str,
        secret: &str,
        name: &str,
        role: Role,
    ) -> Result<Actor, SessionError>;

    /// Sign in. The display name falls back to the email local part.
    ///
    /// # Errors
    ///
    /// Returns an error when credentials are malformed or the session
    /// record cannot be persisted.
    fn login(&self, email: &str, secret: &str, role: Role) -> Result<Actor, SessionError>;

    /// Clear the signed-in actor. The actor's partitions are kept.
    ///
    /// # Errors
    ///
    /// Returns an error when the session record cannot be removed.
    fn logout(&self) -> Result<(), SessionError>;

    /// Replace the signed-in actor's profile and persist the updated
    /// record plus the profile partition.
    ///
    /// # Errors
    ///
    /// Returns an error when nobody is signed in, the profile kind does
    /// not match the actor's role, or persisting fails.
    fn update_profile(&self, profile: Profile) -> Result<Actor, SessionError>;

    /// The signed-in actor, if any. Malformed stored data reads as
    /// logged out, never as an error.
    fn current(&self) -> Option<Actor>;
}

/// [`SessionService`] over a [`LocalStore`].
#[derive(Clone)]
pub struct LocalSessionService {
    store: Arc<dyn LocalStore>,
    authenticator: Arc<dyn Authenticator>,
}

impl LocalSessionService {
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self::with_authenticator(store, Arc::new(AcceptAllAuthenticator))
    }

    #[must_use]
    pub fn with_authenticator(
        store: Arc<dyn LocalStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    fn persist(&self, actor: &Actor) -> Result<(), SessionError> {
        storage::write(&*self.store, keys::SESSION_ACTOR, actor)?;

        Ok(())
    }
}

impl SessionService for LocalSessionService {
    fn register(
        &self,
        email: &str,
        secret: &str,
        name: &str,
        role: Role,
    ) -> Result<Actor, SessionError> {
        let actor = self
            .authenticator
            .authenticate(email, secret, Some(name), role)?;

        self.persist(&actor)?;
        debug!(actor = %actor.id, role = %actor.role, "registered");

        Ok(actor)
    }

    fn login(&self, email: &str, secret: &str, role: Role) -> Result<Actor, SessionError> {
        let actor = self.authenticator.authenticate(email, secret, None, role)?;

        self.persist(&actor)?;
        debug!(actor = %actor.id, role = %actor.role, "signed in");

        Ok(actor)
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.store.remove(keys::SESSION_ACTOR)?;
        debug!("signed out");

        Ok(())
    }

    fn update_profile(&self, profile: Profile) -> Result<Actor, SessionError> {
        let mut actor = self.current().ok_or(SessionError::NotSignedIn)?;

        if profile.role() != actor.role {
            return Err(SessionError::ProfileRoleMismatch);
        }

        actor.profile = Some(profile.clone());

        self.persist(&actor)?;

        if actor.is_farmer() {
            storage::write(
                &*self.store,
                &keys::farmer_profile(actor.id.as_str()),
                &profile,
            )?;
        }

        debug!(actor = %actor.id, "profile updated");

        Ok(actor)
    }

    fn current(&self) -> Option<Actor> {
        storage::read(&*self.store, keys::SESSION_ACTOR)
    }
}
