//! Session store
//!
//! Holds the identity of the signed-in actor. Mutating operations
//! persist the full actor record under a fixed key; loads fail open to
//! the logged-out state. There is no ambient current-actor singleton:
//! callers fetch the [`models::Actor`] and pass it to every operation
//! that needs an identity.

mod errors;
pub mod models;
mod service;

pub use errors::SessionError;
pub use service::{
    AcceptAllAuthenticator, Authenticator, LocalSessionService, MockAuthenticator,
    MockSessionService, SessionService,
};
