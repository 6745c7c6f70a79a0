//! Listings service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use hevea::listings::{Listing, ListingDraft};

use crate::{
    domain::listings::{ListingsServiceError, seed},
    session::models::Actor,
    storage::{self, LocalStore, keys},
};

/// The listings currently visible to a farmer: the stored partition, or
/// the starter catalog when nothing has ever been written.
pub(crate) fn visible_listings(store: &dyn LocalStore, actor: &Actor) -> Vec<Listing> {
    storage::read(store, &keys::farmer_listings(actor.id.as_str()))
        .unwrap_or_else(|| seed::starter_listings(actor))
}

/// Listing catalog operations, scoped to the acting farmer's partition.
#[automock]
pub trait ListingsService: Send + Sync {
    /// Validate a draft and append the resulting listing to the
    /// farmer's partition, returning the created record.
    ///
    /// # Errors
    ///
    /// Returns an error when the actor is not a farmer, when the draft
    /// fails validation (in which case nothing is written), or when the
    /// partition cannot be persisted.
    fn add_listing(&self, actor: &Actor, draft: ListingDraft)
    -> Result<Listing, ListingsServiceError>;

    /// The farmer's own listings, in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error when the actor is not a farmer.
    fn my_listings(&self, actor: &Actor) -> Result<Vec<Listing>, ListingsServiceError>;
}

/// [`ListingsService`] over a [`LocalStore`].
#[derive(Clone)]
pub struct LocalListingsService {
    store: Arc<dyn LocalStore>,
}

impl LocalListingsService {
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

impl ListingsService for LocalListingsService {
    fn add_listing(
        &self,
        actor: &Actor,
        draft: ListingDraft,
    ) -> Result<Listing, ListingsServiceError> {
        if !actor.is_farmer() {
            return Err(ListingsServiceError::NotAFarmer);
        }

        let fields = draft.validate()?;
        let listing = Listing::create(actor.seller(), fields, Timestamp::now());

        let mut listings = visible_listings(&*self.store, actor);
        listings.push(listing.clone());

        storage::write(
            &*self.store,
            &keys::farmer_listings(actor.id.as_str()),
            &listings,
        )?;

        debug!(listing = %listing.id, farmer = %actor.id, "listing added");

        Ok(listing)
    }

    fn my_listings(&self, actor: &Actor) -> Result<Vec<Listing>, ListingsServiceError> {
        if !actor.is_farmer() {
            return Err(ListingsServiceError::NotAFarmer);
        }

        Ok(visible_listings(&*self.store, actor))
    }
}
