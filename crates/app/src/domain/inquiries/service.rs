//! Inquiries service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use hevea::listings::Listing;

use crate::{
    domain::{
        inquiries::{
            InquiriesServiceError,
            models::{Inquiry, InquiryId},
            seed,
        },
        listings::visible_listings,
    },
    session::models::Actor,
    storage::{self, LocalStore, keys},
};

/// Inquiry operations: buyers send, farmers read their inbox.
#[automock]
pub trait InquiriesService: Send + Sync {
    /// Construct an inquiry referencing `listing` and persist it into
    /// the owning farmer's partition. Delivery is the local write;
    /// there is no transport.
    ///
    /// # Errors
    ///
    /// Returns an error when the message is empty or whitespace-only
    /// (nothing is written), or when the partition cannot be persisted.
    fn send_inquiry(
        &self,
        buyer: &Actor,
        listing: &Listing,
        message: &str,
    ) -> Result<Inquiry, InquiriesServiceError>;

    /// The inquiries this farmer has received, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the actor is not a farmer.
    fn received_inquiries(&self, actor: &Actor) -> Result<Vec<Inquiry>, InquiriesServiceError>;
}

/// [`InquiriesService`] over a [`LocalStore`].
#[derive(Clone)]
pub struct LocalInquiriesService {
    store: Arc<dyn LocalStore>,
}

impl LocalInquiriesService {
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

impl InquiriesService for LocalInquiriesService {
    fn send_inquiry(
        &self,
        buyer: &Actor,
        listing: &Listing,
        message: &str,
    ) -> Result<Inquiry, InquiriesServiceError> {
        let message = message.trim();

        if message.is_empty() {
            return Err(InquiriesServiceError::EmptyMessage);
        }

        let inquiry = Inquiry {
            id: InquiryId::new(),
            buyer_name: buyer.name.clone(),
            buyer_email: buyer.email.clone(),
            message: message.to_string(),
            listing_id: listing.id,
            created_at: Timestamp::now(),
        };

        let key = keys::farmer_inquiries(&listing.seller.id);
        let mut inbox: Vec<Inquiry> = storage::read(&*self.store, &key).unwrap_or_default();

        inbox.push(inquiry.clone());
        storage::write(&*self.store, &key, &inbox)?;

        debug!(inquiry = %inquiry.id, listing = %listing.id, farmer = %listing.seller.id, "inquiry delivered");

        Ok(inquiry)
    }

    fn received_inquiries(&self, actor: &Actor) -> Result<Vec<Inquiry>, InquiriesServiceError> {
        if !actor.is_farmer() {
            return Err(InquiriesServiceError::NotAFarmer);
        }

        let stored = storage::read(&*self.store, &keys::farmer_inquiries(actor.id.as_str()));

        Ok(stored.unwrap_or_else(|| {
            seed::starter_inquiries(&visible_listings(&*self.store, actor))
        }))
    }
}
