//! Inquiry records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use hevea::{ids::TypedUuid, listings::ListingId};

/// Inquiry identifier.
pub type InquiryId = TypedUuid<Inquiry>;

/// A buyer's message about a specific listing, held in the receiving
/// farmer's partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub message: String,
    /// The listing the buyer is asking about (informational reference;
    /// listings are immutable, so it cannot dangle).
    pub listing_id: ListingId,
    pub created_at: Timestamp,
}
