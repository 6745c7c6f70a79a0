//! Starter inbox for first-time farmers.

use jiff::{SignedDuration, Timestamp};

use hevea::listings::Listing;

use crate::domain::inquiries::models::{Inquiry, InquiryId};

/// Inquiries shown to a farmer whose inbox partition has never been
/// written, anchored to the listings currently visible to them.
#[must_use]
pub(crate) fn starter_inquiries(visible: &[Listing]) -> Vec<Inquiry> {
    let now = Timestamp::now();

    let entries = [
        (
            "Amit Sharma",
            "amit.buyer@example.com",
            "Is your RSS-1 stock available for immediate delivery?",
            SignedDuration::from_hours(24),
        ),
        (
            "Priya Das",
            "priya.das@example.com",
            "Can you offer a discount for bulk purchase of RSS-3?",
            SignedDuration::from_hours(72),
        ),
    ];

    visible
        .iter()
        .zip(entries)
        .map(|(listing, (name, email, message, age))| Inquiry {
            id: InquiryId::new(),
            buyer_name: name.to_string(),
            buyer_email: email.to_string(),
            message: message.to_string(),
            listing_id: listing.id,
            created_at: now
                .saturating_sub(age)
                .expect("SignedDuration never exceeds hour units"),
        })
        .collect()
}
