//! Starter catalog for first-time farmers.

use std::hash::{Hash, Hasher};

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHasher;
use uuid::Uuid;

use hevea::listings::{Listing, ListingDraft, ListingId};

use crate::session::models::Actor;

/// Listings shown to a farmer whose partition has never been written.
/// They are display-only until the first successful
/// [`add_listing`](super::ListingsService::add_listing) persists the
/// visible set. Ids are derived from the actor id so repeated loads
/// see the same records.
#[must_use]
pub fn starter_listings(actor: &Actor) -> Vec<Listing> {
    let now = Timestamp::now();

    [
        (
            "RSS-1",
            "300",
            "Premium",
            "0.6",
            "180",
            "Premium RSS-1 rubber sheets, sun-dried and clean.",
            SignedDuration::from_hours(48),
        ),
        (
            "RSS-3",
            "200",
            "Standard",
            "0.8",
            "165",
            "Standard RSS-3 sheets, suitable for bulk buyers.",
            SignedDuration::from_hours(120),
        ),
    ]
    .into_iter()
    .enumerate()
    .filter_map(
        |(index, (grade, quantity, quality, moisture, price, description, age))| {
            let fields = ListingDraft {
                grade: grade.to_string(),
                quantity: quantity.to_string(),
                quality: quality.to_string(),
                moisture: moisture.to_string(),
                price: price.to_string(),
                description: description.to_string(),
            }
            .validate()
            .ok()?;

            Some(Listing::new(
                starter_id(actor, index as u64),
                actor.seller(),
                fields,
                now.saturating_sub(age)
                    .expect("SignedDuration never exceeds hour units"),
            ))
        },
    )
    .collect()
}

/// Stable id for the `index`-th starter listing of `actor`.
fn starter_id(actor: &Actor, index: u64) -> ListingId {
    let mut hasher = FxHasher::default();

    actor.id.as_str().hash(&mut hasher);

    ListingId::from_uuid(Uuid::from_u64_pair(hasher.finish(), index))
}
