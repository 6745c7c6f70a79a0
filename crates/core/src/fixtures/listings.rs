//! Listing fixtures.

use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    fixtures::FixtureError,
    listings::{Listing, ListingDraft, ListingId, Seller},
};

/// Wrapper for listings in YAML.
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Catalog entries in display order.
    pub listings: Vec<ListingFixture>,
}

/// A single listing fixture entry. Numeric fields are strings so that
/// prices and percentages survive YAML parsing exactly as written.
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Stable fixture key, e.g. `rajesh-rss1`.
    pub key: String,

    /// Fixed listing id; generated when omitted.
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Offering farmer.
    pub seller: Seller,

    /// Grade notation (e.g. `RSS-1`).
    pub grade: String,

    /// Quantity in kilograms.
    pub quantity: String,

    /// Quality tier name.
    pub quality: String,

    /// Moisture percentage; omitted means 0.
    #[serde(default)]
    pub moisture: Option<String>,

    /// Price in rupees per kilogram.
    pub price: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Creation time, RFC 3339.
    pub created_at: String,
}

impl TryFrom<ListingFixture> for Listing {
    type Error = FixtureError;

    fn try_from(fixture: ListingFixture) -> Result<Self, Self::Error> {
        let created_at = fixture
            .created_at
            .parse::<Timestamp>()
            .map_err(|_err| FixtureError::InvalidTimestamp(fixture.created_at.clone()))?;

        let fields = ListingDraft {
            grade: fixture.grade,
            quantity: fixture.quantity,
            quality: fixture.quality,
            moisture: fixture.moisture.unwrap_or_default(),
            price: fixture.price,
            description: fixture.description,
        }
        .validate()?;

        let id = fixture.id.map_or_else(ListingId::new, ListingId::from_uuid);

        Ok(Self::new(id, fixture.seller, fields, created_at))
    }
}
