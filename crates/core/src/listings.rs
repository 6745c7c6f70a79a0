//! Listings
//!
//! Farmer-authored offers of rubber at a grade, quality and price.
//! Listings are append-only: once created they are never edited or
//! deleted, so every record is immutable after construction.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grades::{GradeParseError, QualityTier, RubberGrade},
    ids::TypedUuid,
};

/// Listing identifier.
pub type ListingId = TypedUuid<Listing>;

/// Denormalised identity of the farmer behind a listing.
///
/// The catalog filter matches on seller name and location, so listings
/// carry the fields directly rather than referencing a profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Owning farmer's actor id.
    pub id: String,

    /// Farmer display name.
    pub name: String,

    /// Farm location, free text.
    pub location: String,

    /// Contact phone, when shared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A farmer's offer of a quantity of rubber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing id.
    pub id: ListingId,

    /// The offering farmer.
    pub seller: Seller,

    /// Market grade of the rubber.
    pub grade: RubberGrade,

    /// Offered quantity in kilograms.
    pub quantity: Decimal,

    /// Quality tier.
    pub quality: QualityTier,

    /// Moisture percentage; 0 means not applicable for liquid grades.
    pub moisture: Decimal,

    /// Asking price in rupees per kilogram.
    pub price: Decimal,

    /// Free-text description.
    pub description: String,

    /// Creation time.
    pub created_at: Timestamp,
}

impl Listing {
    /// Assemble a listing from validated fields under a known id.
    #[must_use]
    pub fn new(
        id: ListingId,
        seller: Seller,
        fields: ValidatedListing,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            seller,
            grade: fields.grade,
            quantity: fields.quantity,
            quality: fields.quality,
            moisture: fields.moisture,
            price: fields.price,
            description: fields.description,
            created_at,
        }
    }

    /// Assemble a listing from validated fields with a fresh id.
    #[must_use]
    pub fn create(seller: Seller, fields: ValidatedListing, created_at: Timestamp) -> Self {
        Self::new(ListingId::new(), seller, fields, created_at)
    }
}

/// Errors from validating a [`ListingDraft`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field did not parse.
    #[error("{field} is not a number: {value}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Price and quantity must be strictly positive.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    /// Moisture percentage cannot be negative.
    #[error("moisture percentage cannot be negative")]
    NegativeMoisture,

    /// Grade or tier notation was not recognised.
    #[error(transparent)]
    Grade(#[from] GradeParseError),
}

/// Form-shaped listing input: every field arrives as entered, with the
/// empty string meaning "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    /// Market grade notation, e.g. `RSS-1`.
    pub grade: String,

    /// Quantity in kilograms.
    pub quantity: String,

    /// Quality tier name.
    pub quality: String,

    /// Moisture percentage; blank or unparsable input defaults to 0.
    pub moisture: String,

    /// Asking price in rupees per kilogram.
    pub price: String,

    /// Free-text description.
    pub description: String,
}

/// Parsed and checked listing fields, ready to become a [`Listing`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedListing {
    /// Market grade.
    pub grade: RubberGrade,

    /// Quantity in kilograms, strictly positive.
    pub quantity: Decimal,

    /// Quality tier.
    pub quality: QualityTier,

    /// Moisture percentage, non-negative.
    pub moisture: Decimal,

    /// Price in rupees per kilogram, strictly positive.
    pub price: Decimal,

    /// Free-text description.
    pub description: String,
}

impl ListingDraft {
    /// Parse and check the draft.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when grade, quantity, quality or
    /// price is blank, when a numeric field does not parse, when price
    /// or quantity is not strictly positive, or when the moisture
    /// percentage is negative. Nothing is produced on failure.
    pub fn validate(self) -> Result<ValidatedListing, ValidationError> {
        let grade = required(&self.grade, "grade")?.parse::<RubberGrade>()?;
        let quantity = positive_decimal(&self.quantity, "quantity")?;
        let quality = required(&self.quality, "quality")?.parse::<QualityTier>()?;
        let price = positive_decimal(&self.price, "price")?;
        let moisture = moisture_or_zero(&self.moisture)?;

        Ok(ValidatedListing {
            grade,
            quantity,
            quality,
            moisture,
            price,
            description: self.description,
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(value)
}

fn positive_decimal(value: &str, field: &'static str) -> Result<Decimal, ValidationError> {
    let raw = required(value, field)?;

    let parsed = raw
        .parse::<Decimal>()
        .map_err(|_err| ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;

    if parsed <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(parsed)
}

/// Moisture is optional: blank or unparsable input reads as 0, but an
/// explicit negative percentage is rejected.
fn moisture_or_zero(value: &str) -> Result<Decimal, ValidationError> {
    let Ok(parsed) = value.trim().parse::<Decimal>() else {
        return Ok(Decimal::ZERO);
    };

    if parsed < Decimal::ZERO {
        return Err(ValidationError::NegativeMoisture);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn draft() -> ListingDraft {
        ListingDraft {
            grade: "RSS-1".to_string(),
            quantity: "500".to_string(),
            quality: "Premium".to_string(),
            moisture: "0.5".to_string(),
            price: "180".to_string(),
            description: "Sun-dried sheets.".to_string(),
        }
    }

    #[test]
    fn validate_parses_numeric_fields() -> TestResult {
        let fields = draft().validate()?;

        assert_eq!(fields.grade, RubberGrade::Rss1);
        assert_eq!(fields.quantity, Decimal::from(500));
        assert_eq!(fields.quality, QualityTier::Premium);
        assert_eq!(fields.moisture, Decimal::new(5, 1));
        assert_eq!(fields.price, Decimal::from(180));

        Ok(())
    }

    #[test]
    fn validate_rejects_missing_price() {
        let result = ListingDraft {
            price: String::new(),
            ..draft()
        }
        .validate();

        assert_eq!(result, Err(ValidationError::MissingField("price")));
    }

    #[test]
    fn validate_rejects_non_numeric_quantity() {
        let result = ListingDraft {
            quantity: "lots".to_string(),
            ..draft()
        }
        .validate();

        assert!(matches!(
            result,
            Err(ValidationError::InvalidNumber { field: "quantity", .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_price() {
        let result = ListingDraft {
            price: "0".to_string(),
            ..draft()
        }
        .validate();

        assert_eq!(result, Err(ValidationError::NotPositive("price")));
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        let result = ListingDraft {
            quantity: "-5".to_string(),
            ..draft()
        }
        .validate();

        assert_eq!(result, Err(ValidationError::NotPositive("quantity")));
    }

    #[test]
    fn validate_rejects_unknown_grade() {
        let result = ListingDraft {
            grade: "RSS-9".to_string(),
            ..draft()
        }
        .validate();

        assert!(matches!(
            result,
            Err(ValidationError::Grade(GradeParseError::UnknownGrade(_)))
        ));
    }

    #[test]
    fn validate_defaults_blank_moisture_to_zero() -> TestResult {
        let fields = ListingDraft {
            moisture: String::new(),
            ..draft()
        }
        .validate()?;

        assert_eq!(fields.moisture, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn validate_defaults_unparsable_moisture_to_zero() -> TestResult {
        let fields = ListingDraft {
            moisture: "damp".to_string(),
            ..draft()
        }
        .validate()?;

        assert_eq!(fields.moisture, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn validate_rejects_negative_moisture() {
        let result = ListingDraft {
            moisture: "-0.5".to_string(),
            ..draft()
        }
        .validate();

        assert_eq!(result, Err(ValidationError::NegativeMoisture));
    }

    #[test]
    fn listing_round_trips_through_json() -> TestResult {
        let listing = Listing::create(
            Seller {
                id: "1705312800000-rajesh".to_string(),
                name: "Rajesh Kumar".to_string(),
                location: "Agartala, West Tripura".to_string(),
                phone: Some("+91 9876543210".to_string()),
            },
            draft().validate()?,
            Timestamp::UNIX_EPOCH,
        );

        let json = serde_json::to_string(&listing)?;
        let back: Listing = serde_json::from_str(&json)?;

        assert_eq!(back, listing);

        Ok(())
    }
}
