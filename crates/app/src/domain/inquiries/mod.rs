//! Inquiry service
//!
//! Buyer messages directed at a specific listing, delivered by writing
//! into the target farmer's partition. Inquiries are never edited or
//! deleted.

mod errors;
pub mod models;
mod seed;
mod service;

pub use errors::InquiriesServiceError;
pub use service::{InquiriesService, LocalInquiriesService, MockInquiriesService};
