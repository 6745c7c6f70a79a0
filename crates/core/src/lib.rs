//! Hevea
//!
//! Hevea is the marketplace core for a natural-rubber trading platform
//! connecting farmers and buyers: typed listing records, a declarative
//! catalog filter, and static market-price reference data.

pub mod filter;
pub mod fixtures;
pub mod grades;
pub mod ids;
pub mod listings;
pub mod prices;
