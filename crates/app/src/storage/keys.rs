//! Storage key layout.
//!
//! One fixed key for the signed-in actor plus per-farmer partitions.
//! There is no schema version field; format changes are not
//! migration-safe.

/// Key holding the current session actor.
pub const SESSION_ACTOR: &str = "session_actor";

/// Partition holding a farmer's profile fields.
#[must_use]
pub fn farmer_profile(actor_id: &str) -> String {
    format!("farmer_profile_{actor_id}")
}

/// Partition holding a farmer's listings.
#[must_use]
pub fn farmer_listings(actor_id: &str) -> String {
    format!("farmer_listings_{actor_id}")
}

/// Partition holding the inquiries a farmer has received.
#[must_use]
pub fn farmer_inquiries(actor_id: &str) -> String {
    format!("farmer_inquiries_{actor_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_are_namespaced_by_actor() {
        assert_eq!(farmer_profile("1-a"), "farmer_profile_1-a");
        assert_eq!(farmer_listings("1-a"), "farmer_listings_1-a");
        assert_eq!(farmer_inquiries("1-a"), "farmer_inquiries_1-a");
        assert_ne!(farmer_listings("1-a"), farmer_listings("2-b"));
    }
}
