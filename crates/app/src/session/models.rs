//! Session data models.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use hevea::listings::Seller;

/// Marketplace role an actor signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Buyer,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Buyer => "buyer",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" => Ok(Self::Farmer),
            "buyer" => Ok(Self::Buyer),
            other => Err(format!("unknown role: {other} (expected farmer or buyer)")),
        }
    }
}

/// Actor identifier: unix-epoch milliseconds plus the email local part,
/// unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Derive an id from the clock and the email's local part.
    #[must_use]
    pub fn derive(now: Timestamp, email: &str) -> Self {
        let local_part = email.split('@').next().unwrap_or(email);

        Self(format!("{}-{local_part}", now.as_millisecond()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Farmer-side profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerProfile {
    /// Farm location, e.g. "Agartala, West Tripura".
    pub farm_location: String,

    /// Farm size in acres, as entered.
    pub farm_size: String,

    /// Years of tapping experience, as entered.
    pub experience: String,

    /// Contact phone.
    pub phone: String,
}

/// Buyer-side profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    /// Trading company name.
    pub company: String,

    /// Buyer location.
    pub location: String,

    /// Contact phone.
    pub phone: String,
}

/// Role-tagged profile payload (one variant per role, replacing an
/// untyped blob).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    Farmer(FarmerProfile),
    Buyer(BuyerProfile),
}

impl Profile {
    /// The role this profile belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Farmer(_) => Role::Farmer,
            Self::Buyer(_) => Role::Buyer,
        }
    }
}

/// Authenticated marketplace identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl Actor {
    #[must_use]
    pub fn is_farmer(&self) -> bool {
        self.role == Role::Farmer
    }

    /// The seller identity this actor presents on a listing: display
    /// name plus whatever the farmer profile shares.
    #[must_use]
    pub fn seller(&self) -> Seller {
        let profile = match &self.profile {
            Some(Profile::Farmer(profile)) => Some(profile),
            _ => None,
        };

        Seller {
            id: self.id.as_str().to_string(),
            name: self.name.clone(),
            location: profile.map(|p| p.farm_location.clone()).unwrap_or_default(),
            phone: profile
                .map(|p| p.phone.clone())
                .filter(|phone| !phone.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn actor_id_derives_from_clock_and_local_part() {
        let id = ActorId::derive(Timestamp::UNIX_EPOCH, "rajesh@example.com");

        assert_eq!(id.as_str(), "0-rajesh");
    }

    #[test]
    fn actor_id_without_at_sign_uses_whole_input() {
        let id = ActorId::derive(Timestamp::UNIX_EPOCH, "rajesh");

        assert_eq!(id.as_str(), "0-rajesh");
    }

    #[test]
    fn role_parses_case_insensitively() -> TestResult {
        assert_eq!("Farmer".parse::<Role>()?, Role::Farmer);
        assert_eq!("BUYER".parse::<Role>()?, Role::Buyer);
        assert!("vendor".parse::<Role>().is_err());

        Ok(())
    }

    #[test]
    fn profile_reports_its_role() {
        let farmer = Profile::Farmer(FarmerProfile::default());
        let buyer = Profile::Buyer(BuyerProfile::default());

        assert_eq!(farmer.role(), Role::Farmer);
        assert_eq!(buyer.role(), Role::Buyer);
    }

    #[test]
    fn seller_carries_profile_location_and_phone() {
        let actor = Actor {
            id: ActorId::from("1-rajesh".to_string()),
            email: "rajesh@example.com".to_string(),
            name: "Rajesh Kumar".to_string(),
            role: Role::Farmer,
            profile: Some(Profile::Farmer(FarmerProfile {
                farm_location: "Agartala, West Tripura".to_string(),
                farm_size: "5.5".to_string(),
                experience: "10".to_string(),
                phone: "+91 9876543210".to_string(),
            })),
        };

        let seller = actor.seller();

        assert_eq!(seller.id, "1-rajesh");
        assert_eq!(seller.location, "Agartala, West Tripura");
        assert_eq!(seller.phone.as_deref(), Some("+91 9876543210"));
    }

    #[test]
    fn seller_without_profile_has_no_contact_details() {
        let actor = Actor {
            id: ActorId::from("1-priya".to_string()),
            email: "priya@example.com".to_string(),
            name: "Priya Devi".to_string(),
            role: Role::Farmer,
            profile: None,
        };

        let seller = actor.seller();

        assert_eq!(seller.location, "");
        assert_eq!(seller.phone, None);
    }

    #[test]
    fn profile_serde_is_role_tagged() -> TestResult {
        let profile = Profile::Buyer(BuyerProfile {
            company: "Tripura Rubber Traders".to_string(),
            location: "Agartala".to_string(),
            phone: String::new(),
        });

        let json = serde_json::to_string(&profile)?;

        assert!(json.contains("\"kind\":\"buyer\""));

        let back: Profile = serde_json::from_str(&json)?;

        assert_eq!(back, profile);

        Ok(())
    }
}
