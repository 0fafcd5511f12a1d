//! Caller identity: guest or authenticated customer.
//!
//! Every store operation takes an [`Identity`] as its first argument. The
//! auth layer resolves it; this crate only models it. Guest state shares the
//! same keyed maps as customer state under the reserved [`GUEST_KEY`], so a
//! [`CustomerId`] is never allowed to collide with that key.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reserved state key for the guest pseudo-identity.
pub const GUEST_KEY: &str = "guest";

/// Errors that can occur when parsing a [`CustomerId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum IdentityError {
    /// The input string is empty.
    #[error("customer id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("customer id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input collides with the reserved guest key.
    #[error("customer id cannot be the reserved key \"{GUEST_KEY}\"")]
    ReservedGuestKey,
}

/// An authenticated customer's id.
///
/// Opaque string minted by the identity provider. Validation only enforces
/// what this store needs to stay sound: non-empty, bounded length, and not
/// the reserved guest key.
///
/// ## Examples
///
/// ```
/// use golden_fig_core::CustomerId;
///
/// assert!(CustomerId::parse("cust_84h2").is_ok());
/// assert!(CustomerId::parse("").is_err());
/// assert!(CustomerId::parse("guest").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Maximum length of a customer id.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `CustomerId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 128 characters,
    /// or equal to the reserved guest key.
    pub fn parse(s: &str) -> Result<Self, IdentityError> {
        if s.is_empty() {
            return Err(IdentityError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(IdentityError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s == GUEST_KEY {
            return Err(IdentityError::ReservedGuestKey);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the customer id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The identity a store operation runs under.
///
/// Carts are usable pre-login, so most operations accept [`Identity::Guest`]
/// and key guest state under [`GUEST_KEY`]. Operations on durable per-account
/// collections (saved-for-later, wishlist) refuse `Guest` instead of falling
/// back; that asymmetry is deliberate and mirrored from the shipped UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Anonymous visitor; state is keyed under [`GUEST_KEY`].
    Guest,
    /// Authenticated customer.
    Customer(CustomerId),
}

impl Identity {
    /// The key this identity's state lives under.
    #[must_use]
    pub fn state_key(&self) -> &str {
        match self {
            Self::Guest => GUEST_KEY,
            Self::Customer(id) => id.as_str(),
        }
    }

    /// Returns the customer id for authenticated identities.
    #[must_use]
    pub const fn customer(&self) -> Option<&CustomerId> {
        match self {
            Self::Guest => None,
            Self::Customer(id) => Some(id),
        }
    }

    /// Whether this is the guest pseudo-identity.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    /// Build an identity from an optional resolved customer id.
    ///
    /// Absent means guest; the auth middleware hands this straight through.
    #[must_use]
    pub fn from_resolved(customer: Option<CustomerId>) -> Self {
        customer.map_or(Self::Guest, Self::Customer)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state_key())
    }
}

impl From<CustomerId> for Identity {
    fn from(id: CustomerId) -> Self {
        Self::Customer(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(CustomerId::parse("cust_84h2").is_ok());
        assert!(CustomerId::parse("u1").is_ok());
        assert!(CustomerId::parse("8f14e45f-ceea-4f3a-9a9d-1f3c2f1d9b1a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(CustomerId::parse(""), Err(IdentityError::Empty)));
    }

    #[test]
    fn test_parse_reserved_guest_key() {
        assert!(matches!(
            CustomerId::parse("guest"),
            Err(IdentityError::ReservedGuestKey)
        ));
        // Only the exact key is reserved
        assert!(CustomerId::parse("guest2").is_ok());
        assert!(CustomerId::parse("Guest").is_ok());
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(CustomerId::MAX_LENGTH + 1);
        assert!(matches!(
            CustomerId::parse(&long),
            Err(IdentityError::TooLong { .. })
        ));
    }

    #[test]
    fn test_state_key() {
        assert_eq!(Identity::Guest.state_key(), GUEST_KEY);
        let id = CustomerId::parse("cust_84h2").unwrap();
        assert_eq!(Identity::Customer(id).state_key(), "cust_84h2");
    }

    #[test]
    fn test_from_resolved() {
        assert!(Identity::from_resolved(None).is_guest());
        let id = CustomerId::parse("u1").unwrap();
        assert_eq!(
            Identity::from_resolved(Some(id.clone())),
            Identity::Customer(id)
        );
    }

    #[test]
    fn test_serde_rejects_guest_key() {
        let result: Result<CustomerId, _> = serde_json::from_str("\"guest\"");
        assert!(result.is_err());
    }
}
