//! Guest identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when no name was supplied.
pub const DEFAULT_GUEST_NAME: &str = "Guest";

/// A locally provisioned user identity.
///
/// Not authenticated; the backend echoes it back without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
}

impl UserIdentity {
    /// Generate a fresh guest identity with a random unique id.
    pub fn generate() -> Self {
        UserIdentity {
            id: Uuid::new_v4().to_string(),
            name: DEFAULT_GUEST_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identities_are_unique() {
        assert_ne!(UserIdentity::generate().id, UserIdentity::generate().id);
    }

    #[test]
    fn generated_identity_defaults_to_guest() {
        assert_eq!(UserIdentity::generate().name, "Guest");
    }
}
