//! Minimal identity records read from the external identity/store system.
//!
//! This application only reads roles to gate the admin surface and lets the
//! caller edit their own display profile; role assignment logic lives in the
//! remote store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role issued by the external identity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May use the admin dashboard and editor.
    Admin,
    /// Authenticated reader.
    User,
    /// Unauthenticated reader.
    Guest,
}

impl UserRole {
    /// Whether this role unlocks the admin surface.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Guest
    }
}

/// Caller-editable display profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name shown in the site chrome.
    pub name: String,
}

impl UserProfile {
    /// Construct a profile with a trimmed, non-empty name.
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            name: trimmed.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(UserRole::Admin, true)]
    #[case(UserRole::User, false)]
    #[case(UserRole::Guest, false)]
    fn only_admin_unlocks_admin_surface(#[case] role: UserRole, #[case] expected: bool) {
        assert_eq!(role.is_admin(), expected);
    }

    #[rstest]
    fn roles_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).expect("serializable"),
            "\"admin\""
        );
    }

    #[rstest]
    fn profile_rejects_blank_names() {
        assert!(UserProfile::new("   ").is_none());
        assert_eq!(
            UserProfile::new("  Ada ").map(|p| p.name),
            Some("Ada".to_owned())
        );
    }
}
