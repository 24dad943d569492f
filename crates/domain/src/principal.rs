use arena_core::UserId;
use serde::{Deserialize, Serialize};

use crate::Role;

/// Authenticated caller resolved from a verified session credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    user_id: UserId,
    display_name: String,
    role: Role,
}

impl Principal {
    /// Creates a principal from session data.
    #[must_use]
    pub fn new(user_id: UserId, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the role fixed for this session.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}
