use std::str::FromStr;

use arena_core::AppError;
use serde::{Deserialize, Serialize};

/// Authority class attached to an authenticated principal.
///
/// A role is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Tournament administrator with full access.
    #[serde(rename = "ADMIN")]
    Administrator,
    /// Referee responsible for the whole field crew.
    #[serde(rename = "HEAD_REFEREE")]
    HeadReferee,
    /// Referee scoring one alliance on an assigned field.
    #[serde(rename = "ALLIANCE_REFEREE")]
    AllianceReferee,
    /// Registered leader of a competing team.
    #[serde(rename = "TEAM_LEADER")]
    TeamLeader,
    /// Registered member of a competing team.
    #[serde(rename = "TEAM_MEMBER")]
    TeamMember,
    /// Any signed-in user without a tournament function.
    #[serde(rename = "COMMON")]
    Common,
}

impl Role {
    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "ADMIN",
            Self::HeadReferee => "HEAD_REFEREE",
            Self::AllianceReferee => "ALLIANCE_REFEREE",
            Self::TeamLeader => "TEAM_LEADER",
            Self::TeamMember => "TEAM_MEMBER",
            Self::Common => "COMMON",
        }
    }

    /// Returns all known roles, most privileged first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Administrator,
            Role::HeadReferee,
            Role::AllianceReferee,
            Role::TeamLeader,
            Role::TeamMember,
            Role::Common,
        ];

        ALL
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}
