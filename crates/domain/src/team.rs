//! Team registration records as delivered by the data-access layer.

use arena_core::{AppResult, NonEmptyString, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(Uuid);

impl TeamId {
    /// Creates a random team identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a team identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Administrative bookkeeping attached to a team record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMetadata {
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// User that registered the team.
    pub created_by: UserId,
    /// User that last modified the team.
    pub updated_by: Option<UserId>,
}

impl AuditMetadata {
    /// Creates metadata for a record created now by `created_by`.
    #[must_use]
    pub fn created_now(created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            created_by,
            updated_by: None,
        }
    }
}

/// One person on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    user_id: Option<UserId>,
    name: NonEmptyString,
    email: Option<String>,
    phone: Option<String>,
}

impl TeamMember {
    /// Creates a roster entry.
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            user_id: None,
            name: NonEmptyString::new(name)?,
            email,
            phone,
        })
    }

    /// Links the roster entry to a platform account.
    #[must_use]
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Returns the linked platform account, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the member display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Registered competing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: NonEmptyString,
    organization: Option<String>,
    description: Option<String>,
    owner_id: UserId,
    members: Vec<TeamMember>,
    audit: AuditMetadata,
}

impl Team {
    /// Creates a team owned by `owner_id` with an empty roster.
    pub fn new(
        name: impl Into<String>,
        owner_id: UserId,
        audit: AuditMetadata,
    ) -> AppResult<Self> {
        Ok(Self {
            id: TeamId::new(),
            name: NonEmptyString::new(name)?,
            organization: None,
            description: None,
            owner_id,
            members: Vec::new(),
            audit,
        })
    }

    /// Replaces the generated identifier.
    #[must_use]
    pub fn with_id(mut self, id: TeamId) -> Self {
        self.id = id;
        self
    }

    /// Sets the school or club the team represents.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Sets the free-form team description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the roster.
    #[must_use]
    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.members = members;
        self
    }

    /// Returns the team identifier.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the represented organization.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the owning user, normally the team leader.
    #[must_use]
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the roster.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        self.members.as_slice()
    }

    /// Returns the administrative metadata.
    #[must_use]
    pub fn audit(&self) -> &AuditMetadata {
        &self.audit
    }

    /// Returns whether `user_id` owns the team or appears on its roster.
    #[must_use]
    pub fn is_associated_with(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
            || self
                .members
                .iter()
                .any(|member| member.user_id == Some(user_id))
    }
}

#[cfg(test)]
mod tests {
    use arena_core::UserId;

    use super::{AuditMetadata, Team, TeamMember};

    #[test]
    fn team_rejects_blank_name() {
        let owner = UserId::new();
        assert!(Team::new(" ", owner, AuditMetadata::created_now(owner)).is_err());
    }

    #[test]
    fn owner_and_linked_members_are_associated() {
        let owner = UserId::new();
        let member = UserId::new();
        let stranger = UserId::new();

        let Ok(roster_entry) = TeamMember::new("Ada", None, None) else {
            panic!("member should be valid");
        };
        let Ok(team) = Team::new("Gearheads", owner, AuditMetadata::created_now(owner)) else {
            panic!("team should be valid");
        };
        let team = team.with_members(vec![roster_entry.with_user_id(member)]);

        assert!(team.is_associated_with(owner));
        assert!(team.is_associated_with(member));
        assert!(!team.is_associated_with(stranger));
    }
}
