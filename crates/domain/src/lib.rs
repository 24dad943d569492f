//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod permission;
mod principal;
mod role;
mod team;

pub use permission::{
    DashboardAction, DisplayAction, Feature, Permission, RankingAction, RefereeAction,
    ScheduleAction, ScoringAction, StageAction, TeamAction, TournamentAction, UserAction,
};
pub use principal::Principal;
pub use role::Role;
pub use team::{AuditMetadata, Team, TeamId, TeamMember};
