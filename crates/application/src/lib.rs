//! Application services and ports.

#![forbid(unsafe_code)]

mod permission_evaluator;
mod permission_registry;
mod route_protector;
mod session_service;
mod team_projection;
mod team_service;

pub use permission_evaluator::{OwnershipContext, PermissionEvaluator};
pub use permission_registry::{
    AllowedRoles, PermissionDefinition, PermissionOptions, PermissionRegistry,
    PermissionRegistryBuilder,
};
pub use route_protector::{
    DenyReason, RouteDecision, RouteProtector, RouteProtectorBuilder, RouteRequirement, RouteRule,
    UnlistedRoutePolicy,
};
pub use session_service::{SessionRepository, SessionService};
pub use team_projection::{
    DeniedTeam, MemberDetails, PublicTeamSummary, RESTRICTED_TEAM_NAME, TeamDetails,
    TeamProjection, TeamProjector,
};
pub use team_service::{TeamRepository, TeamService};
