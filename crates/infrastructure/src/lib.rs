//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_session_repository;
mod in_memory_team_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
pub use in_memory_team_repository::InMemoryTeamRepository;
