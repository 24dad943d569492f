use std::sync::Arc;

use arena_core::{AppResult, SessionToken};
use arena_domain::Principal;
use async_trait::async_trait;
use tracing::warn;

/// Repository port resolving session credentials.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the principal bound to `token`, or `None` when the token is unknown.
    async fn find_principal(&self, token: &SessionToken) -> AppResult<Option<Principal>>;
}

/// Application service turning raw credentials into principals.
///
/// Verification failures never propagate: they resolve to `None`, which
/// callers treat as an unauthenticated request.
#[derive(Clone)]
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    /// Creates a new session service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Resolves the caller for a raw credential value.
    pub async fn resolve_principal(&self, raw_token: Option<&str>) -> Option<Principal> {
        let token = raw_token.and_then(SessionToken::parse)?;

        match self.repository.find_principal(&token).await {
            Ok(principal) => principal,
            Err(error) => {
                warn!(%error, "session verification failed; treating caller as unauthenticated");
                None
            }
        }
    }
}
