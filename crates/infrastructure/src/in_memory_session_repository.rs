use std::collections::HashMap;

use arena_application::SessionRepository;
use arena_core::{AppError, AppResult, SessionToken};
use arena_domain::Principal;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory session store keyed by SHA-256 token digests.
///
/// Raw tokens are handed to the caller once on `issue` and never stored.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Principal>>,
}

impl InMemorySessionRepository {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `principal` and returns the raw token.
    pub async fn issue(&self, principal: Principal) -> AppResult<String> {
        let raw_token = generate_token()?;
        debug!(user_id = %principal.user_id(), role = principal.role().as_str(), "issued session");

        self.sessions
            .write()
            .await
            .insert(hash_token(raw_token.as_str()), principal);
        Ok(raw_token)
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_principal(&self, token: &SessionToken) -> AppResult<Option<Principal>> {
        Ok(self
            .sessions
            .read()
            .await
            .get(&hash_token(token.expose()))
            .cloned())
    }
}

fn generate_token() -> AppResult<String> {
    let mut bytes = [0u8; 32];
    getrandom::fill(&mut bytes)
        .map_err(|error| AppError::Internal(format!("failed to generate session token: {error}")))?;

    Ok(hex::encode(bytes))
}

fn hash_token(raw_token: &str) -> String {
    use sha2::{Digest, Sha256};

    hex::encode(Sha256::digest(raw_token.as_bytes()))
}
