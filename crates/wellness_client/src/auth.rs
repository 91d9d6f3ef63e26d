//! Process-lifetime cache for the lab provider's OAuth access token.
//!
//! Concurrent callers that find the cache empty may each fetch a token; the
//! token endpoint is idempotent so the last writer simply wins.

use secrecy::{ExposeSecret, SecretString};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Tokens are valid for two hours; keep them for ninety minutes.
pub const TOKEN_TTL: Duration = Duration::from_secs(90 * 60);

#[derive(Debug)]
struct CachedToken {
    value: SecretString,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct TokenCache {
    inner: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached token while it is still fresh.
    pub async fn get(&self) -> Option<SecretString> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|t| Instant::now() < t.expires_at)
            .map(|t| SecretString::new(t.value.expose_secret().into()))
    }

    pub async fn store(&self, token: SecretString, ttl: Duration) {
        let mut guard = self.inner.write().await;
        *guard = Some(CachedToken {
            value: token,
            expires_at: Instant::now() + ttl,
        });
    }

    pub async fn clear(&self) {
        self.inner.write().await.take();
    }
}
