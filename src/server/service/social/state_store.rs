//! One-time OAuth `state` values.
//!
//! A state is issued when the consent URL is generated and consumed by the callback. States
//! live in memory for five minutes, keyed by `"{provider}_state:{state}"`, and are removed on
//! first use so a callback cannot be replayed.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::model::social::SocialProvider;

/// Time-to-live for issued states in seconds.
const STATE_TTL_SECONDS: u64 = 300;

const STATE_LENGTH: usize = 32;

#[derive(Clone)]
pub struct SocialStateStore {
    /// Storage key to expiry instant.
    states: Arc<RwLock<HashMap<String, Instant>>>,
    ttl: Duration,
}

impl SocialStateStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(STATE_TTL_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn key(provider: SocialProvider, state: &str) -> String {
        format!("{}_state:{}", provider.as_str(), state)
    }

    /// Generates and stores a fresh state for `provider`.
    ///
    /// Expired entries are dropped on the way so the map stays bounded by the request rate.
    pub async fn issue(&self, provider: SocialProvider) -> String {
        let state = random_string(STATE_LENGTH);
        let now = Instant::now();

        let mut states = self.states.write().await;
        states.retain(|_, expires_at| *expires_at > now);
        states.insert(Self::key(provider, &state), now + self.ttl);

        state
    }

    /// Validates and removes a state.
    ///
    /// # Returns
    /// - `true` - State was issued for this provider and has not expired
    /// - `false` - Unknown, already used, issued for another provider, or expired
    pub async fn consume(&self, provider: SocialProvider, state: &str) -> bool {
        let mut states = self.states.write().await;

        match states.remove(&Self::key(provider, state)) {
            Some(expires_at) => Instant::now() < expires_at,
            None => false,
        }
    }
}

impl Default for SocialStateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Random alphanumeric string from the thread-local generator.
pub fn random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests issuing and consuming a state.
    ///
    /// Expected: first consume succeeds, second fails
    #[tokio::test]
    async fn state_is_single_use() {
        let store = SocialStateStore::new();
        let state = store.issue(SocialProvider::Google).await;

        assert_eq!(state.len(), STATE_LENGTH);
        assert!(store.consume(SocialProvider::Google, &state).await);
        assert!(!store.consume(SocialProvider::Google, &state).await);
    }

    /// Tests that states are bound to their provider.
    ///
    /// Expected: consuming with another provider fails
    #[tokio::test]
    async fn state_is_scoped_to_provider() {
        let store = SocialStateStore::new();
        let state = store.issue(SocialProvider::Naver).await;

        assert!(!store.consume(SocialProvider::Kakao, &state).await);
        assert!(store.consume(SocialProvider::Naver, &state).await);
    }

    /// Tests state expiry.
    ///
    /// Expected: consume fails once the TTL has passed
    #[tokio::test]
    async fn state_expires() {
        let store = SocialStateStore::with_ttl(Duration::from_millis(20));
        let state = store.issue(SocialProvider::Kakao).await;

        sleep(Duration::from_millis(40)).await;

        assert!(!store.consume(SocialProvider::Kakao, &state).await);
    }

    /// Tests consuming a state that was never issued.
    ///
    /// Expected: false
    #[tokio::test]
    async fn unknown_state_fails() {
        let store = SocialStateStore::new();

        assert!(!store.consume(SocialProvider::Google, "made-up").await);
    }
}
