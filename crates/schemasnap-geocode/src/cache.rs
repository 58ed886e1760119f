//! Caching, rate-limited wrapper around any [`Geocoder`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::address::normalize_address;
use crate::error::GeocodeError;
use crate::rate_limit::FixedWindow;
use crate::types::GeocodeResult;
use crate::Geocoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct State {
    entries: HashMap<String, GeocodeResult>,
    limiter: FixedWindow,
    hits: u64,
    misses: u64,
}

/// Decorates a [`Geocoder`] with a normalized-address cache and a
/// fixed-window rate limit.
///
/// Cache hits never count against the limit. Failed lookups are not cached.
#[derive(Debug)]
pub struct CachedGeocoder<G> {
    inner: G,
    provider: String,
    state: Mutex<State>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Wrap `inner` with the default limit of one lookup per second.
    pub fn new(inner: G, provider: impl Into<String>) -> Self {
        Self::with_limiter(inner, provider, FixedWindow::default())
    }

    /// Wrap `inner` allowing `limit` lookups per `window`.
    pub fn with_rate_limit(
        inner: G,
        provider: impl Into<String>,
        limit: u32,
        window: Duration,
    ) -> Self {
        Self::with_limiter(inner, provider, FixedWindow::new(limit, window))
    }

    fn with_limiter(inner: G, provider: impl Into<String>, limiter: FixedWindow) -> Self {
        Self {
            inner,
            provider: provider.into(),
            state: Mutex::new(State {
                entries: HashMap::new(),
                limiter,
                hits: 0,
                misses: 0,
            }),
        }
    }

    pub fn clear_cache(&self) {
        self.lock().entries.clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.entries.len(),
            hits: state.hits,
            misses: state.misses,
        }
    }

    #[must_use]
    pub fn inner(&self) -> &G {
        &self.inner
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let key = normalize_address(address);
        if key.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }

        {
            let mut state = self.lock();
            if let Some(hit) = state.entries.get(&key).cloned() {
                state.hits += 1;
                tracing::debug!(address = %key, provider = %self.provider, "geocode cache hit");
                return Ok(hit);
            }
            state.misses += 1;

            if let Err(remaining) = state.limiter.try_acquire(Instant::now()) {
                let retry_after_ms = u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(
                    provider = %self.provider,
                    retry_after_ms,
                    "geocode rate limit exceeded"
                );
                return Err(GeocodeError::RateLimited {
                    provider: self.provider.clone(),
                    retry_after_ms,
                });
            }
        }

        let result = self.inner.geocode(address)?;
        self.lock().entries.insert(key, result.clone());
        Ok(result)
    }
}
