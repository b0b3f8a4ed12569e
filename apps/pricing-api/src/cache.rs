//! # Response Cache
//!
//! TTL cache decorating the pure engine call.
//!
//! ## Why outside the engine?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handler ──► cache.get(key) ── hit ──► cached breakdown                 │
//! │                  │                                                      │
//! │                 miss                                                    │
//! │                  ▼                                                      │
//! │          engine::calculate (pure) ──► cache.insert ──► breakdown        │
//! │                                                                         │
//! │  The engine stays deterministic and I/O-free; drop this module and     │
//! │  every response is still byte-identical, just slower on repeats.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys hash the full validated order input, so two requests share an
//! entry only when the engine would produce the identical breakdown
//! anyway. Rules can change between calculations, which is why entries
//! expire after a short TTL instead of living until restart.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use tally_core::types::{OrderInput, PricingBreakdown};

/// A cached breakdown with its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: Instant,
    breakdown: PricingBreakdown,
}

/// Concurrent TTL cache for pricing breakdowns.
///
/// Cheap to clone: all clones share the same map. Expired entries are
/// evicted lazily on lookup; with a short TTL and hash keys the map
/// stays small without a sweeper task.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        ResponseCache {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Returns the cached breakdown for `key` if present and fresh.
    pub fn get(&self, key: &str) -> Option<PricingBreakdown> {
        let entry = self.entries.get(key)?;

        if entry.stored_at.elapsed() >= self.ttl {
            drop(entry);
            self.entries.remove(key);
            return None;
        }

        Some(entry.breakdown.clone())
    }

    /// Stores a breakdown under `key`.
    pub fn insert(&self, key: String, breakdown: PricingBreakdown) {
        self.entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                breakdown,
            },
        );
    }

    /// Number of live entries (for diagnostics; may include expired ones
    /// not yet evicted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the cache key for a validated order.
///
/// SHA-256 over the canonical JSON encoding of the input. Identical
/// orders always serialize identically (struct field order is fixed), so
/// the key is stable across requests and restarts.
pub fn cache_key(order: &OrderInput) -> String {
    // Serializing a plain struct of numbers and strings cannot fail.
    let canonical = serde_json::to_vec(order).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    hex::encode(hasher.finalize())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(subtotal: f64) -> OrderInput {
        OrderInput {
            subtotal,
            weight: 1.0,
            destination: None,
            products: Some(vec!["Laptop".into()]),
        }
    }

    fn breakdown() -> PricingBreakdown {
        PricingBreakdown {
            subtotal: 250.0,
            tax_rate: 5.0,
            tax_amount: 12.5,
            discount_rate: 0.0,
            discount_amount: 0.0,
            delivery_fee: 0.0,
            delivery_distance: 0.0,
            final_amount: 262.5,
        }
    }

    #[test]
    fn test_key_is_stable_for_identical_input() {
        assert_eq!(cache_key(&order(250.0)), cache_key(&order(250.0)));
    }

    #[test]
    fn test_key_differs_for_different_input() {
        assert_ne!(cache_key(&order(250.0)), cache_key(&order(250.01)));
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("k".into(), breakdown());

        assert_eq!(cache.get("k"), Some(breakdown()));
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("k".into(), breakdown());

        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nope"), None);
    }
}
