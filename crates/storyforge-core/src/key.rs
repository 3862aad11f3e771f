use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

/// Derives a cache key (and client-visible id) from feature text.
///
/// Injected into the router state so tests can substitute their own
/// derivation. Any implementation must map identical input text to an
/// identical key within one process run; nothing more is promised.
pub type KeyFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Default key derivation: a non-cryptographic hash of the feature text.
///
/// Keys are stable within a run but not across restarts, and two distinct
/// features can in principle hash to the same key, in which case the second
/// request sees the first's cached entry. That matches the behavior this
/// replaces and is accepted.
pub fn default_key(feature: &str) -> String {
    let mut hasher = DefaultHasher::new();
    feature.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}
