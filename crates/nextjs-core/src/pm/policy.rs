//! Recommendation policy when a project gives no signal

use super::{probe_available, ManagerStatus, PackageManager};

/// Preference order: pnpm > yarn > bun > npm
const PREFERENCE_ORDER: [PackageManager; 4] = [
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Bun,
    PackageManager::Npm,
];

/// Pick the most preferred manager out of a set of probe results.
///
/// Falls back to npm when nothing is available at all. That fallback is a
/// last-resort default, not an availability claim - callers that intend to
/// actually run the manager must re-check availability.
pub fn recommend_from(available: &[ManagerStatus]) -> PackageManager {
    for preferred in PREFERENCE_ORDER {
        if available.iter().any(|s| s.available && s.manager == preferred) {
            return preferred;
        }
    }
    PackageManager::Npm
}

/// Probe the environment and return the recommended manager
pub async fn recommended_manager() -> PackageManager {
    recommend_from(&probe_available().await)
}
