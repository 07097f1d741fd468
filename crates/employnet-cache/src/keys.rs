//! Cache key builders for all Employ-Net cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use uuid::Uuid;

/// Prefix applied to all Employ-Net cache keys.
const PREFIX: &str = "employnet";

// ── Activity keys ──────────────────────────────────────────

/// Cache key for the list of active activities shown to members.
pub fn activities_active() -> String {
    format!("{PREFIX}:activities:active")
}

/// Cache key for a user's recent activity feed.
pub fn recent_activities(user_id: Uuid) -> String {
    format!("{PREFIX}:activities:recent:{user_id}")
}

// ── Stats keys ─────────────────────────────────────────────

/// Cache key for a user's dashboard statistics.
pub fn user_stats(user_id: Uuid) -> String {
    format!("{PREFIX}:stats:user:{user_id}")
}

/// Cache key for platform-wide payout totals (admin dashboard).
pub fn payout_stats() -> String {
    format!("{PREFIX}:stats:payouts")
}

/// Cache key for a user's payout totals.
pub fn payout_stats_for_user(user_id: Uuid) -> String {
    format!("{PREFIX}:stats:payouts:{user_id}")
}

// ── Payout keys ────────────────────────────────────────────

/// Cache key for a user's payout history listing.
pub fn payout_history(user_id: Uuid) -> String {
    format!("{PREFIX}:payouts:history:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_activities_key() {
        assert_eq!(activities_active(), "employnet:activities:active");
    }

    #[test]
    fn test_user_stats_key() {
        let id = Uuid::nil();
        assert_eq!(
            user_stats(id),
            "employnet:stats:user:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_payout_keys_are_distinct() {
        let id = Uuid::nil();
        assert_ne!(payout_stats(), payout_stats_for_user(id));
        assert_ne!(payout_stats_for_user(id), payout_history(id));
    }
}
