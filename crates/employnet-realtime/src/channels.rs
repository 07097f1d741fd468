//! Channel name builders for event fan-out.

use uuid::Uuid;

/// Channel carrying events for a single user's dashboard.
pub fn user_channel(prefix: &str, user_id: Uuid) -> String {
    format!("{prefix}:user:{user_id}")
}

/// Channel carrying events for the admin dashboard.
pub fn admin_channel(prefix: &str) -> String {
    format!("{prefix}:admin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names() {
        let id = Uuid::nil();
        assert_eq!(
            user_channel("employnet:events", id),
            "employnet:events:user:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(admin_channel("employnet:events"), "employnet:events:admin");
    }
}
