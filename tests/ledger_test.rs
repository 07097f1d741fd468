//! Integration tests for points ledger credits and debits.

mod helpers;

use uuid::Uuid;

use employnet_core::error::ErrorKind;
use employnet_entity::activity::ActivityType;
use employnet_entity::user::UserRole;

#[tokio::test]
async fn test_completion_credits_once_then_conflicts() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 0).await;
    let activity = app.create_activity(ActivityType::Video, 50).await;

    app.ledger
        .complete_activity(member.user_id, activity.id, None)
        .await
        .expect("First completion should credit");
    assert_eq!(app.balance_of(member.user_id).await, 50);

    // A redelivered webhook hits the completed status
    let err = app
        .ledger
        .complete_activity(member.user_id, activity.id, None)
        .await
        .expect_err("Second completion should be rejected");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(app.balance_of(member.user_id).await, 50);
}

#[tokio::test]
async fn test_completion_for_unknown_user_is_not_found() {
    let app = helpers::TestApp::new().await;
    let activity = app.create_activity(ActivityType::Survey, 25).await;

    let err = app
        .ledger
        .complete_activity(Uuid::new_v4(), activity.id, None)
        .await
        .expect_err("Unknown user should not be creditable");
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The activity stays completable for the real owner
    let activity = app
        .activities
        .find_by_id(activity.id)
        .await
        .expect("Failed to reload activity")
        .expect("Activity missing");
    assert!(activity.is_completable());
}

#[tokio::test]
async fn test_redemption_never_overdraws_the_balance() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 100).await;

    let err = app
        .ledger
        .redeem(&member, 150, "Gift card")
        .await
        .expect_err("Overdraw should be rejected");
    assert_eq!(err.kind, ErrorKind::InsufficientBalance);
    assert_eq!(app.balance_of(member.user_id).await, 100);

    app.ledger
        .redeem(&member, 100, "Gift card")
        .await
        .expect("Exact-balance redemption should succeed");
    assert_eq!(app.balance_of(member.user_id).await, 0);

    let err = app
        .ledger
        .redeem(&member, 1, "Sticker")
        .await
        .expect_err("Empty balance should reject any debit");
    assert_eq!(err.kind, ErrorKind::InsufficientBalance);
}

#[tokio::test]
async fn test_stats_refresh_after_completion() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 0).await;
    let activity = app.create_activity(ActivityType::Video, 75).await;

    // Prime the cache with the empty aggregates
    let before = app
        .stats
        .user_stats(&member)
        .await
        .expect("Failed to load stats");
    assert_eq!(before.total_earned, 0);
    assert_eq!(before.completed_count, 0);

    app.ledger
        .complete_activity(member.user_id, activity.id, None)
        .await
        .expect("Completion should credit");

    // The completion invalidated the cached entry
    let after = app
        .stats
        .user_stats(&member)
        .await
        .expect("Failed to reload stats");
    assert_eq!(after.points_balance, 75);
    assert_eq!(after.total_earned, 75);
    assert_eq!(after.completed_count, 1);
}
