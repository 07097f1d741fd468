//! Integration tests for the payout lifecycle.

mod helpers;

use employnet_core::error::ErrorKind;
use employnet_entity::payout::{PayoutAction, PayoutStatus};
use employnet_entity::user::UserRole;

#[tokio::test]
async fn test_rejection_refunds_the_requested_points() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 1000).await;
    let admin = app.create_user(UserRole::Admin, 0).await;
    app.link_bank_account(member.user_id).await;

    let payout = app
        .payouts
        .request_payout(&member, 400)
        .await
        .expect("Request should debit and succeed");
    assert_eq!(payout.status, PayoutStatus::Pending);
    assert_eq!(app.balance_of(member.user_id).await, 600);

    let rejected = app
        .payouts
        .process_payout(&admin, payout.id, PayoutAction::Reject, Some("invalid account"))
        .await
        .expect("Rejection should succeed");
    assert_eq!(rejected.status, PayoutStatus::Rejected);
    assert_eq!(app.balance_of(member.user_id).await, 1000);
}

#[tokio::test]
async fn test_terminal_payouts_are_frozen() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 500).await;
    let admin = app.create_user(UserRole::Admin, 0).await;
    app.link_bank_account(member.user_id).await;

    let payout = app
        .payouts
        .request_payout(&member, 200)
        .await
        .expect("Request should succeed");
    app.payouts
        .process_payout(&admin, payout.id, PayoutAction::Complete, None)
        .await
        .expect("Completion should succeed");

    // A completed payout must never be rejected into a refund
    let err = app
        .payouts
        .process_payout(&admin, payout.id, PayoutAction::Reject, None)
        .await
        .expect_err("Terminal payout should be frozen");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(app.balance_of(member.user_id).await, 300);
}

#[tokio::test]
async fn test_request_requires_covering_balance() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 100).await;
    app.link_bank_account(member.user_id).await;

    let err = app
        .payouts
        .request_payout(&member, 250)
        .await
        .expect_err("Uncovered request should be rejected");
    assert_eq!(err.kind, ErrorKind::InsufficientBalance);
    assert_eq!(app.balance_of(member.user_id).await, 100);
}
