//! Integration tests for the verification request workflow.

mod helpers;

use employnet_core::error::ErrorKind;
use employnet_entity::activity::ActivityType;
use employnet_entity::user::UserRole;
use employnet_entity::verification::VerificationStatus;

const SESSION_URL: &str = "https://verify.example/session/abc123";

#[tokio::test]
async fn test_approval_emails_the_member_with_the_session_url() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 0).await;
    let admin = app.create_user(UserRole::Admin, 0).await;
    let activity = app.create_activity(ActivityType::Verification, 200).await;

    let request = app
        .verifications
        .create(&member, activity.id)
        .await
        .expect("Create should succeed");

    let approved = app
        .verifications
        .approve(&admin, request.id, SESSION_URL)
        .await
        .expect("Approval should succeed");
    assert_eq!(approved.status, VerificationStatus::Ready);
    assert_eq!(approved.verification_url.as_deref(), Some(SESSION_URL));

    let member_mail: Vec<_> = app
        .outbox
        .messages()
        .into_iter()
        .filter(|m| m.to == member.email)
        .collect();
    assert_eq!(member_mail.len(), 1, "Member should get exactly one email");
    assert!(
        member_mail[0].body.contains(SESSION_URL),
        "Approval email must carry the session URL, got: {}",
        member_mail[0].body
    );
}

#[tokio::test]
async fn test_completion_credits_and_finishes_the_request() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 0).await;
    let admin = app.create_user(UserRole::Admin, 0).await;
    let activity = app.create_activity(ActivityType::Verification, 200).await;

    let request = app
        .verifications
        .create(&member, activity.id)
        .await
        .expect("Create should succeed");
    app.verifications
        .approve(&admin, request.id, SESSION_URL)
        .await
        .expect("Approval should succeed");

    let completed = app
        .verifications
        .complete(None, request.id)
        .await
        .expect("Completion should succeed");
    assert_eq!(completed.status, VerificationStatus::Completed);
    assert_eq!(app.balance_of(member.user_id).await, 200);

    // A redelivered completion event hits the terminal status
    let err = app
        .verifications
        .complete(None, request.id)
        .await
        .expect_err("Second completion should be rejected");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(app.balance_of(member.user_id).await, 200);
}

#[tokio::test]
async fn test_completion_finishes_request_when_credit_already_landed() {
    let app = helpers::TestApp::new().await;
    let member = app.create_user(UserRole::Member, 0).await;
    let admin = app.create_user(UserRole::Admin, 0).await;
    let activity = app.create_activity(ActivityType::Verification, 200).await;

    let request = app
        .verifications
        .create(&member, activity.id)
        .await
        .expect("Create should succeed");
    app.verifications
        .approve(&admin, request.id, SESSION_URL)
        .await
        .expect("Approval should succeed");

    // Credit lands first, as after a crash between credit and transition
    app.ledger
        .complete_activity(member.user_id, activity.id, None)
        .await
        .expect("Direct completion should credit");

    let completed = app
        .verifications
        .complete(None, request.id)
        .await
        .expect("Retry should still finish the request");
    assert_eq!(completed.status, VerificationStatus::Completed);
    assert_eq!(app.balance_of(member.user_id).await, 200);
}
