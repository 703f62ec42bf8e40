mod helpers;

use std::sync::Arc;
use std::time::Duration;

use hostel_types::Role;

use hostel_desk::error::PortalError;
use hostel_desk::inflight::FormKind;
use hostel_desk::portal::Portal;

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, SteppingClock, complaint, query, test_config};

fn slow_portal() -> Portal {
    Portal::with_clock(test_config(Duration::from_secs(1)), Arc::new(SteppingClock::new()))
}

#[tokio::test(start_paused = true)]
async fn login_waits_for_the_delay() {
    let portal = slow_portal();
    let start = tokio::time::Instant::now();
    helpers::login_admin(&portal).await;
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn duplicate_submit_conflicts_while_pending() {
    let portal = slow_portal();
    helpers::login_student(&portal).await;

    let first = {
        let portal = portal.clone();
        tokio::spawn(async move { portal.create_submission(complaint("first")).await })
    };
    tokio::task::yield_now().await;
    assert!(portal.is_pending(FormKind::Complaint));

    let err = portal
        .create_submission(complaint("again"))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Conflict(_)));

    // a different form is not blocked
    portal.create_submission(query("other")).await.unwrap();

    first.await.unwrap().unwrap();
    assert_eq!(portal.submission_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancelled_submit_appends_nothing() {
    let portal = slow_portal();
    helpers::login_student(&portal).await;

    let pending = {
        let portal = portal.clone();
        tokio::spawn(async move { portal.create_submission(complaint("draft")).await })
    };
    tokio::task::yield_now().await;

    assert!(portal.cancel(FormKind::Complaint));
    let err = pending.await.unwrap().unwrap_err();
    assert!(matches!(err, PortalError::Cancelled));
    assert_eq!(portal.submission_count(), 0);
    assert!(!portal.is_pending(FormKind::Complaint));
}

#[tokio::test(start_paused = true)]
async fn logout_cancels_pending_login() {
    let portal = slow_portal();
    let pending = {
        let portal = portal.clone();
        tokio::spawn(async move {
            portal
                .authenticate(Role::Admin, ADMIN_EMAIL, ADMIN_PASSWORD)
                .await
        })
    };
    tokio::task::yield_now().await;
    assert!(portal.is_pending(FormKind::AdminLogin));

    portal.logout();
    assert!(matches!(
        pending.await.unwrap(),
        Err(PortalError::Cancelled)
    ));
    assert!(portal.current_identity().is_none());
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_every_form() {
    let portal = slow_portal();
    helpers::login_student(&portal).await;

    let submit = {
        let portal = portal.clone();
        tokio::spawn(async move { portal.create_submission(query("late")).await })
    };
    tokio::task::yield_now().await;

    portal.shutdown();
    assert!(matches!(submit.await.unwrap(), Err(PortalError::Cancelled)));
    assert_eq!(portal.submission_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn switching_identity_cancels_previous_pending_submit() {
    let portal = slow_portal();
    helpers::login_student(&portal).await;

    let admin_login = {
        let portal = portal.clone();
        tokio::spawn(async move {
            portal
                .authenticate(Role::Admin, ADMIN_EMAIL, ADMIN_PASSWORD)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(500)).await;

    let stale = {
        let portal = portal.clone();
        tokio::spawn(async move { portal.create_submission(complaint("stale")).await })
    };
    tokio::task::yield_now().await;
    assert!(portal.is_pending(FormKind::Complaint));

    admin_login.await.unwrap().unwrap();
    assert!(matches!(stale.await.unwrap(), Err(PortalError::Cancelled)));
    assert_eq!(portal.current_identity().map(|i| i.role()), Some(Role::Admin));
    assert_eq!(portal.submission_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn signing_in_again_as_same_student_keeps_pending_submit() {
    let portal = slow_portal();
    helpers::login_student(&portal).await;

    let submit = {
        let portal = portal.clone();
        tokio::spawn(async move { portal.create_submission(query("still mine")).await })
    };
    tokio::task::yield_now().await;

    helpers::login_student(&portal).await;
    let submission = submit.await.unwrap().unwrap();
    assert_eq!(submission.student_id(), "STU042");
    assert_eq!(portal.submission_count(), 1);
}
