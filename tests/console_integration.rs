mod helpers;

use serde_json::{Value, json};

use hostel_desk::api::handle_line;
use hostel_desk::portal::Portal;

use helpers::test_portal;

async fn send(portal: &Portal, seq: u64, request: Value) -> Value {
    let response = handle_line(portal, seq, &request.to_string()).await;
    serde_json::to_value(response).unwrap()
}

async fn student_session() -> Portal {
    let portal = test_portal();
    let resp = send(
        &portal,
        1,
        json!({"op": "login", "role": "student", "email": helpers::STUDENT_EMAIL, "password": helpers::STUDENT_PASSWORD}),
    )
    .await;
    assert_eq!(resp["ok"], true, "login failed: {resp}");
    portal
}

#[tokio::test]
async fn login_navigates_to_role_dashboard() {
    let portal = test_portal();
    let resp = send(
        &portal,
        7,
        json!({"op": "login", "role": "admin", "email": helpers::ADMIN_EMAIL, "password": helpers::ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(resp["seq"], 7);
    assert_eq!(resp["ok"], true);
    assert_eq!(resp["navigate"], "admin_dashboard");
    assert_eq!(resp["data"]["role"], "admin");
    assert!(resp.get("error").is_none());
}

#[tokio::test]
async fn bad_credentials_report_authentication_error() {
    let portal = test_portal();
    let resp = send(
        &portal,
        1,
        json!({"op": "login", "role": "admin", "email": "x@y.z", "password": "nope"}),
    )
    .await;
    assert_eq!(resp["ok"], false);
    assert_eq!(resp["error"]["kind"], "authentication");
    assert_eq!(
        resp["error"]["message"],
        "Invalid admin credentials. Please check your email and password."
    );
    assert!(resp.get("navigate").is_none());
}

#[tokio::test]
async fn malformed_line_is_validation_error() {
    let portal = test_portal();
    let resp = handle_line(&portal, 3, "{not json").await;
    let resp = serde_json::to_value(resp).unwrap();
    assert_eq!(resp["ok"], false);
    assert_eq!(resp["error"]["kind"], "validation");

    let resp = send(&portal, 4, json!({"op": "delete_everything"})).await;
    assert_eq!(resp["error"]["kind"], "validation");
}

#[tokio::test]
async fn submit_then_list() {
    let portal = student_session().await;

    let resp = send(
        &portal,
        2,
        json!({
            "op": "submit",
            "type": "complaint",
            "title": "Broken chair",
            "description": "Desk chair leg snapped",
            "category": "Furniture Damage"
        }),
    )
    .await;
    assert_eq!(resp["ok"], true, "submit failed: {resp}");
    assert_eq!(resp["navigate"], "dashboard");
    assert_eq!(resp["data"]["status"], "pending");
    assert_eq!(resp["data"]["priority"], "medium");
    assert_eq!(resp["data"]["student_id"], "STU042");

    let resp = send(&portal, 3, json!({"op": "list", "status": "all"})).await;
    assert_eq!(resp["data"]["scope"], "student");
    assert_eq!(resp["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(resp["data"]["counts"]["pending"], 1);
}

#[tokio::test]
async fn submit_with_wrong_type_field_is_rejected() {
    let portal = student_session().await;
    let resp = send(
        &portal,
        2,
        json!({"op": "submit", "type": "cleaning", "priority": "high"}),
    )
    .await;
    assert_eq!(resp["ok"], false);
    assert_eq!(resp["error"]["kind"], "validation");
}

#[tokio::test]
async fn admin_updates_status_by_id() {
    let portal = student_session().await;
    let resp = send(
        &portal,
        2,
        json!({"op": "submit", "type": "query", "title": "Meals", "description": "Breakfast times?", "category": "Meal Services"}),
    )
    .await;
    let id = resp["data"]["id"].as_str().unwrap().to_owned();

    send(
        &portal,
        3,
        json!({"op": "login", "role": "admin", "email": helpers::ADMIN_EMAIL, "password": helpers::ADMIN_PASSWORD}),
    )
    .await;
    let resp = send(
        &portal,
        4,
        json!({"op": "update_status", "id": id, "status": "in-progress"}),
    )
    .await;
    assert_eq!(resp["ok"], true, "update failed: {resp}");
    assert_eq!(resp["data"]["status"], "in-progress");

    let resp = send(
        &portal,
        5,
        json!({"op": "update_status", "id": "not-a-uuid", "status": "resolved"}),
    )
    .await;
    assert_eq!(resp["error"]["kind"], "validation");

    let resp = send(
        &portal,
        6,
        json!({"op": "update_status", "id": id, "status": "closed"}),
    )
    .await;
    assert_eq!(resp["error"]["kind"], "validation");
}

#[tokio::test]
async fn whoami_and_logout() {
    let portal = student_session().await;
    let resp = send(&portal, 2, json!({"op": "whoami"})).await;
    assert_eq!(resp["data"]["identity"]["role"], "student");
    assert_eq!(
        resp["data"]["permissions"],
        json!(["submission:create", "submission:read_own"])
    );

    let resp = send(&portal, 3, json!({"op": "logout"})).await;
    assert_eq!(resp["data"]["signed_out"], true);

    let resp = send(&portal, 4, json!({"op": "whoami"})).await;
    assert_eq!(resp["data"]["identity"], Value::Null);
    assert_eq!(resp["data"]["permissions"], json!([]));
}

#[tokio::test]
async fn categories_and_cancel() {
    let portal = test_portal();
    let resp = send(&portal, 1, json!({"op": "categories", "type": "query"})).await;
    let categories = resp["data"]["categories"].as_array().unwrap();
    assert!(categories.contains(&json!("Meal Services")));

    let resp = send(&portal, 2, json!({"op": "cancel", "form": "cleaning"})).await;
    assert_eq!(resp["data"]["cancelled"], false);

    let resp = send(&portal, 3, json!({"op": "cancel", "form": "feedback"})).await;
    assert_eq!(resp["error"]["kind"], "validation");
}

#[tokio::test]
async fn student_search_is_rejected_over_the_wire() {
    let portal = student_session().await;
    let resp = send(&portal, 2, json!({"op": "list", "search": "STU"})).await;
    assert_eq!(resp["ok"], false);
    assert_eq!(resp["error"]["kind"], "validation");
}
