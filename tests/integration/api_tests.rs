//! Endpoint behavior tests: seeded reads, filters, and 404s.

use axum::http::StatusCode;

use super::common::{get_json, test_app, TEST_API_KEY};

// ============================================================
// Public Endpoints
// ============================================================

#[tokio::test]
async fn status_returns_healthy_without_auth() {
    let (status, json) = get_json(test_app(), "/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["environment"], "test");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn root_lists_available_endpoints() {
    let (status, json) = get_json(test_app(), "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "SaaS Demo API");
    assert_eq!(json["endpoints"]["status"], "/status");
    assert_eq!(json["endpoints"]["devices"], "/devices");
    assert_eq!(json["endpoints"]["users"], "/users");
    assert_eq!(json["endpoints"]["tickets"], "/tickets");
    assert_eq!(json["endpoints"]["policies"], "/policies");
}

// ============================================================
// Devices
// ============================================================

#[tokio::test]
async fn list_devices_returns_seed_data_in_order() {
    let (status, json) = get_json(test_app(), "/devices", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    let devices = json.as_array().unwrap();
    assert_eq!(devices.len(), 3);
    assert_eq!(devices[0]["id"], "dev-001");
    assert_eq!(devices[0]["type"], "server");
    assert_eq!(devices[0]["status"], "active");
    assert_eq!(devices[1]["id"], "dev-002");
    assert_eq!(devices[2]["id"], "dev-003");
}

#[tokio::test]
async fn get_device_returns_the_seeded_record() {
    let (status, json) = get_json(test_app(), "/devices/dev-002", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "dev-002");
    assert_eq!(json["name"], "Database Instance");
    assert_eq!(json["type"], "database");
}

#[tokio::test]
async fn get_unknown_device_returns_404() {
    let (status, json) = get_json(test_app(), "/devices/dev-999", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Device not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

// ============================================================
// Users
// ============================================================

#[tokio::test]
async fn list_users_returns_seed_data() {
    let (status, json) = get_json(test_app(), "/users", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["email"], "john@example.com");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[2]["name"], "Bob Johnson");
}

#[tokio::test]
async fn get_unknown_user_returns_404() {
    let (status, json) = get_json(test_app(), "/users/user-999", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
}

// ============================================================
// Tickets
// ============================================================

#[tokio::test]
async fn list_tickets_without_filter_returns_all() {
    let (status, json) = get_json(test_app(), "/tickets", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    let tickets = json.as_array().unwrap();
    assert_eq!(tickets.len(), 3);
    assert_eq!(tickets[0]["status"], "open");
    assert_eq!(tickets[0]["priority"], "medium");
}

#[tokio::test]
async fn ticket_filter_open_matches_all_seeded_tickets() {
    let (status, json) = get_json(test_app(), "/tickets?status=open", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn ticket_filter_closed_returns_empty_list() {
    let (status, json) = get_json(test_app(), "/tickets?status=closed", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn ticket_filter_is_case_sensitive() {
    let (status, json) = get_json(test_app(), "/tickets?status=Open", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_ticket_returns_404() {
    let (status, json) = get_json(test_app(), "/tickets/ticket-999", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Ticket not found");
}

// ============================================================
// Policies
// ============================================================

#[tokio::test]
async fn list_policies_returns_seed_data() {
    let (status, json) = get_json(test_app(), "/policies", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    let policies = json.as_array().unwrap();
    assert_eq!(policies.len(), 2);
    assert_eq!(policies[0]["id"], "pol-001");
    assert_eq!(policies[0]["enabled"], true);
    assert_eq!(
        policies[0]["rules"],
        serde_json::json!(["Require MFA", "Password complexity", "Session timeout"])
    );
}

#[tokio::test]
async fn get_policy_returns_the_seeded_record() {
    let (status, json) = get_json(test_app(), "/policies/pol-002", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Data Retention");
    assert_eq!(
        json["rules"],
        serde_json::json!(["Backup daily", "Archive after 1 year", "Delete after 7 years"])
    );
}

#[tokio::test]
async fn get_unknown_policy_returns_404() {
    let (status, json) = get_json(test_app(), "/policies/pol-999", Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Policy not found");
}

// ============================================================
// Idempotency
// ============================================================

#[tokio::test]
async fn repeated_list_calls_return_identical_sequences() {
    let app = test_app();

    let (_, first) = get_json(app.clone(), "/tickets", Some(TEST_API_KEY)).await;
    let (_, second) = get_json(app, "/tickets", Some(TEST_API_KEY)).await;

    assert_eq!(first, second);
}
