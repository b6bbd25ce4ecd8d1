//! API integration tests
//!
//! These tests need a running server with a migrated database and an
//! admin/admin staff account. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated client
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

async fn create_client_record(client: &Client, token: &str, last_name: &str) -> Value {
    let response = client
        .post(format!("{}/clients", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "first_name": "Teva",
            "last_name": last_name,
            "email": "teva@example.pf"
        }))
        .send()
        .await
        .expect("Failed to create client");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse client")
}

async fn create_vehicle_record(client: &Client, token: &str, daily_rate: i64) -> Value {
    let response = client
        .post(format!("{}/vehicles", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "brand": "Toyota",
            "model": "Yaris",
            "license_plate": format!("TEST-{}", rand_suffix()),
            "daily_rate": daily_rate
        }))
        .send()
        .await
        .expect("Failed to create vehicle");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse vehicle")
}

fn rand_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_request_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/clients", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_client_crud() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let created = create_client_record(&client, &token, "Tchoung").await;
    let id = created["id"].as_str().expect("No client id");

    let response = client
        .get(format!("{}/clients/{}", BASE_URL, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get client");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/clients/{}", BASE_URL, id))
        .bearer_auth(&token)
        .json(&json!({ "city": "Uturoa" }))
        .send()
        .await
        .expect("Failed to update client");
    let updated: Value = response.json().await.expect("Failed to parse");
    assert_eq!(updated["city"], "Uturoa");
    // Untouched fields survive a partial update
    assert_eq!(updated["last_name"], "Tchoung");

    let response = client
        .delete(format!("{}/clients/{}", BASE_URL, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete client");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_reservation_amounts_computed_server_side() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Tamatoa").await;
    let vehicle = create_vehicle_record(&client, &token, 15000).await;

    // 3 days at 15000/day with 10% tax
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-09-10T00:00:00Z",
            "end_date": "2025-09-13T00:00:00Z",
            "tax_rate": 10
        }))
        .send()
        .await
        .expect("Failed to create reservation");

    assert_eq!(response.status(), 201);
    let reservation: Value = response.json().await.expect("Failed to parse");

    assert_eq!(reservation["subtotal"], json!("45000"));
    assert_eq!(reservation["tax_amount"], json!("4500"));
    assert_eq!(reservation["total_amount"], json!("49500"));
    assert_eq!(reservation["vehicle_daily_rate"], json!("15000"));
}

#[tokio::test]
#[ignore]
async fn test_reservation_equal_dates_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Teriitahi").await;
    let vehicle = create_vehicle_record(&client, &token, 9000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-09-10T00:00:00Z",
            "end_date": "2025-09-10T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_invoice_numbers_are_sequential() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Maraea").await;
    let vehicle = create_vehicle_record(&client, &token, 12000).await;

    let mut numbers = Vec::new();
    for day in [1, 5] {
        let response = client
            .post(format!("{}/reservations", BASE_URL))
            .bearer_auth(&token)
            .json(&json!({
                "client_id": rental_client["id"],
                "vehicle_id": vehicle["id"],
                "start_date": format!("2025-10-0{}T00:00:00Z", day),
                "end_date": format!("2025-10-0{}T00:00:00Z", day + 2)
            }))
            .send()
            .await
            .expect("Failed to create reservation");
        let reservation: Value = response.json().await.expect("Failed to parse");

        let response = client
            .post(format!("{}/documents", BASE_URL))
            .bearer_auth(&token)
            .json(&json!({
                "doc_type": "invoice",
                "client_id": rental_client["id"],
                "reservation_ids": [reservation["id"]]
            }))
            .send()
            .await
            .expect("Failed to compose document");

        assert_eq!(response.status(), 201);
        let document: Value = response.json().await.expect("Failed to parse");
        numbers.push(document["number"].as_str().expect("No number").to_string());
    }

    // Both numbers follow the F{year}-{seq} scheme and the second is +1
    assert!(numbers[0].starts_with('F'));
    let (prefix_a, seq_a) = numbers[0].split_at(numbers[0].len() - 4);
    let (prefix_b, seq_b) = numbers[1].split_at(numbers[1].len() - 4);
    assert_eq!(prefix_a, prefix_b);
    assert_eq!(
        seq_b.parse::<i32>().unwrap(),
        seq_a.parse::<i32>().unwrap() + 1
    );
}

#[tokio::test]
#[ignore]
async fn test_compose_with_empty_selection_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Vaitiare").await;

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "quote",
            "client_id": rental_client["id"],
            "reservation_ids": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    // Rejected before any number is allocated
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_billed_reservation_cannot_be_repriced() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Heimata").await;
    let vehicle = create_vehicle_record(&client, &token, 15000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-11-01T00:00:00Z",
            "end_date": "2025-11-04T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "invoice",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    assert_eq!(response.status(), 201);
    let document: Value = response.json().await.expect("Failed to parse");
    let billed_total = document["total_amount"].clone();

    // Date changes are refused once the reservation is on a document
    let response = client
        .put(format!("{}/reservations/{}", BASE_URL, reservation["id"].as_str().unwrap()))
        .bearer_auth(&token)
        .json(&json!({ "end_date": "2025-11-10T00:00:00Z" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // The document snapshot is untouched
    let response = client
        .get(format!("{}/documents/{}", BASE_URL, document["id"].as_str().unwrap()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get document");
    let fetched: Value = response.json().await.expect("Failed to parse");
    assert_eq!(fetched["total_amount"], billed_total);
}

#[tokio::test]
#[ignore]
async fn test_payment_marks_invoice_paid() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Moana").await;
    let vehicle = create_vehicle_record(&client, &token, 10000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-12-01T00:00:00Z",
            "end_date": "2025-12-03T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "invoice",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    let document: Value = response.json().await.expect("Failed to parse");
    let document_id = document["id"].as_str().unwrap().to_string();

    // draft -> sent before payment
    let response = client
        .put(format!("{}/documents/{}/status", BASE_URL, document_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "sent" }))
        .send()
        .await
        .expect("Failed to update status");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/documents/{}/payments", BASE_URL, document_id))
        .bearer_auth(&token)
        .json(&json!({
            "amount": document["total_amount"],
            "payment_method": "bank_transfer"
        }))
        .send()
        .await
        .expect("Failed to record payment");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/documents/{}", BASE_URL, document_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get document");
    let fetched: Value = response.json().await.expect("Failed to parse");
    assert_eq!(fetched["status"], "paid");
}

#[tokio::test]
#[ignore]
async fn test_draft_invoice_payment_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Heiata").await;
    let vehicle = create_vehicle_record(&client, &token, 10000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-12-05T00:00:00Z",
            "end_date": "2025-12-07T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "invoice",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    let document: Value = response.json().await.expect("Failed to parse");

    // Still a draft: no payments yet
    let response = client
        .post(format!("{}/documents/{}/payments", BASE_URL, document["id"].as_str().unwrap()))
        .bearer_auth(&token)
        .json(&json!({
            "amount": document["total_amount"],
            "payment_method": "cash"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_cancelled_document_cannot_be_sent() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Tehani").await;
    let vehicle = create_vehicle_record(&client, &token, 9000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-12-10T00:00:00Z",
            "end_date": "2025-12-12T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "quote",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    let document: Value = response.json().await.expect("Failed to parse");
    let document_id = document["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/documents/{}/status", BASE_URL, document_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .expect("Failed to update status");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/documents/{}/send", BASE_URL, document_id))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_out_of_range_tax_rate_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Vaite").await;
    let vehicle = create_vehicle_record(&client, &token, 15000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-12-15T00:00:00Z",
            "end_date": "2025-12-18T00:00:00Z",
            "tax_rate": "-50"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_paid_invoice_cannot_be_cancelled() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Rahiti").await;
    let vehicle = create_vehicle_record(&client, &token, 8000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-12-10T00:00:00Z",
            "end_date": "2025-12-12T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "invoice",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    let document: Value = response.json().await.expect("Failed to parse");
    let document_id = document["id"].as_str().unwrap().to_string();

    for status in ["sent", "paid"] {
        let response = client
            .put(format!("{}/documents/{}/status", BASE_URL, document_id))
            .bearer_auth(&token)
            .json(&json!({ "status": status }))
            .send()
            .await
            .expect("Failed to update status");
        assert!(response.status().is_success());
    }

    let response = client
        .put(format!("{}/documents/{}/status", BASE_URL, document_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_document_render() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let rental_client = create_client_record(&client, &token, "Poema").await;
    let vehicle = create_vehicle_record(&client, &token, 11000).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "client_id": rental_client["id"],
            "vehicle_id": vehicle["id"],
            "start_date": "2025-08-01T00:00:00Z",
            "end_date": "2025-08-03T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    let reservation: Value = response.json().await.expect("Failed to parse");

    let response = client
        .post(format!("{}/documents", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "doc_type": "quote",
            "client_id": rental_client["id"],
            "reservation_ids": [reservation["id"]]
        }))
        .send()
        .await
        .expect("Failed to compose document");
    let document: Value = response.json().await.expect("Failed to parse");

    let response = client
        .get(format!("{}/documents/{}/render", BASE_URL, document["id"].as_str().unwrap()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to render document");

    assert!(response.status().is_success());
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("DEVIS"));
    assert!(html.contains(document["number"].as_str().unwrap()));
}
