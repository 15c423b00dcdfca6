//! HTTP bridge tests for interface_api

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_staff::{Designation, InMemoryStaffStore, Staff};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{StaffBuilder, TemporalFixtures, NIC_VECTORS};

fn config() -> ApiConfig {
    ApiConfig {
        fixed_date: Some(TemporalFixtures::today()),
        ..Default::default()
    }
}

fn server() -> TestServer {
    let store = Arc::new(InMemoryStaffStore::new());
    TestServer::new(create_router(store, config())).unwrap()
}

fn staff_json(staff: &Staff) -> Value {
    serde_json::to_value(staff).unwrap()
}

async fn add(server: &TestServer, staff: &Staff) -> Value {
    let response = server.post("/api/v1/staff").json(&staff_json(staff)).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_store() {
        let response = server().get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"]["adapter_id"], "in-memory-staff-store");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = server().get("/health").await;
        let id = response.header("x-request-id");
        assert!(id.to_str().unwrap().starts_with("REQ-"));
    }

    #[tokio::test]
    async fn test_office_info() {
        let body = server().get("/api/v1/office").await.json::<Value>();
        assert_eq!(body["office_name"], "Divisional Forest Office - Vavuniya");
        assert_eq!(body["retirement_age"], 60);
        assert_eq!(body["today"], "01-06-2024");
    }
}

// ============================================================================
// Request ID Tests
// ============================================================================

mod request_id_tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};
    use test_utils::RecordingStaffStore;

    fn recording_server() -> (TestServer, RecordingStaffStore) {
        let store = RecordingStaffStore::new();
        let server = TestServer::new(create_router(Arc::new(store.clone()), config())).unwrap();
        (server, store)
    }

    #[tokio::test]
    async fn test_client_request_id_reaches_store() {
        let (server, store) = recording_server();
        let staff = StaffBuilder::new().build();

        let response = server
            .post("/api/v1/staff")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("REQ-clerk-1"),
            )
            .json(&staff_json(&staff))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(response.header("x-request-id"), "REQ-clerk-1");
        let expected = vec![Some("REQ-clerk-1".to_string())];
        assert_eq!(store.correlation_ids("exists_appointment_number"), expected);
        assert_eq!(store.correlation_ids("create"), expected);
    }

    #[tokio::test]
    async fn test_generated_request_id_reaches_store() {
        let (server, store) = recording_server();

        let response = server.get("/api/v1/staff").await;

        let id = response.header("x-request-id").to_str().unwrap().to_string();
        assert!(id.starts_with("REQ-"));
        assert_eq!(store.correlation_ids("list_all"), vec![Some(id)]);
    }

    #[tokio::test]
    async fn test_each_request_carries_its_own_id() {
        let (server, store) = recording_server();

        let first = server.get("/api/v1/staff/statistics").await;
        let second = server.get("/api/v1/staff/statistics").await;

        let ids: Vec<Option<String>> = [first, second]
            .iter()
            .map(|r| Some(r.header("x-request-id").to_str().unwrap().to_string()))
            .collect();
        assert_ne!(ids[0], ids[1]);
        assert_eq!(store.correlation_ids("count"), ids);
    }
}

// ============================================================================
// Staff Tests
// ============================================================================

mod staff_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_normalizes_nic_and_derives_dates() {
        let server = server();
        let staff = StaffBuilder::new().with_nic("741922757V").build();
        let mut body = staff_json(&staff);
        body["nic_number"] = json!("741922757v");
        body["age"] = json!(0);

        let response = server.post("/api/v1/staff").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let created = response.json::<Value>();
        assert_eq!(created["nic_number"], "197419202757");
        assert_eq!(created["age"], 49);
        assert_eq!(created["date_of_retirement"], "11-07-2034");
        assert_eq!(created["designation"], "Beat forest officer");
        assert_eq!(created["designation_label"], "Beat Forest Officer");
        assert_eq!(created["basic_salary_display"], "Rs. 48,500.00");
        assert!(created["id"].as_str().unwrap().starts_with("STF-"));
    }

    #[tokio::test]
    async fn test_add_invalid_record_lists_errors() {
        let server = server();
        let staff = StaffBuilder::new()
            .with_contact_number("12345")
            .without_designation()
            .build();

        let response = server
            .post("/api/v1/staff")
            .json(&staff_json(&staff))
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "validation_error");
        let details: Vec<String> = serde_json::from_value(body["details"].clone()).unwrap();
        assert!(details.contains(&"Designation is required".to_string()));
        assert!(details.contains(&"Please enter a valid Sri Lankan phone number".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_appointment_number_conflicts() {
        let server = server();
        add(&server, &StaffBuilder::new().build()).await;

        let duplicate = StaffBuilder::new()
            .with_full_name("Amal Fernando")
            .with_nic("916980123V")
            .build();
        let response = server
            .post("/api/v1/staff")
            .json(&staff_json(&duplicate))
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "conflict");
    }

    #[tokio::test]
    async fn test_get_update_delete_round() {
        let server = server();
        let created = add(&server, &StaffBuilder::new().build()).await;
        let id = created["id"].as_str().unwrap().to_string();
        let path = format!("/api/v1/staff/{id}");

        let fetched = server.get(&path).await.json::<Value>();
        assert_eq!(fetched["full_name"], "Ruwan Kumara");

        let mut edited = fetched.clone();
        edited["full_name"] = json!("Ruwan Kumara Bandara");
        let updated = server.put(&path).json(&edited).await;
        assert_eq!(updated.status_code(), StatusCode::OK);
        assert_eq!(updated.json::<Value>()["full_name"], "Ruwan Kumara Bandara");

        let deleted = server.delete(&path).await;
        assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

        let missing = server.get(&path).expect_failure().await;
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let response = server()
            .get("/api/v1/staff/not-an-id")
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_filterable() {
        let server = server();
        add(
            &server,
            &StaffBuilder::new()
                .with_appointment_number("RFO-002")
                .with_full_name("Saman Silva")
                .with_designation(Designation::RangeForestOfficer)
                .build(),
        )
        .await;
        add(
            &server,
            &StaffBuilder::new()
                .with_appointment_number("GL-010")
                .with_full_name("Amal Fernando")
                .with_designation(Designation::GardenLabour)
                .build(),
        )
        .await;

        let all = server.get("/api/v1/staff").await.json::<Vec<Value>>();
        let names: Vec<_> = all.iter().map(|s| s["full_name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Amal Fernando", "Saman Silva"]);

        let officers = server
            .get("/api/v1/staff")
            .add_query_param("filter", "officers")
            .await
            .json::<Vec<Value>>();
        assert_eq!(officers.len(), 1);
        assert_eq!(officers[0]["appointment_number"], "RFO-002");

        let by_number_desc = server
            .get("/api/v1/staff")
            .add_query_param("sort", "appointment_number")
            .add_query_param("direction", "desc")
            .await
            .json::<Vec<Value>>();
        assert_eq!(by_number_desc[0]["appointment_number"], "RFO-002");
    }

    #[tokio::test]
    async fn test_search_and_statistics() {
        let server = server();
        add(&server, &StaffBuilder::new().build()).await;
        add(
            &server,
            &StaffBuilder::new()
                .with_appointment_number("GL-010")
                .with_full_name("Amal Fernando")
                .with_nic("916980123V")
                .with_designation(Designation::GardenLabour)
                .build(),
        )
        .await;

        let found = server
            .post("/api/v1/staff/search")
            .json(&json!({ "gender": "Female" }))
            .await
            .json::<Vec<Value>>();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["full_name"], "Amal Fernando");

        let by_nic = server
            .post("/api/v1/staff/search")
            .json(&json!({ "nic_number": "861234567v" }))
            .await
            .json::<Vec<Value>>();
        assert_eq!(by_nic.len(), 1);

        let stats = server.get("/api/v1/staff/statistics").await.json::<Value>();
        assert_eq!(stats["total"], 2);
        assert_eq!(stats["by_gender"][0]["gender"], "Female");
        assert_eq!(stats["by_gender"][0]["count"], 1);
    }

    #[tokio::test]
    async fn test_bulk_delete_reports_failures() {
        let server = server();
        let created = add(&server, &StaffBuilder::new().build()).await;
        let missing = core_kernel::StaffId::new().to_string();

        let outcome = server
            .post("/api/v1/staff/bulk-delete")
            .json(&json!({ "ids": [created["id"], missing] }))
            .await
            .json::<Value>();

        assert_eq!(outcome["deleted"].as_array().unwrap().len(), 1);
        assert_eq!(outcome["failed"][0]["id"], json!(missing));
    }

    #[tokio::test]
    async fn test_prepare_fills_draft_without_saving() {
        let server = server();
        let response = server
            .post("/api/v1/staff/prepare")
            .json(&json!({
                "nic_number": "916980123V",
                "date_of_birth": "17-07-1991",
                "increment_date": "1-3"
            }))
            .await;

        let body = response.json::<Value>();
        assert_eq!(body["staff"]["nic_number"], "199169800123");
        assert_eq!(body["staff"]["age"], 32);
        assert_eq!(body["staff"]["increment_date"], "01-03");
        assert_eq!(body["is_valid"], false);

        let all = server.get("/api/v1/staff").await.json::<Vec<Value>>();
        assert!(all.is_empty());
    }
}

// ============================================================================
// NIC and Date Helper Tests
// ============================================================================

mod helper_tests {
    use super::*;

    #[tokio::test]
    async fn test_normalize_reference_vectors() {
        let server = server();
        for vector in NIC_VECTORS.iter() {
            let body = server
                .post("/api/v1/nic/normalize")
                .json(&json!({ "nic": vector.legacy }))
                .await
                .json::<Value>();
            assert_eq!(body["normalized"], vector.modern);
        }
    }

    #[tokio::test]
    async fn test_normalize_rejects_with_reason() {
        let response = server()
            .post("/api/v1/nic/normalize")
            .json(&json!({ "nic": "741922757A" }))
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "invalid_nic");
        assert_eq!(body["details"][0], "INVALID_LETTER");
    }

    #[tokio::test]
    async fn test_decode_is_lenient() {
        let server = server();

        let good = server
            .post("/api/v1/nic/decode")
            .json(&json!({ "nic": "741922757V" }))
            .await
            .json::<Value>();
        assert_eq!(good["is_valid"], true);
        assert_eq!(good["birth_year"], 1974);
        assert_eq!(good["gender"], "Male");
        assert_eq!(good["birth_date"], "11-07-1974");
        assert_eq!(good["age"], 49);

        let bad = server
            .post("/api/v1/nic/decode")
            .json(&json!({ "nic": "garbage" }))
            .await;
        assert_eq!(bad.status_code(), StatusCode::OK);
        let bad = bad.json::<Value>();
        assert_eq!(bad["is_valid"], false);
        assert_eq!(bad["birth_date"], "");
        assert_eq!(bad["age"], 0);
    }

    #[tokio::test]
    async fn test_derive_dates() {
        let body = server()
            .post("/api/v1/dates/derive")
            .json(&json!({
                "date_of_birth": "1974-07-11",
                "date_of_first_appointment": "01-03-2000"
            }))
            .await
            .json::<Value>();

        assert_eq!(body["date_of_birth"], "11-07-1974");
        assert_eq!(body["age"], 49);
        assert_eq!(body["retirement_date"], "11-07-2034");
        assert_eq!(body["retires"], "In 10 years");
        assert_eq!(body["near_retirement"], false);
        assert_eq!(body["years_of_service"], 24);
    }

    #[tokio::test]
    async fn test_derive_dates_rejects_unreadable_birth_date() {
        let response = server()
            .post("/api/v1/dates/derive")
            .json(&json!({ "date_of_birth": "31-02-1974" }))
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_increment_date_helper() {
        let server = server();

        let good = server
            .post("/api/v1/dates/increment")
            .json(&json!({ "input": "0203" }))
            .await
            .json::<Value>();
        assert_eq!(good["formatted"], "02-03");
        assert_eq!(good["is_valid"], true);
        assert_eq!(good["next_occurrence"], "02-03-2025");

        let bad = server
            .post("/api/v1/dates/increment")
            .json(&json!({ "input": "3102" }))
            .await
            .json::<Value>();
        assert_eq!(bad["formatted"], "31-02");
        assert_eq!(bad["is_valid"], false);
        assert_eq!(bad["error"], "Invalid day for the selected month");
    }
}
