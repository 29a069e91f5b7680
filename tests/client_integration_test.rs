use mbta_client::prelude::*;
use mbta_client::API_KEY_ENV;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// End-to-end shape of one call: exact path, raw query string, and headers.
#[tokio::test]
async fn test_routes_request_wire_format() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(header("x-api-key", "X"))
        .and(header("accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = MbtaClient::with_base_url(server.uri(), ApiKey::new("X").unwrap())
        .expect("Failed to create client");
    let query = RoutesQuery::new().type_("2").include(["stops"]);
    assert_ok!(client.routes().get(query).await);

    let requests = server.received_requests().await.expect("Recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("include=stops&filter[type]=2"),
        "Query string should match the documented wire format exactly"
    );
}

/// With no filters the request still carries the trailing '?'
#[tokio::test]
async fn test_bare_query_on_the_wire() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = MbtaClient::with_base_url(server.uri(), ApiKey::new("X").unwrap())
        .expect("Failed to create client");
    assert_ok!(client.vehicles().get(VehiclesQuery::new()).await);

    let requests = server.received_requests().await.expect("Recording enabled");
    assert_eq!(requests[0].url.query(), Some(""));
}

/// Construction fails up front when no key is available anywhere
#[test]
fn test_missing_key_is_a_configuration_error() {
    std::env::remove_var(API_KEY_ENV);

    match MbtaClient::from_env() {
        Err(MbtaError::Config(message)) => {
            assert!(message.contains(API_KEY_ENV), "Error should name the variable");
        }
        Ok(_) => panic!("Construction should fail without a key"),
        Err(other) => panic!("Expected Config error, got {}", other),
    }
}

#[test]
fn test_empty_key_is_a_configuration_error() {
    match MbtaClient::new("") {
        Err(MbtaError::Config(_)) => {}
        Ok(_) => panic!("Construction should reject an empty key"),
        Err(other) => panic!("Expected Config error, got {}", other),
    }
}

/// The client is clonable and calls are independent
#[tokio::test]
async fn test_clone_shares_nothing_mutable() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = MbtaClient::with_base_url(server.uri(), ApiKey::new("X").unwrap())
        .expect("Failed to create client");
    let clone = client.clone();

    let client_alerts = client.alerts();
    let clone_alerts = clone.alerts();
    let (a, b) = tokio::join!(
        client_alerts.get(AlertsQuery::new()),
        clone_alerts.get(AlertsQuery::new()),
    );
    assert_ok!(a);
    assert_ok!(b);
}
