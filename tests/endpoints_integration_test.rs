use mbta_client::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a client pointed at a stub server
fn create_test_client(server: &MockServer) -> MbtaResult<MbtaClient> {
    MbtaClient::with_base_url(server.uri(), ApiKey::new("test-key")?)
}

/// Minimal JSON:API document used as the stub body
fn sample_document() -> serde_json::Value {
    json!({
        "data": [{"id": "Red", "type": "route", "attributes": {}}],
        "jsonapi": {"version": "1.0"}
    })
}

/// Every call carries the API key and the JSON:API accept header
#[tokio::test]
async fn test_required_headers() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(header("x-api-key", "test-key"))
        .and(header("accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let document = client.alerts().get(AlertsQuery::new()).await
        .expect("Failed to list alerts");

    assert!(document.get("data").is_some(), "Document should carry a data key");
}

#[tokio::test]
async fn test_alerts_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("filter[activity]", "BOARD,EXIT"))
        .and(query_param("filter[route]", "Red"))
        .and(query_param("filter[datetime]", "NOW"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = AlertsQuery::new()
        .activity(["BOARD", "EXIT"])
        .route("Red")
        .datetime("NOW");

    client.alerts().get(query).await.expect("Failed to list alerts");
}

#[tokio::test]
async fn test_routes_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("include", "stops,route_patterns"))
        .and(query_param("filter[type]", "0,1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = RoutesQuery::new()
        .include(["stops", "route_patterns"])
        .type_([0u8, 1]);

    client.routes().get(query).await.expect("Failed to list routes");
}

#[tokio::test]
async fn test_vehicles_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .and(query_param("filter[route]", "Red"))
        .and(query_param("filter[label]", "3247"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = VehiclesQuery::new().route("Red").label("3247");

    client.vehicles().get(query).await.expect("Failed to list vehicles");
}

#[tokio::test]
async fn test_stops_proximity_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .and(query_param("filter[latitude]", "42.3601"))
        .and(query_param("filter[longitude]", "-71.0589"))
        .and(query_param("filter[radius]", "0.01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = StopsQuery::new()
        .latitude(42.3601)
        .longitude(-71.0589)
        .radius(0.01);

    client.stops().get(query).await.expect("Failed to list stops");
}

#[tokio::test]
async fn test_predictions_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predictions"))
        .and(query_param("include", "stop,route"))
        .and(query_param("filter[stop]", "place-sstat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = PredictionsQuery::new()
        .include(["stop", "route"])
        .stop("place-sstat");

    client.predictions().get(query).await.expect("Failed to list predictions");
}

#[tokio::test]
async fn test_schedules_filters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schedules"))
        .and(query_param("filter[route]", "CR-Providence"))
        .and(query_param("filter[min_time]", "07:00"))
        .and(query_param("filter[max_time]", "09:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let query = SchedulesQuery::new()
        .route("CR-Providence")
        .min_time("07:00")
        .max_time("09:00");

    client.schedules().get(query).await.expect("Failed to list schedules");
}

/// The response document is passed through unmodified
#[tokio::test]
async fn test_document_passthrough() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    let body = json!({
        "data": [{"id": "Red", "type": "route"}],
        "included": [{"id": "place-sstat", "type": "stop"}],
        "meta": {"count": 1}
    });
    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let document = client.routes().get(RoutesQuery::new()).await
        .expect("Failed to list routes");

    assert_eq!(document, body, "Document should round-trip unmodified");
}
