use mbta_client::prelude::*;

/// Small tour against the live MBTA v3 API.
///
/// Needs a key in MBTA_API_KEY; get a free one from https://api-v3.mbta.com/
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = MbtaClient::from_env()?;

    // 1. Commuter rail routes, with their stops embedded
    println!("Commuter rail routes:");
    let routes = client
        .routes()
        .get(RoutesQuery::new().type_("2").include(["stops"]))
        .await?;
    if let Some(data) = routes.get("data").and_then(|d| d.as_array()) {
        for route in data {
            let name = route
                .pointer("/attributes/long_name")
                .and_then(|n| n.as_str())
                .unwrap_or("?");
            println!("  {} ({})", name, route.get("id").and_then(|i| i.as_str()).unwrap_or("?"));
        }
    }

    // 2. Alerts currently active on the Red Line
    println!("\nActive Red Line alerts:");
    let alerts = client
        .alerts()
        .get(AlertsQuery::new().route("Red").datetime("NOW"))
        .await?;
    if let Some(data) = alerts.get("data").and_then(|d| d.as_array()) {
        if data.is_empty() {
            println!("  none");
        }
        for alert in data {
            let header = alert
                .pointer("/attributes/header")
                .and_then(|h| h.as_str())
                .unwrap_or("?");
            println!("  - {}", header);
        }
    }

    // 3. Next departures from South Station
    println!("\nNext departures from South Station:");
    let predictions = client
        .predictions()
        .get(
            PredictionsQuery::new()
                .stop("place-sstat")
                .include(["route"]),
        )
        .await?;
    if let Some(data) = predictions.get("data").and_then(|d| d.as_array()) {
        for prediction in data.iter().take(5) {
            let departure = prediction
                .pointer("/attributes/departure_time")
                .and_then(|t| t.as_str())
                .unwrap_or("-");
            println!("  departs {}", departure);
        }
    }

    Ok(())
}
