use crate::{
    apis::{AlertsApi, PredictionsApi, RoutesApi, SchedulesApi, StopsApi, VehiclesApi},
    auth::ApiKey,
    endpoint::Endpoint,
    error::{MbtaError, MbtaResult},
    query::{build_query, QueryArgs},
};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Default API origin.
pub const MBTA_V3_API_URL: &str = "https://api-v3.mbta.com";

/// Main MBTA v3 API client
///
/// Holds the HTTP client, the API origin, and the validated key. Immutable
/// after construction; clone it freely or share it across tasks.
#[derive(Clone)]
pub struct MbtaClient {
    client: Client,
    base_url: Url,
    auth: ApiKey,
}

impl MbtaClient {
    /// Create a client with an explicit API key.
    pub fn new(key: impl Into<String>) -> MbtaResult<Self> {
        Self::with_base_url(MBTA_V3_API_URL, ApiKey::new(key)?)
    }

    /// Create a client with the key from the `MBTA_API_KEY` environment
    /// variable.
    pub fn from_env() -> MbtaResult<Self> {
        Self::with_base_url(MBTA_V3_API_URL, ApiKey::from_env()?)
    }

    /// Create a client against a non-default origin, e.g. a local stub
    /// server.
    pub fn with_base_url(base_url: impl AsRef<str>, auth: ApiKey) -> MbtaResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Self::with_client(client, base_url, auth)
    }

    /// Create a client with a caller-supplied reqwest client.
    pub fn with_client(
        client: Client,
        base_url: impl AsRef<str>,
        auth: ApiKey,
    ) -> MbtaResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get Alerts API
    pub fn alerts(&self) -> AlertsApi<'_> {
        AlertsApi::new(self)
    }

    /// Get Routes API
    pub fn routes(&self) -> RoutesApi<'_> {
        RoutesApi::new(self)
    }

    /// Get Vehicles API
    pub fn vehicles(&self) -> VehiclesApi<'_> {
        VehiclesApi::new(self)
    }

    /// Get Stops API
    pub fn stops(&self) -> StopsApi<'_> {
        StopsApi::new(self)
    }

    /// Get Predictions API
    pub fn predictions(&self) -> PredictionsApi<'_> {
        PredictionsApi::new(self)
    }

    /// Get Schedules API
    pub fn schedules(&self) -> SchedulesApi<'_> {
        SchedulesApi::new(self)
    }

    /// Build the full request URL for an endpoint and its supplied filters.
    ///
    /// The query string is assembled by [`build_query`] and attached verbatim;
    /// the `?` is present even when no filters were supplied.
    pub fn request_url(&self, endpoint: &Endpoint, args: &QueryArgs) -> MbtaResult<Url> {
        let mut url = self.base_url.join(endpoint.path)?;
        url.set_query(Some(&build_query(endpoint, args)));
        Ok(url)
    }

    /// Issue one GET against an endpoint and decode the JSON:API document.
    ///
    /// The response is passed through unmodified. A decoded body that is
    /// empty in the falsy sense (`null`, `false`, `0`, `""`, `[]`, `{}`)
    /// fails with [`MbtaError::EmptyResponse`] even on HTTP success; a
    /// populated document with an empty `data` list is a success.
    pub async fn call(&self, endpoint: &Endpoint, args: &QueryArgs) -> MbtaResult<Value> {
        let url = self.request_url(endpoint, args)?;
        debug!("HTTP GET {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.auth.headers()?)
            .send()
            .await?
            .error_for_status()?;

        let document = response.json::<Value>().await?;
        if is_falsy(&document) {
            return Err(MbtaError::EmptyResponse);
        }

        Ok(document)
    }
}

/// Emptiness check applied to every decoded response body.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
