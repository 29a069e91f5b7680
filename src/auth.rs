use crate::error::{MbtaError, MbtaResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "MBTA_API_KEY";

const API_KEY_HEADER: &str = "x-api-key";
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Validated MBTA v3 API key.
///
/// The key must be a non-empty string; validation happens once here and
/// never again on the request path.
#[derive(Debug, Clone)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// Wrap an explicit key, rejecting empty strings.
    pub fn new(key: impl Into<String>) -> MbtaResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(MbtaError::config(
                "The MBTA v3 API key must be a non-empty string. \
                 Get a free key from https://api-v3.mbta.com/",
            ));
        }
        Ok(Self { key })
    }

    /// Read the key from the `MBTA_API_KEY` environment variable.
    pub fn from_env() -> MbtaResult<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) => Self::new(key),
            Err(_) => Err(MbtaError::config(format!(
                "No MBTA v3 API key found. Pass one explicitly or set the {} \
                 environment variable. Get a free key from https://api-v3.mbta.com/",
                API_KEY_ENV
            ))),
        }
    }

    /// Explicit key wins; otherwise fall back to the environment.
    pub fn resolve(key: Option<impl Into<String>>) -> MbtaResult<Self> {
        match key {
            Some(key) => Self::new(key),
            None => Self::from_env(),
        }
    }

    /// Headers sent with every request: the key plus the JSON:API accept type.
    pub fn headers(&self) -> MbtaResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.key).map_err(|e| {
                MbtaError::config(format!("API key is not a valid header value: {}", e))
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        Ok(headers)
    }
}
