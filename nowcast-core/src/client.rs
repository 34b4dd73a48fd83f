use reqwest::Client;
use tracing::{debug, warn};

use crate::{error::FetchError, model::Payload};

const WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(WEATHERAPI_BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self { http: Client::new(), base_url, api_key }
    }

    /// Fetch current conditions for a free-text location query.
    ///
    /// The query string is forwarded as-is; reqwest percent-encodes it into
    /// the URL. One GET, no retries.
    pub async fn current(&self, location: &str) -> Result<Payload, FetchError> {
        let url = format!("{}/current.json", self.base_url);

        debug!(%location, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location), ("aqi", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        // The API reports unknown locations with a 400 and an error body;
        // that body is still a renderable payload, so parse before looking
        // at the status.
        match serde_json::from_str::<Payload>(&body) {
            Ok(payload) => Ok(payload),
            Err(err) if status.is_success() => {
                warn!(%status, "response body matched no payload shape");
                Err(FetchError::UnexpectedBody(err))
            }
            Err(_) => Err(FetchError::Status { status, body: truncate_body(&body) }),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
