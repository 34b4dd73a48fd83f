use serde::Deserialize;

/// Parsed body of a completed WeatherAPI.com response.
///
/// The upstream API reports unrecognized locations and bad requests through
/// an `error` body (often with a non-2xx status) rather than a bare HTTP
/// failure, so both shapes are payloads. Classifying a payload as success
/// or error is the renderer's job.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Report(WeatherReport),
    Error(ApiError),
}

/// Current conditions for a resolved location.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub condition: Condition,
    pub wind_kph: Option<f64>,
    pub humidity: Option<u8>,
    pub cloud: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

/// Application-level error body, e.g. "No matching location found."
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
