use crate::{
    error::FetchError,
    model::{Payload, WeatherReport},
};

/// Produce the full replacement content of the display region for a payload.
///
/// Error payloads render as exactly the upstream message. Reports render a
/// header line plus one labelled line per present field; absent fields are
/// omitted without leaving a gap.
pub fn render(payload: &Payload) -> String {
    match payload {
        Payload::Report(report) => render_report(report),
        Payload::Error(err) => err.error.message.clone(),
    }
}

/// Error text for a fetch that produced no payload at all.
pub fn render_failure(error: &FetchError) -> String {
    format!("Could not retrieve weather data: {error}")
}

fn render_report(report: &WeatherReport) -> String {
    let mut lines = Vec::new();

    match &report.location.country {
        Some(country) => lines.push(format!("{}, {}", report.location.name, country)),
        None => lines.push(report.location.name.clone()),
    }

    lines.push(format!("Temperature: {}°C", report.current.temp_c));
    lines.push(format!("Condition: {}", report.current.condition.text));

    if let Some(wind_kph) = report.current.wind_kph {
        lines.push(format!("Wind Speed: {wind_kph} km/h"));
    }
    if let Some(humidity) = report.current.humidity {
        lines.push(format!("Humidity: {humidity}%"));
    }
    if let Some(cloud) = report.current.cloud {
        lines.push(format!("Cloud Cover: {cloud}%"));
    }

    lines.join("\n")
}
