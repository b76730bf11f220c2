//! `weather [city…] [--imperial]` from the wttr.in JSON API.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::config::Config;
use crate::error::CliError;

pub const DEFAULT_CITY: &str = "Los Angeles";
pub const FETCH_FAILED: &str = "Failed to fetch weather data.";
pub const PARSE_FAILED: &str = "Could not parse weather data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

/// The part of the `format=j1` payload we print.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<TextValue>,
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "temp_F")]
    pub temp_f: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "FeelsLikeF")]
    pub feels_like_f: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    #[serde(rename = "windspeedMiles")]
    pub windspeed_miles: String,
    #[serde(rename = "winddir16Point")]
    pub winddir_16_point: String,
    pub humidity: String,
    pub pressure: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: String,
}

/// City words joined by spaces, or the default city.
pub fn city_name(words: &[String]) -> String {
    let joined = words.join(" ");
    if joined.trim().is_empty() {
        DEFAULT_CITY.to_string()
    } else {
        joined
    }
}

/// `<base>/<city>?format=j1`, with the city percent-encoded as one path segment.
pub fn weather_url(base: &str, city: &str) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("invalid weather URL {base:?}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("weather URL {base:?} cannot take a path"))?
        .pop_if_empty()
        .push(city);
    url.set_query(Some("format=j1"));
    Ok(url)
}

pub fn parse_report(body: &str) -> Result<CurrentCondition, CliError> {
    let report: WeatherReport = serde_json::from_str(body).map_err(|e| {
        debug!("weather payload rejected: {e}");
        CliError::Failed(PARSE_FAILED.to_string())
    })?;
    report
        .current_condition
        .into_iter()
        .next()
        .ok_or_else(|| CliError::Failed(PARSE_FAILED.to_string()))
}

pub fn format_report(city: &str, current: &CurrentCondition, units: Units) -> Vec<String> {
    let condition = current
        .weather_desc
        .first()
        .map(|d| d.value.trim())
        .unwrap_or("Unknown");

    let mut lines = vec![
        format!("Weather for {city}:"),
        format!("  Condition: {condition}"),
    ];
    match units {
        Units::Imperial => {
            lines.push(format!("  Temperature: {}°F", current.temp_f));
            lines.push(format!("  Feels like: {}°F", current.feels_like_f));
            lines.push(format!(
                "  Wind: {} mph {}",
                current.windspeed_miles, current.winddir_16_point
            ));
        }
        Units::Metric => {
            lines.push(format!("  Temperature: {}°C", current.temp_c));
            lines.push(format!("  Feels like: {}°C", current.feels_like_c));
            lines.push(format!(
                "  Wind: {} km/h {}",
                current.windspeed_kmph, current.winddir_16_point
            ));
        }
    }
    lines.push(format!("  Humidity: {}%", current.humidity));
    lines.push(format!("  Pressure: {} hPa", current.pressure));
    lines
}

async fn fetch(url: Url, timeout: Duration) -> reqwest::Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("order/", env!("CARGO_PKG_VERSION")))
        .build()?;
    client.get(url).send().await?.error_for_status()?.text().await
}

/// Fetch and format the report for `city`.
pub fn run(city: &[String], imperial: bool, config: &Config) -> Result<Vec<String>> {
    let city = city_name(city);
    let units = if imperial { Units::Imperial } else { Units::Metric };
    let url = weather_url(&config.weather_url, &city)?;
    debug!("GET {url}");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting HTTP runtime")?;
    let body = rt.block_on(fetch(url, config.http_timeout)).map_err(|e| {
        debug!("weather request failed: {e}");
        CliError::Failed(FETCH_FAILED.to_string())
    })?;

    let current = parse_report(&body)?;
    Ok(format_report(&city, &current, units))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "current_condition": [{
            "FeelsLikeC": "21", "FeelsLikeF": "70",
            "humidity": "60", "pressure": "1015",
            "temp_C": "22", "temp_F": "72",
            "weatherDesc": [{"value": "Partly cloudy "}],
            "winddir16Point": "WSW",
            "windspeedKmph": "13", "windspeedMiles": "8",
            "uvIndex": "5"
        }],
        "nearest_area": []
    }"#;

    #[test]
    fn city_defaults_and_joins() {
        assert_eq!(city_name(&[]), "Los Angeles");
        assert_eq!(city_name(&["New".into(), "York".into()]), "New York");
    }

    #[test]
    fn url_encodes_city_as_one_segment() {
        let url = weather_url("https://wttr.in", "New York").unwrap();
        assert_eq!(url.as_str(), "https://wttr.in/New%20York?format=j1");

        let url = weather_url("http://localhost:9000/api/", "São Paulo").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/S%C3%A3o%20Paulo?format=j1");

        let url = weather_url("https://wttr.in", "a/b").unwrap();
        assert_eq!(url.path(), "/a%2Fb");
    }

    #[test]
    fn metric_report() {
        let current = parse_report(SAMPLE).unwrap();
        let lines = format_report("Los Angeles", &current, Units::Metric);
        assert_eq!(
            lines,
            vec![
                "Weather for Los Angeles:",
                "  Condition: Partly cloudy",
                "  Temperature: 22°C",
                "  Feels like: 21°C",
                "  Wind: 13 km/h WSW",
                "  Humidity: 60%",
                "  Pressure: 1015 hPa",
            ]
        );
    }

    #[test]
    fn imperial_report() {
        let current = parse_report(SAMPLE).unwrap();
        let lines = format_report("Paris", &current, Units::Imperial);
        assert_eq!(lines[2], "  Temperature: 72°F");
        assert_eq!(lines[3], "  Feels like: 70°F");
        assert_eq!(lines[4], "  Wind: 8 mph WSW");
    }

    #[test]
    fn bad_payloads() {
        for body in ["", "<html>", r#"{"current_condition": []}"#, r#"{"x": 1}"#] {
            let err = parse_report(body).unwrap_err();
            assert_eq!(err, CliError::Failed(PARSE_FAILED.to_string()));
        }
    }
}
