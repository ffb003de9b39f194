//! Domain Services
//!
//! Pure domain logic: provider body normalization and completion math.

use serde::Deserialize;

use crate::domain::entities::WeatherPayload;
use crate::error::{WeatherError, WeatherResult};

/// Fields the provider body must carry
#[derive(Debug, Deserialize)]
struct ProviderReport {
    id: ReportedCityId,
    main: ProviderMain,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
    humidity: f64,
}

/// The provider sends `id` as a number; some mirrors send it as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReportedCityId {
    Number(i64),
    Text(String),
}

impl ReportedCityId {
    fn into_i64(self) -> WeatherResult<i64> {
        match self {
            ReportedCityId::Number(id) => Ok(id),
            ReportedCityId::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| WeatherError::MalformedBody(format!("city id {raw:?} is not an integer"))),
        }
    }
}

/// Map a provider body to the stored payload shape
pub fn normalize_report(body: &serde_json::Value) -> WeatherResult<WeatherPayload> {
    let report = ProviderReport::deserialize(body)
        .map_err(|e| WeatherError::MalformedBody(e.to_string()))?;

    Ok(WeatherPayload {
        city_id: report.id.into_i64()?,
        temperature_celsius: report.main.temp,
        humidity: report.main.humidity.round() as i64,
    })
}

/// `completed / total_requested * 100`; a zero denominator yields `0.0`
pub fn completion_percentage(completed: usize, total_requested: u32) -> f64 {
    if total_requested == 0 {
        return 0.0;
    }
    completed as f64 / f64::from(total_requested) * 100.0
}
