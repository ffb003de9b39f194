//! OpenWeather Provider Client
//!
//! Thin GET wrapper over the current-weather endpoint. Retries and caching
//! are deliberately absent; the job decides what a failure means.

use crate::application::config::WeatherConfig;
use crate::domain::provider::WeatherProvider;
use crate::domain::value_objects::CityId;
use crate::error::{WeatherError, WeatherResult};
use reqwest::Client;

/// Longest provider body echoed into an error
const MAX_ERROR_BODY: usize = 200;

/// OpenWeather HTTP client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> WeatherResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.provider_url.clone(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
        })
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city_id: CityId) -> WeatherResult<serde_json::Value> {
        let city = city_id.to_string();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("id", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                city_id = %city_id,
                status = status.as_u16(),
                "Weather provider returned an error status"
            );
            return Err(WeatherError::ProviderStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::MalformedBody(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenWeatherClient {
        let config = WeatherConfig {
            provider_url: format!("{}/data/2.5/weather", server.uri()),
            api_key: "test-key".to_string(),
            request_timeout: Duration::from_secs(2),
            ..WeatherConfig::default()
        };
        OpenWeatherClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_city_key_and_units() {
        let server = MockServer::start().await;
        let body = json!({"id": 12345, "main": {"temp": 35, "humidity": 48}});

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("id", "12345"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let fetched = client_for(&server).fetch(CityId::new(12345)).await.unwrap();
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(CityId::new(1)).await.unwrap_err();
        match err {
            WeatherError::ProviderStatus { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(CityId::new(1)).await.unwrap_err();
        assert!(matches!(err, WeatherError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_provider() {
        let config = WeatherConfig {
            // Port 9 (discard) on localhost is not expected to accept HTTP.
            provider_url: "http://127.0.0.1:9/data/2.5/weather".to_string(),
            request_timeout: Duration::from_secs(2),
            ..WeatherConfig::default()
        };
        let client = OpenWeatherClient::new(&config).unwrap();

        let err = client.fetch(CityId::new(1)).await.unwrap_err();
        assert!(matches!(err, WeatherError::ProviderRequest(_)));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(150);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY + 3);
    }
}
