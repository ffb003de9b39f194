//! Application Configuration
//!
//! Configuration for the weather application layer.

use std::time::Duration;

use platform::config::{ConfigError, env_list, env_parse, env_string};
use platform::rate_limit::RateLimitConfig;

/// OpenWeather current-weather endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Cities fetched when a request does not name any (OpenWeather city ids)
pub const DEFAULT_CITY_IDS: &[i64] = &[
    3439525, 3439781, 3440645, 3442098, 3442778, 3443341, 3442233, 3440781, 3441572, 3441575,
    3443207, 3442146, 3442720, 3441242, 3441686, 3440639, 3441354, 3442057, 3442585, 3442727,
];

/// Weather application configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Provider endpoint
    pub provider_url: String,
    /// Provider API key (`appid`)
    pub api_key: String,
    /// Unit system passed to the provider
    pub units: String,
    /// Per-request timeout for provider calls
    pub request_timeout: Duration,
    /// Cities used when a request does not name any
    pub default_cities: Vec<i64>,
    /// Ceiling on provider call initiations, shared by all jobs
    pub rate_limit: RateLimitConfig,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            api_key: String::new(),
            units: "metric".to_string(),
            request_timeout: Duration::from_secs(10),
            default_cities: DEFAULT_CITY_IDS.to_vec(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl WeatherConfig {
    /// Build from `OPEN_WEATHER_*` and `WEATHER_DEFAULT_CITIES` variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let rate_limit = RateLimitConfig {
            max_requests: env_parse("OPEN_WEATHER_RATE_LIMIT", defaults.rate_limit.max_requests)?,
            window: Duration::from_secs(env_parse(
                "OPEN_WEATHER_RATE_LIMIT_PERIOD_SECS",
                defaults.rate_limit.window.as_secs(),
            )?),
            poll_interval: Duration::from_millis(env_parse(
                "OPEN_WEATHER_POLL_INTERVAL_MS",
                defaults.rate_limit.poll_interval.as_millis() as u64,
            )?),
        };

        let config = Self {
            provider_url: env_string("OPEN_WEATHER_URL", &defaults.provider_url),
            api_key: env_string("OPEN_WEATHER_API_KEY", ""),
            units: env_string("OPEN_WEATHER_UNITS", &defaults.units),
            request_timeout: Duration::from_secs(env_parse(
                "OPEN_WEATHER_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            default_cities: env_list("WEATHER_DEFAULT_CITIES", defaults.default_cities)?,
            rate_limit,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the job cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_cities.is_empty() {
            return Err(ConfigError::invalid(
                "WEATHER_DEFAULT_CITIES",
                "",
                "at least one city id is required",
            ));
        }
        if self.rate_limit.poll_interval.is_zero() {
            return Err(ConfigError::invalid(
                "OPEN_WEATHER_POLL_INTERVAL_MS",
                "0",
                "poll interval must be positive",
            ));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
