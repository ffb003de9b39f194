//! Weather Provider Trait
//!
//! Boundary to the external weather service. Implementation is in
//! infrastructure layer.

use crate::domain::value_objects::CityId;
use crate::error::WeatherResult;

/// Weather provider trait
#[trait_variant::make(WeatherProvider: Send)]
pub trait LocalWeatherProvider {
    /// Fetch the current-weather JSON body for one city
    async fn fetch(&self, city_id: CityId) -> WeatherResult<serde_json::Value>;
}
