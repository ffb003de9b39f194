//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (WeatherObservation, WeatherPayload)
//! - Domain value objects (UserId, CityId, CityList)
//! - Domain services (provider body normalization, completion percentage)
//! - Repository and provider traits (interfaces)

pub mod entities;
pub mod provider;
pub mod repository;
pub mod services;
pub mod value_objects;
