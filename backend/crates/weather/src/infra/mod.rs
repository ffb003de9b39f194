//! Infrastructure Layer
//!
//! Store and provider implementations behind the domain traits.

pub mod memory;
pub mod openweather;
pub mod postgres;
