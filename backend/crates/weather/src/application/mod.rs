//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod admission;
pub mod config;
pub mod fetch_job;
pub mod list_observations;
pub mod percentage;
pub mod start_collection;
