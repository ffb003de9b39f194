//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Sliding-window rate limiting for outbound calls
//! - Environment-backed configuration helpers

pub mod config;
pub mod rate_limit;
