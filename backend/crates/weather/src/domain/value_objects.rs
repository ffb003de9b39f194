//! Domain Value Objects
//!
//! Immutable value types for the weather domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner of a collection job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-side city identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(i64);

impl CityId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of cities a single job fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityList(Vec<CityId>);

impl CityList {
    pub fn new(cities: Vec<CityId>) -> Self {
        Self(cities)
    }

    /// Use the requested cities, or `defaults` when none (or an empty list) were given
    pub fn resolve(requested: Option<Vec<i64>>, defaults: &[i64]) -> Self {
        let ids = match requested {
            Some(ids) if !ids.is_empty() => ids,
            _ => defaults.to_vec(),
        };
        Self(ids.into_iter().map(CityId::new).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityId> {
        self.0.iter()
    }

    /// Denominator persisted alongside every observation of the job
    pub fn total_requested(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }
}
