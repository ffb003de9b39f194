//! In-Memory Repository Implementation
//!
//! Process-local store with the same contract as the PostgreSQL one. Clones
//! share the same rows.

use crate::domain::entities::{WeatherObservation, WeatherPayload};
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    observations: Vec<WeatherObservation>,
}

/// In-memory repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeatherRepository {
    rows: Arc<Mutex<Rows>>,
}

impl InMemoryWeatherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows across all users
    pub fn len(&self) -> usize {
        self.rows().observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WeatherRecordRepository for InMemoryWeatherRepository {
    async fn exists_for_user(&self, user_id: UserId) -> WeatherResult<bool> {
        Ok(self
            .rows()
            .observations
            .iter()
            .any(|row| row.user_id == user_id))
    }

    async fn insert(
        &self,
        user_id: UserId,
        payload: &WeatherPayload,
        total_requested: u32,
    ) -> WeatherResult<WeatherObservation> {
        let mut rows = self.rows();
        rows.next_id += 1;

        let observation = WeatherObservation {
            id: rows.next_id,
            user_id,
            request_date: Utc::now(),
            payload: payload.clone(),
            total_requested,
        };
        rows.observations.push(observation.clone());

        Ok(observation)
    }

    async fn list_for_user(&self, user_id: UserId) -> WeatherResult<Vec<WeatherObservation>> {
        // Insertion order is creation order.
        Ok(self
            .rows()
            .observations
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(city_id: i64) -> WeatherPayload {
        WeatherPayload {
            city_id,
            temperature_celsius: 20.5,
            humidity: 40,
        }
    }

    #[tokio::test]
    async fn test_exists_iff_rows_for_user() {
        let repo = InMemoryWeatherRepository::new();
        let alice = UserId::new(1);
        let bob = UserId::new(2);

        assert!(!repo.exists_for_user(alice).await.unwrap());
        repo.insert(alice, &payload(10), 3).await.unwrap();
        assert!(repo.exists_for_user(alice).await.unwrap());
        assert!(!repo.exists_for_user(bob).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_increase_and_list_keeps_order() {
        let repo = InMemoryWeatherRepository::new();
        let user = UserId::new(7);

        let first = repo.insert(user, &payload(10), 2).await.unwrap();
        repo.insert(UserId::new(8), &payload(99), 1).await.unwrap();
        let second = repo.insert(user, &payload(20), 2).await.unwrap();
        assert!(second.id > first.id);

        let listed = repo.list_for_user(user).await.unwrap();
        let cities: Vec<i64> = listed.iter().map(|row| row.payload.city_id).collect();
        assert_eq!(cities, vec![10, 20]);
        assert!(listed[0].request_date <= listed[1].request_date);
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = InMemoryWeatherRepository::new();
        let handle = repo.clone();
        repo.insert(UserId::new(1), &payload(10), 1).await.unwrap();
        assert_eq!(handle.len(), 1);
    }
}
