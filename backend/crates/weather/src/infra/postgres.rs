//! PostgreSQL Repository Implementations

use crate::domain::entities::{WeatherObservation, WeatherPayload};
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgWeatherRepository {
    pool: PgPool,
}

impl PgWeatherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WeatherRecordRepository for PgWeatherRepository {
    async fn exists_for_user(&self, user_id: UserId) -> WeatherResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM weather_data WHERE user_id = $1)",
        )
        .bind(user_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(
        &self,
        user_id: UserId,
        payload: &WeatherPayload,
        total_requested: u32,
    ) -> WeatherResult<WeatherObservation> {
        let row = sqlx::query_as::<_, WeatherDataRow>(
            r#"
            INSERT INTO weather_data (
                user_id,
                total_requested,
                data
            ) VALUES ($1, $2, $3)
            RETURNING
                weather_data_id,
                user_id,
                request_date,
                total_requested,
                data
            "#,
        )
        .bind(user_id.value())
        .bind(i32::try_from(total_requested).unwrap_or(i32::MAX))
        .bind(Json(payload))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            weather_data_id = row.weather_data_id,
            user_id = %user_id,
            city_id = payload.city_id,
            "Weather data inserted"
        );

        Ok(row.into_observation())
    }

    async fn list_for_user(&self, user_id: UserId) -> WeatherResult<Vec<WeatherObservation>> {
        let rows = sqlx::query_as::<_, WeatherDataRow>(
            r#"
            SELECT
                weather_data_id,
                user_id,
                request_date,
                total_requested,
                data
            FROM weather_data
            WHERE user_id = $1
            ORDER BY request_date, weather_data_id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WeatherDataRow::into_observation).collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct WeatherDataRow {
    weather_data_id: i64,
    user_id: i64,
    request_date: DateTime<Utc>,
    total_requested: i32,
    data: Json<WeatherPayload>,
}

impl WeatherDataRow {
    fn into_observation(self) -> WeatherObservation {
        WeatherObservation {
            id: self.weather_data_id,
            user_id: UserId::new(self.user_id),
            request_date: self.request_date,
            payload: self.data.0,
            total_requested: u32::try_from(self.total_requested).unwrap_or_default(),
        }
    }
}
