//! PostgreSQL implementation of EntitlementStore.
//!
//! Backed by the `profiles` table, one row per user keyed on `user_id`.
//! The upsert is a single statement, so concurrent payments for the same user
//! serialize on the primary key and the OR keeps `has_paid` monotonic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entitlement::Entitlement;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::EntitlementStore;

pub struct PostgresEntitlementStore {
    pool: PgPool,
}

impl PostgresEntitlementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    user_id: String,
    has_paid: bool,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Entitlement {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?;
        Ok(Entitlement::new(
            user_id,
            row.has_paid,
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

#[async_trait]
impl EntitlementStore for PostgresEntitlementStore {
    async fn get_entitlement(&self, user_id: &UserId) -> Result<Option<Entitlement>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT user_id, has_paid, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to read entitlement: {}", e)))?;

        row.map(Entitlement::try_from).transpose()
    }

    async fn upsert_entitlement(
        &self,
        user_id: &UserId,
        has_paid: bool,
    ) -> Result<Entitlement, DomainError> {
        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO profiles (user_id, has_paid, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET
                has_paid = profiles.has_paid OR EXCLUDED.has_paid,
                updated_at = EXCLUDED.updated_at
            RETURNING user_id, has_paid, updated_at
            "#,
        )
        .bind(user_id.as_str())
        .bind(has_paid)
        .bind(Timestamp::now().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to upsert entitlement: {}", e))
                .with_detail("user_id", user_id.as_str())
        })?;

        Entitlement::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_entitlement() {
        let now = Utc::now();
        let row = ProfileRow {
            user_id: "user-1".to_string(),
            has_paid: true,
            updated_at: now,
        };

        let entitlement = Entitlement::try_from(row).unwrap();

        assert_eq!(entitlement.user_id.as_str(), "user-1");
        assert!(entitlement.grants_access());
        assert_eq!(entitlement.updated_at.as_datetime(), &now);
    }

    #[test]
    fn row_with_empty_user_id_is_a_database_error() {
        let row = ProfileRow {
            user_id: String::new(),
            has_paid: false,
            updated_at: Utc::now(),
        };

        let err = Entitlement::try_from(row).unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
