//! SQLite-backed [`IdentityStore`].
//!
//! Timestamps are stored as unix milliseconds. Every `update` is a single
//! `UPDATE ... RETURNING` statement, so the lockout counter and deadline are
//! always written together.

use crate::{DbError, Result as DbErrorResult};

use warden_core::{Identity, IdentityStore, IdentityUpdate, NewIdentity, StoreError, StoreResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, email, password_hash, name, image, failed_attempts, \
     locked_until, created_at, updated_at";

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {} FROM identities WHERE email = ?", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(identity_from_row).transpose()
    }

    async fn apply_update(
        &self,
        email: &str,
        update: &IdentityUpdate,
    ) -> DbErrorResult<Option<Identity>> {
        let sql = format!(
            r#"
                UPDATE identities SET
                    name = COALESCE(?, name),
                    image = COALESCE(?, image),
                    failed_attempts = CASE WHEN ? THEN ? ELSE failed_attempts END,
                    locked_until = CASE WHEN ? THEN ? ELSE locked_until END,
                    updated_at = ?
                WHERE email = ?
                RETURNING {}
            "#,
            SELECT_COLUMNS
        );

        let has_lockout = update.lockout.is_some();
        let failed_attempts = update.lockout.map(|l| i64::from(l.failed_attempts));
        let locked_until = update
            .lockout
            .and_then(|l| l.locked_until)
            .map(|dt| dt.timestamp_millis());

        let row = sqlx::query(&sql)
            .bind(update.name.as_deref())
            .bind(update.image.as_deref())
            .bind(has_lockout)
            .bind(failed_attempts)
            .bind(has_lockout)
            .bind(locked_until)
            .bind(Utc::now().timestamp_millis())
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(identity_from_row).transpose()
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        self.fetch_by_email(email).await.map_err(|e| {
            error!("Identity lookup failed: {}", e);
            StoreError::from(e)
        })
    }

    async fn create(&self, new_identity: NewIdentity) -> StoreResult<Identity> {
        let identity = new_identity.into_identity(Uuid::new_v4(), Utc::now());

        let result = sqlx::query(
            r#"
                INSERT INTO identities (
                    id, email, password_hash, name, image,
                    failed_attempts, locked_until, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(identity.password_hash.as_deref())
        .bind(identity.name.as_deref())
        .bind(identity.image.as_deref())
        .bind(i64::from(identity.failed_attempts))
        .bind(identity.locked_until.map(|dt| dt.timestamp_millis()))
        .bind(identity.created_at.timestamp_millis())
        .bind(identity.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Created identity {} for {}", identity.id, identity.email);
                Ok(identity)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::duplicate(identity.email))
            }
            Err(e) => {
                error!("Identity insert failed: {}", e);
                Err(StoreError::from(DbError::from(e)))
            }
        }
    }

    async fn update(&self, email: &str, update: IdentityUpdate) -> StoreResult<Identity> {
        match self.apply_update(email, &update).await {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => Err(StoreError::not_found(email)),
            Err(e) => {
                error!("Identity update failed: {}", e);
                Err(StoreError::from(e))
            }
        }
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let failed_attempts: i64 = row.try_get("failed_attempts")?;

    Ok(Identity {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::invalid_row("identities.id", e.to_string()))?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        name: row.try_get("name")?,
        image: row.try_get("image")?,
        failed_attempts: u32::try_from(failed_attempts)
            .map_err(|e| DbError::invalid_row("identities.failed_attempts", e.to_string()))?,
        locked_until: row
            .try_get::<Option<i64>, _>("locked_until")?
            .map(|millis| timestamp_from_millis("identities.locked_until", millis))
            .transpose()?,
        created_at: timestamp_from_millis("identities.created_at", row.try_get("created_at")?)?,
        updated_at: timestamp_from_millis("identities.updated_at", row.try_get("updated_at")?)?,
    })
}

fn timestamp_from_millis(column: &'static str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::invalid_row(column, format!("timestamp out of range: {}", millis)))
}
