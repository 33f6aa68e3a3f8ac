// Repository layer for database operations

use anyhow::Result;
use async_trait::async_trait;
use oddsline_contracts::EventStatus;
use sqlx::PgPool;

use crate::models::*;

/// Persistence seam for event records
///
/// Database is the Postgres implementation; tests substitute an
/// in-memory store. Every mutation is a single-statement implicit
/// transaction, and RETURNING hands back post-commit state including
/// storage-assigned defaults.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Page of events in insertion order (ordered by id).
    async fn list_events(&self, skip: i64, limit: i64) -> Result<Vec<EventRow>>;

    async fn get_event(&self, id: i64) -> Result<Option<EventRow>>;

    /// Insert a new record; the status column always receives the
    /// uncompleted label.
    async fn create_event(&self, input: CreateEventRow) -> Result<EventRow>;

    /// Overwrite the status of an existing record; `None` when the id
    /// does not exist.
    async fn update_event_status(&self, id: i64, status: &str) -> Result<Option<EventRow>>;
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Create the schema when absent. Runs once at startup, before the
    /// HTTP listener binds.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl EventStore for Database {
    async fn list_events(&self, skip: i64, limit: i64) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, odds, deadline, status
            FROM events
            ORDER BY id
            LIMIT $2 OFFSET $1
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_event(&self, id: i64) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, odds, deadline, status
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (name, odds, deadline, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, odds, deadline, status
            "#,
        )
        .bind(&input.name)
        .bind(input.odds)
        .bind(input.deadline)
        .bind(EventStatus::Uncompleted.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_event_status(&self, id: i64, status: &str) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET status = $2
            WHERE id = $1
            RETURNING id, name, odds, deadline, status
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
