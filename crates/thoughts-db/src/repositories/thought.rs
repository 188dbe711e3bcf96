//! PostgreSQL implementation of ThoughtRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use thoughts_core::{RepoResult, Thought, ThoughtId, ThoughtMessage, ThoughtRepository};

use crate::mappers::ThoughtInsert;
use crate::models::ThoughtModel;

use super::error::{map_db_error, thought_not_found};

/// PostgreSQL implementation of ThoughtRepository
#[derive(Clone)]
pub struct PgThoughtRepository {
    pool: PgPool,
}

impl PgThoughtRepository {
    /// Create a new PgThoughtRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThoughtRepository for PgThoughtRepository {
    #[instrument(skip(self))]
    async fn create(&self, message: ThoughtMessage) -> RepoResult<Thought> {
        let thought = Thought::new(ThoughtId::generate(), message);
        let insert = ThoughtInsert::new(&thought);

        let model = sqlx::query_as::<_, ThoughtModel>(
            r#"
            INSERT INTO thoughts (id, message, hearts, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(insert.id)
        .bind(insert.message)
        .bind(insert.hearts)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Thought::try_from(model)
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Thought>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ThoughtModel>(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Thought::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn increment_hearts(&self, id: ThoughtId) -> RepoResult<Thought> {
        // Single statement so concurrent likes never lose an update
        let result = sqlx::query_as::<_, ThoughtModel>(
            r#"
            UPDATE thoughts
            SET hearts = hearts + 1
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .ok_or_else(|| thought_not_found(id))
            .and_then(Thought::try_from)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ThoughtId) -> RepoResult<Option<Thought>> {
        let result = sqlx::query_as::<_, ThoughtModel>(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Thought::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM thoughts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
