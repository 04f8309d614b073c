use crate::error::DbError;
use crate::models::PrototypeRow;
use prototyper_core::{Prototype, UpdatePrototypeRequest};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, problem_or_goal, content_elements, call_to_action, \
     visual_elements, atmosphere, ui_config, created_at, updated_at FROM prototypes";

#[derive(Clone)]
pub struct PrototypeRepository {
    pool: SqlitePool,
}

impl PrototypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, prototype: &Prototype) -> Result<Prototype, DbError> {
        let row = PrototypeRow::try_from_domain(prototype)?;

        sqlx::query(
            r#"
            INSERT INTO prototypes (id, problem_or_goal, content_elements, call_to_action, visual_elements, atmosphere, ui_config, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.problem_or_goal)
        .bind(&row.content_elements)
        .bind(&row.call_to_action)
        .bind(&row.visual_elements)
        .bind(&row.atmosphere)
        .bind(&row.ui_config)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await?;

        info!(prototype_id = %prototype.id, components = prototype.ui_config.components.len(), "Prototype created");
        Ok(prototype.clone())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Prototype>, DbError> {
        let row: Option<PrototypeRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(PrototypeRow::into_domain).transpose()
    }

    /// Like [`find_by_id`](Self::find_by_id), but a missing row is an error.
    pub async fn get(&self, id: Uuid) -> Result<Prototype, DbError> {
        self.find_by_id(id)
            .await?
            .ok_or(DbError::PrototypeNotFound(id))
    }

    /// All prototypes, newest first. Rows whose stored configuration cannot
    /// be read are skipped.
    pub async fn find_all(&self) -> Result<Vec<Prototype>, DbError> {
        let rows: Vec<PrototypeRow> = sqlx::query_as(&format!(
            "{} ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut prototypes = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_domain() {
                Ok(prototype) => prototypes.push(prototype),
                Err(DbError::CorruptConfig { id, reason }) => {
                    warn!(prototype_id = %id, %reason, "Skipping prototype with unreadable UI configuration");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(prototypes)
    }

    /// Merges `update` into the stored answers and persists the result. The
    /// configuration is regenerated only when an answer field is present.
    ///
    /// Read and write happen in one transaction that takes the write lock
    /// first, so concurrent updates of the same prototype apply one after
    /// the other.
    pub async fn update(
        &self,
        id: Uuid,
        update: &UpdatePrototypeRequest,
    ) -> Result<Option<Prototype>, DbError> {
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query("UPDATE prototypes SET updated_at = updated_at WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        if locked.rows_affected() == 0 {
            return Ok(None);
        }

        let existing: PrototypeRow = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_one(&mut *tx)
            .await?;
        let mut prototype = existing.into_domain()?;

        let regenerated = prototype.apply_update(update);
        let row = PrototypeRow::try_from_domain(&prototype)?;

        let result = sqlx::query(
            r#"
            UPDATE prototypes
            SET problem_or_goal = ?, content_elements = ?, call_to_action = ?, visual_elements = ?, atmosphere = ?, ui_config = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&row.problem_or_goal)
        .bind(&row.content_elements)
        .bind(&row.call_to_action)
        .bind(&row.visual_elements)
        .bind(&row.atmosphere)
        .bind(&row.ui_config)
        .bind(row.updated_at)
        .bind(&row.id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tx.commit().await?;

        if regenerated {
            info!(prototype_id = %id, "Prototype updated, UI configuration regenerated");
        } else {
            debug!(prototype_id = %id, "Prototype touched without answer changes");
        }

        Ok(Some(prototype))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM prototypes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prototypes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
