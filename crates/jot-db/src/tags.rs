//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use jot_core::{normalize_tag, Error, NoteView, Result, Tag, TagRepository};

use crate::notes::{map_row_to_view, NOTE_VIEW_SELECT};

/// PostgreSQL implementation of TagRepository.
///
/// Tags are global: none of these operations filter by owner, including
/// the tag-scoped note lookup.
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_id(&self, name: &str) -> Result<i64> {
        let row = sqlx::query("SELECT id FROM tag WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or_else(|| Error::NotFound(format!("Tag '{name}' not found")))?;
        Ok(row.get("id"))
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn list(&self) -> Result<Vec<Tag>> {
        let rows = sqlx::query("SELECT id, name FROM tag ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| Tag {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    async fn notes_for(&self, name: &str) -> Result<Vec<NoteView>> {
        let tag_id = self.find_id(name).await?;

        let sql = format!(
            "{NOTE_VIEW_SELECT}
             WHERE n.id IN (SELECT note_id FROM note_tag WHERE tag_id = $1)
             GROUP BY n.id
             ORDER BY n.modified_on DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(tag_id)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_view).collect())
    }

    async fn rename(&self, name: &str, new_name: &str) -> Result<()> {
        let normalized = normalize_tag(new_name)
            .ok_or_else(|| Error::InvalidInput("tag name is required".to_string()))?;

        let tag_id = self.find_id(name).await?;

        // The unique index is the conflict check; renaming a tag onto its
        // own name (case change) passes through as a plain update.
        sqlx::query("UPDATE tag SET name = $1 WHERE id = $2")
            .bind(&normalized)
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)
            .map_err(|e| e.conflict_on_unique(&format!("Tag '{normalized}' already exists")))?;

        tracing::debug!(
            subsystem = "database",
            component = "tags",
            op = "rename",
            tag_name = %normalized,
            "Tag renamed"
        );
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        // Join rows cascade; the notes themselves are untouched.
        let result = sqlx::query("DELETE FROM tag WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Tag '{name}' not found")));
        }
        Ok(())
    }
}
