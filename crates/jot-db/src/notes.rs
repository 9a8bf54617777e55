//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Row, Transaction};

use jot_core::{
    normalize_tags, CreateNote, Error, NoteRepository, NoteStatus, NoteView, Result, UpdateNote,
};

/// Shared SELECT producing one row per note with its tag names aggregated.
///
/// Callers append a WHERE clause plus `GROUP BY n.id` (and ordering).
pub(crate) const NOTE_VIEW_SELECT: &str = r#"
    SELECT
        n.id,
        n.title,
        n.body,
        n.created_on,
        n.modified_on,
        COALESCE(
            array_agg(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL),
            ARRAY[]::text[]
        ) AS tags
    FROM note n
    LEFT JOIN note_tag nt ON nt.note_id = n.id
    LEFT JOIN tag t ON t.id = nt.tag_id
"#;

/// Map a database row from [`NOTE_VIEW_SELECT`] to a NoteView.
pub(crate) fn map_row_to_view(row: sqlx::postgres::PgRow) -> NoteView {
    NoteView {
        id: row.get("id"),
        title: row.get("title"),
        text: row.get("body"),
        tags: row.get("tags"),
        created_on: row.get("created_on"),
        modified_on: row.get("modified_on"),
    }
}

/// Ensure each normalized tag exists and associate it with the note.
///
/// Lazy creation goes through the unique index (`INSERT .. ON CONFLICT DO
/// NOTHING` then select), so concurrent writers racing on the same name
/// both end up with the one surviving row.
pub(crate) async fn attach_tags(
    tx: &mut Transaction<'_, Postgres>,
    note_id: i64,
    names: &[String],
) -> Result<()> {
    for name in names {
        sqlx::query("INSERT INTO tag (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?;

        let tag_id: i64 = sqlx::query("SELECT id FROM tag WHERE name = $1")
            .bind(name)
            .fetch_one(&mut **tx)
            .await
            .map_err(Error::Database)?
            .get("id");

        sqlx::query(
            "INSERT INTO note_tag (note_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(note_id)
        .bind(tag_id)
        .execute(&mut **tx)
        .await
        .map_err(Error::Database)?;
    }
    Ok(())
}

async fn fetch_view_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<NoteView> {
    let sql = format!("{NOTE_VIEW_SELECT} WHERE n.id = $1 GROUP BY n.id");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| Error::NotFound(format!("Note {id} not found")))?;
    Ok(map_row_to_view(row))
}

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, owner: &str, req: CreateNote) -> Result<NoteView> {
        if req.text.trim().is_empty() {
            return Err(Error::InvalidInput("text is required".to_string()));
        }
        let tags = normalize_tags(&req.tags);
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        let note_id: i64 = sqlx::query(
            "INSERT INTO note (title, body, owner_id, status, created_on, modified_on)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id",
        )
        .bind(&req.title)
        .bind(&req.text)
        .bind(owner)
        .bind(NoteStatus::Active.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(Error::Database)?
        .get("id");

        attach_tags(&mut tx, note_id, &tags).await?;

        let view = fetch_view_tx(&mut tx, note_id).await?;
        tx.commit().await.map_err(Error::Database)?;

        tracing::debug!(
            subsystem = "database",
            component = "notes",
            op = "insert",
            note_id,
            result_count = tags.len(),
            "Note created"
        );
        Ok(view)
    }

    async fn fetch(&self, id: i64, owner: &str) -> Result<NoteView> {
        let sql = format!("{NOTE_VIEW_SELECT} WHERE n.id = $1 AND n.owner_id = $2 GROUP BY n.id");
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or_else(|| Error::NotFound(format!("Note {id} not found")))?;
        Ok(map_row_to_view(row))
    }

    async fn update(&self, id: i64, owner: &str, req: UpdateNote) -> Result<NoteView> {
        if req.text.trim().is_empty() {
            return Err(Error::InvalidInput("text is required".to_string()));
        }
        let tags = normalize_tags(&req.tags);
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        // Status is deliberately left untouched; archived notes stay archived.
        let result = sqlx::query(
            "UPDATE note SET body = $1, modified_on = $2 WHERE id = $3 AND owner_id = $4",
        )
        .bind(&req.text)
        .bind(now)
        .bind(id)
        .bind(owner)
        .execute(&mut *tx)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note {id} not found")));
        }

        // Clear-then-reassign: detached tags survive in the tag store.
        sqlx::query("DELETE FROM note_tag WHERE note_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        attach_tags(&mut tx, id, &tags).await?;

        let view = fetch_view_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(view)
    }

    async fn delete(&self, id: i64, owner: &str) -> Result<()> {
        // Join rows go with the note via ON DELETE CASCADE; tags stay.
        let result = sqlx::query("DELETE FROM note WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note {id} not found")));
        }
        tracing::debug!(
            subsystem = "database",
            component = "notes",
            op = "delete",
            note_id = id,
            "Note deleted"
        );
        Ok(())
    }

    async fn archive(&self, id: i64, owner: &str) -> Result<()> {
        // Idempotent: re-archiving only bumps modified_on again.
        let result = sqlx::query(
            "UPDATE note SET status = $1, modified_on = $2 WHERE id = $3 AND owner_id = $4",
        )
        .bind(NoteStatus::Archived.as_str())
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note {id} not found")));
        }
        Ok(())
    }

    async fn unarchive(&self, id: i64, owner: &str) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        let status: String =
            sqlx::query("SELECT status FROM note WHERE id = $1 AND owner_id = $2 FOR UPDATE")
                .bind(id)
                .bind(owner)
                .fetch_optional(&mut *tx)
                .await
                .map_err(Error::Database)?
                .ok_or_else(|| Error::NotFound(format!("Note {id} not found")))?
                .get("status");

        if NoteStatus::parse(&status) != Some(NoteStatus::Archived) {
            return Err(Error::InvalidState(format!("Note {id} is not archived")));
        }

        sqlx::query("UPDATE note SET status = $1, modified_on = $2 WHERE id = $3")
            .bind(NoteStatus::Active.as_str())
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }

    async fn list_archived(&self, owner: &str) -> Result<Vec<NoteView>> {
        let sql = format!(
            "{NOTE_VIEW_SELECT}
             WHERE n.owner_id = $1 AND n.status = $2
             GROUP BY n.id
             ORDER BY n.modified_on DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(owner)
            .bind(NoteStatus::Archived.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_view).collect())
    }
}
