//! Repository traits for jot abstractions.
//!
//! These traits define the interfaces the database layer must satisfy,
//! enabling pluggable backends and testability. Every operation takes the
//! requester's identity explicitly; nothing is pulled from ambient state.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreateNote, NoteView, Tag, UpdateNote};

/// Repository for note CRUD and archive transitions.
///
/// Ownership is enforced at this boundary: a note owned by someone other
/// than `owner` is indistinguishable from a note that does not exist.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note owned by `owner` and return its view.
    ///
    /// Tag names are normalized and lazily created; blank text is rejected
    /// with `Error::InvalidInput`.
    async fn insert(&self, owner: &str, req: CreateNote) -> Result<NoteView>;

    /// Fetch a note by id, restricted to the owner's notes.
    async fn fetch(&self, id: i64, owner: &str) -> Result<NoteView>;

    /// Replace a note's text and entire tag set, bumping `modified_on`.
    ///
    /// Tags removed from the note are detached, not deleted. The note's
    /// status is left untouched.
    async fn update(&self, id: i64, owner: &str, req: UpdateNote) -> Result<NoteView>;

    /// Delete a note and its tag associations.
    async fn delete(&self, id: i64, owner: &str) -> Result<()>;

    /// Move a note to Archived. Idempotent: archiving an already-archived
    /// note succeeds. Bumps `modified_on`.
    async fn archive(&self, id: i64, owner: &str) -> Result<()>;

    /// Move an Archived note back to Active.
    ///
    /// Fails with `Error::InvalidState` if the note is not currently
    /// archived. Bumps `modified_on` on success.
    async fn unarchive(&self, id: i64, owner: &str) -> Result<()>;

    /// List the owner's archived notes, most recently modified first.
    async fn list_archived(&self, owner: &str) -> Result<Vec<NoteView>>;
}

/// Repository for global tag management.
///
/// Tags are shared across all users; none of these operations filter by
/// owner. Tag-scoped note lookup intentionally returns notes from every
/// owner.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List every tag.
    async fn list(&self) -> Result<Vec<Tag>>;

    /// List all notes carrying the named tag (case-insensitive exact
    /// match). Unknown names yield `Error::NotFound`.
    async fn notes_for(&self, name: &str) -> Result<Vec<NoteView>>;

    /// Rename a tag, keeping its note associations.
    ///
    /// The new name is normalized before storage. Fails with
    /// `Error::Conflict` if another tag already holds the name.
    async fn rename(&self, name: &str, new_name: &str) -> Result<()>;

    /// Delete a tag, detaching it from every note without deleting them.
    async fn delete(&self, name: &str) -> Result<()>;
}
