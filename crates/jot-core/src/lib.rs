//! # jot-core
//!
//! Core types, traits, and abstractions for jot.
//!
//! This crate provides:
//! - Domain models (notes, tags, views)
//! - The error taxonomy shared by all jot crates
//! - Repository traits implemented by the database layer
//! - Tag name normalization
//! - Structured logging field constants

pub mod error;
pub mod logging;
pub mod models;
pub mod tags;
pub mod traits;

pub use error::{Error, Result};
pub use models::{CreateNote, NoteStatus, NoteView, Tag, UpdateNote};
pub use tags::{normalize_tag, normalize_tags};
pub use traits::{NoteRepository, TagRepository};
