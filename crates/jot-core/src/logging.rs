//! Structured logging field name constants for jot.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated across a request. Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event. Values: "api", "db".
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem. Examples: "pool", "notes", "tags".
pub const COMPONENT: &str = "component";

/// Logical operation name. Examples: "insert", "archive", "rename".
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

/// Tag name being operated on (normalized form).
pub const TAG_NAME: &str = "tag_name";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a query.
pub const RESULT_COUNT: &str = "result_count";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
