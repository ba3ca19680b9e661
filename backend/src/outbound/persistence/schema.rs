//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Todo records shown on the board.
    ///
    /// `status` is constrained to `TODO`, `INPROGRESS` or `DONE` by a CHECK
    /// constraint rather than a Postgres enum.
    todos (id) {
        /// Primary key: UUID v4 generated by the service.
        id -> Uuid,
        /// Non-empty task title.
        title -> Text,
        /// Board column.
        status -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
