/// Database access layer
///
/// Repositories are free functions over the connection pool, one module per
/// aggregate. Constraint violations that have API-level meaning (duplicate
/// email, restrict-delete) are translated here.
pub mod comment_repo;
pub mod post_repo;
pub mod user_repo;

/// SQLSTATE code for unique constraint violations.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE code for foreign key violations.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";
