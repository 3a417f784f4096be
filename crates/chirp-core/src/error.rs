//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// Repository-level errors.
///
/// A lookup that finds nothing is `Ok(None)` at the port level, never an
/// error; `RepoError` always means the upstream itself failed.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures of the timeline assembly pipeline.
///
/// This is a closed taxonomy: the presentation layer matches on it to pick a
/// response code, so no variant carries another error type to re-classify.
/// Cache faults are deliberately absent - the assembler downgrades them to
/// misses and they never reach the caller.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The requested user does not exist. Terminal, user-facing.
    #[error("user {0} does not exist")]
    UserNotFound(String),

    /// A store or follow-graph call failed or timed out.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A fetched post violated the timeline invariant (empty author or
    /// content). Indicates store corruption and must surface, never be
    /// silently dropped.
    #[error("corrupt post data: {0}")]
    DataCorruption(String),
}
