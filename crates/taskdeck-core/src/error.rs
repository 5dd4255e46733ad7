use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid priority: {0} (expected high, medium, or low)")]
    InvalidPriority(String),

    #[error("invalid status filter: {0} (expected all, active, or completed)")]
    InvalidStatusFilter(String),
}
