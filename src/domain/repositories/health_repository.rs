//! Storage connectivity probe.

use crate::error::AppError;
use async_trait::async_trait;

/// Reports whether the backing store answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial round trip against the store.
    async fn ping(&self) -> Result<(), AppError>;
}
