//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to users.
///
/// Users are seed/admin data; the reservation core only ever reads them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches the users with the given ids, each with its dietary
    /// restriction ids resolved.
    ///
    /// Unknown ids are simply absent from the result; callers compare
    /// lengths to detect them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError>;
}
