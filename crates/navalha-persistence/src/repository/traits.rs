//! # Repository Traits
//!
//! Abstract repository interfaces for domain entities.
//! Implementations can be swapped for different backends (Postgres, mock, etc.)

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use navalha_domain::Employee;

/// Repository for Employee entity operations
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Get the full employee roster
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// Get employee by ID
    async fn find_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>>;

    /// Create a new employee
    async fn create(&self, employee: &Employee) -> Result<()>;
}
