//! Employee roster endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::time::Duration;

use crate::AppState;
use crate::error::ApiResult;
use navalha_domain::Employee;

/// Cache key for the employee roster
pub const EMPLOYEES_CACHE_KEY: &str = "employees";

/// Roster entries stay cached for ten minutes
pub const EMPLOYEES_CACHE_TTL: Duration = Duration::from_secs(600);

/// `GET /api/employees` response body
#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}

/// Cache-first employee roster.
///
/// On a miss the roster is read from Postgres exactly once, written through
/// to the cache, and the response is built from the queried rows - no
/// second cache read after the write. An empty roster is cached like any
/// other result.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<EmployeesResponse>> {
    if let Some(employees) = state.cache.get::<Vec<Employee>>(EMPLOYEES_CACHE_KEY).await {
        return Ok(Json(EmployeesResponse { employees }));
    }

    let employees = state.employees.list_all().await?;
    state
        .cache
        .set(EMPLOYEES_CACHE_KEY, &employees, EMPLOYEES_CACHE_TTL)
        .await;

    Ok(Json(EmployeesResponse { employees }))
}
