//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::repository::traits::EmployeeRepository;
use navalha_domain::Employee;

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Open the shared connection pool. Called once during service startup.
pub async fn connect_pool(config: &PgConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Raw employees row; status arrives as constraint-checked column text
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    phone: String,
    status: String,
    image_url: Option<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = crate::error::PersistenceError;

    fn try_from(row: EmployeeRow) -> Result<Employee> {
        Ok(Employee {
            id: row.id,
            name: row.name,
            phone: row.phone,
            status: row.status.parse()?,
            image_url: row.image_url,
        })
    }
}

/// Repository for employee operations backed by Postgres
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, phone, status, image_url FROM employees ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn find_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, phone, status, image_url FROM employees WHERE id = $1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn create(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            "INSERT INTO employees (id, name, phone, status, image_url) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.phone)
        .bind(employee.status.as_str())
        .bind(&employee.image_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
