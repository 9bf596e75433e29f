//! # Navalha Seeder Library
//!
//! Wipes and repopulates the booking database with the demo dataset from
//! [`catalog`]. Insert order follows the foreign-key graph; the wipe runs
//! it in reverse.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Row counts written by one [`seed`] run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub users: usize,
    pub services: usize,
    pub employees: usize,
    pub employee_services: usize,
    pub schedules: usize,
    pub products: usize,
    pub appointments: usize,
    pub appointment_products: usize,
    pub accounts: usize,
    pub showcase_photos: usize,
}

/// Delete all rows, children before parents.
pub async fn wipe(pool: &PgPool) -> sqlx::Result<()> {
    for table in [
        "appointment_products",
        "appointments",
        "schedules",
        "employee_services",
        "showcase_photos",
        "accounts",
        "products",
        "employees",
        "services",
        "users",
    ] {
        sqlx::query(&format!("DELETE FROM {table}")).execute(pool).await?;
    }
    Ok(())
}

/// Insert the full demo dataset and return what was written.
pub async fn seed(pool: &PgPool) -> sqlx::Result<Summary> {
    let mut summary = Summary::default();

    // People first: everything else points at them.
    let mut user_ids = Vec::with_capacity(catalog::USERS.len());
    for user in catalog::USERS {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, name, phone) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(user.name)
            .bind(user.phone)
            .execute(pool)
            .await?;
        user_ids.push(id);
    }
    summary.users = user_ids.len();
    info!(count = summary.users, "Users created");

    let mut service_ids = Vec::with_capacity(catalog::SERVICES.len());
    for service in catalog::SERVICES {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO services (id, name, duration_min, price, description, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(service.name)
        .bind(service.duration_min)
        .bind(service.price)
        .bind(service.description)
        .bind(service.image_url)
        .execute(pool)
        .await?;
        service_ids.push(id);
    }
    summary.services = service_ids.len();
    info!(count = summary.services, "Services created");

    let mut employee_ids = Vec::with_capacity(catalog::EMPLOYEES.len());
    for employee in catalog::EMPLOYEES {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO employees (id, name, phone, status, image_url) \
             VALUES ($1, $2, $3, 'ACTIVE', $4)",
        )
        .bind(id)
        .bind(employee.name)
        .bind(employee.phone)
        .bind(employee.image_url)
        .execute(pool)
        .await?;
        employee_ids.push(id);
    }
    summary.employees = employee_ids.len();
    info!(count = summary.employees, "Employees created");

    for (employee, service) in catalog::EMPLOYEE_SERVICES {
        sqlx::query("INSERT INTO employee_services (employee_id, service_id) VALUES ($1, $2)")
            .bind(employee_ids[*employee])
            .bind(service_ids[*service])
            .execute(pool)
            .await?;
    }
    summary.employee_services = catalog::EMPLOYEE_SERVICES.len();
    info!(count = summary.employee_services, "Employee-service links created");

    for employee_id in &employee_ids {
        for weekday in catalog::WEEKDAY_RANGE {
            sqlx::query(
                "INSERT INTO schedules \
                 (id, employee_id, weekday, start_time, end_time, lunch_start, lunch_end) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(Uuid::new_v4())
            .bind(employee_id)
            .bind(weekday)
            .bind(catalog::OPENING_TIME)
            .bind(catalog::CLOSING_TIME)
            .bind(catalog::LUNCH_START)
            .bind(catalog::LUNCH_END)
            .execute(pool)
            .await?;
            summary.schedules += 1;
        }

        // Saturday closes early, no lunch break.
        sqlx::query(
            "INSERT INTO schedules \
             (id, employee_id, weekday, start_time, end_time, lunch_start, lunch_end) \
             VALUES ($1, $2, $3, $4, $5, NULL, NULL)",
        )
        .bind(Uuid::new_v4())
        .bind(employee_id)
        .bind(catalog::SATURDAY)
        .bind(catalog::OPENING_TIME)
        .bind(catalog::SATURDAY_CLOSING_TIME)
        .execute(pool)
        .await?;
        summary.schedules += 1;
    }
    info!(count = summary.schedules, "Schedules created");

    let mut product_ids = Vec::with_capacity(catalog::PRODUCTS.len());
    for product in catalog::PRODUCTS {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO products (id, name, price, quantity, is_featured, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.is_featured)
        .bind(product.image_url)
        .execute(pool)
        .await?;
        product_ids.push(id);
    }
    summary.products = product_ids.len();
    info!(count = summary.products, "Products created");

    let now = Utc::now();
    let mut appointment_ids = Vec::with_capacity(catalog::APPOINTMENTS.len());
    for appointment in catalog::APPOINTMENTS {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO appointments \
             (id, user_id, employee_id, service_id, date, status, payment_method) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(user_ids[appointment.user])
        .bind(employee_ids[appointment.employee])
        .bind(service_ids[appointment.service])
        .bind(now + Duration::days(appointment.day_offset))
        .bind(appointment.status.as_str())
        .bind(appointment.payment.map(|p| p.as_str()))
        .execute(pool)
        .await?;
        appointment_ids.push(id);
    }
    summary.appointments = appointment_ids.len();
    info!(count = summary.appointments, "Appointments created");

    for line in catalog::APPOINTMENT_PRODUCTS {
        sqlx::query(
            "INSERT INTO appointment_products \
             (id, appointment_id, product_id, quantity, price) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(appointment_ids[line.appointment])
        .bind(product_ids[line.product])
        .bind(line.quantity)
        .bind(catalog::PRODUCTS[line.product].price)
        .execute(pool)
        .await?;
    }
    summary.appointment_products = catalog::APPOINTMENT_PRODUCTS.len();
    info!(count = summary.appointment_products, "Appointment products created");

    for account in catalog::ACCOUNTS {
        sqlx::query(
            "INSERT INTO accounts (id, phone, password, role, employee_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(account.phone)
        .bind(catalog::PASSWORD_HASH)
        .bind(account.role.as_str())
        .bind(account.employee.map(|i| employee_ids[i]))
        .execute(pool)
        .await?;
        summary.accounts += 1;
    }
    info!(count = summary.accounts, "Accounts created");

    for photo in catalog::SHOWCASE_PHOTOS {
        sqlx::query(
            "INSERT INTO showcase_photos (id, image_url, description, service_id, employee_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(photo.image_url)
        .bind(photo.description)
        .bind(photo.service.map(|i| service_ids[i]))
        .bind(photo.employee.map(|i| employee_ids[i]))
        .execute(pool)
        .await?;
        summary.showcase_photos += 1;
    }
    info!(count = summary.showcase_photos, "Showcase photos created");

    Ok(summary)
}
