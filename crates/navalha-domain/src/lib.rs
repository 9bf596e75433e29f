//! # Navalha Salon Booking - Domain Model
//!
//! Core domain entities and enums for the salon booking platform. These
//! types are the single source of truth across all layers: persistence,
//! API, and tooling.
//!
//! Wire format matches the public API: camelCase field names, enum values
//! spelled SCREAMING_SNAKE_CASE.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// ENUMS
// =============================================================================

/// Employee availability on the booking surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            other => Err(DomainError::UnknownEnumValue {
                enum_type: "EmployeeStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// Appointment lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Done,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Done => "DONE",
            Self::Canceled => "CANCELED",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => Ok(Self::Scheduled),
            "DONE" => Ok(Self::Done),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(DomainError::UnknownEnumValue {
                enum_type: "AppointmentStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Pix,
    Credit,
    Debit,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
            Self::Cash => "CASH",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIX" => Ok(Self::Pix),
            "CREDIT" => Ok(Self::Credit),
            "DEBIT" => Ok(Self::Debit),
            "CASH" => Ok(Self::Cash),
            other => Err(DomainError::UnknownEnumValue {
                enum_type: "PaymentMethod",
                value: other.to_string(),
            }),
        }
    }
}

/// Back-office access roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    Admin,
    Employee,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Employee => "EMPLOYEE",
        }
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// User entity - a customer booking appointments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

/// Service entity - a bookable salon service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,

    /// Slot length in minutes
    pub duration_min: i32,
    pub price: f64,

    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Employee entity - a staff member offering services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub status: EmployeeStatus,
    pub image_url: Option<String>,
}

impl Employee {
    /// Whether the employee shows up on the booking surface
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Link between an employee and a service they perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeService {
    pub employee_id: Uuid,
    pub service_id: Uuid,
}

/// Schedule entity - one working day of an employee's week
///
/// Times are wall-clock `"HH:MM"` strings; weekday follows the usual
/// 0 = Sunday .. 6 = Saturday numbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub weekday: i16,
    pub start_time: String,
    pub end_time: String,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
}

impl Schedule {
    /// Whether the day carries a lunch break
    #[must_use]
    pub fn has_lunch_break(&self) -> bool {
        self.lunch_start.is_some() && self.lunch_end.is_some()
    }
}

/// Product entity - retail stock sold at the counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub is_featured: bool,
    pub image_url: Option<String>,
}

/// Appointment entity - a booked service slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub employee_id: Uuid,
    pub service_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,

    /// Settled at checkout; absent until the appointment is paid
    pub payment_method: Option<PaymentMethod>,
}

/// Retail item sold alongside an appointment, price snapshotted at sale time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentProduct {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: f64,
}

/// Account entity - back-office login credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub phone: String,

    /// bcrypt digest; hashing happens outside this crate
    pub password: String,
    pub role: AccountRole,
    pub employee_id: Option<Uuid>,
}

/// Showcase photo - portfolio imagery tied to a service and/or employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcasePhoto {
    pub id: Uuid,
    pub image_url: String,
    pub description: Option<String>,
    pub service_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Unknown {enum_type} value: {value}")]
    UnknownEnumValue {
        enum_type: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_serializes_to_wire_format() {
        let employee = Employee {
            id: Uuid::nil(),
            name: "Marcelo Barbeiro".to_string(),
            phone: "+5511988888001".to_string(),
            status: EmployeeStatus::Active,
            image_url: None,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["name"], "Marcelo Barbeiro");
    }

    #[test]
    fn employee_roundtrips_through_json() {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: "Patricia Style".to_string(),
            phone: "+5511988888004".to_string(),
            status: EmployeeStatus::Inactive,
            image_url: Some("https://example.com/patricia.jpg".to_string()),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let parsed: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, employee);
    }

    #[test]
    fn status_parses_from_column_text() {
        assert_eq!(
            "ACTIVE".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Active
        );
        assert_eq!(
            "CANCELED".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Canceled
        );
        assert!("RETIRED".parse::<EmployeeStatus>().is_err());
    }

    #[test]
    fn payment_method_spelling_matches_db_constraint() {
        for method in [
            PaymentMethod::Pix,
            PaymentMethod::Credit,
            PaymentMethod::Debit,
            PaymentMethod::Cash,
        ] {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn appointment_serializes_payment_and_status_spelling() {
        let appointment = Appointment {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            employee_id: Uuid::nil(),
            service_id: Uuid::nil(),
            date: "2025-03-01T10:00:00Z".parse().unwrap(),
            status: AppointmentStatus::Done,
            payment_method: Some(PaymentMethod::Pix),
        };

        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["status"], "DONE");
        assert_eq!(json["paymentMethod"], "PIX");
        assert_eq!(json["userId"], Uuid::nil().to_string());
    }

    #[test]
    fn schedule_lunch_break_requires_both_bounds() {
        let mut schedule = Schedule {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            weekday: 6,
            start_time: "09:00".to_string(),
            end_time: "15:00".to_string(),
            lunch_start: None,
            lunch_end: None,
        };
        assert!(!schedule.has_lunch_break());

        schedule.lunch_start = Some("12:00".to_string());
        assert!(!schedule.has_lunch_break());

        schedule.lunch_end = Some("13:00".to_string());
        assert!(schedule.has_lunch_break());
    }
}
