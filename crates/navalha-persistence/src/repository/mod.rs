//! # Repository Module
//!
//! Abstract repository traits plus the PostgreSQL implementation.

pub mod postgres_impl;
pub mod traits;

pub use postgres_impl::{PgConfig, PgEmployeeRepository, connect_pool};
pub use traits::EmployeeRepository;
