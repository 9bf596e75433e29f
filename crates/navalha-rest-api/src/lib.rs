//! # Navalha REST API
//!
//! HTTP service for the Navalha salon booking platform.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Axum HTTP Server                         │
//! │              (REST endpoints + health check)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AppState                               │
//! │           (EmployeeRepository, Cache facade)                │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                   │
//!                    ▼                   ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │      Cache Facade       │   │        PostgreSQL            │
//! │  (Redis / managed REST) │   │     (Source of Truth)        │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::http::Method;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use navalha_persistence::{Cache, EmployeeRepository};

pub use config::{Config, ConfigError, Environment};
pub use error::{ApiError, ApiResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Employee repository
    pub employees: Arc<dyn EmployeeRepository>,

    /// Fail-open cache facade
    pub cache: Cache,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "OK"
}

/// Build the Axum router
pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        // REST endpoints
        .route("/api/employees", get(employees::list_employees))
        // Health check
        .route("/health", get(health_check))
        .route("/", get(|| async { "Navalha Booking API" }))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
