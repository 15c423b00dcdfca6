//! HTTP API Layer
//!
//! This crate is the bridge between the staff desktop screens and the staff
//! domain, using Axum. Every desktop command has a JSON endpoint.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for staff records, NIC and date helpers
//! - **Middleware**: Request IDs and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{error, message, details}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_staff::InMemoryStaffStore;
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(Arc::new(InMemoryStaffStore::new()), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_staff::{StaffPort, StaffService};

use crate::config::ApiConfig;
use crate::handlers::{dates, health, nic, staff};
use crate::middleware::{request_log_middleware, MakeStaffRequestId};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: StaffService<dyn StaffPort>,
    pub config: ApiConfig,
}

impl AppState {
    /// The date derivations are computed against
    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Staff record store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn StaffPort>, config: ApiConfig) -> Router {
    let state = AppState {
        service: StaffService::new(store, config.retirement_age),
        config,
    };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let staff_routes = Router::new()
        .route("/", post(staff::add_staff).get(staff::list_staff))
        .route("/search", post(staff::search_staff))
        .route("/statistics", get(staff::statistics))
        .route("/prepare", post(staff::prepare_staff))
        .route("/bulk-delete", post(staff::delete_many))
        .route(
            "/:id",
            get(staff::get_staff)
                .put(staff::update_staff)
                .delete(staff::delete_staff),
        );

    let nic_routes = Router::new()
        .route("/normalize", post(nic::normalize))
        .route("/decode", post(nic::decode));

    let date_routes = Router::new()
        .route("/derive", post(dates::derive))
        .route("/increment", post(dates::increment));

    let api_routes = Router::new()
        .route("/office", get(health::office_info))
        .nest("/staff", staff_routes)
        .nest("/nic", nic_routes)
        .nest("/dates", date_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeStaffRequestId))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_log_middleware)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
