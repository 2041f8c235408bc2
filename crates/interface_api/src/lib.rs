//! HTTP API Layer
//!
//! Exposes proposal creation over HTTP/JSON using Axum.
//!
//! # Routes
//!
//! - `POST /api/v1/proposals` - create a proposal
//! - `GET /health` - liveness
//! - `GET /health/ready` - readiness, backed by the store health check
//!
//! Failures are returned as `{code, message, details}` bodies; see
//! [`error::ApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_proposal::{CreateProposalWorkflow, ProposalStore};

use crate::config::ApiConfig;
use crate::handlers::{health, proposal};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub workflow: CreateProposalWorkflow,
    pub store: Arc<dyn ProposalStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Proposal store backing the workflow and the readiness check
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn ProposalStore>, config: ApiConfig) -> Router {
    let state = AppState {
        workflow: CreateProposalWorkflow::new(store.clone()),
        store,
        config,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/proposals", post(proposal::create_proposal))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
