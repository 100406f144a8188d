//! # Server Configuration
//!
//! This module contains the server setup and configuration for the invoicing API.

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/api/v1/invoices",
            post(handlers::invoices::submit_invoice)
                .fallback(handlers::invoices::method_not_allowed),
        )
        .route(
            "/api/v1/invoices/defaults",
            get(handlers::reference::invoice_defaults),
        )
        .route("/api/v1/companies", get(handlers::reference::list_companies))
        .route("/api/v1/clients", get(handlers::reference::list_clients))
        .route("/api/v1/tax-rates", get(handlers::reference::list_tax_rates))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::invoices::submit_invoice,
        crate::handlers::reference::list_companies,
        crate::handlers::reference::list_clients,
        crate::handlers::reference::list_tax_rates,
        crate::handlers::reference::invoice_defaults,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::handlers::invoices::InvoiceCreatedResponse,
            crate::handlers::reference::CompanyOption,
            crate::handlers::reference::ClientOption,
            crate::handlers::reference::TaxRateOption,
            crate::handlers::reference::InvoiceDefaults,
            crate::units::UnitCode,
        )
    ),
    info(
        title = "Invoicing API",
        description = "API for capturing invoices with server-side validation and totals",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
