//! Liveness endpoint.
//!
//! Reports which store and cache backends the server is actually running
//! on, so an operator can tell at a glance whether a deployment silently
//! fell back to the in-memory adapters.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Post/user store backend in use ("postgres" or "memory").
    pub store: &'static str,
    /// Page cache backend in use ("redis" or "memory").
    pub cache: &'static str,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store_backend,
        cache: state.cache_backend,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{App, test, web};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn health_reports_live_backends() {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
        assert_eq!(body["cache"], "memory");
    }
}
