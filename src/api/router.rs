//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/doctors",
            get(endpoints::doctors::list).post(endpoints::doctors::create),
        )
        .route(
            "/doctors/:id",
            get(endpoints::doctors::detail)
                .put(endpoints::doctors::update)
                .delete(endpoints::doctors::remove),
        )
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/:id",
            get(endpoints::appointments::detail)
                .put(endpoints::appointments::update)
                .delete(endpoints::appointments::remove),
        )
        .route(
            "/medications",
            get(endpoints::medications::list).post(endpoints::medications::create),
        )
        .route(
            "/medications/:id",
            get(endpoints::medications::detail)
                .put(endpoints::medications::update)
                .delete(endpoints::medications::remove),
        )
        .route(
            "/status",
            get(endpoints::status::list).post(endpoints::status::create),
        )
        .route(
            "/status/:id",
            get(endpoints::status::detail)
                .put(endpoints::status::update)
                .delete(endpoints::status::remove),
        )
        .route(
            "/documents",
            get(endpoints::documents::list).post(endpoints::documents::create),
        )
        .route(
            "/documents/:id",
            get(endpoints::documents::detail)
                .put(endpoints::documents::update)
                .delete(endpoints::documents::remove),
        )
        .route("/timeline", get(endpoints::timeline::feed))
        .with_state(ctx);

    // The UI is served from another local origin during development.
    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}

// ── Tests ──────────────────────────────────────────────────────────────────
