use std::sync::Arc;
use std::time::Duration;

use auth_core::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_bookmark::create_bookmark;
use super::handlers::delete_bookmark::delete_bookmark;
use super::handlers::get_bookmark::get_bookmark;
use super::handlers::list_bookmarks::list_bookmarks;
use super::handlers::signin::signin;
use super::handlers::signup::signup;
use super::handlers::update_bookmark::update_bookmark;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::bookmark::service::BookmarkService;
use crate::outbound::repositories::bookmark::PostgresBookmarkRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub bookmark_service: Arc<BookmarkService<PostgresBookmarkRepository>>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    bookmark_service: Arc<BookmarkService<PostgresBookmarkRepository>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        auth_service,
        bookmark_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin));

    let protected_routes = Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks", post(create_bookmark))
        .route("/bookmarks/:bookmark_id", get(get_bookmark))
        .route("/bookmarks/:bookmark_id", patch(update_bookmark))
        .route("/bookmarks/:bookmark_id", delete(delete_bookmark))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
