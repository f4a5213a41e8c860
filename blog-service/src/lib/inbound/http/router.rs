use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
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

use super::handlers::create_post::create_post;
use super::handlers::create_user::create_user;
use super::handlers::delete_post::delete_post;
use super::handlers::get_post::get_post;
use super::handlers::get_user::get_user;
use super::handlers::health::health;
use super::handlers::list_posts::list_posts;
use super::handlers::login::login;
use super::handlers::update_post::update_post;
use super::middleware::authenticate as auth_middleware;
use crate::domain::post::service::PostService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresPostRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    post_service: Arc<PostService<PostgresPostRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        post_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/users", post(create_user))
        .route("/api/users/:user_id", get(get_user));

    let protected_routes = Router::new()
        .route("/api/posts", post(create_post))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_id", get(get_post))
        .route("/api/posts/:post_id", patch(update_post))
        .route("/api/posts/:post_id", delete(delete_post))
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
