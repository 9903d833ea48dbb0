use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::{config::AppConfig, database, error::Result, routes};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState { db: pool };

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(config)?)
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors.allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_origin(Any));
    }

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins))
}
