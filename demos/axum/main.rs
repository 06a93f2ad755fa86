mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use cors::middleware::cors_middleware;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,spark_cors=debug")),
        )
        .init();

    let app_state = cors::build_state().expect("valid CORS configuration");

    let app = Router::new()
        .route("/api/sales", get(routes::sales).post(routes::record_sale))
        .route("/api/customers", get(routes::customers))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().expect("valid socket address");
    info!(%addr, "axum demo listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind demo listener");
    axum::serve(listener, app).await.expect("serve demo app");
}
