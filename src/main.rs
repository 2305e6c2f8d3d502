use axum::{routing::get, Router};
use community_vacancy_backend::{
    config::{get_config, init_config},
    database::client,
    middleware::cors::permissive_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let database = client::connect().await?;
    let app_state = AppState::new(database.collection(&config.mongodb_collection));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/community-vacancy",
            get(routes::vacancy::list_community_vacancies),
        )
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
