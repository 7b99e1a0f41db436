use std::{env, net::SocketAddr, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Open the connection pool, preferring config.toml settings and falling
/// back to the `DATABASE_URL` environment default.
async fn connect_db() -> anyhow::Result<DatabaseConnection> {
    match configs::load_default() {
        Ok(cfg) => {
            let mut d = cfg.database;
            d.normalize_from_env();
            d.validate()?;
            let mut opts = ConnectOptions::new(d.url);
            opts.max_connections(d.max_connections)
                .min_connections(d.min_connections)
                .connect_timeout(Duration::from_secs(d.connect_timeout_secs))
                .idle_timeout(Duration::from_secs(d.idle_timeout_secs))
                .max_lifetime(Duration::from_secs(d.max_lifetime_secs))
                .acquire_timeout(Duration::from_secs(d.acquire_timeout_secs))
                .sqlx_logging(d.sqlx_logging);
            Ok(Database::connect(opts).await?)
        }
        Err(_) => models::db::connect().await,
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db = connect_db().await?;
    let state = ServerState::new(db);

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting realty api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
