mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod middleware;
mod models;
mod routes;
mod service;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use dotenv::dotenv;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use config::Config;
use db::db::DBClient;
use db::local::LocalStore;
use db::remote::RemoteStore;
use db::store::StoreBackend;
use db::userdb::UserExt;
use handler::dashboard::{collect_stats, DashboardStats};
use routes::create_router;
use service::refresh::{spawn_refresh_loop, RefreshHandle};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    pub stats: Arc<RefreshHandle<DashboardStats>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    // Backend selection happens exactly once, here. Everything downstream
    // only ever sees the resulting DBClient.
    let backend: Arc<dyn StoreBackend> = if config.remote_enabled() {
        let url = config.supabase_url.clone().unwrap_or_default();
        let key = config.supabase_anon_key.clone().unwrap_or_default();
        println!("✅ Remote store configured: {}", url);
        Arc::new(RemoteStore::new(url, key))
    } else {
        tracing::warn!("Supabase credentials missing. Falling back to local storage.");
        match LocalStore::open(&config.data_dir).await {
            Ok(store) => {
                println!("✅ Local store ready at {}", config.data_dir);
                Arc::new(store)
            }
            Err(err) => {
                println!("🔥 Failed to open data directory: {:?}", err);
                std::process::exit(1);
            }
        }
    };

    let db_client = Arc::new(DBClient::new(backend));

    if let Err(e) = db_client.ensure_seed_user().await {
        tracing::error!("Error syncing seed user: {}", e);
    }

    // The dashboard's near-real-time numbers come from this loop, not
    // from any push channel.
    let stats_db_client = db_client.clone();
    let stats = Arc::new(spawn_refresh_loop(
        "dashboard-stats",
        tokio::time::Duration::from_secs(5),
        DashboardStats::default(),
        move || collect_stats(stats_db_client.clone()),
    ));

    let allowed_origins = vec![
        "http://localhost:5173".parse::<HeaderValue>().unwrap(),
        "http://localhost:8000".parse::<HeaderValue>().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT]);

    let app_state = Arc::new(AppState {
        env: config.clone(),
        db_client,
        stats,
    });

    let app = create_router(app_state.clone()).layer(cors);

    println!(
        "🚀 Server is running on http://localhost:{} ({} store)",
        config.port,
        app_state.db_client.backend_kind().to_str()
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
