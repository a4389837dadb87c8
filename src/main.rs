use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod deepseek_client;
mod fallback;
mod handlers;
mod history;
mod language;
mod middleware;
mod subjects;
mod upstream;

pub struct AppState {
    pub deepseek_client: Option<deepseek_client::DeepSeekClient>,
    pub chats: history::ChatStore,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Initialize the DeepSeek client if an API key is provided. Without a
    // key the proxy still runs; every answer comes from the local fallback.
    let deepseek_client = match std::env::var("DEEPSEEK_API_KEY").ok() {
        Some(api_key) if !api_key.is_empty() => {
            tracing::info!("Initializing DeepSeek chat client...");
            Some(deepseek_client::DeepSeekClient::new(api_key))
        }
        _ => {
            tracing::warn!("DEEPSEEK_API_KEY not found. Answers will come from the local fallback only.");
            None
        }
    };

    let shared_state = Arc::new(AppState {
        deepseek_client,
        chats: history::ChatStore::new(),
    });

    let app = Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::ask::ask_routes())
        .route("/api/status", axum::routing::get(api_status))
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(shared_state));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, fmt, EnvFilter};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,mugalim=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,mugalim=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Mugalim tutor proxy starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Configuration - DeepSeek: {}",
        if std::env::var("DEEPSEEK_API_KEY").is_ok() { "configured" } else { "missing" }
    );

    Ok(())
}

// API Status endpoint
async fn api_status(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Json<serde_json::Value> {
    use serde_json::json;

    let deepseek_status = if state.deepseek_client.is_some() {
        "configured"
    } else {
        "not_configured"
    };

    axum::response::Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "deepseek": deepseek_status
        },
        "endpoints": {
            "ask": "/api/ask",
            "status": "/api/status"
        }
    }))
}
