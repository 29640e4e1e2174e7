use dotenvy::dotenv;
use image_echo_service::config::Settings;
use image_echo_service::services::storage::UploadStore;
use image_echo_service::services::templates::TemplateEngine;
use image_echo_service::{AppState, create_app};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const UPLOAD_DIR: &str = "uploads";
const TEMPLATE_DIR: &str = "templates";
const MAX_BODY_SIZE: usize = 32 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Settings are read once here and threaded through AppState; handlers
    // never re-read the environment.
    let settings = Settings::from_env();

    let default_filter = if settings.debug {
        "image_echo_service=debug,tower_http=debug"
    } else {
        "image_echo_service=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Image Echo Service...");
    info!(
        "⚙️  Settings: debug={}, echo_active={}",
        settings.debug, settings.echo_active
    );

    let store = Arc::new(UploadStore::new(PathBuf::from(UPLOAD_DIR)));
    store.ensure_dir().await?;

    let templates = Arc::new(TemplateEngine::new(TEMPLATE_DIR));

    let state = AppState {
        settings,
        store,
        templates,
    };

    let app = create_app(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        info!(
                            "📤 Finished in {:?} with status {}",
                            latency,
                            response.status()
                        );
                    },
                ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_SIZE));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    info!("✅ Server ready at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Server shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("⌨️  Ctrl+C received, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("💤 SIGTERM received, starting graceful shutdown...");
        },
    }
}
