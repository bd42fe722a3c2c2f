pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use domain::a001_medical_records::{service::RecordsService, RecordsRepository};
    use shared::config;

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = config::load_config()?;

    let data_path = config::resolve_path(&config.mock.data_path);
    let repository = RecordsRepository::load(data_path.as_deref())
        .map_err(|e| anyhow::anyhow!("records load failed: {e}"))?;
    let records = repository.get();
    if records.is_empty() {
        tracing::warn!("Medical records payload is empty; every panel will render blank");
    } else {
        let (labs, vitals, prescriptions) = records.counts();
        tracing::info!(labs, vitals, prescriptions, "Medical records loaded");
    }

    let state = Arc::new(routes::AppState {
        records: RecordsService::new(repository, &config.mock),
    });

    let mut app = routes::configure_routes(state);
    if let Some(static_dir) = config::resolve_path(&config.server.static_dir) {
        tracing::info!("Serving frontend from: {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Mock API listening on http://{} (latency {} ms, fail rate {})",
        addr,
        config.mock.latency_ms,
        config.mock.fail_rate
    );

    axum::serve(listener, app).await?;
    Ok(())
}
