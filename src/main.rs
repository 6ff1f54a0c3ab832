use clap::Parser;
use lighthub::config::{Cli, Config};
use lighthub::handler::AppState;
use lighthub::light::LightStore;
use lighthub::{router, unpack_error};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("lighthub.svc starting");

    let cfg = Config::resolve(&args).unwrap_or_else(|e| {
        tracing::error!(error = %format!("{:#}", e), "failed to load config file");
        std::process::exit(1);
    });

    let store = LightStore::load(cfg.lights_file()).unwrap_or_else(|e| {
        tracing::error!(
            error = %unpack_error(&e),
            path = ?cfg.lights_file(),
            "failed to seed lights"
        );
        std::process::exit(1);
    });
    match cfg.lights_file() {
        Some(path) => tracing::info!(count = store.len(), path = ?path, "loaded lights from file"),
        None => tracing::info!(count = store.len(), "loaded built-in lights"),
    }

    let base_path = cfg.app.get_base_path();
    let app = router(AppState::new(store, &base_path), &cfg.app);

    let address = cfg.app.address();
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let cancellation_token = CancellationToken::new();
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        shutdown_token.cancel();
    });

    tracing::info!(base_path = %base_path, "lighthub.svc running on {}", &address);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(cancellation_token.cancelled_owned())
        .await;
    if let Err(err) = result {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }

    tracing::info!("lighthub.svc going off, graceful shutdown complete");
}
