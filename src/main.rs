use anyhow::Result;
use lintas_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use lintas_core::config::{AppConfig, StoreBackend};
use lintas_core::domain::listing::{ListingReadRepository, ListingWriteRepository};
use lintas_core::infrastructure::{
    database,
    repositories::{
        InMemoryListingStore, PostgresListingReadRepository, PostgresListingWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use lintas_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ListingRepos = (Arc<dyn ListingReadRepository>, Arc<dyn ListingWriteRepository>);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (read_repo, write_repo) = build_listing_repos(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        read_repo,
        write_repo,
        clock,
        slugger,
        config.max_slug_attempts(),
    ));

    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        backend = ?config.store_backend(),
        max_slug_attempts = config.max_slug_attempts(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_listing_repos(config: &AppConfig) -> Result<ListingRepos> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            let read_repo: Arc<dyn ListingReadRepository> =
                Arc::new(PostgresListingReadRepository::new(pool.clone()));
            let write_repo: Arc<dyn ListingWriteRepository> =
                Arc::new(PostgresListingWriteRepository::new(pool));
            Ok((read_repo, write_repo))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory listing store; data is lost on shutdown");
            let store = InMemoryListingStore::default();
            let read_repo: Arc<dyn ListingReadRepository> = Arc::new(store.clone());
            let write_repo: Arc<dyn ListingWriteRepository> = Arc::new(store);
            Ok((read_repo, write_repo))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
