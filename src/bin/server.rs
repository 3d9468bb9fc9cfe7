//! Server binary.
//!
//! `nc-news` or `nc-news serve` runs the API; `nc-news seed [DIR]` reloads the
//! dataset in DIR (default `data/test-data`) and exits.

use nc_news::{app, apply_migrations, ensure_database_exists, load_from_env, seed, store, AppState, PgNewsStore, SeedData};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED_DIR: &str = "data/test-data";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nc_news=info,tower_http=info")),
        )
        .init();
    tracing::info!(environment = %settings.environment, "starting");

    ensure_database_exists(&settings.database_url).await?;
    let pool = store::connect(&settings).await?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("seed") => {
            let dir = args.next().unwrap_or_else(|| DEFAULT_SEED_DIR.into());
            let data = SeedData::from_dir(&dir).await?;
            seed(&pool, &data).await?;
            store::close(pool).await;
            return Ok(());
        }
        None | Some("serve") => {}
        Some(other) => {
            store::close(pool).await;
            return Err(format!("unknown command '{}' (expected serve or seed)", other).into());
        }
    }

    {
        let mut conn = pool.acquire().await?;
        apply_migrations(&mut *conn).await?;
    }

    let state = AppState::new(PgNewsStore::new(pool.clone()));
    let router = app(state, settings.body_limit_bytes);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store::close(pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutdown requested");
}
