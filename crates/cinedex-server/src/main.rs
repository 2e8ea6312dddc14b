//! cinedex server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), rebuilds the
//! SQLite catalog from the source TSV files, and serves the JSON API over
//! HTTP.

mod settings;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use cinedex_core::Catalog;
use cinedex_omdb::OmdbClient;
use cinedex_store_sqlite::{SourceFiles, SqliteStore, StoreOptions};
use settings::{ServerConfig, expand_tilde};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "cinedex movie catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {:?}", cli.config))?;

  // Open the store and rebuild it from the source files. Any failure here is
  // fatal: there is no partial-service mode.
  let store_path = expand_tilde(&server_cfg.store_path);
  let options = StoreOptions { enforce_foreign_keys: server_cfg.enforce_foreign_keys };

  let store = SqliteStore::open(&store_path, options)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  store.reset_schema().await.context("failed to reset schema")?;

  let data_dir = expand_tilde(&server_cfg.data_dir);
  store
    .load(&SourceFiles::in_dir(&data_dir))
    .await
    .with_context(|| format!("failed to load catalog from {data_dir:?}"))?;

  let metadata = OmdbClient::new(server_cfg.metadata.clone())
    .context("failed to build metadata client")?;

  let catalog = Arc::new(Catalog::new(store, metadata));
  let app = cinedex_api::api_router(catalog).layer(TraceLayer::new_for_http());

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
