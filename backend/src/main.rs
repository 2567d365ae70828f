//! Quill entry-point: loads configuration, seeds news and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use quill::inbound::http::health::HealthState;
use quill::inbound::http::session_config::{BuildMode, key_fingerprint, session_settings_from_env};
use quill::outbound::memory::MemoryStore;
use quill::seed::seed_news;
use quill::settings::ServerSettings;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    info!(fingerprint = %key_fingerprint(&session.key), "session key loaded");

    let store = MemoryStore::new();
    if let Some(path) = &settings.seed_path {
        seed_news(store.news.as_ref(), path)
            .await
            .wrap_err("news seeding failed")?;
    }

    let bind_addr = (settings.host().to_owned(), settings.port());
    info!(host = %bind_addr.0, port = bind_addr.1, "starting server");
    let config = ServerConfig::new(session, bind_addr)
        .with_news_per_page(settings.news_per_page())
        .with_store(store);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}
