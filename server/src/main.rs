#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::{SiteConfig, StoreBackend};
use services::auth::{AuthProvider, RemoteAuth, StaticAuth};
use services::store::CollectionStore;
use services::store::memory::MemoryStore;
use services::store::postgres::PgStore;

const PREVIEW_ADMIN_EMAIL: &str = "admin@localhost";
const PREVIEW_ADMIN_PASSWORD: &str = "preview";

async fn build_store(config: &SiteConfig) -> Result<Arc<dyn CollectionStore>, String> {
    match (config.backend, config.database_url.as_deref()) {
        (StoreBackend::Memory, _) => {
            tracing::warn!("using in-memory collection store; edits are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        (StoreBackend::Postgres, Some(url)) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .map_err(|e| format!("database init failed: {e}"))?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        (StoreBackend::Postgres, None) => Err("DATABASE_URL required".into()),
    }
}

/// The preview credentials never guard a persistent store.
fn build_auth(config: &SiteConfig) -> Result<Arc<dyn AuthProvider>, String> {
    match (&config.auth, config.backend) {
        (Some(auth), _) => {
            tracing::info!(url = %auth.url, "hosted auth service configured");
            Ok(Arc::new(RemoteAuth::new(auth.clone())))
        }
        (None, StoreBackend::Memory) => {
            tracing::warn!(
                email = PREVIEW_ADMIN_EMAIL,
                "auth service not configured; using local preview credentials"
            );
            Ok(Arc::new(StaticAuth::new(&[(PREVIEW_ADMIN_EMAIL, PREVIEW_ADMIN_PASSWORD)])))
        }
        (None, StoreBackend::Postgres) => Err("AUTH_URL and AUTH_ANON_KEY required for postgres".into()),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "collection store unavailable");
            std::process::exit(1);
        }
    };
    let auth = match build_auth(&config) {
        Ok(auth) => auth,
        Err(e) => {
            tracing::error!(error = %e, "auth provider unavailable");
            std::process::exit(1);
        }
    };
    let state = state::AppState::new(store, auth, config.admin_emails.clone(), config.cookie_secure);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router assembly failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "xops360 site listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
