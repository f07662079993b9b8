use super::*;

fn site_config(backend: StoreBackend) -> SiteConfig {
    SiteConfig {
        port: config::DEFAULT_PORT,
        backend,
        database_url: Some("postgres://localhost/xops360".into()),
        db_max_connections: config::DEFAULT_DB_MAX_CONNECTIONS,
        auth: None,
        admin_emails: Vec::new(),
        cookie_secure: false,
    }
}

#[tokio::test]
async fn preview_credentials_only_serve_the_memory_store() {
    let auth = build_auth(&site_config(StoreBackend::Memory)).expect("preview auth");
    assert!(auth.sign_in(PREVIEW_ADMIN_EMAIL, PREVIEW_ADMIN_PASSWORD).await.is_ok());
}

#[test]
fn postgres_without_auth_service_is_refused() {
    let err = build_auth(&site_config(StoreBackend::Postgres)).err();
    assert_eq!(err.as_deref(), Some("AUTH_URL and AUTH_ANON_KEY required for postgres"));
}
