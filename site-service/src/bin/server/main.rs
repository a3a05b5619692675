use std::net::SocketAddr;
use std::sync::Arc;

use auth::Authenticator;
use site_service::config::Config;
use site_service::domain::account::service::AccountService;
use site_service::inbound::http::router::create_router;
use site_service::inbound::http::router::AppState;
use site_service::outbound::repositories::PostgresAccountRepository;
use site_service::seed::Seeder;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "site-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        cors_origins = config.cors.allowed_origins.len(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&config.auth.auth_config()));
    let state = AppState::from_pool(pg_pool.clone(), authenticator);

    let account_service =
        AccountService::new(Arc::new(PostgresAccountRepository::new(pg_pool)));
    let report = Seeder {
        accounts: &account_service,
        news: state.news_service.as_ref(),
        cases: state.case_service.as_ref(),
        offerings: state.offering_service.as_ref(),
        company: state.company_service.as_ref(),
    }
    .run(&config.seed)
    .await?;
    tracing::info!(
        admin_created = report.admin_created,
        news = report.news,
        cases = report.cases,
        offerings = report.offerings,
        "Startup seeding finished"
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.cors);
    axum::serve(
        http_listener,
        http_application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server exited");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
