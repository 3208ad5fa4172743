//! Service assembly.

use crate::config::{Config, StorageBackend};
use account_service_core::clients::{
    HttpSequenceIssuer, HttpTransactionLedger, HttpUserDirectory, http_client,
};
use account_service_core::providers::AccountRepository;
use account_service_core::{
    AccountEnvironment, AccountLifecycle, InMemoryAccountRepository, SystemClock,
};
use account_service_postgres::PostgresAccountRepository;
use account_service_web::{account_router, http_trace_layer, request_id_layer};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::net::SocketAddr;
use std::sync::Arc;

/// Latency buckets for `*_duration_seconds` histograms.
const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Install the Prometheus exporter on the configured metrics port.
///
/// # Errors
///
/// Returns an error if the exporter cannot bind or a recorder is already installed.
pub fn init_metrics(config: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.metrics_port).parse()?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            DURATION_BUCKETS,
        )?
        .install()?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Build the configured store and serve until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the store, the HTTP clients or the listener cannot be set up.
pub async fn run(config: Config) -> anyhow::Result<()> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory account store; data is lost on restart");
            serve(&config, InMemoryAccountRepository::new()).await
        }
        StorageBackend::Postgres => {
            let repository = PostgresAccountRepository::connect(
                &config.storage.database_url,
                config.storage.max_connections,
                config.storage.connect_timeout,
            )
            .await?;
            repository.migrate().await?;
            tracing::info!("✓ Migrations complete");
            serve(&config, repository).await
        }
    }
}

async fn serve<R>(config: &Config, accounts: R) -> anyhow::Result<()>
where
    R: AccountRepository + 'static,
{
    let collaborators = &config.collaborators;
    let client = http_client(collaborators.timeout)?;

    let env = AccountEnvironment::new(
        HttpUserDirectory::new(&collaborators.user_service_url, client.clone()),
        HttpSequenceIssuer::new(&collaborators.sequence_service_url, client.clone()),
        HttpTransactionLedger::new(&collaborators.transaction_service_url, client),
        accounts,
        Arc::new(SystemClock),
    );
    let lifecycle = Arc::new(AccountLifecycle::new(env, config.policy.clone()));

    let app = account_router(lifecycle)
        .layer(http_trace_layer())
        .layer(request_id_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Account service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
