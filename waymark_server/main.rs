use std::sync::Arc;

use waymark_app::{bus::AppBus, config::Config};
use waymark_bot::dispatcher::Dispatcher;
use waymark_db::{DbPool, establish_connection_pool, uow::PostgresUnitOfWorkProvider};
use waymark_types::errors::ApplicationError;

mod console;
mod logs;

use console::ConsoleGateway;
use logs::setup_logging;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();

    let (config, db_pool, dispatcher) = setup_app().await?;

    let author =
        std::env::var("WAYMARK_CONSOLE_USER").unwrap_or_else(|_| "console".to_string());
    let gateway = ConsoleGateway::new(author);

    tracing::info!(
        "Waymark ready, command prefix '{}'",
        config.command_prefix
    );

    tokio::select! {
        result = gateway.run(&dispatcher) => {
            if let Err(e) = result {
                tracing::error!("Gateway failed: {e}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    db_pool.close().await;
    Ok(())
}

async fn setup_app() -> Result<(Arc<Config>, DbPool, Dispatcher), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let db_pool = establish_connection_pool().await?;

    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(|e| ApplicationError::Unknown(e.to_string()))?;

    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool.clone()));
    let bus = Arc::new(AppBus::new(config.clone(), uow_provider));
    let dispatcher = Dispatcher::new(bus);

    Ok((config, db_pool, dispatcher))
}
