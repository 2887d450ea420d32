use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{Configuration, DatabaseSettings};
use crate::run::run;
use crate::storage::PgBookingStore;
use crate::webhook::WebhookClient;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let store = PgBookingStore::new(get_connection_pool(&configuration.database));
        let relay = WebhookClient::new(configuration.webhook)
            .context("Failed to build the webhook HTTP client")?;

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                configuration.app.host, configuration.app.port
            )
        })?;

        let address = configuration.app.host;
        let port = listener.local_addr()?.port();
        tracing::info!("Starting service on address: {}:{}", address, port);

        let server = run(listener, Arc::new(store), Arc::new(relay))?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Connections are opened on first use so the server starts without the database.
pub fn get_connection_pool(database: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(database.with_db())
}
