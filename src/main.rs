use anyhow::Context;

use boat_waiver::config::get_configuration;
use boat_waiver::startup::AppServer;
use boat_waiver::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "boat-waiver".into(),
        "info".into(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration().context("Failed to load configuration")?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
