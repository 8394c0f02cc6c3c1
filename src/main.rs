use anyhow::Context;
use todo_client::{app::console, app::App, config::get_configuration, telemetry::get_subscriber};
use tokio::io::BufReader;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let mut app = App::with(&config).context("Could not build the client")?;

    tracing::info!(
        base_url = %config.api.base_url,
        require_auth = config.api.require_auth,
        "starting client"
    );
    if let Err(e) = app.start().await {
        tracing::error!(error = ?e, "initial load failed");
    }

    console::run(&mut app, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("Console i/o failed")?;

    Ok(())
}
