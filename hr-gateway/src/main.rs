use anyhow::Context;
use hr_gateway::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, configuration, logger
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        backend = %config.backend_url,
        strip_api_prefix = config.strip_api_prefix,
        "HR gateway starting..."
    );

    // 2. Serve until Ctrl-C
    Server::new(config)
        .run()
        .await
        .context("HR gateway stopped with an error")?;

    Ok(())
}
