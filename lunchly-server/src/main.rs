use lunchly_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        listen = %config.listen_addr(),
        "Starting Lunchly"
    );

    let state = ServerState::initialize(&config).await?;
    Server::new(config, state).run().await?;

    Ok(())
}
