use clap::error::ErrorKind;
use clap::Parser;
use greet_server::utils::logger;
use greet_server::{CliConfig, GreeterServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The missing-argument contract is reported before anything else runs:
    // no logger, no socket.
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("Error: Port number is required.");
            println!("Usage: greet-server <port>");
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    logger::init_cli_logger();

    tracing::info!("Starting greet-server");

    let server_config = match config.validated() {
        Ok(server_config) => server_config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let server = GreeterServer::new(server_config);
    let bound = server.bind().await?;

    println!("Server running at {}", bound.greeting().address());

    bound.serve().await?;

    Ok(())
}
