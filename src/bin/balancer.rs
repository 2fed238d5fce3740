use clap::Parser;
use greet_server::utils::logger;
use greet_server::{Balancer, BalancerCli, RoundRobin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = BalancerCli::parse();

    logger::init_cli_logger();

    let config = match cli.validated() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Balancing across {} backends", config.backends.len());

    let balancer = Balancer::new(config.port, RoundRobin::new(config.backends.clone()));
    let bound = balancer.bind().await?;

    println!("Balancer running at http://localhost:{}/", config.port);

    bound.serve().await?;

    Ok(())
}
