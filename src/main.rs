use iss_spotter::utils::{logger, validation::Validate};
use iss_spotter::{IssClient, Spotter, SpotterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::var("ISS_VERBOSE").is_ok();
    logger::init_cli_logger(verbose);

    tracing::info!("Starting iss-spotter");

    let config = SpotterConfig::from_env();
    if verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = IssClient::new(config);
    let spotter = Spotter::new(client);

    match spotter.run().await {
        Ok(passes) => {
            tracing::info!("✅ Found {} upcoming passes", passes.len());
            for pass in passes {
                let when = chrono::DateTime::from_timestamp(pass.rise_time, 0)
                    .map(|t| t.to_rfc2822())
                    .unwrap_or_else(|| format!("epoch {}", pass.rise_time));
                println!("Next pass at {} for {} seconds!", when, pass.duration);
            }
        }
        Err(e) => {
            tracing::error!("❌ Lookup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
