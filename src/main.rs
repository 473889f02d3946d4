use cucumber::World as _;
use productid_acceptance::{HarnessConfig, ProductIdWorld};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    rt.block_on(async_main());
}

async fn async_main() {
    let config = HarnessConfig::from_env();
    tracing::info!(
        features = %config.features_path.display(),
        demo_mode = config.demo_mode,
        "Running productid features"
    );

    // One scenario at a time; they share the host
    ProductIdWorld::cucumber()
        .max_concurrent_scenarios(1)
        .run_and_exit(config.features_path)
        .await;
}
