//! Train mode runner

use anyhow::Result;
use tracing::debug;

use crate::config::RunConfiguration;

/// Entry point for `--mode train`. Receives the fully resolved configuration
/// and reports it; everything a training backend needs arrives through
/// `config`.
pub fn run(config: RunConfiguration) -> Result<()> {
    debug!(?config, "resolved run configuration");

    println!("Run configuration:");
    println!("  mode: {}", config.mode);
    println!("  batch size: {}", config.batch_size);
    println!("  epochs: {}", config.epochs);
    println!("  learning rate: {}", config.learning_rate);
    println!("  workers: {}", config.workers);
    println!("  device: {}", config.device);

    Ok(())
}
