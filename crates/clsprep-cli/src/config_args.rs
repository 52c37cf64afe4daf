use burn::config::Config;
use clsprep::PipelineConfig;

/// Devices the CLI can run batches on.
const CPU_DEVICE: &str = "cpu";

/// Pipeline config arg group.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Pipeline config JSON file.
    #[clap(long)]
    pub config: String,
}

impl ConfigArgs {
    /// Load and validate the pipeline config.
    pub fn load(&self) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
        let config = PipelineConfig::load(&self.config)
            .map_err(|e| format!("cannot load config {}: {e}", self.config))?;
        config.validate()?;

        if config.device != CPU_DEVICE {
            return Err(format!(
                "unsupported device {:?}; only {CPU_DEVICE:?} is available",
                config.device
            )
            .into());
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}
