pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "direct-check")]
#[command(about = "Classifies domains by .cn suffix and ping reachability")]
pub struct CliConfig {
    #[arg(long, default_value = "direct")]
    pub input_file: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Append to output files instead of overwriting")]
    pub append: bool,

    #[arg(long, default_value = "1", help = "Ping packet count per probe")]
    pub probe_count: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn append(&self) -> bool {
        self.append
    }

    fn probe_count(&self) -> u32 {
        self.probe_count
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input_file", &self.input_file)?;
        validate_path("input_file", &self.input_file)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("probe_count", self.probe_count, 1, 10)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input_file: "direct".to_string(),
            output_path: ".".to_string(),
            append: false,
            probe_count: 1,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_input_file_rejected() {
        let mut config = base_config();
        config.input_file = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probe_count_out_of_range_rejected() {
        let mut config = base_config();
        config.probe_count = 0;
        assert!(config.validate().is_err());
        config.probe_count = 100;
        assert!(config.validate().is_err());
    }
}
