pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "graph-refresh")]
#[command(about = "Fetches graph markup from a backend and injects it into a page")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:5000/generate-graph")]
    pub endpoint: String,

    /// HTML page holding the graph container
    #[arg(long, default_value = "./static/index.html")]
    pub page: String,

    /// id of the element whose inner content is replaced
    #[arg(long, default_value = "graphContainer")]
    pub container_id: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats around the refresh")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn page_path(&self) -> &str {
        &self.page
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_path("page", &self.page)?;
        validation::validate_non_empty_string("container_id", &self.container_id)?;
        Ok(())
    }
}
