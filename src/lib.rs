pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::HtmlPage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::RefreshEngine, pipeline::GraphPipeline};
pub use utils::error::{RefreshError, Result};
