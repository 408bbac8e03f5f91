use clap::Parser;
use graph_refresh::config::toml_config::TomlConfig;
use graph_refresh::core::{ConfigProvider, RefreshReport};
use graph_refresh::utils::{logger, validation::Validate};
use graph_refresh::{GraphPipeline, HtmlPage, RefreshEngine};

#[derive(Parser)]
#[command(name = "toml-refresh")]
#[command(about = "Graph refresh driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "graph-refresh.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be refreshed without issuing the request
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based graph refresh");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no request will be issued");
        println!(
            "Would GET {} and write the decoded markup into {}#{}",
            config.endpoint(),
            config.page_path(),
            config.container_id()
        );
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let container = HtmlPage::new(
        config.page_path().to_string(),
        config.container_id().to_string(),
    );
    let pipeline = GraphPipeline::new(container, config);

    let engine = RefreshEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(RefreshReport::Updated { target }) => {
            tracing::info!("✅ Graph refresh completed successfully!");
            tracing::info!("📁 Container updated: {}", target);
            println!("✅ Graph refresh completed successfully!");
            println!("📁 Container updated: {}", target);
        }
        Ok(RefreshReport::Unchanged { reason }) => {
            tracing::warn!("⚠️ Container left unchanged: {}", reason);
            println!("⚠️ Container left unchanged: {}", reason);
        }
        Err(e) => {
            tracing::error!(
                "❌ Graph refresh failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                graph_refresh::utils::error::ErrorSeverity::Low => 0,
                graph_refresh::utils::error::ErrorSeverity::Medium => 2,
                graph_refresh::utils::error::ErrorSeverity::High => 1,
                graph_refresh::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Source: {}", config.endpoint());
    println!("  Page: {}", config.page_path());
    println!("  Container: {}", config.container_id());
    println!("  Monitoring: {}", config.monitoring_enabled());
}
