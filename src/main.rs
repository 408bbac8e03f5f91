use clap::Parser;
use graph_refresh::core::RefreshReport;
use graph_refresh::utils::{logger, validation::Validate};
use graph_refresh::{CliConfig, GraphPipeline, HtmlPage, RefreshEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting graph-refresh CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let container = HtmlPage::new(config.page.clone(), config.container_id.clone());
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
