use crate::core::{DecodeOutcome, Pipeline, RefreshReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RefreshEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RefreshEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// One trigger-fetch-render cycle: at most one container mutation.
    pub async fn run(&self) -> Result<RefreshReport> {
        tracing::info!("Starting graph refresh...");
        self.monitor.log_stats("Before fetch");

        let fetched = self.pipeline.fetch().await?;
        tracing::info!(
            "Fetched {} bytes (status {})",
            fetched.body.len(),
            fetched.status
        );

        let report = match self.pipeline.decode(fetched).await? {
            DecodeOutcome::Markup(markup) => {
                tracing::info!("Decoded {} bytes of graph markup", markup.html.len());
                let target = self.pipeline.render(markup).await?;
                tracing::info!("Container updated: {}", target);
                RefreshReport::Updated { target }
            }
            DecodeOutcome::Skipped(reason) => {
                tracing::warn!("Container left unchanged: {}", reason);
                RefreshReport::Unchanged { reason }
            }
        };

        self.monitor.log_final_stats();
        Ok(report)
    }
}
