use crate::domain::model::{DecodeOutcome, FetchResult, GraphMarkup};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Container: Send + Sync {
    fn content(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn set_content(
        &self,
        markup: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable description of the target element, for reports.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn page_path(&self) -> &str;
    fn container_id(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<FetchResult>;
    async fn decode(&self, fetched: FetchResult) -> Result<DecodeOutcome>;
    async fn render(&self, markup: GraphMarkup) -> Result<String>;
}
