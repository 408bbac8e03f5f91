use crate::core::{
    ConfigProvider, Container, DecodeOutcome, FetchResult, GraphMarkup, Pipeline, SkipReason,
};
use crate::utils::error::Result;
use crate::utils::markup;
use reqwest::Client;

pub struct GraphPipeline<C: Container, F: ConfigProvider> {
    container: C,
    config: F,
    client: Client,
}

impl<C: Container, F: ConfigProvider> GraphPipeline<C, F> {
    pub fn new(container: C, config: F) -> Self {
        Self {
            container,
            config,
            client: Client::new(),
        }
    }
}

fn json_shape(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl<C: Container, F: ConfigProvider> Pipeline for GraphPipeline<C, F> {
    async fn fetch(&self) -> Result<FetchResult> {
        tracing::debug!("Requesting graph from: {}", self.config.endpoint());
        let response = self.client.get(self.config.endpoint()).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Graph endpoint status: {}", status);

        let body = response.text().await?;
        Ok(FetchResult { status, body })
    }

    async fn decode(&self, fetched: FetchResult) -> Result<DecodeOutcome> {
        if !fetched.is_success() {
            return Ok(DecodeOutcome::Skipped(SkipReason::NonSuccessStatus(
                fetched.status,
            )));
        }

        let value: serde_json::Value = match serde_json::from_str(&fetched.body) {
            Ok(value) => value,
            Err(e) => {
                return Ok(DecodeOutcome::Skipped(SkipReason::MalformedBody(
                    e.to_string(),
                )))
            }
        };

        let html = match value {
            serde_json::Value::String(html) => html,
            other => {
                return Ok(DecodeOutcome::Skipped(SkipReason::UnexpectedShape(
                    json_shape(&other).to_string(),
                )))
            }
        };

        // The payload goes into the page unescaped; the backend is trusted
        // but active content is still flagged.
        if let Some(finding) = markup::active_content(&html) {
            tracing::warn!(
                "Fetched markup contains {}; injecting without sanitisation",
                finding
            );
        }

        Ok(DecodeOutcome::Markup(GraphMarkup::new(html)))
    }

    async fn render(&self, markup: GraphMarkup) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes of markup fetched at {} into container",
            markup.html.len(),
            markup.fetched_at
        );
        self.container.set_content(&markup.html).await?;
        Ok(self.container.describe())
    }
}
