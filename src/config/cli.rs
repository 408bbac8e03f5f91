use crate::domain::ports::Container;
use crate::utils::error::{RefreshError, Result};
use crate::utils::markup;
use std::fs;

/// Container backed by an element inside a local HTML file.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    path: String,
    container_id: String,
}

impl HtmlPage {
    pub fn new(path: String, container_id: String) -> Self {
        Self { path, container_id }
    }

    fn with_page(&self, error: RefreshError) -> RefreshError {
        match error {
            RefreshError::ContainerNotFoundError { id, .. } => {
                RefreshError::ContainerNotFoundError {
                    id,
                    page: self.path.clone(),
                }
            }
            other => other,
        }
    }
}

impl Container for HtmlPage {
    async fn content(&self) -> Result<String> {
        let document = fs::read_to_string(&self.path)?;
        markup::extract_inner(&document, &self.container_id).map_err(|e| self.with_page(e))
    }

    async fn set_content(&self, new_markup: &str) -> Result<()> {
        let document = fs::read_to_string(&self.path)?;
        let rewritten = markup::replace_inner(&document, &self.container_id, new_markup)
            .map_err(|e| self.with_page(e))?;
        fs::write(&self.path, rewritten)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{}#{}", self.path, self.container_id)
    }
}
