use std::sync::Arc;

use crate::core::interfaces::adapters::HttpClient;
use crate::core::interfaces::ports::DisplayRegion;
use crate::core::models::{extract_image_items, ImageItem, SearchError};
use crate::global_constants;

pub type SearchOutcome = Result<Vec<ImageItem>, SearchError>;

/// Request, validate, parse and extract, then render into a `DisplayRegion`.
///
/// The async half (`fetch_image_items`) and the render half (`render_outcome`)
/// are separate so the UI can run the first on the runtime and apply the
/// second on its own thread in one uninterrupted step.
#[derive(Clone)]
pub struct SearchPipeline {
    http_client: Arc<dyn HttpClient>,
}

impl SearchPipeline {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    pub async fn fetch_image_items(&self, url: &str) -> SearchOutcome {
        log::info!("[PIPELINE] Requesting search results");

        let response = self.http_client.get(url).await?;

        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status));
        }

        let body: serde_json::Value = serde_json::from_slice(&response.body)?;
        let items = extract_image_items(&body)?;

        log::debug!(
            "[PIPELINE] Extracted URLs: {:?}",
            items
                .iter()
                .map(|item| item.source_url.as_str())
                .collect::<Vec<_>>()
        );

        Ok(items)
    }

    pub fn render_outcome(outcome: &SearchOutcome, region: &mut dyn DisplayRegion) {
        region.clear();

        match outcome {
            Ok(items) => {
                log::info!("[PIPELINE] Rendering {} images", items.len());
                for item in items {
                    region.append_image(item.clone());
                }
            }
            Err(error) => {
                log::error!("[PIPELINE] Search failed: {}", error);
                region.append_error_notice(global_constants::GENERIC_ERROR_NOTICE.to_string());
            }
        }
    }

    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        let response = self.http_client.get(url).await?;

        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status));
        }

        Ok(response.body)
    }

    #[allow(dead_code)]
    pub async fn run(&self, url: &str, region: &mut dyn DisplayRegion) {
        let outcome = self.fetch_image_items(url).await;
        Self::render_outcome(&outcome, region);
    }
}
