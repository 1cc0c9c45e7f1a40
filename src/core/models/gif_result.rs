use serde_json::Value;

use crate::core::models::SearchError;

const ORIGINAL_IMAGE_URL_POINTER: &str = "/images/original/url";

/// One renderable grid entry built from a provider result.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub source_url: String,
}

impl ImageItem {
    pub fn label(&self) -> &str {
        match (self.title.as_deref(), self.id.as_deref()) {
            (Some(title), _) if !title.trim().is_empty() => title,
            (_, Some(id)) => id,
            _ => "GIF",
        }
    }

    fn from_gif_result(result: &Value) -> Option<Self> {
        let source_url = result
            .pointer(ORIGINAL_IMAGE_URL_POINTER)
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())?;

        Some(Self {
            id: result["id"].as_str().map(str::to_string),
            title: result["title"].as_str().map(str::to_string),
            source_url: source_url.to_string(),
        })
    }
}

/// Pulls the original image URL out of every well-formed entry of `data`.
///
/// Entries without a non-empty `images.original.url` are skipped. A body whose
/// `data` field is missing or not an array is a decode failure.
pub fn extract_image_items(body: &Value) -> Result<Vec<ImageItem>, SearchError> {
    let results = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SearchError::Decode("response body has no \"data\" array".to_string())
        })?;

    let items: Vec<ImageItem> = results
        .iter()
        .filter_map(ImageItem::from_gif_result)
        .collect();

    if items.len() < results.len() {
        log::debug!(
            "[EXTRACT] Skipped {} of {} results without an original image URL",
            results.len() - items.len(),
            results.len()
        );
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_keeps_only_entries_with_original_url() {
        let body = json!({
            "data": [
                {"images": {"original": {"url": "https://x/1.gif"}}},
                {"images": {}}
            ]
        });

        let items = extract_image_items(&body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source_url, "https://x/1.gif");
    }

    #[test]
    fn test_extract_preserves_response_order_and_skips_malformed() {
        let body = json!({
            "data": [
                {"id": "a", "images": {"original": {"url": "https://x/a.gif"}}},
                {"id": "b"},
                {"id": "c", "images": {"original": {"url": ""}}},
                {"id": "d", "images": {"original": {"url": "https://x/d.gif"}}},
                42,
                {"id": "e", "images": {"original": {"url": null}}},
                {"id": "f", "images": {"original": {"url": "https://x/f.gif"}}}
            ]
        });

        let items = extract_image_items(&body).unwrap();
        let urls: Vec<&str> = items.iter().map(|item| item.source_url.as_str()).collect();

        assert_eq!(urls, vec!["https://x/a.gif", "https://x/d.gif", "https://x/f.gif"]);
        assert_eq!(items[1].id.as_deref(), Some("d"));
    }

    #[test]
    fn test_extract_empty_data_is_not_an_error() {
        let items = extract_image_items(&json!({"data": []})).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_extract_missing_data_is_decode_error() {
        let result = extract_image_items(&json!({"meta": {"status": 200}}));
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_extract_non_array_data_is_decode_error() {
        let result = extract_image_items(&json!({"data": {"images": {}}}));
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_label_prefers_title_then_id() {
        let item = ImageItem {
            id: Some("abc".to_string()),
            title: Some("Happy Cat".to_string()),
            source_url: "https://x/1.gif".to_string(),
        };
        let untitled = ImageItem {
            title: None,
            ..item.clone()
        };

        assert_eq!(item.label(), "Happy Cat");
        assert_eq!(untitled.label(), "abc");
    }

    #[test]
    fn test_label_falls_back_when_title_is_blank() {
        let item = ImageItem {
            id: None,
            title: Some("  ".to_string()),
            source_url: "https://x/1.gif".to_string(),
        };

        assert_eq!(item.label(), "GIF");
    }
}
