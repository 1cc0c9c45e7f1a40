use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ContentRating {
    #[default]
    #[serde(rename = "g")]
    G,
    #[serde(rename = "pg")]
    Pg,
    #[serde(rename = "pg-13")]
    Pg13,
    #[serde(rename = "r")]
    R,
}

impl ContentRating {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ContentRating::G => "g",
            ContentRating::Pg => "pg",
            ContentRating::Pg13 => "pg-13",
            ContentRating::R => "r",
        }
    }
}

/// Provider-side content subset. `MessagingNonClips` leaves out video-only clips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResultBundle {
    #[default]
    MessagingNonClips,
    ClipsGridPicker,
    StickerLayering,
    LowBandwidth,
}

impl ResultBundle {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ResultBundle::MessagingNonClips => "messaging_non_clips",
            ResultBundle::ClipsGridPicker => "clips_grid_picker",
            ResultBundle::StickerLayering => "sticker_layering",
            ResultBundle::LowBandwidth => "low_bandwidth",
        }
    }
}

/// Which search endpoint to hit. `SearchTags` only sends the term, limit and offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndpointProfile {
    #[default]
    Search,
    SearchTags,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTermPolicy {
    #[default]
    FallbackToDefault,
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub result_limit: u32,
    pub rating: ContentRating,
    pub language: String,
    pub result_bundle: ResultBundle,
    pub endpoint_profile: EndpointProfile,
    pub empty_term_policy: EmptyTermPolicy,
    pub default_search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_serializes_with_provider_spelling() {
        let serialized = serde_json::to_string(&ContentRating::Pg13).unwrap();
        assert_eq!(serialized, "\"pg-13\"");
    }

    #[test]
    fn test_bundle_deserializes_from_snake_case() {
        let bundle: ResultBundle = serde_json::from_str("\"clips_grid_picker\"").unwrap();
        assert_eq!(bundle, ResultBundle::ClipsGridPicker);
        assert_eq!(bundle.as_query_value(), "clips_grid_picker");
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(ContentRating::default(), ContentRating::G);
        assert_eq!(ResultBundle::default(), ResultBundle::MessagingNonClips);
        assert_eq!(EndpointProfile::default(), EndpointProfile::Search);
        assert_eq!(EmptyTermPolicy::default(), EmptyTermPolicy::FallbackToDefault);
    }
}
