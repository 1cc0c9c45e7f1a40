use crate::core::models::{EmptyTermPolicy, EndpointProfile, SearchConfig, SearchError};
use crate::global_constants;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub term: SearchTerm,
    pub used_default_term: bool,
    pub url: String,
}

pub struct SearchQueryBuilder {
    config: SearchConfig,
}

impl SearchQueryBuilder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Builds the request for `raw`. Only fails when the term is blank and the
    /// configured policy rejects blank terms.
    pub fn build(&self, raw: &str) -> Result<SearchRequest, SearchError> {
        let parsed = SearchTerm::parse(raw);

        let (term, used_default_term) = if parsed.is_empty() {
            match self.config.empty_term_policy {
                EmptyTermPolicy::FallbackToDefault => {
                    log::debug!(
                        "[QUERY] Empty search term, falling back to '{}'",
                        self.config.default_search_term
                    );
                    (SearchTerm::parse(&self.config.default_search_term), true)
                }
                EmptyTermPolicy::Reject => {
                    log::info!("[QUERY] Empty search term rejected");
                    return Err(SearchError::EmptySearchTerm);
                }
            }
        } else {
            (parsed, false)
        };

        let url = self.construct_search_url(&term);
        log::debug!("[QUERY] Search URL: {}", url);

        Ok(SearchRequest {
            term,
            used_default_term,
            url,
        })
    }

    fn construct_search_url(&self, term: &SearchTerm) -> String {
        let config = &self.config;
        let path = match config.endpoint_profile {
            EndpointProfile::Search => global_constants::GIPHY_SEARCH_PATH,
            EndpointProfile::SearchTags => global_constants::GIPHY_SEARCH_TAGS_PATH,
        };

        let mut url = format!(
            "{}{}?api_key={}&q={}&limit={}&offset=0",
            config.api_base_url,
            path,
            urlencoding::encode(&config.api_key),
            urlencoding::encode(term.as_str()),
            config.result_limit
        );

        if config.endpoint_profile == EndpointProfile::Search {
            url.push_str("&rating=");
            url.push_str(config.rating.as_query_value());
            url.push_str("&lang=");
            url.push_str(&urlencoding::encode(&config.language));
            url.push_str("&bundle=");
            url.push_str(config.result_bundle.as_query_value());
        }

        url
    }
}
