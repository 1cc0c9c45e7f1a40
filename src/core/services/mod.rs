mod search_query_builder;

pub use search_query_builder::SearchQueryBuilder;
