mod gif_result;
mod request_generation;
mod search_config;
mod search_error;
mod user_settings;

pub use gif_result::{extract_image_items, ImageItem};
pub use request_generation::RequestGenerationCounter;
pub use search_config::{
    ContentRating, EmptyTermPolicy, EndpointProfile, ResultBundle, SearchConfig,
};
pub use search_error::SearchError;
pub use user_settings::{ThemeMode, UserSettings};
