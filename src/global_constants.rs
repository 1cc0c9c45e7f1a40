pub const APPLICATION_NAME: &str = "GIF Search - Desktop";
pub const APPLICATION_TITLE: &str = "GIF Search";
pub const CONFIG_DIRECTORY_NAME: &str = "gif-search-pc";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const GIPHY_API_BASE_URL: &str = "https://api.giphy.com";
pub const GIPHY_SEARCH_PATH: &str = "/v1/gifs/search";
pub const GIPHY_SEARCH_TAGS_PATH: &str = "/v1/gifs/search/tags";
// Public demo key; override it through settings.json.
pub const GIPHY_API_KEY: &str = "dc6zaTOxFJmzC";

pub const DEFAULT_RESULT_LIMIT: u32 = 25;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SEARCH_TERM: &str = "trending";
pub const DEFAULT_GRID_COLUMNS: usize = 4;
pub const MAX_GRID_COLUMNS: usize = 8;

pub const HTTP_TIMEOUT_SECONDS: u64 = 30;
pub const HTTP_USER_AGENT: &str = "gif-search-pc/0.1";

pub const GRID_CELL_SIZE: f32 = 160.0;

pub const GENERIC_ERROR_NOTICE: &str = "Something went wrong while loading GIFs. Please try again.";
pub const EMPTY_TERM_ALERT: &str = "Please enter a search term first.";
pub const NO_RESULTS_HINT: &str = "No GIFs found for that search.";

pub const STATUS_READY: &str = "Ready";
pub const STATUS_SEARCHING: &str = "Searching...";
pub const STATUS_FAILED: &str = "Search failed";
