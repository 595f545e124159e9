pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_DIR: &str = "data";
pub const MOVIES_FILE: &str = "movies.json";
pub const REVIEWS_FILE: &str = "reviews.json";
pub const NEWS_FILE: &str = "news.json";

pub const ALL_GENRES: &str = "All";
pub const MAX_STARS: u8 = 5;

pub const SCORE_SAME_GENRE: u8 = 3;
pub const SCORE_CLOSE_YEAR: u8 = 2;
pub const SCORE_CLOSE_RATING: u8 = 1;
pub const SIMILAR_YEAR_WINDOW: i32 = 5;
pub const SIMILAR_RATING_WINDOW: f64 = 0.5;
pub const DEFAULT_SIMILAR_LIMIT: usize = 6;

pub const TOP_MOVIES_COUNT: usize = 10;
pub const MORE_MOVIES_COUNT: usize = 6;
pub const HERO_MOVIES_COUNT: usize = 3;

pub const CONTACT_NAME_MIN_LEN: usize = 2;
pub const CONTACT_MESSAGE_MIN_LEN: usize = 10;
pub const CONTACT_FIELD_MAX_LEN: u64 = 5000;

pub const HERO_ROTATE_INTERVAL_SECS: u64 = 5;
pub const CONTACT_RESET_DELAY_SECS: u64 = 3;
pub const VIEW_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
pub const VIEW_CLEANUP_JOB_INTERVAL: u64 = 5 * 60;
