/// Route component constants shared across crates
pub const APP_ROUTE_COMPONENT: &str = "app";

pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";

pub const FEED_ROUTE_COMPONENT: &str = "feed";

/// IANA identifier used for clubs and zones when no province evidence exists.
pub const DEFAULT_TIMEZONE: &str = "America/Toronto";

pub const DEFAULT_PRODUCT_ID: &str = "-//clubcal//Event Feed//EN";
pub const DEFAULT_UID_DOMAIN: &str = "clubcal.local";
pub const DEFAULT_CACHE_MAX_AGE_SECS: u32 = 60;

pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const CALENDAR_FILE_SUFFIX: &str = ".ics";
