/// Cookie carrying the session id used to key flash notifications.
pub const SESSION_COOKIE: &str = "portfolio_sid";

/// How many projects and posts the home page shows.
pub const HOME_RECENT_LIMIT: u32 = 3;

/// How many messages the contact page shows.
pub const CONTACT_RECENT_LIMIT: u32 = 5;

pub const FLASH_PROJECT_ADDED: &str = "Project added (demo).";
pub const FLASH_POST_ADDED: &str = "Post added (demo).";
pub const FLASH_MESSAGE_RECEIVED: &str = "Thanks! Your message has been received.";

/// Unread flash messages older than this are dropped by the eviction task.
pub const FLASH_TTL_SECS: u64 = 10 * 60;
pub const FLASH_EVICTION_INTERVAL_SECS: u64 = 60;
