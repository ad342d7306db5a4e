use std::env;

use chrono_tz::Tz;

pub const DEFAULT_SCOREBOARD_URL: &str =
    "https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json";
pub const DEFAULT_SCHEDULE_URL: &str =
    "https://cdn.nba.com/static/json/staticData/scheduleLeagueV2.json";

pub const SCOREBOARD_URL_VAR: &str = "BBALL_SCOREBOARD_URL";
pub const SCHEDULE_URL_VAR: &str = "BBALL_SCHEDULE_URL";

/// Every date and time is shown in this zone.
pub const DISPLAY_TZ: Tz = chrono_tz::America::New_York;

/// Where the two feeds live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub scoreboard_url: String,
    pub schedule_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            scoreboard_url: DEFAULT_SCOREBOARD_URL.to_string(),
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
        }
    }
}

impl FeedConfig {
    /// Defaults, with `BBALL_SCOREBOARD_URL` / `BBALL_SCHEDULE_URL` taking precedence when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        FeedConfig {
            scoreboard_url: pick(SCOREBOARD_URL_VAR, DEFAULT_SCOREBOARD_URL),
            schedule_url: pick(SCHEDULE_URL_VAR, DEFAULT_SCHEDULE_URL),
        }
    }
}
