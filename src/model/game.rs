use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::team::Team;

/// Lifecycle state of a game as encoded by the feed's `gameStatus` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
    Unknown(i64),
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Unknown(0)
    }
}

impl From<i64> for GameStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => GameStatus::Scheduled,
            2 => GameStatus::Live,
            3 => GameStatus::Final,
            other => GameStatus::Unknown(other),
        }
    }
}

impl From<GameStatus> for i64 {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Scheduled => 1,
            GameStatus::Live => 2,
            GameStatus::Final => 3,
            GameStatus::Unknown(code) => code,
        }
    }
}

/// Top performer for one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    #[serde(default, deserialize_with = "null_as_default")]
    pub person_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jersey_num: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_tricode: String,
    #[serde(default)]
    pub player_slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rebounds: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assists: u32,
}

impl Leader {
    /// The feed ships blank leaders until box-score data exists.
    pub fn has_data(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLeaders {
    #[serde(default)]
    pub home_leaders: Leader,
    #[serde(default)]
    pub away_leaders: Leader,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameId", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "gameCode", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "gameStatus", default, deserialize_with = "null_as_default")]
    pub status: GameStatus,
    #[serde(rename = "gameStatusText", default, deserialize_with = "null_as_default")]
    pub status_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: u32,
    #[serde(rename = "gameClock", default, deserialize_with = "null_as_default")]
    pub clock: String,
    // Scoreboard entries only fill gameTimeUTC. The league schedule fills both,
    // but its gameTimeUTC carries a placeholder 1900-01-01 date.
    #[serde(rename = "gameTimeUTC", default)]
    pub game_time_utc: Option<String>,
    #[serde(rename = "gameDateTimeUTC", default)]
    pub game_date_time_utc: Option<String>,
    #[serde(rename = "homeTeam", default)]
    pub home_team: Team,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Team,
    #[serde(rename = "gameLeaders", default)]
    pub leaders: Option<GameLeaders>,
}

impl Game {
    /// The raw start timestamp, preferring the full date-time field.
    pub fn start_time_utc(&self) -> Option<&str> {
        [&self.game_date_time_utc, &self.game_time_utc]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// Parsed start time. Anything that isn't RFC 3339 yields None.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.start_time_utc()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}
