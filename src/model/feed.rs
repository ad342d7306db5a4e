use serde::{Deserialize, Serialize};

use super::game::Game;

/// Today's scoreboard document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub scoreboard: ScoreboardGames,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScoreboardGames {
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub time: Option<String>,
}

impl Scoreboard {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn into_games(self) -> Vec<Game> {
        self.scoreboard.games
    }
}

/// Full-season schedule document, grouped by date.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LeagueSchedule {
    #[serde(rename = "leagueSchedule", default)]
    pub league_schedule: ScheduleBody,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScheduleBody {
    #[serde(rename = "seasonYear", default)]
    pub season_year: Option<String>,
    #[serde(rename = "gameDates", default)]
    pub game_dates: Vec<GameDate>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GameDate {
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl LeagueSchedule {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Every game across every date, in feed order.
    pub fn into_games(self) -> Vec<Game> {
        self.league_schedule
            .game_dates
            .into_iter()
            .flat_map(|date| date.games)
            .collect()
    }
}
