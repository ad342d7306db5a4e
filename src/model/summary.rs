use serde::{Deserialize, Serialize};

use super::game::{Game, Leader};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_name: String,
    pub team_code: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
}

impl From<&Leader> for PlayerStat {
    fn from(leader: &Leader) -> Self {
        PlayerStat {
            player_name: leader.name.clone(),
            team_code: leader.team_tricode.clone(),
            points: leader.points,
            rebounds: leader.rebounds,
            assists: leader.assists,
        }
    }
}

/// Catch-up view of a single game. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game: Game,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_performers: Vec<PlayerStat>,
    pub last_updated: String,
}

impl GameSummary {
    pub const FRESH: &'static str = "just now";

    /// Home leader first, then away; sides without box-score data are left out.
    pub fn from_game(game: Game) -> Self {
        let top_performers = game
            .leaders
            .as_ref()
            .map(|l| {
                [&l.home_leaders, &l.away_leaders]
                    .into_iter()
                    .filter(|leader| leader.has_data())
                    .map(PlayerStat::from)
                    .collect()
            })
            .unwrap_or_default();
        GameSummary { game, top_performers, last_updated: Self::FRESH.to_string() }
    }
}
