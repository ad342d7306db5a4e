use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{Game, GameStatus};

/// Most games either mode will return.
pub const MAX_GAMES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// Next scheduled games after now, earliest first.
    Upcoming,
    /// Last completed games, oldest first.
    Recent,
}

impl ScheduleMode {
    /// Upcoming unless only `recent` was asked for.
    pub fn from_flags(upcoming: bool, recent: bool) -> Self {
        if recent && !upcoming { ScheduleMode::Recent } else { ScheduleMode::Upcoming }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScheduleMode::Upcoming => "Upcoming Games",
            ScheduleMode::Recent => "Recent Games",
        }
    }
}

/// Narrow a team's games (feed order, assumed chronological) to at most
/// [`MAX_GAMES`] for the requested mode.
pub fn select(games: Vec<Game>, mode: ScheduleMode, as_of: DateTime<Utc>) -> Vec<Game> {
    let selected = match mode {
        ScheduleMode::Upcoming => games
            .into_iter()
            // NOTE: a Scheduled game whose start time is missing or unparseable is
            // dropped without a word. It may hide a feed format change.
            .filter(|g| {
                g.status == GameStatus::Scheduled
                    && g.start_time().is_some_and(|start| start > as_of)
            })
            .take(MAX_GAMES)
            .collect(),
        ScheduleMode::Recent => {
            let mut finals: Vec<Game> = games
                .into_iter()
                .filter(|g| g.status == GameStatus::Final)
                .collect();
            let skip = finals.len().saturating_sub(MAX_GAMES);
            finals.split_off(skip)
        }
    };
    debug!(?mode, kept = selected.len(), "Selected schedule games");
    selected
}
