//! Deciding whether a free-text team query names one side of a game.
//!
//! One predicate, [`team_matches`], backs both lookups: `catch` wants the
//! first live match ([`find_first`]), `schedule` wants every match
//! ([`filter_all`]).

use crate::error::Error;
use crate::model::{Game, Team};

/// Trim and lowercase a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized, non-empty team query.
///
/// The bare predicates below accept anything, and an empty query is a
/// substring of every name, so command entry points build one of these first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamQuery(String);

impl TeamQuery {
    pub fn new(raw: &str) -> Result<Self, Error> {
        let normalized = normalize_query(raw);
        if normalized.is_empty() {
            return Err(Error::EmptyTeamQuery);
        }
        Ok(TeamQuery(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, game: &Game) -> bool {
        matches(&self.0, game)
    }
}

/// Substring of the full name, or exact tricode, both ignoring case.
pub fn team_matches(query: &str, team: &Team) -> bool {
    let query = query.to_lowercase();
    team.full_name().to_lowercase().contains(&query) || team.tricode.eq_ignore_ascii_case(&query)
}

/// True when the query names either side.
pub fn matches(query: &str, game: &Game) -> bool {
    team_matches(query, &game.home_team) || team_matches(query, &game.away_team)
}

/// Whether the query names the home side. Presentation uses this for "vs" / "@".
pub fn is_home(query: &str, game: &Game) -> bool {
    team_matches(query, &game.home_team)
}

/// First game, in iteration order, that matches and passes `keep`.
pub fn find_first<'a, I, F>(query: &TeamQuery, games: I, keep: F) -> Option<&'a Game>
where
    I: IntoIterator<Item = &'a Game>,
    F: Fn(&Game) -> bool,
{
    games.into_iter().find(|&g| keep(g) && query.matches(g))
}

/// Every matching game, order preserved.
pub fn filter_all(query: &TeamQuery, games: Vec<Game>) -> Vec<Game> {
    games.into_iter().filter(|g| query.matches(g)).collect()
}
