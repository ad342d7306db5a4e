use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::cli::Command;
use crate::error::{Error, NotFound};
use crate::feed::GameFeed;
use crate::matcher::{self, TeamQuery};
use crate::model::{Game, GameStatus, GameSummary};
use crate::present::Presenter;
use crate::schedule::{self, ScheduleMode};

/// Status filter for `games`. Both flags together show the union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamesFilter {
    pub live: bool,
    pub completed: bool,
}

impl GamesFilter {
    pub fn apply(&self, games: Vec<Game>) -> Vec<Game> {
        if !self.live && !self.completed {
            return games;
        }
        games
            .into_iter()
            .filter(|g| {
                (self.live && g.status == GameStatus::Live)
                    || (self.completed && g.status == GameStatus::Final)
            })
            .collect()
    }

    fn empty_outcome(&self) -> NotFound {
        if self.live { NotFound::NoLiveGames } else { NotFound::NoFinalGames }
    }
}

/// Run one subcommand and return the text to print.
pub fn run(command: &Command, feed: &dyn GameFeed, presenter: &Presenter, now: DateTime<Utc>) -> Result<String, Error> {
    match command {
        Command::Games { live, completed } => {
            games(feed, presenter, GamesFilter { live: *live, completed: *completed })
        }
        Command::Catch { team } => catch(feed, presenter, team),
        Command::Schedule { team, upcoming, recent } => {
            schedule(feed, presenter, team, ScheduleMode::from_flags(*upcoming, *recent), now)
        }
    }
}

#[instrument(level = "info", skip(feed, presenter))]
pub fn games(feed: &dyn GameFeed, presenter: &Presenter, filter: GamesFilter) -> Result<String, Error> {
    let all = feed.scoreboard()?;
    if all.is_empty() {
        return Err(NotFound::NoGamesToday.into());
    }
    let shown = filter.apply(all);
    if shown.is_empty() {
        return Err(filter.empty_outcome().into());
    }
    info!(games = shown.len(), "Listing games");
    Ok(presenter.format_games_list(&shown))
}

#[instrument(level = "info", skip(feed, presenter))]
pub fn catch(feed: &dyn GameFeed, presenter: &Presenter, team: &str) -> Result<String, Error> {
    let query = TeamQuery::new(team)?;
    let board = feed.scoreboard()?;
    let game = matcher::find_first(&query, &board, |g| g.status == GameStatus::Live)
        .ok_or(NotFound::NoCurrentGame)?;
    info!(game_id = %game.id, "Found live game");
    let summary = GameSummary::from_game(game.clone());
    Ok(presenter.format_game_summary(&summary))
}

#[instrument(level = "info", skip(feed, presenter))]
pub fn schedule(
    feed: &dyn GameFeed,
    presenter: &Presenter,
    team: &str,
    mode: ScheduleMode,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    let query = TeamQuery::new(team)?;
    let team_games = matcher::filter_all(&query, feed.league_schedule()?);
    if team_games.is_empty() {
        return Err(NotFound::TeamNotFound.into());
    }
    info!(matched = team_games.len(), "Matched team games");

    let selected = schedule::select(team_games, mode, now);
    if selected.is_empty() {
        return Err(match mode {
            ScheduleMode::Upcoming => NotFound::NoUpcomingGames,
            ScheduleMode::Recent => NotFound::NoRecentGames,
        }
        .into());
    }
    Ok(presenter.format_team_schedule(&selected, query.as_str(), mode.title()))
}
