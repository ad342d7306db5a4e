use chrono::{DateTime, TimeZone, Utc};

use bball::cli::Command;
use bball::commands::{self, GamesFilter};
use bball::feed::GameFeed;
use bball::model::{Game, GameStatus, LeagueSchedule, Scoreboard};
use bball::present::Presenter;
use bball::schedule::ScheduleMode;
use bball::{Error, FetchError, NotFound};

/// In-memory feed so commands can run without the network.
struct FakeFeed {
    scoreboard: Vec<Game>,
    schedule: Vec<Game>,
    fail: bool,
}

impl FakeFeed {
    fn from_fixtures() -> Self {
        let board = std::fs::read_to_string("tests/todays_scoreboard.json").expect("failed to read scoreboard fixture");
        let schedule = std::fs::read_to_string("tests/league_schedule.json").expect("failed to read schedule fixture");
        FakeFeed {
            scoreboard: Scoreboard::from_json(&board).unwrap().into_games(),
            schedule: LeagueSchedule::from_json(&schedule).unwrap().into_games(),
            fail: false,
        }
    }

    fn empty() -> Self {
        FakeFeed { scoreboard: Vec::new(), schedule: Vec::new(), fail: false }
    }

    fn failing() -> Self {
        FakeFeed { fail: true, ..Self::empty() }
    }

    fn outage(&self) -> FetchError {
        FetchError::Status { url: "http://feed.invalid".to_string(), status: 503 }
    }
}

impl GameFeed for FakeFeed {
    fn scoreboard(&self) -> Result<Vec<Game>, FetchError> {
        if self.fail { Err(self.outage()) } else { Ok(self.scoreboard.clone()) }
    }

    fn league_schedule(&self) -> Result<Vec<Game>, FetchError> {
        if self.fail { Err(self.outage()) } else { Ok(self.schedule.clone()) }
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap()
}

fn statuses(list: &[GameStatus]) -> Vec<Game> {
    list.iter().map(|s| Game { status: *s, ..Game::default() }).collect()
}

fn not_found(result: Result<String, Error>) -> NotFound {
    match result {
        Err(Error::NotFound(outcome)) => outcome,
        other => panic!("expected a not-found outcome, got {:?}", other),
    }
}

#[test]
fn filter_without_flags_returns_all() {
    let games = statuses(&[GameStatus::Scheduled, GameStatus::Live, GameStatus::Final]);
    assert_eq!(GamesFilter::default().apply(games).len(), 3);
}

#[test]
fn filter_live_only() {
    let games = statuses(&[GameStatus::Scheduled, GameStatus::Live, GameStatus::Live, GameStatus::Final]);
    let out = GamesFilter { live: true, completed: false }.apply(games);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|g| g.status == GameStatus::Live));
}

#[test]
fn filter_final_only() {
    let games = statuses(&[GameStatus::Scheduled, GameStatus::Final, GameStatus::Final]);
    let out = GamesFilter { live: false, completed: true }.apply(games);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|g| g.status == GameStatus::Final));
}

#[test]
fn filter_both_flags_is_union() {
    let games = statuses(&[GameStatus::Scheduled, GameStatus::Live, GameStatus::Final]);
    assert_eq!(GamesFilter { live: true, completed: true }.apply(games).len(), 2);
}

#[test]
fn games_lists_todays_board() {
    let out = commands::games(&FakeFeed::from_fixtures(), &Presenter::plain(), GamesFilter::default()).unwrap();
    assert!(out.contains("4 game(s)"), "output was: {}", out);
}

#[test]
fn games_empty_outcomes_are_mode_specific() {
    let p = Presenter::plain();
    let empty = FakeFeed::empty();
    assert_eq!(not_found(commands::games(&empty, &p, GamesFilter::default())), NotFound::NoGamesToday);

    let mut no_live = FakeFeed::from_fixtures();
    no_live.scoreboard.retain(|g| g.status != GameStatus::Live);
    assert_eq!(
        not_found(commands::games(&no_live, &p, GamesFilter { live: true, completed: false })),
        NotFound::NoLiveGames
    );

    let mut no_final = FakeFeed::from_fixtures();
    no_final.scoreboard.retain(|g| g.status != GameStatus::Final);
    assert_eq!(
        not_found(commands::games(&no_final, &p, GamesFilter { live: false, completed: true })),
        NotFound::NoFinalGames
    );
}

#[test]
fn catch_finds_live_game_by_city() {
    let out = commands::catch(&FakeFeed::from_fixtures(), &Presenter::plain(), "  Boston ").unwrap();
    assert!(out.contains("Boston Celtics vs New York Knicks"), "output was: {}", out);
    assert!(out.contains("Top Performers:"), "output was: {}", out);
}

#[test]
fn catch_ignores_teams_that_are_not_live() {
    // Miami only has a final game on the board, the Lakers only a scheduled one.
    let feed = FakeFeed::from_fixtures();
    let p = Presenter::plain();
    assert_eq!(not_found(commands::catch(&feed, &p, "mia")), NotFound::NoCurrentGame);
    assert_eq!(not_found(commands::catch(&feed, &p, "lakers")), NotFound::NoCurrentGame);
}

#[test]
fn catch_rejects_blank_team() {
    let err = commands::catch(&FakeFeed::from_fixtures(), &Presenter::plain(), "   ").unwrap_err();
    assert!(matches!(err, Error::EmptyTeamQuery));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn schedule_upcoming_for_tricode() {
    let out = commands::schedule(&FakeFeed::from_fixtures(), &Presenter::plain(), "BOS", ScheduleMode::Upcoming, now())
        .unwrap();
    assert!(out.contains("Upcoming Games - 5 game(s)"), "output was: {}", out);
    assert!(out.contains("@ CHA 7:00 pm ET"), "output was: {}", out);
    assert!(out.contains("Sat Nov 2"), "output was: {}", out);
    assert!(!out.contains("DET"), "sixth game should be cut: {}", out);
}

#[test]
fn schedule_recent_for_team_name() {
    let out = commands::schedule(&FakeFeed::from_fixtures(), &Presenter::plain(), "celtics", ScheduleMode::Recent, now())
        .unwrap();
    assert!(out.contains("Recent Games - 5 game(s)"), "output was: {}", out);
    assert!(out.contains("L Final: @ IND - 132 vs 135"), "output was: {}", out);
    assert!(!out.contains("NYK"), "opening night should be cut: {}", out);
}

#[test]
fn unknown_team_differs_from_no_games_in_mode() {
    let feed = FakeFeed::from_fixtures();
    let p = Presenter::plain();
    assert_eq!(
        not_found(commands::schedule(&feed, &p, "sonics", ScheduleMode::Upcoming, now())),
        NotFound::TeamNotFound
    );

    // Phoenix only has a past final in the fixture.
    assert_eq!(
        not_found(commands::schedule(&feed, &p, "phx", ScheduleMode::Upcoming, now())),
        NotFound::NoUpcomingGames
    );

    // Charlotte only has an upcoming game.
    assert_eq!(
        not_found(commands::schedule(&feed, &p, "hornets", ScheduleMode::Recent, now())),
        NotFound::NoRecentGames
    );
}

#[test]
fn fetch_failure_exits_nonzero() {
    let err = commands::schedule(&FakeFeed::failing(), &Presenter::plain(), "bos", ScheduleMode::Upcoming, now())
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(FetchError::Status { status: 503, .. })));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(Error::from(NotFound::TeamNotFound).exit_code(), 0);
}

#[test]
fn run_dispatches_schedule_with_default_mode() {
    let command = Command::Schedule { team: "bos".to_string(), upcoming: false, recent: false };
    let out = commands::run(&command, &FakeFeed::from_fixtures(), &Presenter::plain(), now()).unwrap();
    assert!(out.contains("Upcoming Games"), "output was: {}", out);
}

#[test]
fn not_found_messages_are_plain_text() {
    assert_eq!(NotFound::NoCurrentGame.to_string(), "No current game found for that team.");
    assert_eq!(NotFound::TeamNotFound.to_string(), "No games found for that team.");
    assert_eq!(NotFound::NoUpcomingGames.to_string(), "No upcoming games found for that team.");
}
