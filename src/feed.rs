use serde::de::DeserializeOwned;
use tracing::{debug, error, info, info_span, instrument};

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::model::{Game, LeagueSchedule, Scoreboard};

/// Upper bound on a feed body. The season schedule runs to several megabytes,
/// past ureq's 10 MB default once whitespace is included.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Source of decoded games.
pub trait GameFeed {
    /// Today's games, every status.
    fn scoreboard(&self) -> Result<Vec<Game>, FetchError>;
    /// The whole season, all dates flattened in feed order.
    fn league_schedule(&self) -> Result<Vec<Game>, FetchError>;
}

/// HTTP client for the NBA CDN feeds.
#[derive(Debug, Clone)]
pub struct NbaFeed {
    config: FeedConfig,
}

impl NbaFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

impl GameFeed for NbaFeed {
    #[instrument(level = "info", skip(self))]
    fn scoreboard(&self) -> Result<Vec<Game>, FetchError> {
        let board: Scoreboard = fetch_document(&self.config.scoreboard_url)?;
        debug!(feed_time = ?board.meta.time, games = board.scoreboard.games.len(), "Decoded scoreboard");
        Ok(board.into_games())
    }

    #[instrument(level = "info", skip(self))]
    fn league_schedule(&self) -> Result<Vec<Game>, FetchError> {
        let schedule: LeagueSchedule = fetch_document(&self.config.schedule_url)?;
        let dates = schedule.league_schedule.game_dates.len();
        let games = schedule.into_games();
        debug!(dates, games = games.len(), "Decoded league schedule");
        Ok(games)
    }
}

/// GET `url`, insist on a 200, and decode the body as `T`.
fn fetch_document<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response_result = {
        let _span = info_span!("feed_fetch", url = %url).entered();
        ureq::get(url).call()
    };
    let response = match response_result {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => {
            error!(status, url = %url, "Feed returned an error status");
            return Err(FetchError::Status { url: url.to_string(), status });
        }
        Err(e) => {
            error!(error = %e, url = %url, "Request failed");
            return Err(FetchError::Request { url: url.to_string(), source: e });
        }
    };

    let status = response.status().as_u16();
    if status != 200 {
        error!(status, url = %url, "Feed returned a non-200 status");
        return Err(FetchError::Status { url: url.to_string(), status });
    }

    let mut body_reader = response.into_body();
    let body = match body_reader.with_config().limit(MAX_BODY_BYTES).read_to_string() {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, url = %url, "Failed to read response body");
            return Err(FetchError::Body { url: url.to_string(), source: e });
        }
    };
    info!(status, bytes = body.len(), "Fetched feed");

    decode_document(url, &body)
}

fn decode_document<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!(error = %e, url = %url, "Failed to decode feed document");
        FetchError::Decode { url: url.to_string(), source: e }
    })
}
