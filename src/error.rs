use thiserror::Error;

/// Anything that goes wrong getting a feed document into memory.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("feed not available (status: {status}) at {url}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("failed to parse feed from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Expected empty outcomes. Shown to the user as a plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("No games scheduled for today.")]
    NoGamesToday,
    #[error("No live games at the moment.")]
    NoLiveGames,
    #[error("No completed games yet.")]
    NoFinalGames,
    #[error("No current game found for that team.")]
    NoCurrentGame,
    #[error("No games found for that team.")]
    TeamNotFound,
    #[error("No upcoming games found for that team.")]
    NoUpcomingGames,
    #[error("No recent games found for that team.")]
    NoRecentGames,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("please specify a team name")]
    EmptyTeamQuery,
}

impl Error {
    /// Process exit code: not-found is a normal answer, everything else is a failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NotFound(_) => 0,
            Error::Fetch(_) | Error::EmptyTeamQuery => 1,
        }
    }
}
