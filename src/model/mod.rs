pub mod feed;
pub mod game;
pub mod summary;
pub mod team;

pub use feed::{LeagueSchedule, Scoreboard};
pub use game::{Game, GameLeaders, GameStatus, Leader};
pub use summary::{GameSummary, PlayerStat};
pub use team::Team;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// The league schedule sends `null` for teams that are not decided yet
/// (playoff slots, for example), and those entries should still decode.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
