use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One side of a matchup as it appears in both the scoreboard and the league schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "teamId", default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "teamName", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "teamCity", default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(rename = "teamTricode", default, deserialize_with = "null_as_default")]
    pub tricode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: u32,
}

impl Team {
    /// City and nickname joined, e.g. "Boston Celtics".
    ///
    /// Falls back to whichever part is present, and doesn't repeat the city
    /// when `name` already carries it.
    pub fn full_name(&self) -> String {
        let city = self.city.trim();
        let name = self.name.trim();
        if city.is_empty() || name.starts_with(city) {
            name.to_string()
        } else if name.is_empty() {
            city.to_string()
        } else {
            format!("{} {}", city, name)
        }
    }

    /// Tricode for compact lines, "TBD" while the slot is undecided.
    pub fn label(&self) -> &str {
        if self.tricode.is_empty() { "TBD" } else { &self.tricode }
    }
}
