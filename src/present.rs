//! Text rendering for the three commands. No decisions flow back out of here.

use std::io::IsTerminal;

use chrono::DateTime;
use crossterm::style::{Color, Stylize};

use crate::config::DISPLAY_TZ;
use crate::matcher;
use crate::model::{Game, GameStatus, GameSummary, PlayerStat, Team};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    /// Colors on when stdout is a terminal.
    pub fn for_terminal() -> Self {
        Self { color: std::io::stdout().is_terminal() }
    }

    /// No ANSI escapes at all.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color { text.with(color).to_string() } else { text }
    }

    fn bold(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    /// "Monday, January 2, 2006 at 3:04 PM EST"; the input unchanged if it won't parse.
    pub fn format_game_date(&self, raw: &str) -> String {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt
                .with_timezone(&DISPLAY_TZ)
                .format("%A, %B %-d, %Y at %-I:%M %p %Z")
                .to_string(),
            Err(_) => raw.to_string(),
        }
    }

    /// "Sat Nov 4".
    pub fn format_short_date(&self, raw: &str) -> Option<String> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&DISPLAY_TZ).format("%a %b %-d").to_string())
    }

    /// "BKN 109 - MIN 125", home side first.
    pub fn format_score(&self, game: &Game) -> String {
        format!(
            "{} {} - {} {}",
            game.home_team.label(),
            game.home_team.score,
            game.away_team.label(),
            game.away_team.score
        )
    }

    pub fn format_top_performers(&self, players: &[PlayerStat]) -> String {
        players
            .iter()
            .map(|p| {
                format!(
                    "{} ({}) - {} PTS, {} REB, {} AST",
                    p.player_name, p.team_code, p.points, p.rebounds, p.assists
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_game_summary(&self, summary: &GameSummary) -> String {
        let game = &summary.game;
        let mut out = String::new();
        out.push_str(&format!(
            "🏀 {} vs {} — {}\n",
            game.home_team.full_name(),
            game.away_team.full_name(),
            game.status_text
        ));
        out.push_str(&format!("📅 {}\n\n", self.format_game_date(game.start_time_utc().unwrap_or(""))));
        out.push_str(&self.format_score(game));
        if game.status == GameStatus::Live {
            out.push_str(&format!(" ({})", live_clock(game)));
        }
        out.push_str("\n\n");
        out.push_str(&self.bold("Top Performers:"));
        out.push('\n');
        if summary.top_performers.is_empty() {
            out.push_str("No box score data yet.");
        } else {
            out.push_str(&self.format_top_performers(&summary.top_performers));
        }
        out.push_str("\n\n");
        out.push_str(&format!("Last updated: {}\n", summary.last_updated));
        out
    }

    /// Today's games, one block each.
    pub fn format_games_list(&self, games: &[Game]) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n🏀 NBA Games - {} game(s)\n", games.len()));
        out.push_str(&"─".repeat(RULE_WIDTH));
        out.push_str("\n\n");

        for (i, game) in games.iter().enumerate() {
            let status = match game.status {
                GameStatus::Scheduled => self.paint("⏰ Scheduled".to_string(), Color::Cyan),
                GameStatus::Live => self.paint(format!("🔴 LIVE - {}", live_clock(game)), Color::Green),
                GameStatus::Final => self.paint("✓ Final".to_string(), Color::Yellow),
                GameStatus::Unknown(_) => game.status_text.clone(),
            };
            let date = self.format_game_date(game.start_time_utc().unwrap_or(""));
            out.push_str(&format!("{} - {}\n", status, date));
            out.push_str(&format!(
                "  {} vs {}\n",
                side_with_score(&game.away_team, game.status),
                side_with_score(&game.home_team, game.status)
            ));
            if game.status == GameStatus::Scheduled {
                out.push_str(&format!("  {}\n", game.status_text));
            }
            if i + 1 < games.len() {
                out.push('\n');
            }
        }

        out.push('\n');
        out
    }

    /// A team's games from its own point of view: "vs" at home, "@" away.
    pub fn format_team_schedule(&self, games: &[Game], query: &str, title: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n📅 {} - {} game(s)\n", self.bold(title), games.len()));
        out.push_str(&"─".repeat(RULE_WIDTH));
        out.push_str("\n\n");

        for (i, game) in games.iter().enumerate() {
            let home = matcher::is_home(query, game);
            let (ours, theirs, location) = if home {
                (&game.home_team, &game.away_team, "vs")
            } else {
                (&game.away_team, &game.home_team, "@")
            };
            let opponent = theirs.label();

            let status_line = match game.status {
                GameStatus::Scheduled => {
                    self.paint(format!("{} {} {}", location, opponent, game.status_text), Color::Cyan)
                }
                GameStatus::Live => self.paint(
                    format!(
                        "🔴 LIVE {} {} - {} vs {} ({})",
                        location,
                        opponent,
                        ours.score,
                        theirs.score,
                        live_clock(game)
                    ),
                    Color::Green,
                ),
                GameStatus::Final => {
                    let result = if ours.score > theirs.score {
                        self.paint("W".to_string(), Color::Green)
                    } else {
                        self.paint("L".to_string(), Color::Red)
                    };
                    let line = self.paint(
                        format!("Final: {} {} - {} vs {}", location, opponent, ours.score, theirs.score),
                        Color::Yellow,
                    );
                    format!("{} {}", result, line)
                }
                GameStatus::Unknown(_) => format!("{} {} - {}", location, opponent, game.status_text),
            };
            out.push_str(&status_line);
            out.push('\n');

            if let Some(date) = game.start_time_utc().and_then(|raw| self.format_short_date(raw)) {
                out.push_str(&format!("  {}\n", date));
            }

            if i + 1 < games.len() {
                out.push('\n');
            }
        }

        out.push('\n');
        out
    }
}

/// "BOS 101" once the game has started, just "BOS" before.
fn side_with_score(team: &Team, status: GameStatus) -> String {
    if status == GameStatus::Scheduled {
        team.label().to_string()
    } else {
        format!("{} {}", team.label(), team.score)
    }
}

/// "Q3 5:32", "OT 0:41", "2OT 1:10".
fn live_clock(game: &Game) -> String {
    let period = match game.period {
        0 => String::new(),
        p @ 1..=4 => format!("Q{}", p),
        5 => "OT".to_string(),
        p => format!("{}OT", p - 4),
    };
    let clock = format_clock(&game.clock);
    match (period.is_empty(), clock.is_empty()) {
        (true, _) => clock,
        (false, true) => period,
        (false, false) => format!("{} {}", period, clock),
    }
}

/// The feed sends an ISO 8601 duration like "PT05M32.00S"; show it as "5:32".
/// Anything else passes through untouched.
pub fn format_clock(raw: &str) -> String {
    let raw = raw.trim();
    let Some(rest) = raw.strip_prefix("PT") else {
        return raw.to_string();
    };
    let Some((minutes, seconds)) = rest.split_once('M') else {
        return raw.to_string();
    };
    let seconds = seconds.trim_end_matches('S');
    let whole_seconds = seconds.split('.').next().unwrap_or("");
    match (minutes.parse::<u32>(), whole_seconds.parse::<u32>()) {
        (Ok(m), Ok(s)) => format!("{}:{:02}", m, s),
        _ => raw.to_string(),
    }
}
