use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "bball",
    version,
    about = "Catch up on NBA games from your terminal",
    long_about = "A fast CLI tool for checking live NBA scores, today's games, and your favorite team's recent and upcoming matchups."
)]
pub struct Cli {
    /// Log fetch details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show all NBA games for today
    #[command(long_about = "Display a list of all NBA games scheduled for today, with optional filters for live or completed games.")]
    Games {
        /// Show only live games
        #[arg(short, long)]
        live: bool,
        /// Show only completed games
        #[arg(short = 'f', long = "final")]
        completed: bool,
    },
    /// Catch up on a current (live) game for a team
    Catch {
        /// Team name, city or tricode
        team: String,
    },
    /// View a team's schedule
    #[command(long_about = "Display upcoming games or recent games for a specific NBA team.\n\nUse --upcoming (-u) to see future games or --recent (-r) to see past games.\nDefaults to upcoming games if no flag is specified.")]
    Schedule {
        /// Team name, city or tricode
        team: String,
        /// Show upcoming games
        #[arg(short, long, conflicts_with = "recent")]
        upcoming: bool,
        /// Show recent games
        #[arg(short, long)]
        recent: bool,
    },
}
