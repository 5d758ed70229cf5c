use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "gameplan",
    about = "Filter, sort and shortlist board games",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// CSV collection to load
    #[arg(long, global = true, env = "GAMEPLAN_GAMES", default_value = "games.csv")]
    pub games: PathBuf,

    /// File the selection is saved to, one name per line
    #[arg(long, global = true, env = "GAMEPLAN_LIST", default_value = "games_list.txt")]
    pub list: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show games matching a query
    Filter {
        /// Comma separated clauses, e.g. "minplayers>=2, rating>=8"
        query: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Add games from a filtered view to the selection
    Add {
        /// all, a 1-based index, a range such as 2-4, or a game name
        selector: String,
        /// Query producing the candidates the selector indexes into
        #[arg(short, long, default_value = "")]
        query: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Remove games from the selection
    Remove {
        /// all, a 1-based index, a range such as 2-4, or a game name
        selector: String,
    },
    /// Print the selection
    Show,
    /// Empty the selection
    Clear,
}

/// How a filtered view is ordered.
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Column to sort on; defaults to name
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(short, long, requires = "sort")]
    pub desc: bool,
}
