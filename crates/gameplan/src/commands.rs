use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use gameplan_seeker::{store, BoardGame, Planner, SelectionList};
use log::info;

use crate::cli::{Cli, Command, ViewArgs};

/// Runs one command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let games = store::load_games(&cli.games)
        .with_context(|| format!("Failed to load games from {}", cli.games.display()))?;
    let mut planner = Planner::new(games);

    match cli.command {
        Command::Filter { query, view } => {
            match filtered_view(&mut planner, &query, &view)? {
                Some(games) => print_games(out, games)?,
                None => writeln!(out, "No games match \"{query}\".")?,
            }
        }
        Command::Add {
            selector,
            query,
            view,
        } => {
            let mut list = load_selection(&cli.list, planner.master())?;
            let candidates = filtered_view(&mut planner, &query, &view)?.unwrap_or_default();
            let added = list.add(&selector, candidates)?;
            save_selection(&list, &cli.list)?;
            writeln!(out, "Added {added} game(s); {} selected.", list.count())?;
        }
        Command::Remove { selector } => {
            let mut list = load_selection(&cli.list, planner.master())?;
            let removed = list.remove(&selector)?;
            save_selection(&list, &cli.list)?;
            writeln!(out, "Removed {removed} game(s); {} selected.", list.count())?;
        }
        Command::Show => {
            let list = load_selection(&cli.list, planner.master())?;
            if list.is_empty() {
                writeln!(out, "No games selected.")?;
            } else {
                for (position, name) in list.names().iter().enumerate() {
                    writeln!(out, "{:>3}. {name}", position + 1)?;
                }
            }
        }
        Command::Clear => {
            let mut list = load_selection(&cli.list, planner.master())?;
            list.clear();
            save_selection(&list, &cli.list)?;
            writeln!(out, "Selection cleared.")?;
        }
    }

    Ok(())
}

/// Filters the planner's view; `None` means nothing matched.
fn filtered_view<'a>(
    planner: &'a mut Planner,
    query: &str,
    view: &ViewArgs,
) -> Result<Option<&'a [BoardGame]>> {
    let games = match &view.sort {
        Some(column) => planner.filter_by_dir(query, column, !view.desc)?,
        None => {
            let games = planner.filter(query)?;
            (!games.is_empty()).then_some(games)
        }
    };
    Ok(games)
}

fn print_games(out: &mut impl Write, games: &[BoardGame]) -> Result<()> {
    for (position, game) in games.iter().enumerate() {
        writeln!(out, "{:>3}. {game}", position + 1)?;
    }
    Ok(())
}

fn load_selection(path: &Path, games: &[BoardGame]) -> Result<SelectionList> {
    if !path.exists() {
        return Ok(SelectionList::new());
    }
    let names = store::load_names(path)
        .with_context(|| format!("Failed to read selection from {}", path.display()))?;
    info!("restoring {} saved name(s)", names.len());
    Ok(SelectionList::restore(&names, games))
}

fn save_selection(list: &SelectionList, path: &Path) -> Result<()> {
    list.save(Some(path))
        .with_context(|| format!("Failed to write selection to {}", path.display()))?;
    Ok(())
}
