//! Reading game collections and reading/writing saved name lists.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::record::BoardGame;

/// File the selection is saved to when no path is given.
pub const DEFAULT_LIST_FILE: &str = "games_list.txt";

/// Errors from the file-backed collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads a game collection from a CSV file with a header row.
///
/// Columns are matched by header name (`objectname`, `id`, `average`,
/// `avgweight`, `rank`, `minplayers`, `maxplayers`, `minplaytime`,
/// `maxplaytime`, `yearpublished`), so their order does not matter. Games are
/// returned in file order.
pub fn load_games(path: &Path) -> Result<Vec<BoardGame>, StoreError> {
    let file = File::open(path)?;
    read_games(file)
}

/// Reads a game collection from any CSV source.
pub fn read_games<R: std::io::Read>(reader: R) -> Result<Vec<BoardGame>, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let games = csv_reader
        .deserialize()
        .collect::<Result<Vec<BoardGame>, csv::Error>>()?;
    log::info!("loaded {} game(s)", games.len());
    Ok(games)
}

/// Writes one name per line to `path`, replacing any existing content.
pub fn save_names<I, S>(names: I, path: &Path) -> Result<(), StoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0usize;
    for name in names {
        writeln!(writer, "{}", name.as_ref())?;
        written += 1;
    }
    writer.flush()?;
    log::info!("saved {written} name(s) to {}", path.display());
    Ok(())
}

/// Reads a saved name list, skipping blank lines.
pub fn load_names(path: &Path) -> Result<Vec<String>, StoreError> {
    let reader = BufReader::new(File::open(path)?);
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
objectname,id,average,avgweight,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished
Gloomhaven,174430,8.61,3.86,1,1,4,60,120,2017
Catan,13,7.1,2.3,400,3,4,60,120,1995
";

    #[test]
    fn read_games_by_header() {
        let games = read_games(CSV.as_bytes()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name(), "Gloomhaven");
        assert_eq!(games[0].id(), 174430);
        assert_eq!(games[0].rating(), 8.61);
        assert_eq!(games[0].difficulty(), 3.86);
        assert_eq!(games[1].min_players(), 3);
        assert_eq!(games[1].year_published(), 1995);
    }

    #[test]
    fn read_games_column_order_does_not_matter() {
        let csv = "\
yearpublished,maxplaytime,minplaytime,maxplayers,minplayers,rank,avgweight,average,id,objectname
2017,120,60,4,1,1,3.86,8.61,174430,Gloomhaven
";
        let games = read_games(csv.as_bytes()).unwrap();
        assert_eq!(games[0].name(), "Gloomhaven");
        assert_eq!(games[0].max_play_time(), 120);
    }

    #[test]
    fn read_games_rejects_malformed_rows() {
        let csv = "\
objectname,id,average,avgweight,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished
Catan,13,high,2.3,400,3,4,60,120,1995
";
        assert!(matches!(read_games(csv.as_bytes()), Err(StoreError::Csv(_))));
    }

    #[test]
    fn save_and_load_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");

        save_names(["Catan", "Go Fish"], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Catan\nGo Fish\n");

        save_names(["Chess"], &path).unwrap();
        assert_eq!(load_names(&path).unwrap(), ["Chess"]);
    }

    #[test]
    fn load_names_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "Catan\n\n  \nGo\n").unwrap();
        assert_eq!(load_names(&path).unwrap(), ["Catan", "Go"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(matches!(load_games(&missing), Err(StoreError::Io(_))));
        assert!(matches!(load_names(&missing), Err(StoreError::Io(_))));
    }
}
