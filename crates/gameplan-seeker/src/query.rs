//! Query parsing and filtering.
//!
//! A [`Query`] is a conjunction of [`Clause`]s. The textual form separates
//! clauses with commas:
//!
//! ```text
//! minplayers >= 2, rating >= 8.0, name ~= catan
//! ```

use indexmap::IndexSet;

use crate::clause::Clause;
use crate::error::Result;
use crate::record::BoardGame;

/// A conjunction of clauses.
///
/// An empty query matches every game.
///
/// # Example
///
/// ```
/// use gameplan_seeker::{BoardGame, Query};
///
/// let games = vec![
///     BoardGame::new("Chess").with_players(2, 2).with_rating(10.0),
///     BoardGame::new("Go Fish").with_players(2, 10).with_rating(6.5),
///     BoardGame::new("Catan").with_players(3, 4).with_rating(8.2),
/// ];
///
/// let query = Query::parse("minplayers >= 2, rating >= 8.0").unwrap();
/// let names: Vec<_> = query.filter(&games).iter().map(|g| g.name().to_string()).collect();
/// assert_eq!(names, ["Chess", "Catan"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Parses a comma separated list of clauses.
    ///
    /// Blank pieces (an empty query, a trailing comma) contribute nothing.
    /// Any malformed clause fails the whole parse.
    pub fn parse(text: &str) -> Result<Query> {
        let clauses = text
            .split(',')
            .filter(|piece| !piece.trim().is_empty())
            .map(Clause::parse)
            .collect::<Result<Vec<_>>>()?;
        log::debug!("parsed query {:?} into {} clause(s)", text, clauses.len());
        Ok(Query { clauses })
    }

    /// Adds a clause.
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Returns the parsed clauses in query order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns `true` if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Checks if a single game matches every clause.
    pub fn matches(&self, game: &BoardGame) -> bool {
        self.clauses.iter().all(|clause| clause.matches(game))
    }

    /// Narrows `games` clause by clause and removes duplicates.
    ///
    /// Order of first occurrence is preserved.
    pub fn filter(&self, games: &[BoardGame]) -> Vec<BoardGame> {
        let mut narrowed: Vec<&BoardGame> = games.iter().collect();
        for clause in &self.clauses {
            narrowed.retain(|game| clause.matches(game));
            log::trace!("{clause}: {} game(s) remain", narrowed.len());
        }

        let unique: IndexSet<&BoardGame> = narrowed.into_iter().collect();
        unique.into_iter().cloned().collect()
    }

    /// Counts the number of matching games, duplicates included.
    pub fn count(&self, games: &[BoardGame]) -> usize {
        games.iter().filter(|game| self.matches(game)).count()
    }
}

/// Parses `query` and applies it to `games`.
///
/// An empty input list short-circuits to an empty result without parsing.
pub fn apply(query: &str, games: &[BoardGame]) -> Result<Vec<BoardGame>> {
    if games.is_empty() {
        return Ok(Vec::new());
    }
    let parsed = Query::parse(query)?;
    let result = parsed.filter(games);
    log::debug!(
        "query {:?} narrowed {} game(s) to {}",
        query,
        games.len(),
        result.len()
    );
    Ok(result)
}
