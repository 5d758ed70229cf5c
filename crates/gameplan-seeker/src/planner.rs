//! The planner: a master collection and a progressively narrowed view of it.

use crate::error::Result;
use crate::field::Field;
use crate::ordering::{sort_by_field, Dir};
use crate::query;
use crate::record::BoardGame;

/// Threads a fixed master collection through repeated filter calls.
///
/// Each call filters the *current* view, so successive calls narrow further
/// until [`reset`](Planner::reset) restores the master collection. A failed
/// call leaves the current view untouched.
///
/// # Example
///
/// ```
/// use gameplan_seeker::{BoardGame, Planner};
///
/// let mut planner = Planner::new(vec![
///     BoardGame::new("Catan").with_rating(8.1),
///     BoardGame::new("Terraforming Mars").with_rating(8.5),
///     BoardGame::new("Gloomhaven").with_rating(9.0),
/// ]);
///
/// let top = planner.filter_by_dir("rating > 8.2", "rating", false).unwrap().unwrap();
/// assert_eq!(top[0].name(), "Gloomhaven");
///
/// planner.reset();
/// assert_eq!(planner.current_view().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    master: Vec<BoardGame>,
    current: Vec<BoardGame>,
}

impl Planner {
    /// Creates a planner whose current view is the whole collection.
    pub fn new(games: Vec<BoardGame>) -> Self {
        Planner {
            current: games.clone(),
            master: games,
        }
    }

    /// Filters the current view and orders it by name, ascending.
    pub fn filter(&mut self, query: &str) -> Result<&[BoardGame]> {
        self.narrow(query, Field::Name, Dir::Asc)
    }

    /// Filters the current view and orders it by `column`, ascending.
    pub fn filter_by(&mut self, query: &str, column: &str) -> Result<&[BoardGame]> {
        let field = Field::resolve(column)?;
        self.narrow(query, field, Dir::Asc)
    }

    /// Filters the current view and orders it by `column` in the given
    /// direction.
    ///
    /// Returns `Ok(None)` when nothing matches; the current view is then
    /// empty.
    pub fn filter_by_dir(
        &mut self,
        query: &str,
        column: &str,
        ascending: bool,
    ) -> Result<Option<&[BoardGame]>> {
        let field = Field::resolve(column)?;
        let view = self.narrow(query, field, Dir::from_ascending(ascending))?;
        if view.is_empty() {
            log::info!("no games match {query:?}");
            Ok(None)
        } else {
            Ok(Some(view))
        }
    }

    /// Restores the master collection, in its original order.
    pub fn reset(&mut self) {
        log::debug!("reset view to {} game(s)", self.master.len());
        self.current = self.master.clone();
    }

    /// The current view.
    pub fn current_view(&self) -> &[BoardGame] {
        &self.current
    }

    /// The full collection the planner was created with.
    pub fn master(&self) -> &[BoardGame] {
        &self.master
    }

    fn narrow(&mut self, query: &str, field: Field, dir: Dir) -> Result<&[BoardGame]> {
        let filtered = query::apply(query, &self.current)?;
        self.current = sort_by_field(&filtered, field, dir);
        Ok(&self.current)
    }
}
