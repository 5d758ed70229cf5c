//! Gameplan Seeker - query, sort and selection engine for board game collections.
//!
//! The crate narrows and orders an in-memory collection of [`BoardGame`]s
//! with a small textual query language, and curates a [`SelectionList`] of
//! chosen games by index, range or name.
//!
//! - [`Field`] resolves user-typed field names (case and whitespace
//!   insensitive, with synonyms) to typed accessors
//! - [`Clause`] parses one `field operator value` comparison
//! - [`Query`] splits a comma separated query into a conjunction of clauses
//! - [`sort`] orders by one column with a fixed name tie-break
//! - [`Planner`] keeps the master collection and the current filtered view
//!
//! # Quick Start
//!
//! ```rust
//! use gameplan_seeker::{BoardGame, Planner, SelectionList};
//!
//! let games = vec![
//!     BoardGame::new("Chess").with_players(2, 2).with_rating(10.0),
//!     BoardGame::new("Go").with_players(2, 5).with_rating(7.5),
//!     BoardGame::new("Go Fish").with_players(2, 10).with_rating(6.5),
//!     BoardGame::new("Catan").with_players(3, 4).with_rating(8.2),
//! ];
//!
//! let mut planner = Planner::new(games);
//! let view = planner.filter("name ~= go").unwrap().to_vec();
//! assert_eq!(view.len(), 2);
//!
//! let mut list = SelectionList::new();
//! list.add("1", &view).unwrap();
//! assert_eq!(list.names(), ["Go"]);
//! ```
//!
//! # Query Language
//!
//! ```text
//! query    := clause (',' clause)*
//! clause   := field operator value
//! operator := '==' | '!=' | '~=' | '>=' | '<=' | '>' | '<'
//! ```
//!
//! | Kind | Fields | Operators |
//! |------|--------|-----------|
//! | Text | `name` | all, compared folded (case and whitespace ignored) |
//! | Integer | `id`, `minplayers`, `maxplayers`, `minplaytime`, `maxplaytime`, `rank`, `yearpublished` | all but `~=` |
//! | Real | `rating`, `difficulty` | all but `~=` |

mod clause;
mod error;
mod field;
mod op;
mod ordering;
mod planner;
pub mod query;
mod record;
mod selection;
pub mod store;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use error::{Result, SeekerError};
pub use field::{Field, ValueKind};
pub use op::Op;
pub use ordering::{compare_games, compare_values, sort, sort_by_field, Dir};
pub use planner::Planner;
pub use query::Query;
pub use record::BoardGame;
pub use selection::{SelectionList, Selector};
pub use store::StoreError;
pub use value::{fold_text, Number, Value};
