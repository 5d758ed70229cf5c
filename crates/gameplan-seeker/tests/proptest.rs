//! Property-based tests for gameplan-seeker using proptest.

use std::collections::HashSet;

use gameplan_seeker::{query, sort, BoardGame, Dir, Field, SelectionList};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// Small value ranges so that duplicates and ties actually occur.
fn game_strategy() -> impl Strategy<Value = BoardGame> {
    (
        prop::sample::select(vec!["Catan", "catan", "Go", "Go Fish", "Azul", "Hive"]),
        0u32..4,
        0u32..8,
        prop::sample::select(vec![6.5, 7.5, 8.0, 8.2, 9.0]),
        1990i32..1995,
    )
        .prop_map(|(name, min, extra, rating, year)| {
            BoardGame::new(name)
                .with_players(min, min + extra)
                .with_rating(rating)
                .with_year(year)
        })
}

fn games_strategy() -> impl Strategy<Value = Vec<BoardGame>> {
    prop::collection::vec(game_strategy(), 0..40)
}

fn clause_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..4).prop_map(|n| format!("minplayers >= {n}")),
        (0u32..10).prop_map(|n| format!("maxplayers < {n}")),
        prop::sample::select(vec![7.0, 8.0, 8.2]).prop_map(|r| format!("rating >= {r}")),
        prop::sample::select(vec!["go", "an", "h"]).prop_map(|s| format!("name ~= {s}")),
        (1990i32..1995).prop_map(|y| format!("yearpublished != {y}")),
    ]
}

fn column_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

fn distinct(games: &[BoardGame]) -> usize {
    games.iter().collect::<HashSet<_>>().len()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An empty query never narrows a list of distinct games.
    #[test]
    fn empty_query_is_identity(games in games_strategy()) {
        let mut unique = Vec::new();
        for game in games {
            if !unique.contains(&game) {
                unique.push(game);
            }
        }
        prop_assert_eq!(query::apply("", &unique).unwrap(), unique);
    }

    /// Clause order does not change the result.
    #[test]
    fn conjunction_is_commutative(
        games in games_strategy(),
        a in clause_strategy(),
        b in clause_strategy(),
    ) {
        let ab = query::apply(&format!("{a},{b}"), &games).unwrap();
        let ba = query::apply(&format!("{b},{a}"), &games).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// Filter output never contains two equal games.
    #[test]
    fn filter_never_returns_duplicates(games in games_strategy(), a in clause_strategy()) {
        let result = query::apply(&a, &games).unwrap();
        prop_assert_eq!(distinct(&result), result.len());
        prop_assert!(result.len() <= games.len());
    }

    /// Sorting two permutations of the same games gives the same sequence.
    #[test]
    fn sort_is_deterministic(
        games in games_strategy(),
        column in column_strategy(),
        ascending in any::<bool>(),
    ) {
        let mut reversed = games.clone();
        reversed.reverse();
        let dir = Dir::from_ascending(ascending);

        let left = sort(&games, column.as_str(), dir).unwrap();
        let right = sort(&reversed, column.as_str(), dir).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Selecting "all" holds exactly the distinct candidates.
    #[test]
    fn add_all_counts_distinct(games in games_strategy()) {
        let mut list = SelectionList::new();
        list.add("all", &games).unwrap();
        prop_assert_eq!(list.count(), distinct(&games));
    }

    /// Adding the same selector twice changes nothing the second time.
    #[test]
    fn add_is_idempotent(
        games in games_strategy(),
        selector in prop_oneof![
            Just("all".to_string()),
            (0usize..45).prop_map(|n| n.to_string()),
            (0usize..45, 0usize..45).prop_map(|(a, b)| format!("{a}-{b}")),
            Just("Go Fish".to_string()),
        ],
    ) {
        let mut list = SelectionList::new();
        list.add(&selector, &games).unwrap();
        let count = list.count();
        prop_assert_eq!(list.add(&selector, &games).unwrap(), 0);
        prop_assert_eq!(list.count(), count);
    }

    /// Adding a range to an empty list and removing the same range empties it.
    #[test]
    fn add_then_remove_range_round_trips(games in games_strategy()) {
        let mut list = SelectionList::new();
        list.add("1-3", &games).unwrap();
        list.remove("1-3").unwrap();
        prop_assert_eq!(list.count(), 0);
    }
}
