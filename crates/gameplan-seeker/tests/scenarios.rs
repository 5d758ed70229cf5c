//! End-to-end scenarios across filtering, sorting, planning and selection.

use gameplan_seeker::{
    query, sort, store, BoardGame, Dir, Planner, SeekerError, SelectionList,
};

// ============================================================================
// Fixtures
// ============================================================================

fn names(games: &[BoardGame]) -> Vec<&str> {
    games.iter().map(BoardGame::name).collect()
}

fn filter_fixture() -> Vec<BoardGame> {
    vec![
        BoardGame::new("Chess")
            .with_id(7)
            .with_players(2, 2)
            .with_play_time(10, 20)
            .with_difficulty(10.0)
            .with_rank(700)
            .with_rating(10.0)
            .with_year(2006),
        BoardGame::new("Go")
            .with_id(1)
            .with_players(2, 5)
            .with_play_time(30, 30)
            .with_difficulty(8.0)
            .with_rank(100)
            .with_rating(7.5)
            .with_year(2000),
        BoardGame::new("Go Fish")
            .with_id(2)
            .with_players(2, 10)
            .with_play_time(20, 120)
            .with_difficulty(3.0)
            .with_rank(200)
            .with_rating(6.5)
            .with_year(2001),
        BoardGame::new("Catan")
            .with_id(6)
            .with_players(3, 4)
            .with_play_time(60, 90)
            .with_difficulty(2.5)
            .with_rank(300)
            .with_rating(8.2)
            .with_year(1995),
    ]
}

fn collection_fixture() -> Vec<BoardGame> {
    vec![
        BoardGame::new("17 days").with_players(1, 8).with_rating(9.0).with_rank(600),
        BoardGame::new("Chess").with_players(2, 2).with_rating(10.0).with_rank(700),
        BoardGame::new("Go").with_players(2, 5).with_rating(7.5).with_rank(100),
        BoardGame::new("Go Fish").with_players(2, 10).with_rating(6.5).with_rank(200),
        BoardGame::new("golang").with_players(2, 7).with_rating(9.5).with_rank(400),
        BoardGame::new("GoRami").with_players(6, 6).with_rating(8.5).with_rank(300),
        BoardGame::new("Monopoly").with_players(6, 10).with_rating(5.0).with_rank(800),
        BoardGame::new("Tucano").with_players(10, 20).with_rating(8.0).with_rank(500),
    ]
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn conjunction_of_players_and_rating() {
    let result = query::apply("minplayers>=2,rating>=8.0", &filter_fixture()).unwrap();
    assert_eq!(names(&result), ["Chess", "Catan"]);
    assert!(result
        .iter()
        .all(|g| g.rating() >= 8.0 && g.min_players() >= 2));
}

#[test]
fn name_contains_is_case_insensitive() {
    let result = query::apply("name ~= go", &filter_fixture()).unwrap();
    assert_eq!(names(&result), ["Go", "Go Fish"]);
}

#[test]
fn difficulty_and_rank() {
    let games = filter_fixture();
    assert_eq!(
        names(&query::apply("difficulty < 5", &games).unwrap()),
        ["Go Fish", "Catan"]
    );
    assert_eq!(names(&query::apply("rank == 200", &games).unwrap()), ["Go Fish"]);
}

#[test]
fn unknown_field_fails_whole_query() {
    let err = query::apply("rating > 1, popularity > 3", &filter_fixture()).unwrap_err();
    assert_eq!(err, SeekerError::UnknownField("popularity".to_string()));
    assert_eq!(err.to_string(), "unknown field 'popularity'");
}

#[test]
fn error_messages() {
    let games = filter_fixture();
    assert_eq!(
        query::apply("rating ~= 9", &games).unwrap_err().to_string(),
        "operator '~=' is not valid for real field 'rating'"
    );
    assert_eq!(
        query::apply("minplayers > two", &games).unwrap_err().to_string(),
        "field 'minplayers' expects integer value, got 'two'"
    );
    assert_eq!(
        query::apply("rating => 9", &games).unwrap_err().to_string(),
        "invalid clause 'rating => 9': unrecognized operator"
    );
}

// ============================================================================
// Sorting and planning
// ============================================================================

#[test]
fn sort_by_rating_descending() {
    let games = vec![
        BoardGame::new("Catan").with_rating(8.1),
        BoardGame::new("Terraforming Mars").with_rating(8.5),
        BoardGame::new("Gloomhaven").with_rating(9.0),
    ];
    let sorted = sort(&games, "Rating", Dir::Desc).unwrap();
    assert_eq!(names(&sorted), ["Gloomhaven", "Terraforming Mars", "Catan"]);
}

#[test]
fn planner_narrows_then_resets() {
    let mut planner = Planner::new(collection_fixture());

    let view = planner.filter("name ~= go").unwrap();
    assert_eq!(names(view), ["Go", "Go Fish", "golang", "GoRami"]);

    let view = planner.filter_by("maxplayers >= 6", "rank").unwrap();
    assert_eq!(names(view), ["Go Fish", "GoRami", "golang"]);

    let view = planner.filter_by_dir("", "rating", false).unwrap().unwrap();
    assert_eq!(names(view), ["golang", "GoRami", "Go Fish"]);

    assert_eq!(planner.filter_by_dir("rating > 100", "rating", true), Ok(None));

    planner.reset();
    assert_eq!(planner.current_view(), collection_fixture().as_slice());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn select_from_filtered_view() {
    let mut planner = Planner::new(collection_fixture());
    let mut list = SelectionList::new();

    let view = planner.filter("minplayers == 2").unwrap();
    assert_eq!(names(view), ["Chess", "Go", "Go Fish", "golang"]);
    list.add("2-3", view).unwrap();
    list.add("chess", view).unwrap();

    planner.reset();
    let view = planner.filter("rating >= 9").unwrap();
    list.add("all", view).unwrap();

    assert_eq!(list.names(), ["Go", "Go Fish", "Chess", "17 days", "golang"]);

    list.remove("2-3").unwrap();
    assert_eq!(list.names(), ["Go", "17 days", "golang"]);

    list.remove("GOLANG").unwrap();
    assert_eq!(list.names(), ["Go", "17 days"]);
}

#[test]
fn add_single_game_by_index() {
    let mut list = SelectionList::new();
    list.add("1", &collection_fixture()).unwrap();
    assert_eq!(list.count(), 1);
}

#[test]
fn invalid_range_is_reported() {
    let mut list = SelectionList::new();
    assert_eq!(
        list.add("1-b", &collection_fixture()),
        Err(SeekerError::InvalidSelector("1-b".to_string()))
    );
    assert_eq!(
        list.remove("a-2"),
        Err(SeekerError::InvalidSelector("a-2".to_string()))
    );
}

#[test]
fn save_then_restore_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games_list.txt");
    let games = collection_fixture();

    let mut list = SelectionList::new();
    list.add("GoRami", &games).unwrap();
    list.add("1", &games).unwrap();
    let written = list.save(Some(&path)).unwrap();
    assert_eq!(written, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "GoRami\n17 days\n");

    let saved = store::load_names(&path).unwrap();
    let restored = SelectionList::restore(&saved, &games);
    assert_eq!(restored.names(), list.names());
    assert!(restored.iter().all(|g| list.contains(g)));
}
