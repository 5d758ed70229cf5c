//! The board game record.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// An immutable board game record.
///
/// Field names on the serde side match the column headers of the BoardGameGeek
/// style CSV collections the record source reads.
///
/// Two games are equal iff every attribute is equal. Real-valued attributes
/// compare by bit pattern so that equality and hashing agree, which the
/// order-preserving selection set relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardGame {
    #[serde(rename = "objectname")]
    name: String,
    #[serde(default)]
    id: u64,
    #[serde(rename = "minplayers")]
    min_players: u32,
    #[serde(rename = "maxplayers")]
    max_players: u32,
    #[serde(rename = "minplaytime")]
    min_play_time: u32,
    #[serde(rename = "maxplaytime")]
    max_play_time: u32,
    #[serde(rename = "avgweight")]
    difficulty: f64,
    rank: i32,
    #[serde(rename = "average")]
    rating: f64,
    #[serde(rename = "yearpublished")]
    year_published: i32,
}

impl BoardGame {
    /// Creates a game with the given name and every other attribute zeroed.
    pub fn new(name: impl Into<String>) -> Self {
        BoardGame {
            name: name.into(),
            id: 0,
            min_players: 0,
            max_players: 0,
            min_play_time: 0,
            max_play_time: 0,
            difficulty: 0.0,
            rank: 0,
            rating: 0.0,
            year_published: 0,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_players(mut self, min: u32, max: u32) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Sets the play time range, in minutes.
    pub fn with_play_time(mut self, min: u32, max: u32) -> Self {
        self.min_play_time = min;
        self.max_play_time = max;
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_published = year;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    pub fn min_play_time(&self) -> u32 {
        self.min_play_time
    }

    pub fn max_play_time(&self) -> u32 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    /// Compares every attribute in declaration order.
    ///
    /// Used as the last resort of the sort tie-break so that ordering stays
    /// total even for distinct games sharing a name.
    pub(crate) fn cmp_attributes(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then(self.id.cmp(&other.id))
            .then(self.min_players.cmp(&other.min_players))
            .then(self.max_players.cmp(&other.max_players))
            .then(self.min_play_time.cmp(&other.min_play_time))
            .then(self.max_play_time.cmp(&other.max_play_time))
            .then(self.difficulty.total_cmp(&other.difficulty))
            .then(self.rank.cmp(&other.rank))
            .then(self.rating.total_cmp(&other.rating))
            .then(self.year_published.cmp(&other.year_published))
    }
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.min_players == other.min_players
            && self.max_players == other.max_players
            && self.min_play_time == other.min_play_time
            && self.max_play_time == other.max_play_time
            && self.difficulty.to_bits() == other.difficulty.to_bits()
            && self.rank == other.rank
            && self.rating.to_bits() == other.rating.to_bits()
            && self.year_published == other.year_published
    }
}

impl Eq for BoardGame {}

impl Hash for BoardGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.id.hash(state);
        self.min_players.hash(state);
        self.max_players.hash(state);
        self.min_play_time.hash(state);
        self.max_play_time.hash(state);
        self.difficulty.to_bits().hash(state);
        self.rank.hash(state);
        self.rating.to_bits().hash(state);
        self.year_published.hash(state);
    }
}

impl std::fmt::Display for BoardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) players {}-{}, {}-{} min, rating {:.2}, difficulty {:.2}, rank {}",
            self.name,
            self.year_published,
            self.min_players,
            self.max_players,
            self.min_play_time,
            self.max_play_time,
            self.rating,
            self.difficulty,
            self.rank
        )
    }
}
