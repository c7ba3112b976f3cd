use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::movie::application::domain::Movie;

/// One row of a user's personal lists. `is_watched` splits the "seen it"
/// list from the "to watch" list; a rating is only ever present on
/// watched entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub is_watched: bool,
    pub rating: Option<i16>,
    pub watched_at: DateTime<Utc>,
}

/// A list entry joined with its movie, as shown on the list pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub is_watched: bool,
    pub rating: Option<i16>,
    pub watched_at: DateTime<Utc>,
}
