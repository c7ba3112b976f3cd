use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Id and name of a linked genre or country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: Uuid,
    pub name: String,
}

/// A catalogue entry. `rating` is derived: the mean of all non-null user
/// ratings, recomputed after every list write, 0 when nobody has rated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: Option<i32>,
    pub duration: Option<i32>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieWithRelations {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<NamedRef>,
    pub countries: Vec<NamedRef>,
}

/// The mutable fields of a movie, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: Option<i32>,
    pub duration: Option<i32>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
}
