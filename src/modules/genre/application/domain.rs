use serde::Serialize;
use uuid::Uuid;

/// A genre reference row. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}
