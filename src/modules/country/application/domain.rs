use serde::Serialize;
use uuid::Uuid;

/// A production country reference row. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
}
