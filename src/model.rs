//! Center entity: row decoding, JSON shape and form input.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub const CENTERS_TABLE: &str = "centers";
pub const ID_COLUMN: &str = "center_id";
/// Insertable columns, in bind order.
pub const DATA_COLUMNS: [&str; 3] = ["name", "location", "contact"];
/// Read order for list queries.
pub const ALL_COLUMNS: [&str; 4] = [ID_COLUMN, "name", "location", "contact"];

/// One physical service location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Center {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub contact: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for Center {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Center {
            id: row.try_get(ID_COLUMN)?,
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            contact: row.try_get("contact")?,
        })
    }
}

/// A validated center about to be inserted. The id is always generated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCenter {
    pub name: String,
    pub location: String,
    pub contact: String,
}

impl NewCenter {
    /// Values in `DATA_COLUMNS` order.
    pub fn values(&self) -> [&str; 3] {
        [self.name.as_str(), self.location.as_str(), self.contact.as_str()]
    }

    pub fn into_center(self, id: i32) -> Center {
        Center {
            id,
            name: self.name,
            location: self.location,
            contact: self.contact,
        }
    }
}

/// Raw create input. Unknown keys (including a client-supplied `id`) are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CenterForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
}

impl CenterForm {
    /// Fields present in `self` win; missing ones fall back to `other`.
    pub fn or(self, other: CenterForm) -> CenterForm {
        CenterForm {
            name: self.name.or(other.name),
            location: self.location.or(other.location),
            contact: self.contact.or(other.contact),
        }
    }
}
