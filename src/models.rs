use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::items;

/// A persisted item. Doubles as the wire representation: timestamps
/// serialize as RFC 3339, field names as camelCase.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = items)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub struct NewItem {
    pub name: String,
}

/// Fields a partial update may touch. `None` leaves the column as is.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = items)]
pub struct ItemChanges {
    pub name: Option<String>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Request body for POST, PUT and PATCH. Unknown fields are ignored;
/// handlers decide which fields are required for their route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemBody {
    #[serde(default)]
    pub name: Option<String>,
}
