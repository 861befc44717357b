//! Wire DTOs for the remote player service.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON. Identifiers keep whatever
//! JSON type the service used (number or string) so an id read from a fetch is
//! echoed back unchanged on update and delete.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier for players and clubs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id, the common case for the service.
    Number(i64),
    /// Opaque string id.
    Text(String),
}

impl RecordId {
    /// Parse an id from form input, e.g. a `<select>` value.
    ///
    /// Numeric text becomes [`RecordId::Number`]; blank input yields `None`.
    pub fn from_input(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(raw.parse::<i64>().map_or_else(|_| Self::Text(raw.to_owned()), Self::Number))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A player record as returned by `GET /api/player` and `GET /api/player/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Server-assigned player identifier.
    pub football_player_id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub achievements: String,
    /// Full ISO timestamp, e.g. `2000-01-01T00:00:00`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub birthday: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub player_experiences: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nomination: String,
    /// Foreign key into the club reference list.
    pub football_club_id: RecordId,
    /// Display name of the club, joined server-side. Never sent back.
    #[serde(default)]
    pub club_name: Option<String>,
}

/// Body for `POST /api/player` (create) and `PUT /api/player` (update).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    /// Present on update, omitted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub football_player_id: Option<RecordId>,
    pub full_name: String,
    pub achievements: String,
    /// Full timestamp in `YYYY-MM-DDT00:00:00.000Z` form.
    pub birthday: String,
    pub player_experiences: String,
    pub nomination: String,
    pub football_club_id: RecordId,
}

/// Club reference data from `GET /api/player/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub football_club_id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub club_name: String,
}

/// Body for `POST /api/Auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
