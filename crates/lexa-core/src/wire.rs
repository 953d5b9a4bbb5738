//! Serde helpers for the marketplace API's wire quirks.
//!
//! The backend serializes timestamps either as RFC 3339 strings or as
//! zone-less ISO local date-times (`2025-03-01T10:15:30.123`), and emits some
//! identifiers as JSON numbers and others as strings. These modules normalize
//! both on the way in. Use with `#[serde(deserialize_with = "...")]`.
//!
//! # Example
//! ```ignore
//! use lexa_core::wire;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(deserialize_with = "wire::id::deserialize")]
//!     pub id: String,
//!
//!     #[serde(deserialize_with = "wire::timestamp::deserialize")]
//!     pub created_at: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp. Zone-less values are taken as UTC.
///
/// # Errors
///
/// Returns a message naming the raw value when no supported format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("unrecognized timestamp '{raw}'"))
}

/// `DateTime<Utc>` from RFC 3339 or zone-less ISO strings.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// `Option<DateTime<Utc>>`; `null` and missing fields map to `None`.
/// Pair with `#[serde(default)]`.
pub mod timestamp_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Identifier that may arrive as a JSON string or number.
pub mod id {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        super::RawId::deserialize(d).map(String::from)
    }
}

/// `Option<String>` id; `null` and missing fields map to `None`.
/// Pair with `#[serde(default)]`.
pub mod id_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<super::RawId>::deserialize(d)?
            .map(String::from)
            .filter(|id| !id.is_empty()))
    }
}
