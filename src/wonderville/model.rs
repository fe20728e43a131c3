use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

pub const GENRE: &str = "games";
pub const LOCATION: &str = "wonderville";
pub const PRICE: &str = "Free";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub genre: String,
    pub location: String,
    /// 12-hour time as shown on the page, e.g. `7:00 PM`
    pub time: String,
    pub price: String,
    pub image: String,
    pub excerpt: String,
    pub is_featured: bool,
    pub rating: u32,
    #[serde(serialize_with = "serialize_instant")]
    pub expires_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: String,
        date: NaiveDate,
        time: String,
        image: String,
        excerpt: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            date,
            genre: GENRE.to_string(),
            location: LOCATION.to_string(),
            time,
            price: PRICE.to_string(),
            image,
            excerpt,
            is_featured: false,
            rating: 0,
            expires_at,
        }
    }
}

/// Millisecond precision with a `Z` suffix, e.g. `2024-03-16T02:00:00.000Z`
fn serialize_instant<S>(instant: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}
