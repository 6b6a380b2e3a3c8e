use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// The `publishedAt` value of a post.
///
/// The raw string is what gets displayed, the parsed instant is what gets compared.
/// Plain dates are taken as midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PublishedAt {
    raw: String,
    at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishedAtError {
    #[error("`{0}` is not a YYYY-MM-DD date or an RFC 3339 timestamp")]
    Unparseable(String),
}

impl PublishedAt {
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for PublishedAt {
    type Err = PublishedAtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let at = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|d| d.with_timezone(&Utc)))
            .map_err(|_| PublishedAtError::Unparseable(s.to_string()))?;

        Ok(Self {
            raw: s.to_string(),
            at,
        })
    }
}

impl TryFrom<String> for PublishedAt {
    type Error = PublishedAtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for PublishedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

pub trait PostedOn {
    fn posted_on(&self) -> DateTime<Utc>;
}

impl<T> PostedOn for &T
where
    T: PostedOn,
{
    fn posted_on(&self) -> DateTime<Utc> {
        (*self).posted_on()
    }
}

pub trait ByRecency {
    type Item;

    /// Newest first. Items posted at the same instant keep their relative order.
    fn by_recency(&self) -> Vec<&Self::Item>;
}

impl<T> ByRecency for [T]
where
    T: PostedOn,
{
    type Item = T;

    fn by_recency(&self) -> Vec<&Self::Item> {
        let mut v: Vec<_> = self.iter().collect();

        v.sort_by_key(|item| std::cmp::Reverse(item.posted_on()));

        v
    }
}
