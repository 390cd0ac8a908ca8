//! Repository identity and release metadata

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use thiserror::Error;

/// Release dates are displayed in Japan Standard Time.
const JST_SECONDS: i32 = 9 * 3600;

#[derive(Debug, Error)]
pub enum RepoIdError {
    #[error("repository id `{0}` is not of the form OWNER/NAME")]
    Malformed(String),
}

/// A GitHub-style `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = RepoIdError;

    /// Both parts must be non-empty and the name must not contain a further
    /// slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoId {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(RepoIdError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Release metadata displayed by the `${TAG_INFORMATION}` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub tag: String,
    /// Release instant, already shifted to JST.
    pub date: DateTime<FixedOffset>,
    /// Branch to display alongside the tag, when any.
    pub branch: Option<String>,
}

impl Release {
    pub fn new(
        tag: impl Into<String>,
        date: DateTime<FixedOffset>,
        branch: Option<String>,
    ) -> Self {
        let jst = FixedOffset::east_opt(JST_SECONDS).expect("JST is a valid offset");
        Release {
            tag: tag.into(),
            date: date.with_timezone(&jst),
            branch,
        }
    }
}

/// Parse a release timestamp: RFC 3339, or a bare `YYYY-MM-DD` meaning
/// midnight UTC.
pub fn parse_release_date(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).or_else(|_| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    })
}
