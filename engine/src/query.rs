//! Query options for listing items: search, sort and pagination.
//!
//! Parsing is lenient. Callers hand in whatever arrived on the wire and get
//! back a fully-populated [`ListQuery`]; bad values fall back to defaults.

use crate::{error::Result, Error, Item};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Page size used when none (or a bad one) is given.
pub const DEFAULT_LIMIT: usize = 20;

/// Offset used when none (or a bad one) is given.
pub const DEFAULT_OFFSET: usize = 0;

/// Field to order a listing by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Display rank (`order` on the wire)
    #[default]
    #[serde(rename = "order")]
    Position,
    /// Display text (`value` on the wire)
    #[serde(rename = "value")]
    Label,
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "order" | "position" => Ok(SortField::Position),
            "value" | "label" => Ok(SortField::Label),
            other => Err(Error::UnknownSortField(other.to_string())),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(Error::UnknownSortDirection(s.to_string()))
        }
    }
}

/// A fully-resolved listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Substring to look for in labels; empty means no filter
    pub search: String,
    /// Maximum number of items in the page
    pub limit: usize,
    /// Number of matching items to skip
    pub offset: usize,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            sort_by: SortField::default(),
            sort_dir: SortDirection::default(),
        }
    }
}

impl ListQuery {
    /// Create a query with default paging and ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw, unvalidated parameter strings.
    ///
    /// Non-numeric, zero or negative limits become [`DEFAULT_LIMIT`];
    /// non-numeric or negative offsets become [`DEFAULT_OFFSET`]; unknown
    /// sort names become the defaults.
    pub fn parse(
        search: Option<&str>,
        limit: Option<&str>,
        offset: Option<&str>,
        sort_by: Option<&str>,
        sort_dir: Option<&str>,
    ) -> Self {
        let limit = limit
            .and_then(parse_count)
            .filter(|&l| l > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset.and_then(parse_count).unwrap_or(DEFAULT_OFFSET);

        let sort_by = sort_by
            .map(|s| {
                s.parse().unwrap_or_else(|e| {
                    tracing::debug!("{}, using default", e);
                    SortField::default()
                })
            })
            .unwrap_or_default();
        let sort_dir = sort_dir
            .map(|s| {
                s.parse().unwrap_or_else(|e| {
                    tracing::debug!("{}, using default", e);
                    SortDirection::default()
                })
            })
            .unwrap_or_default();

        Self {
            search: search.unwrap_or_default().to_string(),
            limit,
            offset,
            sort_by,
            sort_dir,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = field;
        self.sort_dir = direction;
        self
    }
}

/// Parse a non-negative count from the leading integer of `raw`.
///
/// Leading whitespace and an optional sign are accepted and anything after
/// the digits is ignored, so `"40.0"` reads as 40 and `"5abc"` as 5.
fn parse_count(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<usize>().ok()?;
    if negative && value > 0 {
        None
    } else {
        Some(value)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Items in the requested window
    pub items: Vec<Item>,
    /// Number of items that matched the search, before paging
    pub total: usize,
}

/// Ordering key approximating locale collation of a label.
///
/// Letters compare case-insensitively first; on a tie, lowercase sorts
/// before uppercase at the first differing position.
///
/// Beyond case folding this compares code points, which agrees with locale
/// collation for letters, digits and spaces but not for punctuation: `_`
/// sorts after the digits here and before them under ICU.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    folded: String,
    case: Vec<bool>,
}

impl CollationKey {
    pub fn new(label: &str) -> Self {
        Self {
            folded: label.to_lowercase(),
            case: label.chars().map(char::is_uppercase).collect(),
        }
    }
}
