//! Filter set, row limit and sort order for measurement queries.

use serde::Deserialize;

/// Optional equality filters on the joined display names.
///
/// Values are trimmed on construction and blank ones are dropped, so
/// anything stored here becomes exactly one predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementFilter {
    pub location: Option<String>,
    pub sub_location: Option<String>,
    pub pollutant: Option<String>,
}

impl MeasurementFilter {
    pub fn new(
        location: Option<&str>,
        sub_location: Option<&str>,
        pollutant: Option<&str>,
    ) -> Self {
        Self {
            location: non_blank(location),
            sub_location: non_blank(sub_location),
            pollutant: non_blank(pollutant),
        }
    }

    pub fn location(name: &str) -> Self {
        Self::new(Some(name), None, None)
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.sub_location.is_none() && self.pollutant.is_none()
    }

    pub(crate) fn value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Location => self.location.as_deref(),
            FilterField::SubLocation => self.sub_location.as_deref(),
            FilterField::Pollutant => self.pollutant.as_deref(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Location,
    SubLocation,
    Pollutant,
}

/// Validated row cap. Always within `[1, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimit(u32);

impl RowLimit {
    pub const DEFAULT: RowLimit = RowLimit(14);
    pub const MAX: RowLimit = RowLimit(10_000);

    /// Anything outside `[1, 10000]` falls back to the default.
    pub fn new(n: i64) -> Self {
        if (1..=i64::from(Self::MAX.0)).contains(&n) {
            // In range, so the cast is lossless.
            Self(n as u32)
        } else {
            Self::DEFAULT
        }
    }

    /// Parse a raw query-string value. Missing or non-numeric input
    /// gives the default; it never rejects.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ordering of results by measurement date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "desc")]
    Descending,
    #[serde(rename = "asc")]
    Ascending,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Descending => "DESC",
            SortOrder::Ascending => "ASC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_dropped() {
        let filter = MeasurementFilter::new(Some("   "), Some(""), None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_values_are_trimmed() {
        let filter = MeasurementFilter::new(Some("  Oxford "), None, Some("Ozone\t"));
        assert_eq!(filter.location.as_deref(), Some("Oxford"));
        assert_eq!(filter.sub_location, None);
        assert_eq!(filter.pollutant.as_deref(), Some("Ozone"));
    }

    #[test]
    fn test_limit_in_range_is_kept() {
        assert_eq!(RowLimit::new(1).get(), 1);
        assert_eq!(RowLimit::new(5).get(), 5);
        assert_eq!(RowLimit::new(10_000).get(), 10_000);
    }

    #[test]
    fn test_limit_out_of_range_falls_back() {
        for n in [i64::MIN, -1, 0, 10_001, 50_000, i64::MAX] {
            assert_eq!(RowLimit::new(n), RowLimit::DEFAULT, "limit {n}");
        }
    }

    #[test]
    fn test_limit_parse() {
        assert_eq!(RowLimit::parse(None).get(), 14);
        assert_eq!(RowLimit::parse(Some("abc")).get(), 14);
        assert_eq!(RowLimit::parse(Some("50000")).get(), 14);
        assert_eq!(RowLimit::parse(Some("")).get(), 14);
        assert_eq!(RowLimit::parse(Some("2.5")).get(), 14);
        assert_eq!(RowLimit::parse(Some(" 25 ")).get(), 25);
        assert_eq!(RowLimit::parse(Some("10000")).get(), 10_000);
    }

    #[test]
    fn test_sort_order_defaults_to_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert_eq!(SortOrder::default().as_sql(), "DESC");
    }
}
