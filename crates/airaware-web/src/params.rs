//! Query-string parameters shared by every measurement view.

use airaware_db::{MeasurementFilter, MeasurementQuery, RowLimit, SortOrder};
use serde::Deserialize;

pub const ALL_LOCATIONS: &str = "All Locations";

/// Raw query string. Every field is optional and nothing here rejects a
/// request: blanks are ignored and bad limits fall back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasurementParams {
    pub main_location: Option<String>,
    pub sub_location: Option<String>,
    pub pollutant: Option<String>,
    pub num_records: Option<String>,
    #[serde(rename = "location-data-selection")]
    pub location_data_selection: Option<String>,
}

impl MeasurementParams {
    pub fn filter(&self) -> MeasurementFilter {
        MeasurementFilter::new(
            self.main_location.as_deref(),
            self.sub_location.as_deref(),
            self.pollutant.as_deref(),
        )
    }

    pub fn limit(&self) -> RowLimit {
        RowLimit::parse(self.num_records.as_deref())
    }

    pub fn query(&self, order: SortOrder) -> MeasurementQuery {
        MeasurementQuery::new(self.filter(), self.limit()).with_order(order)
    }

    /// Like [`query`](Self::query), but without `num_records` the chart
    /// gets every row up to [`RowLimit::MAX`].
    pub fn chart_query(&self, order: SortOrder) -> MeasurementQuery {
        let limit = match self.num_records {
            Some(_) => self.limit(),
            None => RowLimit::MAX,
        };
        MeasurementQuery::new(self.filter(), limit).with_order(order)
    }

    /// Heading and file label for the current selection.
    pub fn label(&self) -> String {
        [&self.location_data_selection, &self.main_location]
            .into_iter()
            .filter_map(|v| v.as_deref().map(str::trim))
            .find(|v| !v.is_empty())
            .map(title_case)
            .unwrap_or_else(|| ALL_LOCATIONS.to_string())
    }
}

/// Upper-case the first letter of every word, lower-case the rest.
/// A word starts at any letter that follows a non-letter.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
