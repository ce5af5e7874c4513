//! SQL builder for filtered measurement reads.
//!
//! Filter values only ever travel as bound parameters. The row limit and
//! sort direction are validated types and are written into the SQL text.

use crate::filter::{FilterField, MeasurementFilter, RowLimit, SortOrder};

const SELECT_MEASUREMENTS: &str = r#"
SELECT
    locations.name     AS location_name,
    sub_locations.name AS sub_location_name,
    pollutants.name    AS pollutant_name,
    measurements.value,
    measurements.status,
    measurements.measured_at
FROM measurements
JOIN sub_locations ON sub_locations.sub_location_id = measurements.sub_location_id
JOIN locations     ON locations.location_id         = sub_locations.location_id
JOIN pollutants    ON pollutants.pollutant_id       = measurements.pollutant_id"#;

/// Filter field → the column its equality predicate applies to.
const FILTER_COLUMNS: [(FilterField, &str); 3] = [
    (FilterField::Location, "locations.name"),
    (FilterField::SubLocation, "sub_locations.name"),
    (FilterField::Pollutant, "pollutants.name"),
];

/// A fully specified measurement read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementQuery {
    pub filter: MeasurementFilter,
    pub limit: RowLimit,
    pub order: SortOrder,
}

/// SQL text plus its positional parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<String>,
    predicates: Vec<&'static str>,
}

impl BuiltQuery {
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    pub fn predicates(&self) -> &[&'static str] {
        &self.predicates
    }
}

impl MeasurementQuery {
    pub fn new(filter: MeasurementFilter, limit: RowLimit) -> Self {
        Self { filter, limit, order: SortOrder::default() }
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(&self) -> BuiltQuery {
        let mut predicates = Vec::new();
        let mut params = Vec::new();

        for (field, column) in FILTER_COLUMNS {
            if let Some(value) = self.filter.value(field) {
                predicates.push(column);
                params.push(value.to_string());
            }
        }

        let mut sql = String::from(SELECT_MEASUREMENTS);
        if !predicates.is_empty() {
            let clauses: Vec<String> = predicates.iter().map(|c| format!("{c} = ?")).collect();
            sql.push_str("\nWHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let dir = self.order.as_sql();
        sql.push_str(&format!(
            "\nORDER BY measurements.measured_at {dir}, measurements.measurement_id {dir}\nLIMIT {}",
            self.limit.get()
        ));

        BuiltQuery { sql, params, predicates }
    }
}
