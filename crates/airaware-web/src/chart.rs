//! Plotly figure JSON for the graphs and table views.
//!
//! The browser does the drawing with plotly.js; this module only shapes
//! measurement rows into figure objects.

use airaware_db::MeasurementRow;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, BTreeSet};

const FACET_SPACING: f64 = 0.05;
const UNIT_TITLE: &str = "(µg/m³)";
const PM_SUFFIX: &str = " Particulate matter";

/// Facet titles drop the particulate-matter suffix to stay legible.
pub fn facet_title(pollutant: &str) -> &str {
    pollutant.strip_suffix(PM_SUFFIX).unwrap_or(pollutant)
}

/// Gap between facets. Shrinks with many facets so the gaps never take
/// more than half the plot.
fn facet_spacing(rows: usize) -> f64 {
    match rows.saturating_sub(1) {
        0 => 0.0,
        gaps => FACET_SPACING.min(0.5 / gaps as f64),
    }
}

/// Vertical domain of facet `row` (0 at the top) out of `rows`.
fn facet_domain(row: usize, rows: usize) -> [f64; 2] {
    let spacing = facet_spacing(rows);
    let height = (1.0 - spacing * (rows.saturating_sub(1)) as f64) / rows as f64;
    let top = 1.0 - row as f64 * (height + spacing);
    [(top - height).max(0.0), top]
}

fn axis_suffix(row: usize) -> String {
    if row == 0 { String::new() } else { (row + 1).to_string() }
}

/// Bar chart: one trace per (site, pollutant), one facet row per
/// pollutant, colour legend by site. Every trace starts legend-only so
/// the user picks what to show.
pub fn measurement_figure(rows: &[MeasurementRow], title: &str) -> Value {
    let pollutants: Vec<&str> = rows
        .iter()
        .map(|r| r.pollutant_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // (site, pollutant) -> (dates, values)
    let mut series: BTreeMap<(&str, &str), (Vec<String>, Vec<f64>)> = BTreeMap::new();
    for r in rows {
        let entry = series
            .entry((r.sub_location_name.as_str(), r.pollutant_name.as_str()))
            .or_default();
        entry.0.push(r.measured_at.format("%Y-%m-%d").to_string());
        entry.1.push(r.value);
    }

    let mut seen_sites = BTreeSet::new();
    let traces: Vec<Value> = series
        .into_iter()
        .map(|((site, pollutant), (dates, values))| {
            let row = pollutants.iter().position(|p| *p == pollutant).unwrap_or(0);
            json!({
                "type": "bar",
                "name": site,
                "legendgroup": site,
                "showlegend": seen_sites.insert(site),
                "visible": "legendonly",
                "x": dates,
                "y": values,
                "xaxis": "x",
                "yaxis": format!("y{}", axis_suffix(row)),
            })
        })
        .collect();

    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": title, "x": 0.07, "y": 0.92, "font": { "size": 20 } }));
    layout.insert("height".into(), json!(900));
    layout.insert("font".into(), json!({ "size": 8 }));
    layout.insert("showlegend".into(), json!(true));
    layout.insert(
        "legend".into(),
        json!({ "title": { "text": "Location", "font": { "size": 20 } }, "font": { "size": 15 } }),
    );
    layout.insert("xaxis".into(), json!({ "title": { "text": "Date", "font": { "size": 20 } }, "showticklabels": true }));

    let facets = pollutants.len().max(1);
    let mut annotations = Vec::new();
    for (row, pollutant) in pollutants.iter().enumerate() {
        let domain = facet_domain(row, facets);
        layout.insert(
            format!("yaxis{}", axis_suffix(row)),
            json!({ "domain": domain, "anchor": "x", "title": { "text": UNIT_TITLE } }),
        );
        annotations.push(json!({
            "text": facet_title(pollutant),
            "xref": "paper",
            "yref": "paper",
            "x": 1.0,
            "y": (domain[0] + domain[1]) / 2.0,
            "xanchor": "left",
            "textangle": 90,
            "showarrow": false,
        }));
    }
    if pollutants.is_empty() {
        layout.insert("yaxis".into(), json!({ "title": { "text": UNIT_TITLE } }));
    }
    layout.insert("annotations".into(), Value::Array(annotations));

    json!({ "data": traces, "layout": Value::Object(layout) })
}

/// Table figure of the rows, one column per field.
pub fn table_figure(rows: &[MeasurementRow], label: &str) -> Value {
    let header = [
        "location_name",
        "sub_location_name",
        "pollutant_name",
        "value",
        "status",
        "measured_at",
    ];
    let columns = json!([
        rows.iter().map(|r| r.location_name.as_str()).collect::<Vec<_>>(),
        rows.iter().map(|r| r.sub_location_name.as_str()).collect::<Vec<_>>(),
        rows.iter().map(|r| r.pollutant_name.as_str()).collect::<Vec<_>>(),
        rows.iter().map(|r| r.value).collect::<Vec<_>>(),
        rows.iter().map(|r| r.status.as_str()).collect::<Vec<_>>(),
        rows.iter().map(|r| r.measured_at.format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
    ]);

    json!({
        "data": [{
            "type": "table",
            "header": { "values": header, "fill": { "color": "darkgrey" }, "align": "left", "font": { "size": 12 } },
            "cells": { "values": columns, "fill": { "color": "lavender" }, "align": "left", "font": { "size": 10 } },
        }],
        "layout": {
            "title": { "text": format!("Air Quality Measurement for: {label}"), "x": 0.07 },
            "height": 600,
            "margin": { "t": 30, "b": 10 },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(site: &str, pollutant: &str, value: f64, day: u32) -> MeasurementRow {
        MeasurementRow {
            location_name: "Oxford".to_string(),
            sub_location_name: site.to_string(),
            pollutant_name: pollutant.to_string(),
            value,
            status: "P µg/m³".to_string(),
            measured_at: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    #[test]
    fn test_facet_title_strips_pm_suffix() {
        assert_eq!(facet_title("PM10 Particulate matter"), "PM10");
        assert_eq!(facet_title("Ozone"), "Ozone");
    }

    #[test]
    fn test_facet_domains_stack_top_down() {
        let top = facet_domain(0, 3);
        let bottom = facet_domain(2, 3);
        assert!((top[1] - 1.0).abs() < 1e-9);
        assert!(bottom[0].abs() < 1e-9);
        assert!(top[0] > facet_domain(1, 3)[1]);
    }

    #[test]
    fn test_many_facets_keep_positive_heights() {
        let rows = 30;
        for row in 0..rows {
            let [bottom, top] = facet_domain(row, rows);
            assert!(bottom >= 0.0, "facet {row} starts below zero");
            assert!(top > bottom, "facet {row} has no height");
            if row > 0 {
                assert!(facet_domain(row - 1, rows)[0] > top);
            }
        }
        assert!(facet_domain(rows - 1, rows)[0].abs() < 1e-9);
    }

    #[test]
    fn test_one_trace_per_site_and_pollutant() {
        let rows = vec![
            row("St Ebbes", "Ozone", 48.0, 2),
            row("St Ebbes", "Ozone", 44.0, 1),
            row("St Ebbes", "PM10 Particulate matter", 9.0, 1),
            row("High Street", "Ozone", 30.0, 1),
        ];
        let fig = measurement_figure(&rows, "Air Quality Measurements - Oxford");
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|t| t["visible"] == "legendonly"));

        // One legend entry per site.
        let shown = data.iter().filter(|t| t["showlegend"] == true).count();
        assert_eq!(shown, 2);

        // Ozone is the first facet, PM10 the second.
        let pm = data.iter().find(|t| t["yaxis"] == "y2").unwrap();
        assert_eq!(pm["name"], "St Ebbes");
        assert_eq!(fig["layout"]["yaxis2"]["title"]["text"], "(µg/m³)");
        assert_eq!(fig["layout"]["annotations"][1]["text"], "PM10");
    }

    #[test]
    fn test_empty_rows_still_make_a_figure() {
        let fig = measurement_figure(&[], "Empty");
        assert_eq!(fig["data"].as_array().unwrap().len(), 0);
        assert_eq!(fig["layout"]["yaxis"]["title"]["text"], "(µg/m³)");
    }

    #[test]
    fn test_table_figure_columns() {
        let rows = vec![row("St Ebbes", "Ozone", 48.0, 2)];
        let fig = table_figure(&rows, "Oxford");
        assert_eq!(fig["layout"]["title"]["text"], "Air Quality Measurement for: Oxford");
        let cells = &fig["data"][0]["cells"]["values"];
        assert_eq!(cells.as_array().unwrap().len(), 6);
        assert_eq!(cells[1][0], "St Ebbes");
        assert_eq!(cells[5][0], "2024-01-02");
    }
}
