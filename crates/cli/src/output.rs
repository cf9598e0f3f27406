//! Result tables.

use clap::ValueEnum;
use dijkstra::SourceReport;
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;

const HEADERS: [&str; 4] = ["START NODE", "END NODE", "MIN PATH", "MIN DISTANCE"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered table
    #[default]
    Table,
    /// Fixed-width columns without borders
    Plain,
    /// JSON array, one object per source
    Json,
}

impl OutputFormat {
    /// Whether the diagram may be printed after the results on stdout.
    pub fn allows_art(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

pub fn format_reports(reports: &[SourceReport], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Table => to_table(reports),
        OutputFormat::Plain => to_plain(reports),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(reports)?;
            json.push('\n');
            json
        }
    })
}

/// Rows of one source; the source column is only filled on its first row.
fn rows(report: &SourceReport) -> impl Iterator<Item = [String; 4]> + '_ {
    report.routes.iter().enumerate().map(|(i, route)| {
        let source = if i == 0 {
            report.source.to_string()
        } else {
            String::new()
        };
        [
            source,
            route.target.to_string(),
            route.path_label(),
            route.distance.to_string(),
        ]
    })
}

fn to_table(reports: &[SourceReport]) -> String {
    if reports.is_empty() {
        return "(empty graph)\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for report in reports {
        for row in rows(report) {
            builder.push_record(row);
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    format!("{table}\n")
}

fn to_plain(reports: &[SourceReport]) -> String {
    let mut out = String::new();
    push_plain_row(&mut out, HEADERS.map(str::to_string));
    push_plain_row(
        &mut out,
        ["==========", "========", "========", "============"].map(str::to_string),
    );
    for report in reports {
        for row in rows(report) {
            push_plain_row(&mut out, row);
        }
        out.push('\n');
    }
    out
}

fn push_plain_row(out: &mut String, [source, target, path, distance]: [String; 4]) {
    let line = format!("{source:<12}{target:<12}{path:<25}{distance:<12}");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use dijkstra::Frontier;
    use dijkstra::Graph;
    use dijkstra::all_pairs;

    use super::*;

    fn reports() -> Vec<SourceReport> {
        let graph = Graph::from_edges(&[(1, 2, 10.0), (2, 3, 2.5)]);
        all_pairs(&graph, Frontier::OrderedSet).unwrap()
    }

    #[test]
    fn plain_layout() {
        let text = format_reports(&reports(), OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "START NODE  END NODE    MIN PATH                 MIN DISTANCE");
        assert_eq!(lines[2], format!("{:<12}{:<12}{:<25}0", "1", "1", "1"));
        assert_eq!(lines[4], format!("{:<12}{:<12}{:<25}12.5", "", "3", "1->2->3"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], format!("{:<12}{:<12}{:<25}inf", "2", "1", "unreachable"));
    }

    #[test]
    fn table_contains_every_row() {
        let text = format_reports(&reports(), OutputFormat::Table).unwrap();
        assert!(text.contains("START NODE"));
        assert!(text.contains("1->2->3"));
        assert!(text.contains("12.5"));
        assert_eq!(text.matches("unreachable").count(), 3);
        assert!(text.starts_with('╭'));
    }

    #[test]
    fn json_round_trips_through_serde_json() {
        let text = format_reports(&reports(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[0]["routes"][2]["path"], serde_json::json!([1, 2, 3]));
        assert!(value[2]["routes"][0]["distance"].is_null());
        assert!(!OutputFormat::Json.allows_art());
    }

    #[test]
    fn empty_table() {
        assert_eq!(
            format_reports(&[], OutputFormat::Table).unwrap(),
            "(empty graph)\n"
        );
    }
}
