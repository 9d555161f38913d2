//! Markdown grid-table rendering of report summaries.
//!
//! Tables use the grid layout (`+---+` borders, `+===+` under the header,
//! a border between every row) so they read well both as plain text and in
//! markdown viewers that support grid tables.

use crate::report::Report;
use crate::summary::{compute_statistics, ReportSummary};

/// Render a summary as markdown text.
///
/// Produces the marker-separation table and, when marker statistics are
/// present, the marker-location table, each under a bold header carrying its
/// contributing-report count. Literal colons are replaced with hyphens so
/// the grid alignment markers never render as emphasis in markdown viewers.
pub fn render_summary(summary: &ReportSummary) -> String {
    let separation_rows: Vec<Vec<String>> = summary
        .separations
        .iter()
        .map(|s| vec![s.pair.label().to_string(), s.mean.clone(), s.median.clone()])
        .collect();

    let mut out = format!(
        "**Marker Separation (n = {} reports)**\n\n{}",
        summary.num_separation_reports,
        grid_table(&["markers", "mean", "median"], &separation_rows)
    );

    if let Some(markers) = &summary.markers {
        let marker_rows: Vec<Vec<String>> = markers
            .iter()
            .map(|m| {
                vec![
                    m.marker.to_string(),
                    m.x.clone(),
                    m.y.clone(),
                    m.angle.clone(),
                ]
            })
            .collect();
        out.push_str(&format!(
            "\n\n**Marker Location (n = {} reports)**\n\n{}",
            summary.num_marker_reports,
            grid_table(&["name", "x", "y", "angle"], &marker_rows)
        ));
    }

    out.replace(':', "-")
}

/// Compute statistics for a report table and print the rendered tables to
/// standard output.
pub fn nice_table(reports: &[Report]) {
    println!("{}", render_summary(&compute_statistics(reports)));
}

/// Render one grid table with left-aligned cells padded to the widest entry
/// per column. Rows must have exactly one cell per header.
fn grid_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |fill: char| -> String {
        let mut line = String::from("+");
        for &w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let format_row = |cells: &[String]| -> String {
        let mut line = String::from("|");
        for (cell, &w) in cells.iter().zip(&widths) {
            let pad = w - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad + 1));
            line.push('|');
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![border('-'), format_row(&header_cells), border('=')];
    for row in rows {
        lines.push(format_row(row));
        lines.push(border('-'));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_reports() -> Vec<Report> {
        vec![
            Report {
                llx: Some(0.0),
                lly: Some(0.0),
                urx: Some(1.0),
                ury: Some(1.0),
                lr_dist: Some(2.0),
                ..Report::default()
            },
            Report {
                lr_dist: Some(4.0),
                ..Report::default()
            },
        ]
    }

    #[test]
    fn grid_table_layout() {
        let rows = vec![vec!["P5 - P6".to_string(), "3.000 ± 1.414".to_string()]];
        let table = grid_table(&["markers", "mean"], &rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+---------+---------------+");
        assert_eq!(lines[1], "| markers | mean          |");
        assert_eq!(lines[2], "+=========+===============+");
        assert_eq!(lines[3], "| P5 - P6 | 3.000 ± 1.414 |");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn grid_table_without_rows_keeps_header() {
        let table = grid_table(&["markers", "mean", "median"], &[]);

        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("| markers | mean | median |"));
    }

    #[test]
    fn rendered_summary_has_both_tables_and_counts() {
        let rendered = render_summary(&compute_statistics(&example_reports()));

        assert!(rendered.contains("**Marker Separation (n = 2 reports)**"));
        assert!(rendered.contains("**Marker Location (n = 1 reports)**"));
        assert!(rendered.contains("P5 - P6"));
        assert!(rendered.contains("3.000 ± 1.414"));
    }

    #[test]
    fn rendered_summary_contains_no_colons() {
        let rendered = render_summary(&compute_statistics(&example_reports()));
        assert!(!rendered.contains(':'));
    }

    #[test]
    fn location_table_omitted_without_observations() {
        let reports = vec![Report {
            tb_dist: Some(1.0),
            ..Report::default()
        }];

        let rendered = render_summary(&compute_statistics(&reports));

        assert!(rendered.contains("**Marker Separation (n = 1 reports)**"));
        assert!(!rendered.contains("Marker Location"));
    }
}
