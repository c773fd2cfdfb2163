//! Assembly of the aggregated tree into the status line and table.

use std::fmt::Write as _;

use crate::aggregate::{Report, ScoredStats};
use crate::format::{format_diff, FormatConfig};

/// One line of the rendered table: a folder or an indented file.
struct Row<'a> {
    label: String,
    link: String,
    stats: &'a ScoredStats,
    prior: Option<&'a ScoredStats>,
}

/// The rendered output: a one-line project status plus the table of
/// folder and file rows, ready for inclusion in a comment body.
#[derive(Debug, PartialEq)]
pub struct RenderedReport {
    pub status: String,
    pub table: String,
}

/// Render a report, optionally against a prior run (for deltas) and
/// with links rooted at a base URL. Rendering does not mutate the
/// report; calling it twice yields identical output.
#[must_use]
pub fn render(
    report: &Report,
    prior: Option<&Report>,
    base_url: Option<&str>,
    config: &FormatConfig,
) -> RenderedReport {
    let status = format_diff(&report.total, prior.map(|p| &p.total), config);
    let rows = collect_rows(report, prior);
    let table = render_table(&rows, base_url, config);
    RenderedReport { status, table }
}

/// One row per folder, followed by one row per file in that folder.
/// Rows with no counterpart in the prior run render without a delta.
fn collect_rows<'a>(report: &'a Report, prior: Option<&'a Report>) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    for (key, folder) in &report.folders {
        let prior_folder = prior.and_then(|p| p.folders.get(key));
        rows.push(Row {
            label: key.clone(),
            link: format!("{}index.html", folder.html_path),
            stats: &folder.stats,
            prior: prior_folder.map(|f| &f.stats),
        });
        for (name, stats) in &folder.files {
            rows.push(Row {
                label: format!("  {name}"),
                link: format!("{}{}.html", folder.html_path, name),
                stats,
                prior: prior_folder.and_then(|f| f.files.get(name)),
            });
        }
    }
    rows
}

fn render_table(rows: &[Row], base_url: Option<&str>, config: &FormatConfig) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);

    let mut out = String::from("<pre>\n");
    for row in rows {
        let label = format!("{:<width$}", row.label);
        let cell = match base_url {
            Some(url) => format!("<a href=\"{}/{}\">{}</a>", url, row.link, label),
            None => label,
        };
        writeln!(out, "{}  {}", cell, format_diff(row.stats, row.prior, config)).unwrap();
    }
    out.push_str("</pre>");
    out
}

/// The full markdown body posted as the PR comment: a heading with the
/// project status (linked to the report root when a base URL is given)
/// followed by the table.
#[must_use]
pub fn comment_body(rendered: &RenderedReport, base_url: Option<&str>) -> String {
    let heading = match base_url {
        Some(url) => format!("## [Code Coverage]({url}/index.html): {}", rendered.status),
        None => format!("## Code Coverage: {}", rendered.status),
    };
    if rendered.table.is_empty() {
        format!("{heading}\n")
    } else {
        format!("{heading}\n\n{}\n", rendered.table)
    }
}
