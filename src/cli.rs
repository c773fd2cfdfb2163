//! Command handler functions for the covtrack CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::aggregate::aggregate;
use crate::format::FormatConfig;
use crate::input;
use crate::render::{comment_body, render};

/// Load the current (and optional prior) coverage dataset, aggregate,
/// and render the full comment body.
pub fn cmd_report(
    coverage: &Path,
    prior: Option<&Path>,
    base_path: &Path,
    base_url: Option<&str>,
    config: &FormatConfig,
) -> Result<String> {
    let files = input::load(coverage)
        .with_context(|| format!("Failed to load coverage from {}", coverage.display()))?;
    let prior_files = match prior {
        Some(path) => Some(
            input::load(path)
                .with_context(|| format!("Failed to load prior coverage from {}", path.display()))?,
        ),
        None => None,
    };

    let base = base_path.to_string_lossy();
    let report = aggregate(&files, &base);
    let prior_report = prior_files.map(|files| aggregate(&files, &base));

    let rendered = render(&report, prior_report.as_ref(), base_url, config);
    Ok(comment_body(&rendered, base_url))
}
