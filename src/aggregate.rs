//! Folding per-file coverage records into folder and project nodes.
//!
//! Files are grouped by containing folder (relative to a base path, with
//! a trailing separator so folder keys are always non-empty), summaries
//! are merged bottom-up, and the longest common path prefix of all
//! folders is resolved so rendered links can be shortened.

use std::collections::BTreeMap;
use std::path::Path;

use crate::model::{CoverageMap, CoverageSummary};
use crate::score::blended_percent;

/// A scored coverage percentage for one file, folder, or the project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredStats {
    pub percent: f64,
}

/// Aggregated stats for one folder plus the per-file stats within it.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub stats: ScoredStats,
    /// Folder key with the common root prefix stripped off, used to
    /// shorten generated links.
    pub html_path: String,
    /// File basename → that file's own stats.
    pub files: BTreeMap<String, ScoredStats>,
}

/// The aggregated report tree: project-wide stats plus one node per
/// folder, keyed by folder path relative to the base (trailing `/`).
#[derive(Debug, Clone)]
pub struct Report {
    pub total: ScoredStats,
    /// Resolved common root of all folder keys, with a trailing
    /// separator, or empty when the root is the base path itself.
    pub html_root: String,
    pub folders: BTreeMap<String, FolderNode>,
}

/// Group files by folder, merge summaries upward, and resolve the
/// common root. The result depends only on the set of entries, not on
/// iteration order: merging is field-wise addition and the common
/// prefix is a true component-wise prefix.
pub fn aggregate(files: &CoverageMap, base_path: &str) -> Report {
    let mut project = CoverageSummary::default();
    let mut summaries: BTreeMap<String, CoverageSummary> = BTreeMap::new();
    let mut folder_files: BTreeMap<String, BTreeMap<String, ScoredStats>> = BTreeMap::new();
    let mut common_root: Option<String> = None;

    for (path, summary) in files {
        let folder = folder_key(path, base_path);
        let trimmed = folder.trim_end_matches('/');
        common_root = Some(match common_root {
            Some(root) => common_prefix(&root, trimmed),
            None => trimmed.to_string(),
        });

        project.merge(summary);
        summaries.entry(folder.clone()).or_default().merge(summary);

        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        folder_files.entry(folder).or_default().insert(
            name,
            ScoredStats {
                percent: blended_percent(summary),
            },
        );
    }

    // With a single folder the root is that folder itself. Otherwise the
    // common prefix may be a synthetic ancestor with no generated report
    // of its own: climb upward until the candidate is an actual emitted
    // folder (or the root is the base itself).
    let mut root = common_root.unwrap_or_default();
    while summaries.len() > 1 && !root.is_empty() && !summaries.contains_key(&format!("{root}/")) {
        root = parent(&root);
    }

    let html_root = if root.is_empty() {
        String::new()
    } else {
        format!("{root}/")
    };

    let mut folders = BTreeMap::new();
    for (key, summary) in &summaries {
        let html_path = key
            .strip_prefix(html_root.as_str())
            .unwrap_or(key)
            .to_string();
        folders.insert(
            key.clone(),
            FolderNode {
                stats: ScoredStats {
                    percent: blended_percent(summary),
                },
                html_path,
                files: folder_files.remove(key).unwrap_or_default(),
            },
        );
    }

    Report {
        total: ScoredStats {
            percent: blended_percent(&project),
        },
        html_root,
        folders,
    }
}

/// Folder key for a file: its containing directory relative to the base
/// path, with a trailing separator. A file directly under the base gets
/// the key `/`, keeping folder keys non-empty.
fn folder_key(file: &str, base_path: &str) -> String {
    let dir = Path::new(file).parent().unwrap_or_else(|| Path::new(""));
    let rel = dir.strip_prefix(base_path).unwrap_or(dir);
    let mut key = rel.to_string_lossy().into_owned();
    key.push('/');
    key
}

/// Longest common prefix of two paths, computed component-wise so that
/// "foo/bar" and "foo/barbaz" share "foo", not "foo/bar".
fn common_prefix(a: &str, b: &str) -> String {
    let mut parts = Vec::new();
    for (x, y) in a.split('/').zip(b.split('/')) {
        if x != y {
            break;
        }
        parts.push(x);
    }
    parts.join("/")
}

/// Drop the last path segment.
fn parent(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((head, _)) => head.to_string(),
        None => String::new(),
    }
}
