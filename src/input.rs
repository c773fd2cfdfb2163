//! Loading of the coverage summary dataset.
//!
//! The input is Istanbul's json-summary format: a JSON object keyed by
//! absolute file path, each value holding the four metric groups. The
//! reporter also emits an aggregate under a `"total"` key; that entry is
//! dropped here since all aggregates are recomputed from the raw counts.

use std::path::Path;

use crate::error::Result;
use crate::model::CoverageMap;

/// Key used by the json-summary reporter for its own project aggregate.
const TOTAL_KEY: &str = "total";

/// Parse a coverage summary dataset from raw bytes.
pub fn parse(input: &[u8]) -> Result<CoverageMap> {
    let mut map: CoverageMap = serde_json::from_slice(input)?;
    map.remove(TOTAL_KEY);
    Ok(map)
}

/// Read and parse a coverage summary file from disk.
pub fn load(path: &Path) -> Result<CoverageMap> {
    let content = std::fs::read(path)?;
    parse(&content)
}
