//! Dotted-numeric version comparison.

use std::cmp::Ordering;

use tracing::warn;

use crate::error::{GateError, Result};

/// Check whether `current` is strictly below `required`.
///
/// Both strings are split on `.` and compared as sequences of non-negative
/// integers, with the shorter sequence zero-padded: `"2"` equals `"2.0.0"`,
/// and `"1.2.3"` is below `"1.2.10"`.
///
/// Fails open: a malformed version on either side resolves to `false` (no
/// update required), with the parse error logged as a diagnostic.
pub fn is_update_required(current: &str, required: &str) -> bool {
    match compare_versions(current, required) {
        Ok(ordering) => ordering == Ordering::Less,
        Err(e) => {
            warn!(current, required, error = %e, "version comparison failed, skipping update gate");
            false
        }
    }
}

/// Compare two version strings component-by-component.
fn compare_versions(current: &str, required: &str) -> Result<Ordering> {
    let current_parts = parse_components(current)?;
    let required_parts = parse_components(required)?;

    let len = current_parts.len().max(required_parts.len());
    for i in 0..len {
        // Missing trailing components count as zero
        let c = current_parts.get(i).copied().unwrap_or(0);
        let r = required_parts.get(i).copied().unwrap_or(0);
        match c.cmp(&r) {
            Ordering::Equal => continue,
            ordering => return Ok(ordering),
        }
    }

    Ok(Ordering::Equal)
}

/// Parse a dot-delimited version string into its numeric components.
fn parse_components(version: &str) -> Result<Vec<u64>> {
    version
        .split('.')
        .map(|segment| {
            segment.parse::<u64>().map_err(|_| GateError::VersionParse {
                value: version.to_string(),
            })
        })
        .collect()
}
