//! Drift detection between the code registry and its documentation.
//!
//! # Overview
//! The README documents every registry member in a Markdown table. This
//! module parses that table and diffs it against [`Code::ALL`], so a test
//! run can prove the two have not drifted apart.
//!
//! # Caveat
//! Lines that do not match the row pattern are skipped, not rejected, so
//! that prose and header rows pass through harmlessly. The flip side is
//! that a reformatted table degrades to false negatives (rows silently
//! dropped from the comparison) rather than loud failures; keep the row
//! shape `| <int> | `Name` | <description> |` intact when editing.

use crate::Code;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

// A documented row: leading integer column, backtick-quoted name column,
// arbitrary trailing columns.
static ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\| (\d+) \| `(\w+)` \| .* \|").unwrap());

/// Extract the `name -> value` mapping from documentation text.
///
/// Pure text-in, map-out; callers own the file I/O.
pub fn parse_code_table(text: &str) -> BTreeMap<String, i32> {
    let mut documented = BTreeMap::new();
    for line in text.lines() {
        if let Some(caps) = ROW_REGEX.captures(line) {
            if let Ok(value) = caps[1].parse::<i32>() {
                documented.insert(caps[2].to_string(), value);
            }
        }
    }
    documented
}

/// A single point of disagreement between the registry and its
/// documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Documented, but no registry member carries the name.
    MissingFromRegistry { name: String, doc_value: i32 },
    /// Defined in the registry, but absent from the documentation.
    Undocumented { name: String, registry_value: i32 },
    /// Present on both sides, with different values.
    ValueMismatch {
        name: String,
        registry_value: i32,
        doc_value: i32,
    },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingFromRegistry { name, doc_value } => {
                write!(f, "registry missing code `{}` (documented as {})", name, doc_value)
            }
            Discrepancy::Undocumented {
                name,
                registry_value,
            } => {
                write!(f, "undocumented code `{}` ({})", name, registry_value)
            }
            Discrepancy::ValueMismatch {
                name,
                registry_value,
                doc_value,
            } => {
                write!(
                    f,
                    "value mismatch for `{}`: registry={}, doc={}",
                    name, registry_value, doc_value
                )
            }
        }
    }
}

/// Diff a documented mapping against the registry.
///
/// The comparison runs over the union of names on either side and reports
/// every discrepancy found, in name order, never just the first.
pub fn diff_against_registry(documented: &BTreeMap<String, i32>) -> Vec<Discrepancy> {
    let registry: BTreeMap<&str, i32> = Code::ALL
        .iter()
        .map(|code| (code.name(), code.value()))
        .collect();

    let mut names: Vec<&str> = documented.keys().map(String::as_str).collect();
    names.extend(registry.keys().copied());
    names.sort_unstable();
    names.dedup();

    let mut discrepancies = Vec::new();
    for name in names {
        match (registry.get(name), documented.get(name)) {
            (None, Some(&doc_value)) => discrepancies.push(Discrepancy::MissingFromRegistry {
                name: name.to_string(),
                doc_value,
            }),
            (Some(&registry_value), None) => discrepancies.push(Discrepancy::Undocumented {
                name: name.to_string(),
                registry_value,
            }),
            (Some(&registry_value), Some(&doc_value)) if registry_value != doc_value => {
                discrepancies.push(Discrepancy::ValueMismatch {
                    name: name.to_string(),
                    registry_value,
                    doc_value,
                });
            }
            _ => {}
        }
    }
    discrepancies
}

/// The registry and its documentation disagree.
///
/// Carries the full list of discrepancies so one failing run surfaces all
/// drift at once.
#[derive(Debug, Serialize)]
pub struct DriftError {
    pub discrepancies: Vec<Discrepancy>,
}

impl DriftError {
    /// Serialize to JSON for machine-readable reports.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize DriftError: {}", e);
            format!(r#"{{"discrepancies":{}}}"#, self.discrepancies.len())
        })
    }
}

impl fmt::Display for DriftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "documentation drift: {} discrepancies",
            self.discrepancies.len()
        )?;
        for discrepancy in &self.discrepancies {
            write!(f, "\n  - {}", discrepancy)?;
        }
        Ok(())
    }
}

impl std::error::Error for DriftError {}

/// Check documentation text against the registry.
///
/// Succeeds iff every documented code is defined, every defined code is
/// documented, and all values agree.
pub fn validate(doc: &str) -> Result<(), DriftError> {
    let discrepancies = diff_against_registry(&parse_code_table(doc));
    if discrepancies.is_empty() {
        Ok(())
    } else {
        Err(DriftError { discrepancies })
    }
}
