//! Structural sanity checks for uploaded variant files.
//!
//! Validation accumulates every failure rather than stopping at the first,
//! so the caller receives a complete diagnostic list in one pass. Row shape
//! is deliberately not checked here; malformed rows are skipped during
//! extraction.

use serde::Serialize;

/// Outcome of document-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when no structural check failed.
    pub valid: bool,
    /// Failure descriptions in check order; empty when valid.
    pub errors: Vec<String>,
}

/// Validate the raw file text before any extraction work.
///
/// Checks, in order: file non-empty, `##fileformat=VCF` metadata line
/// present, `#CHROM` column-header line present, at least one non-header
/// data line present.
pub fn validate_document(text: &str) -> ValidationReport {
    let mut errors = Vec::new();

    if text.trim().is_empty() {
        errors.push("input file is empty".to_string());
    }

    let mut has_fileformat = false;
    let mut has_column_header = false;
    let mut has_data_line = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.starts_with("##fileformat=VCF") {
            has_fileformat = true;
        } else if line.starts_with("#CHROM") {
            has_column_header = true;
        } else if !line.is_empty() && !line.starts_with('#') {
            has_data_line = true;
        }
    }

    if !has_fileformat {
        errors.push("missing ##fileformat=VCF metadata line".to_string());
    }
    if !has_column_header {
        errors.push("missing #CHROM column header line".to_string());
    }
    if !has_data_line {
        errors.push("no variant data lines found".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
