use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

/// Zygosity of a genotype call at a single site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zygosity {
    /// Both haplotype indices are zero (0/0).
    HomozygousReference,
    /// Both haplotype indices are equal and nonzero (1/1, 2/2, ...).
    HomozygousAlternate,
    /// Haplotype indices differ (0/1, 1/2, ...).
    Heterozygous,
    /// Genotype absent or unparsable.
    Unknown,
}

impl Zygosity {
    /// Parse a VCF GT value ("0/1", "1|1", "./.", ...).
    ///
    /// Haplotype indices are split on `/` or `|`; anything that does not
    /// yield two parseable indices maps to `Unknown`.
    pub fn from_genotype(gt: &str) -> Self {
        let mut parts = gt.split(['/', '|']);
        let (Some(a), Some(b)) = (parts.next(), parts.next()) else {
            return Zygosity::Unknown;
        };
        if parts.next().is_some() {
            return Zygosity::Unknown;
        }
        let (Ok(a), Ok(b)) = (a.trim().parse::<u8>(), b.trim().parse::<u8>()) else {
            return Zygosity::Unknown;
        };
        match (a, b) {
            (0, 0) => Zygosity::HomozygousReference,
            (x, y) if x == y => Zygosity::HomozygousAlternate,
            _ => Zygosity::Heterozygous,
        }
    }

    /// Human-readable label used in variant interpretations.
    pub fn label(&self) -> &'static str {
        match self {
            Zygosity::HomozygousReference => "homozygous reference",
            Zygosity::HomozygousAlternate => "homozygous alternate",
            Zygosity::Heterozygous => "heterozygous",
            Zygosity::Unknown => "unknown zygosity",
        }
    }
}

/// A single pharmacogenomically annotated variant parsed from one data row.
///
/// Immutable once parsed; scoped to one analysis request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantRecord {
    /// Chromosome or contig name as written in the input.
    pub chrom: String,
    /// 1-based position.
    pub position: u64,
    /// Variant identifier (typically an rsID, or `.`).
    pub id: String,
    /// Reference allele.
    pub reference: String,
    /// Alternate allele.
    pub alternate: String,
    /// PHRED-scaled quality, `None` when `.` or unparsable.
    pub quality: Option<f64>,
    /// Filter column verbatim (`PASS` or a filter list).
    pub filter: String,
    /// INFO column as a key/value map; bare flags carry the value `"true"`.
    pub info: HashMap<String, String>,
    /// Gene symbol resolved from INFO tags or the known-variant table.
    pub gene: Option<String>,
    /// Star allele resolved from INFO tags or the known-variant table.
    pub star_allele: Option<String>,
    /// Genotype zygosity when FORMAT/SAMPLE columns were present.
    pub zygosity: Zygosity,
}

/// Aggregate counts produced alongside the extracted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    /// Number of non-header data rows seen, including silently dropped ones.
    pub total_rows: usize,
    /// Number of rows retained as pharmacogenomically relevant.
    pub relevant_count: usize,
    /// Distinct gene symbols among the relevant records.
    pub genes: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genotype_parsing_covers_separator_styles() {
        assert_eq!(Zygosity::from_genotype("0/0"), Zygosity::HomozygousReference);
        assert_eq!(Zygosity::from_genotype("0|0"), Zygosity::HomozygousReference);
        assert_eq!(Zygosity::from_genotype("1/1"), Zygosity::HomozygousAlternate);
        assert_eq!(Zygosity::from_genotype("2|2"), Zygosity::HomozygousAlternate);
        assert_eq!(Zygosity::from_genotype("0/1"), Zygosity::Heterozygous);
        assert_eq!(Zygosity::from_genotype("1|0"), Zygosity::Heterozygous);
        assert_eq!(Zygosity::from_genotype("1/2"), Zygosity::Heterozygous);
    }

    #[test]
    fn unparsable_genotypes_are_unknown() {
        assert_eq!(Zygosity::from_genotype("./."), Zygosity::Unknown);
        assert_eq!(Zygosity::from_genotype("."), Zygosity::Unknown);
        assert_eq!(Zygosity::from_genotype(""), Zygosity::Unknown);
        assert_eq!(Zygosity::from_genotype("1"), Zygosity::Unknown);
        assert_eq!(Zygosity::from_genotype("0/1/1"), Zygosity::Unknown);
        assert_eq!(Zygosity::from_genotype("A/B"), Zygosity::Unknown);
    }
}
