//! Parses validated variant text into pharmacogenomically relevant records.
//!
//! Rows that cannot be parsed (too few columns, unparsable position) are
//! skipped without a diagnostic; a debug breadcrumb is the only trace they
//! leave. Document-level problems are caught earlier by the validator.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::vcf::{ExtractionSummary, VariantRecord, Zygosity};

/// Minimum columns for a parseable data row.
const MIN_COLUMNS: usize = 8;

/// Records plus aggregate counts for one document.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Relevant records in input order.
    pub records: Vec<VariantRecord>,
    /// Row and gene counts for the quality-metrics echo.
    pub summary: ExtractionSummary,
}

impl Extraction {
    /// Group records by resolved gene, preserving input order per gene.
    pub fn group_by_gene(&self) -> HashMap<String, Vec<VariantRecord>> {
        let mut groups: HashMap<String, Vec<VariantRecord>> = HashMap::new();
        for record in &self.records {
            if let Some(gene) = &record.gene {
                groups.entry(gene.clone()).or_default().push(record.clone());
            }
        }
        groups
    }
}

/// Extracts relevant variant records from validated file text.
#[derive(Debug, Clone, Copy)]
pub struct VariantExtractor<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> VariantExtractor<'kb> {
    /// Borrow the shared knowledge base.
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Parse every non-header line and keep the pharmacogenomically
    /// relevant records.
    ///
    /// A record is relevant if its INFO column carries explicit gene or
    /// star-allele tags, its identifier is in the known-variant table, or
    /// its resolved gene is in the supported set.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut records = Vec::new();
        let mut total_rows = 0usize;
        let mut genes = BTreeSet::new();

        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            total_rows += 1;

            let Some(record) = self.parse_row(line) else {
                debug!(line, "skipping unparsable variant row");
                continue;
            };
            if !self.is_relevant(&record) {
                continue;
            }
            if let Some(gene) = &record.gene {
                genes.insert(gene.clone());
            }
            records.push(record);
        }

        let summary = ExtractionSummary {
            total_rows,
            relevant_count: records.len(),
            genes,
        };
        Extraction { records, summary }
    }

    fn parse_row(&self, line: &str) -> Option<VariantRecord> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_COLUMNS {
            return None;
        }

        let position = fields[1].trim().parse::<u64>().ok()?;
        let info = parse_info(fields[7]);
        let id = fields[2].trim().to_string();
        let (gene, star_allele) = self.resolve_annotation(&id, &info);

        let zygosity = match (fields.get(8), fields.get(9)) {
            (Some(format), Some(sample)) => genotype_zygosity(format, sample),
            _ => Zygosity::Unknown,
        };

        Some(VariantRecord {
            chrom: fields[0].trim().to_string(),
            position,
            id,
            reference: fields[3].trim().to_string(),
            alternate: fields[4].trim().to_string(),
            quality: fields[5].trim().parse::<f64>().ok(),
            filter: fields[6].trim().to_string(),
            info,
            gene,
            star_allele,
            zygosity,
        })
    }

    /// Resolve gene and star allele from INFO tags first, then the
    /// known-variant table.
    fn resolve_annotation(
        &self,
        id: &str,
        info: &HashMap<String, String>,
    ) -> (Option<String>, Option<String>) {
        let known = self.knowledge.known_variant(id);

        let gene = info
            .get("GENE")
            .cloned()
            .or_else(|| known.map(|(gene, _)| gene.to_string()));
        let star_allele = info
            .get("STAR")
            .or_else(|| info.get("ALLELE"))
            .cloned()
            .or_else(|| known.map(|(_, star)| star.to_string()));

        (gene, star_allele)
    }

    fn is_relevant(&self, record: &VariantRecord) -> bool {
        let has_tags = record.info.contains_key("GENE")
            || record.info.contains_key("STAR")
            || record.info.contains_key("ALLELE");
        let known_id = self.knowledge.known_variant(&record.id).is_some();
        let supported_gene = record
            .gene
            .as_deref()
            .is_some_and(|gene| self.knowledge.is_supported_gene(gene));

        has_tags || known_id || supported_gene
    }
}

/// Parse the semicolon-separated INFO column. Bare flag keys map to
/// `"true"`.
fn parse_info(info: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in info.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) => map.insert(key.to_string(), value.to_string()),
            None => map.insert(entry.to_string(), "true".to_string()),
        };
    }
    map
}

/// Derive zygosity from FORMAT/SAMPLE columns by locating the GT subfield.
fn genotype_zygosity(format: &str, sample: &str) -> Zygosity {
    let Some(gt_index) = format.split(':').position(|key| key.trim() == "GT") else {
        return Zygosity::Unknown;
    };
    match sample.split(':').nth(gt_index) {
        Some(gt) => Zygosity::from_genotype(gt.trim()),
        None => Zygosity::Unknown,
    }
}
