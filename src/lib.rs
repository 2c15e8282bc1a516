//! # Mendel — pharmacogenomic risk engine
//!
//! Infers a patient's drug-metabolism risk from genomic variant data:
//!
//! 1. **Validation**: structural sanity check of the uploaded text,
//!    accumulating every failure.
//! 2. **Extraction**: VCF-flavored rows → pharmacogenomically relevant
//!    [`VariantRecord`]s plus aggregate counts.
//! 3. **Allele resolution**: per-gene variant evidence → a diploid star-allele
//!    pair (heuristic, unphased; see [`allele::AlleleResolver`]).
//! 4. **Phenotype scoring**: allele pair → activity score → metabolizer
//!    category.
//! 5. **Risk dispatch**: static drug-gene rule tables → risk classification.
//! 6. **Report generation**: independent recommendation and explanation
//!    post-processors, assembled per drug.
//!
//! The pipeline is a pure, synchronous transformation: no I/O, no shared
//! mutable state. Only the read-only knowledge base is shared across
//! requests.
//!
//! ## Usage
//!
//! ```
//! use mendel::Pipeline;
//!
//! let vcf = "##fileformat=VCFv4.2\n\
//!     #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tPATIENT\n\
//!     chr22\t42126611\trs3892097\tC\tT\t99\tPASS\tDP=40\tGT\t1/1\n";
//!
//! let pipeline = Pipeline::new();
//! let batch = pipeline
//!     .analyze(vcf, &["Codeine".to_string()])
//!     .expect("structurally valid input");
//! assert_eq!(batch.reports.len(), 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod allele; // diplotype resolution and phenotype scoring
pub mod knowledge; // static reference tables
pub mod report; // recommendation/explanation generation and assembly
pub mod risk; // rule types and dispatch engine
pub mod vcf; // validation and record extraction

// Re-exports for convenience
pub use allele::{AlleleAssignment, AlleleFunction, Phenotype, PhenotypeResult};
pub use knowledge::KnowledgeBase;
pub use report::{BatchReport, DrugReport, QualityMetrics};
pub use risk::{AnalysisResult, DrugAnalysis, RiskCategory, RiskRule, Severity};
pub use vcf::{ValidationReport, VariantRecord, Zygosity};

use thiserror::Error;
use tracing::debug;

use risk::RiskRuleEngine;
use vcf::VariantExtractor;

/// Errors that abort an analysis request before any per-drug work.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input failed structural validation; every failure is listed.
    #[error("input failed structural validation: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
}

/// Main analysis orchestrator.
///
/// Owns the knowledge base (built once, shared read-only) and wires the
/// pipeline stages. One `analyze` call per incoming request; requests are
/// independent and the type is `Sync`, so a single instance can serve
/// concurrent callers without locking.
#[derive(Debug)]
pub struct Pipeline {
    knowledge: KnowledgeBase,
}

impl Pipeline {
    /// Build a pipeline with a freshly materialized knowledge base.
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::new(),
        }
    }

    /// The shared reference tables.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Run the full pipeline over one uploaded document.
    ///
    /// Returns per-drug reports in the caller's drug order. Structural
    /// validation failure aborts the request with the complete error list;
    /// an unsupported drug produces an error-flagged entry without
    /// affecting its siblings.
    pub fn analyze(&self, text: &str, drugs: &[String]) -> Result<BatchReport, PipelineError> {
        let validation = vcf::validate_document(text);
        if !validation.valid {
            return Err(PipelineError::InvalidInput(validation.errors));
        }

        let extraction = VariantExtractor::new(&self.knowledge).extract(text);
        debug!(
            total_rows = extraction.summary.total_rows,
            relevant = extraction.summary.relevant_count,
            "extraction complete"
        );

        let gene_groups = extraction.group_by_gene();
        let metrics = QualityMetrics::from_summary(&extraction.summary);
        let engine = RiskRuleEngine::new(&self.knowledge);

        let reports = drugs
            .iter()
            .map(|drug| report::drug_report(engine.analyze_drug(drug, &gene_groups), metrics))
            .collect();

        Ok(BatchReport { reports, metrics })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_aborts_with_full_error_list() {
        let pipeline = Pipeline::new();
        let err = pipeline
            .analyze("", &["Codeine".to_string()])
            .expect_err("empty input must fail validation");
        let PipelineError::InvalidInput(errors) = err;
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn reports_preserve_requested_drug_order() {
        let pipeline = Pipeline::new();
        let vcf = "##fileformat=VCFv4.2\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
            chr22\t42126611\trs3892097\tC\tT\t99\tPASS\tDP=40\n";
        let drugs = vec![
            "Warfarin".to_string(),
            "Aspirin".to_string(),
            "Codeine".to_string(),
        ];

        let batch = pipeline.analyze(vcf, &drugs).expect("valid input");
        let names: Vec<&str> = batch.reports.iter().map(|r| r.drug()).collect();
        assert_eq!(names, vec!["Warfarin", "Aspirin", "Codeine"]);
    }
}
