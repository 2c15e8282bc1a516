//! Per-drug report assembly for the upstream consumer.
//!
//! The recommendation and explanation generators are independent pure
//! functions of one completed analysis; this module runs both and bundles
//! their output with the risk assessment, pharmacogenomic profile, and
//! echoed quality metrics into the shape the caller consumes.

mod explanation;
mod recommendation;

pub use explanation::{explain, Explanation};
pub use recommendation::{recommend, Recommendation, Urgency};

use serde::Serialize;

use crate::risk::{AnalysisResult, DrugAnalysis, RiskCategory};
use crate::vcf::{ExtractionSummary, VariantRecord};

/// Echoed input-quality counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityMetrics {
    /// Data rows seen in the input, including skipped ones.
    pub records_analyzed: usize,
    /// Rows retained as pharmacogenomically relevant.
    pub relevant_variants: usize,
}

impl QualityMetrics {
    /// Project the extraction summary into the report surface.
    pub fn from_summary(summary: &ExtractionSummary) -> Self {
        Self {
            records_analyzed: summary.total_rows,
            relevant_variants: summary.relevant_count,
        }
    }
}

/// Risk classification surface of one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Risk category label.
    pub label: String,
    /// Guideline confidence in [0, 1].
    pub confidence: f64,
    /// Severity label.
    pub severity: String,
}

/// Pharmacogenomic profile surface of one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PgxProfile {
    /// Governing gene.
    pub gene: String,
    /// Resolved diplotype label.
    pub diplotype: String,
    /// Metabolizer phenotype label.
    pub phenotype: String,
    /// Phenotype abbreviation (PM/IM/NM/RM/URM).
    pub phenotype_abbreviation: String,
    /// Activity score in [0, 3].
    pub activity_score: f64,
    /// Variants matched to the governing gene.
    pub variants: Vec<VariantRecord>,
}

/// Clinical recommendation surface of one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalRecommendation {
    /// Urgency label (ROUTINE/MODERATE/HIGH/URGENT).
    pub urgency: String,
    /// Narrative recommendation summary.
    pub summary: String,
    /// Primary recommendation text from the dispatched rule.
    pub text: String,
    /// Dosing guidance from the dispatched rule.
    pub dosage_advice: String,
    /// Alternative agents to consider.
    pub alternatives: Vec<String>,
    /// Monitoring plan for this drug and risk category.
    pub monitoring_plan: String,
    /// CPIC-style evidence tier.
    pub evidence_level: String,
}

/// Completed report for one supported drug.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedDrugReport {
    /// Canonical drug name.
    pub drug: String,
    /// Risk classification.
    pub risk_assessment: RiskAssessment,
    /// Genotype-to-phenotype profile.
    pub profile: PgxProfile,
    /// Clinical recommendation.
    pub recommendation: ClinicalRecommendation,
    /// Narrative explanation.
    pub explanation: Explanation,
    /// Echoed quality metrics.
    pub quality: QualityMetrics,
}

/// One entry of the ordered per-drug report list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DrugReport {
    /// Full analysis for a supported drug.
    Analyzed(AnalyzedDrugReport),
    /// Error marker for an unsupported drug; siblings are unaffected.
    Unsupported {
        /// The drug name as requested.
        drug: String,
        /// Risk category label; always `Unknown`.
        risk: String,
        /// Why no analysis was produced.
        error: String,
    },
}

impl DrugReport {
    /// The drug this entry refers to.
    pub fn drug(&self) -> &str {
        match self {
            DrugReport::Analyzed(report) => &report.drug,
            DrugReport::Unsupported { drug, .. } => drug,
        }
    }
}

/// Full response for one analysis request, reports in requested-drug order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Per-drug reports, preserving the caller's drug ordering.
    pub reports: Vec<DrugReport>,
    /// File-level quality metrics.
    pub metrics: QualityMetrics,
}

/// Assemble the report entry for one per-drug outcome.
pub fn drug_report(analysis: DrugAnalysis, metrics: QualityMetrics) -> DrugReport {
    match analysis {
        DrugAnalysis::Success(result) => DrugReport::Analyzed(analyzed_report(result, metrics)),
        DrugAnalysis::Unsupported { drug, reason } => DrugReport::Unsupported {
            drug,
            risk: RiskCategory::Unknown.label().to_string(),
            error: reason,
        },
    }
}

fn analyzed_report(result: AnalysisResult, quality: QualityMetrics) -> AnalyzedDrugReport {
    let recommendation = recommend(&result);
    let explanation = explain(&result);

    AnalyzedDrugReport {
        drug: result.drug.clone(),
        risk_assessment: RiskAssessment {
            label: result.rule.risk.label().to_string(),
            confidence: result.rule.confidence,
            severity: result.rule.severity.label().to_string(),
        },
        profile: PgxProfile {
            gene: result.gene.clone(),
            diplotype: result.phenotype.diplotype.clone(),
            phenotype: result.phenotype.phenotype.label().to_string(),
            phenotype_abbreviation: result.phenotype.phenotype.abbreviation().to_string(),
            activity_score: result.phenotype.activity_score,
            variants: result.variants.clone(),
        },
        recommendation: ClinicalRecommendation {
            urgency: recommendation.urgency.label().to_string(),
            summary: recommendation.summary,
            text: result.rule.recommendation.to_string(),
            dosage_advice: result.rule.dosage_advice.to_string(),
            alternatives: result
                .rule
                .alternatives
                .iter()
                .map(|alt| alt.to_string())
                .collect(),
            monitoring_plan: recommendation.monitoring_plan,
            evidence_level: recommendation.evidence_level,
        },
        explanation,
        quality,
    }
}
