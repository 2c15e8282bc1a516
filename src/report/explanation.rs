//! Explanatory narrative post-processing.
//!
//! A pure function of one completed analysis, independent of the
//! recommendation generator. All text is deterministic template
//! substitution; no external model is involved.

use serde::Serialize;

use crate::knowledge::gene_role;
use crate::risk::{AnalysisResult, RiskCategory};
use crate::vcf::VariantRecord;

/// Narrative explanation for one drug report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// One-line result summary.
    pub summary: String,
    /// Gene role plus patient-specific impact narrative.
    pub mechanism: String,
    /// One interpretation line per matched variant, or a single
    /// reference-assumed narrative when none matched.
    pub variant_interpretations: Vec<String>,
    /// Why the risk category was assigned.
    pub risk_context: String,
    /// Factors contributing to the classification.
    pub contributing_factors: Vec<String>,
    /// Confidence tier (1A/1B/2A/2B).
    pub evidence_level: String,
}

/// Derive the explanation from a completed analysis.
pub fn explain(result: &AnalysisResult) -> Explanation {
    Explanation {
        summary: format!(
            "{}: {} ({} severity) for a {} carrying {}.",
            result.drug,
            result.rule.risk.label(),
            result.rule.severity.label(),
            result.phenotype.phenotype.label(),
            result.phenotype.diplotype,
        ),
        mechanism: mechanism_narrative(result),
        variant_interpretations: variant_interpretations(result),
        risk_context: risk_context(result),
        contributing_factors: contributing_factors(result),
        evidence_level: confidence_tier(result.rule.confidence).to_string(),
    }
}

fn mechanism_narrative(result: &AnalysisResult) -> String {
    format!(
        "{}. {}",
        gene_role(&result.gene),
        phenotype_impact(result)
    )
}

/// Patient-specific impact phrasing keyed by phenotype abbreviation.
fn phenotype_impact(result: &AnalysisResult) -> String {
    let diplotype = &result.phenotype.diplotype;
    let gene = &result.gene;
    match result.phenotype.phenotype.abbreviation() {
        "PM" => format!(
            "This patient's {gene} {diplotype} diplotype leaves essentially no \
             functional activity, so substrates accumulate and prodrugs are not \
             activated."
        ),
        "IM" => format!(
            "This patient's {gene} {diplotype} diplotype retains only partial \
             activity, so drug handling sits between poor and normal metabolizers."
        ),
        "NM" => format!(
            "This patient's {gene} {diplotype} diplotype provides full activity, \
             so drugs governed by this gene behave as labeled."
        ),
        "RM" => format!(
            "This patient's {gene} {diplotype} diplotype provides above-normal \
             activity, so governed drugs are processed faster than labeled dosing \
             assumes."
        ),
        _ => format!(
            "This patient's {gene} {diplotype} diplotype provides greatly \
             increased activity, so governed drugs are processed far faster than \
             labeled dosing assumes."
        ),
    }
}

fn variant_interpretations(result: &AnalysisResult) -> Vec<String> {
    if result.variants.is_empty() {
        return vec![format!(
            "No variants were detected for {}; the reference {} genotype was assumed.",
            result.gene, result.phenotype.diplotype
        )];
    }
    result.variants.iter().map(interpret_variant).collect()
}

fn interpret_variant(variant: &VariantRecord) -> String {
    let site = format!(
        "{} ({}:{} {}>{}, {})",
        variant.id,
        variant.chrom,
        variant.position,
        variant.reference,
        variant.alternate,
        variant.zygosity.label()
    );
    match &variant.star_allele {
        Some(star) => format!("{site} supports star allele {star}."),
        None => format!("{site} has no star-allele assignment and did not alter the call."),
    }
}

fn risk_context(result: &AnalysisResult) -> String {
    let base = format!(
        "Classified {} with {} severity: {}",
        result.rule.risk.label(),
        result.rule.severity.label(),
        result.rule.mechanism
    );
    match result.rule.risk {
        RiskCategory::Safe => format!("{base} No genotype-driven precautions apply."),
        _ => base,
    }
}

fn contributing_factors(result: &AnalysisResult) -> Vec<String> {
    vec![
        format!(
            "{} diplotype {}: {} is a {} allele, {} is a {} allele",
            result.gene,
            result.phenotype.diplotype,
            result.assignment.allele1,
            result.assignment.function1.describe(),
            result.assignment.allele2,
            result.assignment.function2.describe()
        ),
        format!(
            "activity score {:.1} ({})",
            result.phenotype.activity_score,
            result.phenotype.phenotype.label()
        ),
        format!(
            "{} relevant variant(s) matched to {}",
            result.variants.len(),
            result.gene
        ),
    ]
}

/// Confidence tier bands: ≥0.90 → 1A, ≥0.80 → 1B, ≥0.70 → 2A, else 2B.
fn confidence_tier(confidence: f64) -> &'static str {
    if confidence >= 0.90 {
        "1A"
    } else if confidence >= 0.80 {
        "1B"
    } else if confidence >= 0.70 {
        "2A"
    } else {
        "2B"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::allele::{AlleleAssignment, AlleleFunction, Phenotype, PhenotypeResult};
    use crate::risk::{RiskRule, Severity};
    use crate::vcf::Zygosity;

    fn poor_metabolizer_result(variants: Vec<VariantRecord>) -> AnalysisResult {
        AnalysisResult {
            drug: "Codeine".to_string(),
            gene: "CYP2D6".to_string(),
            variants,
            assignment: AlleleAssignment {
                gene: "CYP2D6".to_string(),
                allele1: "*4".to_string(),
                allele2: "*4".to_string(),
                function1: AlleleFunction::NoFunction,
                function2: AlleleFunction::NoFunction,
            },
            phenotype: PhenotypeResult {
                diplotype: "*4/*4".to_string(),
                phenotype: Phenotype::PoorMetabolizer,
                activity_score: 0.0,
            },
            rule: RiskRule {
                risk: RiskCategory::Ineffective,
                severity: Severity::High,
                confidence: 0.95,
                recommendation: "avoid",
                dosage_advice: "switch",
                alternatives: &["Morphine"],
                mechanism: "No morphine is formed.",
            },
        }
    }

    #[test]
    fn empty_gene_group_gets_reference_assumed_narrative() {
        let explanation = explain(&poor_metabolizer_result(vec![]));
        assert_eq!(explanation.variant_interpretations.len(), 1);
        assert!(explanation.variant_interpretations[0].contains("No variants were detected"));
    }

    #[test]
    fn each_variant_gets_an_interpretation_line() {
        let variant = VariantRecord {
            chrom: "chr22".to_string(),
            position: 42126611,
            id: "rs3892097".to_string(),
            reference: "C".to_string(),
            alternate: "T".to_string(),
            quality: Some(99.0),
            filter: "PASS".to_string(),
            info: HashMap::new(),
            gene: Some("CYP2D6".to_string()),
            star_allele: Some("*4".to_string()),
            zygosity: Zygosity::HomozygousAlternate,
        };
        let explanation = explain(&poor_metabolizer_result(vec![variant]));
        assert_eq!(explanation.variant_interpretations.len(), 1);
        let line = &explanation.variant_interpretations[0];
        assert!(line.contains("rs3892097"));
        assert!(line.contains("*4"));
        assert!(line.contains("homozygous alternate"));
    }

    #[test]
    fn mechanism_blends_gene_role_and_phenotype_impact() {
        let explanation = explain(&poor_metabolizer_result(vec![]));
        assert!(explanation.mechanism.contains("CYP2D6"));
        assert!(explanation.mechanism.contains("*4/*4"));
    }

    #[test]
    fn confidence_tier_bands() {
        assert_eq!(confidence_tier(0.95), "1A");
        assert_eq!(confidence_tier(0.85), "1B");
        assert_eq!(confidence_tier(0.75), "2A");
        assert_eq!(confidence_tier(0.50), "2B");
    }
}
