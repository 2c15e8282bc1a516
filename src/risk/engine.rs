//! Drug dispatch against the static rule tables.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::allele::{AlleleAssignment, AlleleResolver, PhenotypeResult, PhenotypeScorer};
use crate::knowledge::KnowledgeBase;
use crate::risk::RiskRule;
use crate::vcf::VariantRecord;

/// Completed per-drug analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Canonical drug name.
    pub drug: String,
    /// Governing gene.
    pub gene: String,
    /// Relevant variants matched to the governing gene, in input order.
    pub variants: Vec<VariantRecord>,
    /// Resolved allele pair.
    pub assignment: AlleleAssignment,
    /// Scored phenotype.
    pub phenotype: PhenotypeResult,
    /// Dispatched clinical rule.
    pub rule: RiskRule,
}

/// Outcome for one requested drug.
///
/// Always one of the two shapes in full; a partially-populated record is
/// not representable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrugAnalysis {
    /// The drug is supported and was analyzed.
    Success(AnalysisResult),
    /// The drug is not in the supported set. Siblings in the same request
    /// are unaffected.
    Unsupported {
        /// The drug name as requested.
        drug: String,
        /// Why no analysis was produced.
        reason: String,
    },
}

/// Dispatches requested drugs against the knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct RiskRuleEngine<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> RiskRuleEngine<'kb> {
    /// Borrow the shared knowledge base.
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Run the per-drug pipeline pass: resolve the governing gene's allele
    /// pair, score the phenotype, and fetch the matching rule.
    ///
    /// Drug names are normalized (trimmed, case-insensitive) before lookup.
    /// An unrecognized drug yields [`DrugAnalysis::Unsupported`] for that
    /// drug only.
    pub fn analyze_drug(
        &self,
        requested: &str,
        gene_groups: &HashMap<String, Vec<VariantRecord>>,
    ) -> DrugAnalysis {
        let normalized = requested.trim().to_lowercase();
        let Some(table) = self.knowledge.drug_rule(&normalized) else {
            debug!(drug = requested, "requested drug is not supported");
            return DrugAnalysis::Unsupported {
                drug: requested.trim().to_string(),
                reason: format!(
                    "{} is not in the supported pharmacogenomic drug set",
                    requested.trim()
                ),
            };
        };

        let variants = gene_groups.get(table.gene).cloned().unwrap_or_default();

        let assignment = AlleleResolver::new(self.knowledge).resolve(table.gene, &variants);
        let phenotype = PhenotypeScorer::new(self.knowledge).score(&assignment);
        let rule = *table.rule_for(phenotype.phenotype);

        DrugAnalysis::Success(AnalysisResult {
            drug: table.drug.to_string(),
            gene: table.gene.to_string(),
            variants,
            assignment,
            phenotype,
            rule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allele::Phenotype;
    use crate::risk::{RiskCategory, Severity};
    use crate::vcf::Zygosity;

    fn groups_with(
        gene: &str,
        star: &str,
        zygosity: Zygosity,
    ) -> HashMap<String, Vec<VariantRecord>> {
        let record = VariantRecord {
            chrom: "chr22".to_string(),
            position: 42126611,
            id: "rs3892097".to_string(),
            reference: "C".to_string(),
            alternate: "T".to_string(),
            quality: Some(99.0),
            filter: "PASS".to_string(),
            info: HashMap::new(),
            gene: Some(gene.to_string()),
            star_allele: Some(star.to_string()),
            zygosity,
        };
        HashMap::from([(gene.to_string(), vec![record])])
    }

    #[test]
    fn codeine_poor_metabolizer_is_ineffective() {
        let kb = KnowledgeBase::new();
        let engine = RiskRuleEngine::new(&kb);
        let groups = groups_with("CYP2D6", "*4", Zygosity::HomozygousAlternate);

        let DrugAnalysis::Success(result) = engine.analyze_drug("codeine", &groups) else {
            panic!("codeine should be supported");
        };
        assert_eq!(result.phenotype.phenotype, Phenotype::PoorMetabolizer);
        assert_eq!(result.rule.risk, RiskCategory::Ineffective);
        assert_eq!(result.rule.severity, Severity::High);
    }

    #[test]
    fn drug_lookup_is_trimmed_and_case_insensitive() {
        let kb = KnowledgeBase::new();
        let engine = RiskRuleEngine::new(&kb);
        let groups = HashMap::new();

        let DrugAnalysis::Success(result) = engine.analyze_drug("  WARFARIN  ", &groups) else {
            panic!("warfarin should be supported");
        };
        assert_eq!(result.drug, "Warfarin");
        assert_eq!(result.gene, "CYP2C9");
        assert_eq!(result.rule.risk, RiskCategory::Safe);
    }

    #[test]
    fn unsupported_drug_yields_error_entry() {
        let kb = KnowledgeBase::new();
        let engine = RiskRuleEngine::new(&kb);

        let analysis = engine.analyze_drug("Aspirin", &HashMap::new());
        let DrugAnalysis::Unsupported { drug, reason } = analysis else {
            panic!("aspirin must be unsupported");
        };
        assert_eq!(drug, "Aspirin");
        assert!(reason.contains("Aspirin"));
    }
}
