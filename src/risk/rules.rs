use std::collections::HashMap;

use serde::Serialize;

use crate::allele::Phenotype;

/// Risk classification for a drug given a metabolizer phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskCategory {
    /// Standard therapy appropriate.
    Safe,
    /// Therapy appropriate with dose modification.
    AdjustDosage,
    /// Elevated risk of adverse reaction or toxicity.
    Toxic,
    /// Reduced or absent therapeutic effect expected.
    Ineffective,
    /// No assessment possible (unsupported drug).
    Unknown,
}

impl RiskCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Safe => "Safe",
            RiskCategory::AdjustDosage => "Adjust Dosage",
            RiskCategory::Toxic => "Toxic",
            RiskCategory::Ineffective => "Ineffective",
            RiskCategory::Unknown => "Unknown",
        }
    }
}

/// Clinical severity attached to a risk rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Minimal clinical consequence.
    Low,
    /// Meaningful but manageable consequence.
    Moderate,
    /// Serious consequence requiring intervention.
    High,
    /// Potentially life-threatening consequence.
    Critical,
}

impl Severity {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// One phenotype-specific clinical rule.
///
/// All rule text lives in the static knowledge tables and is shared
/// read-only for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRule {
    /// Risk classification.
    pub risk: RiskCategory,
    /// Clinical severity.
    pub severity: Severity,
    /// Guideline confidence in [0, 1].
    pub confidence: f64,
    /// Primary clinical recommendation text.
    pub recommendation: &'static str,
    /// Dosing guidance.
    pub dosage_advice: &'static str,
    /// Alternative agents to consider.
    pub alternatives: &'static [&'static str],
    /// Pharmacological mechanism behind the rule.
    pub mechanism: &'static str,
}

/// Rule table for one drug: its governing gene plus per-phenotype rules.
///
/// The normal-metabolizer rule is stored separately so that lookup is total:
/// a phenotype without its own entry falls back to the normal-metabolizer
/// rule. That fallback is a required policy of the rule set, not an error
/// path.
#[derive(Debug, Clone)]
pub struct DrugGeneRule {
    /// Canonical drug display name.
    pub drug: &'static str,
    /// Governing pharmacogene.
    pub gene: &'static str,
    normal: RiskRule,
    overrides: HashMap<Phenotype, RiskRule>,
}

impl DrugGeneRule {
    /// Build a table from the normal-metabolizer rule plus overrides.
    pub fn new(
        drug: &'static str,
        gene: &'static str,
        normal: RiskRule,
        overrides: Vec<(Phenotype, RiskRule)>,
    ) -> Self {
        Self {
            drug,
            gene,
            normal,
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Fetch the rule for a phenotype.
    ///
    /// Lookup order: exact phenotype entry, then the normal-metabolizer
    /// entry. Always succeeds.
    pub fn rule_for(&self, phenotype: Phenotype) -> &RiskRule {
        self.overrides.get(&phenotype).unwrap_or(&self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule(risk: RiskCategory) -> RiskRule {
        RiskRule {
            risk,
            severity: Severity::Low,
            confidence: 0.9,
            recommendation: "proceed",
            dosage_advice: "standard dosing",
            alternatives: &[],
            mechanism: "none",
        }
    }

    #[test]
    fn missing_phenotype_entry_falls_back_to_normal() {
        let table = DrugGeneRule::new(
            "Examplol",
            "CYP2D6",
            sample_rule(RiskCategory::Safe),
            vec![(
                Phenotype::PoorMetabolizer,
                sample_rule(RiskCategory::Ineffective),
            )],
        );

        assert_eq!(
            table.rule_for(Phenotype::PoorMetabolizer).risk,
            RiskCategory::Ineffective
        );
        // No RM entry: the normal-metabolizer rule answers.
        assert_eq!(
            table.rule_for(Phenotype::RapidMetabolizer).risk,
            RiskCategory::Safe
        );
    }
}
