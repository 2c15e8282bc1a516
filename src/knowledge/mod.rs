//! Static pharmacogenomic reference data.
//!
//! The loosely-shaped reference tables in this module are materialized into
//! explicit immutable maps exactly once, at process start, by
//! [`KnowledgeBase::new`]. The base is shared read-only across requests and
//! never mutated, so no synchronization is required.

mod drugs;
mod genes;
mod variants;

use std::collections::HashMap;

use crate::allele::AlleleFunction;
use crate::risk::DrugGeneRule;

pub use genes::{gene_role, SUPPORTED_GENES};

/// Immutable in-memory reference maps for the whole engine.
#[derive(Debug)]
pub struct KnowledgeBase {
    /// Lowercased drug name → rule table.
    drug_rules: HashMap<String, DrugGeneRule>,
    /// rsID → (gene, star allele).
    known_variants: HashMap<&'static str, (&'static str, &'static str)>,
    /// Gene → star allele → function.
    allele_functions: HashMap<&'static str, HashMap<&'static str, AlleleFunction>>,
    /// Gene → allele assumed when no variant evidence exists.
    default_alleles: HashMap<&'static str, &'static str>,
}

impl KnowledgeBase {
    /// Build every lookup map from the static tables.
    pub fn new() -> Self {
        let drug_rules = drugs::build_rule_tables()
            .into_iter()
            .map(|table| (table.drug.to_lowercase(), table))
            .collect();

        let known_variants = variants::KNOWN_VARIANTS
            .iter()
            .map(|&(id, gene, star)| (id, (gene, star)))
            .collect();

        let allele_functions = genes::ALLELE_FUNCTIONS
            .iter()
            .map(|&(gene, table)| (gene, table.iter().copied().collect()))
            .collect();

        let default_alleles = genes::DEFAULT_ALLELES.iter().copied().collect();

        Self {
            drug_rules,
            known_variants,
            allele_functions,
            default_alleles,
        }
    }

    /// Whether the gene is in the supported set.
    pub fn is_supported_gene(&self, gene: &str) -> bool {
        self.allele_functions.contains_key(gene)
    }

    /// Look up a known pharmacogenomic identifier.
    pub fn known_variant(&self, id: &str) -> Option<(&'static str, &'static str)> {
        self.known_variants.get(id).copied()
    }

    /// Default allele for a gene ("assumed normal function").
    pub fn default_allele(&self, gene: &str) -> &'static str {
        self.default_alleles.get(gene).copied().unwrap_or("*1")
    }

    /// Function class of a star allele; alleles absent from the table are
    /// treated as normal function.
    pub fn allele_function(&self, gene: &str, allele: &str) -> AlleleFunction {
        self.allele_functions
            .get(gene)
            .and_then(|table| table.get(allele))
            .copied()
            .unwrap_or(AlleleFunction::NormalFunction)
    }

    /// Rule table for a drug, keyed by its normalized (lowercased) name.
    pub fn drug_rule(&self, normalized_drug: &str) -> Option<&DrugGeneRule> {
        self.drug_rules.get(normalized_drug)
    }

    /// Canonical names of all supported drugs, alphabetically.
    pub fn supported_drugs(&self) -> Vec<&'static str> {
        let mut drugs: Vec<_> = self.drug_rules.values().map(|t| t.drug).collect();
        drugs.sort_unstable();
        drugs
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_drug_maps_to_a_supported_gene() {
        let kb = KnowledgeBase::new();
        for drug in kb.supported_drugs() {
            let table = kb.drug_rule(&drug.to_lowercase()).expect("rule table");
            assert!(
                kb.is_supported_gene(table.gene),
                "{} governs via unsupported gene {}",
                drug,
                table.gene
            );
        }
    }

    #[test]
    fn default_alleles_have_normal_function() {
        let kb = KnowledgeBase::new();
        for gene in SUPPORTED_GENES {
            let default = kb.default_allele(gene);
            assert_eq!(
                kb.allele_function(gene, default),
                AlleleFunction::NormalFunction,
                "default allele of {} must score as normal function",
                gene
            );
        }
    }

    #[test]
    fn known_variants_point_at_supported_genes() {
        let kb = KnowledgeBase::new();
        assert_eq!(kb.known_variant("rs3892097"), Some(("CYP2D6", "*4")));
        for &(id, gene, _) in variants::KNOWN_VARIANTS.iter() {
            assert!(kb.is_supported_gene(gene), "{} maps to unknown gene", id);
        }
    }
}
