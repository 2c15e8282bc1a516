//! Diplotype resolution from unphased variant evidence.
//!
//! This is a heuristic approximation of compound heterozygosity, not true
//! haplotype phasing: the resolver inspects at most the first two variants
//! of a gene and ignores the rest. Known limitation, kept deliberately.

use serde::Serialize;

use crate::allele::AlleleFunction;
use crate::knowledge::KnowledgeBase;
use crate::vcf::{VariantRecord, Zygosity};

/// Resolved allele pair for one gene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlleleAssignment {
    /// Gene symbol.
    pub gene: String,
    /// First star allele.
    pub allele1: String,
    /// Second star allele.
    pub allele2: String,
    /// Function class of the first allele.
    pub function1: AlleleFunction,
    /// Function class of the second allele.
    pub function2: AlleleFunction,
}

/// Resolves a two-allele genotype per gene from its relevant variants.
#[derive(Debug, Clone, Copy)]
pub struct AlleleResolver<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> AlleleResolver<'kb> {
    /// Borrow the shared knowledge base.
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Resolve the allele pair for a gene from its (possibly empty)
    /// variant list.
    ///
    /// Decision order:
    /// - no variants: default/default (assumed normal function)
    /// - one homozygous-alternate variant: that allele on both chromosomes
    /// - one heterozygous variant: default plus that allele
    /// - one variant of other zygosity: default/default
    /// - two or more, first heterozygous: default plus the second variant's
    ///   allele (remaining variants ignored)
    /// - two or more, first homozygous-alternate: as the single
    ///   homozygous-alternate case (remaining variants ignored)
    ///
    /// Deterministic: identical input always yields the identical pair.
    pub fn resolve(&self, gene: &str, variants: &[VariantRecord]) -> AlleleAssignment {
        let default = self.knowledge.default_allele(gene);

        let (allele1, allele2) = match variants {
            [] => (default.to_string(), default.to_string()),
            [only] => match only.zygosity {
                Zygosity::HomozygousAlternate => {
                    let star = self.star_or_default(gene, only);
                    (star.clone(), star)
                }
                Zygosity::Heterozygous => {
                    (default.to_string(), self.star_or_default(gene, only))
                }
                _ => (default.to_string(), default.to_string()),
            },
            [first, second, ..] => match first.zygosity {
                Zygosity::Heterozygous => {
                    (default.to_string(), self.star_or_default(gene, second))
                }
                Zygosity::HomozygousAlternate => {
                    let star = self.star_or_default(gene, first);
                    (star.clone(), star)
                }
                _ => (default.to_string(), default.to_string()),
            },
        };

        let function1 = self.knowledge.allele_function(gene, &allele1);
        let function2 = self.knowledge.allele_function(gene, &allele2);

        AlleleAssignment {
            gene: gene.to_string(),
            allele1,
            allele2,
            function1,
            function2,
        }
    }

    fn star_or_default(&self, gene: &str, variant: &VariantRecord) -> String {
        variant
            .star_allele
            .clone()
            .unwrap_or_else(|| self.knowledge.default_allele(gene).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn variant(id: &str, star: Option<&str>, zygosity: Zygosity) -> VariantRecord {
        VariantRecord {
            chrom: "chr22".to_string(),
            position: 42126611,
            id: id.to_string(),
            reference: "C".to_string(),
            alternate: "T".to_string(),
            quality: Some(99.0),
            filter: "PASS".to_string(),
            info: HashMap::new(),
            gene: Some("CYP2D6".to_string()),
            star_allele: star.map(str::to_string),
            zygosity,
        }
    }

    #[test]
    fn no_variants_yields_default_pair() {
        let kb = KnowledgeBase::new();
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &[]);
        assert_eq!(assignment.allele1, "*1");
        assert_eq!(assignment.allele2, "*1");
    }

    #[test]
    fn homozygous_alternate_duplicates_the_allele() {
        let kb = KnowledgeBase::new();
        let variants = vec![variant("rs3892097", Some("*4"), Zygosity::HomozygousAlternate)];
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
        assert_eq!(assignment.allele1, "*4");
        assert_eq!(assignment.allele2, "*4");
        assert_eq!(assignment.function1, AlleleFunction::NoFunction);
    }

    #[test]
    fn heterozygous_pairs_default_with_the_allele() {
        let kb = KnowledgeBase::new();
        let variants = vec![variant("rs1065852", Some("*10"), Zygosity::Heterozygous)];
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
        assert_eq!(assignment.allele1, "*1");
        assert_eq!(assignment.allele2, "*10");
    }

    #[test]
    fn other_zygosity_falls_back_to_default_pair() {
        let kb = KnowledgeBase::new();
        for zygosity in [Zygosity::HomozygousReference, Zygosity::Unknown] {
            let variants = vec![variant("rs3892097", Some("*4"), zygosity)];
            let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
            assert_eq!(assignment.allele1, "*1");
            assert_eq!(assignment.allele2, "*1");
        }
    }

    #[test]
    fn compound_het_takes_second_variant_and_ignores_the_rest() {
        let kb = KnowledgeBase::new();
        let variants = vec![
            variant("rs3892097", Some("*4"), Zygosity::Heterozygous),
            variant("rs1065852", Some("*10"), Zygosity::Heterozygous),
            variant("rs28371725", Some("*41"), Zygosity::Heterozygous),
        ];
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
        assert_eq!(assignment.allele1, "*1");
        assert_eq!(assignment.allele2, "*10");
    }

    #[test]
    fn multi_variant_homozygous_first_wins() {
        let kb = KnowledgeBase::new();
        let variants = vec![
            variant("rs3892097", Some("*4"), Zygosity::HomozygousAlternate),
            variant("rs1065852", Some("*10"), Zygosity::Heterozygous),
        ];
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
        assert_eq!(assignment.allele1, "*4");
        assert_eq!(assignment.allele2, "*4");
    }

    #[test]
    fn missing_star_allele_contributes_the_default() {
        let kb = KnowledgeBase::new();
        let variants = vec![variant("rs9999999", None, Zygosity::Heterozygous)];
        let assignment = AlleleResolver::new(&kb).resolve("CYP2D6", &variants);
        assert_eq!(assignment.allele2, "*1");
    }

    #[test]
    fn resolution_is_deterministic() {
        let kb = KnowledgeBase::new();
        let variants = vec![
            variant("rs3892097", Some("*4"), Zygosity::Heterozygous),
            variant("rs1065852", Some("*10"), Zygosity::Heterozygous),
        ];
        let resolver = AlleleResolver::new(&kb);
        let first = resolver.resolve("CYP2D6", &variants);
        let second = resolver.resolve("CYP2D6", &variants);
        assert_eq!(first, second);
    }
}
