use proptest::prelude::*;

use mendel::allele::{AlleleAssignment, AlleleResolver, Phenotype, PhenotypeScorer};
use mendel::KnowledgeBase;

fn genes() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("CYP2D6"),
        Just("CYP2C19"),
        Just("CYP2C9"),
        Just("SLCO1B1"),
        Just("TPMT"),
        Just("DPYD"),
    ]
}

fn alleles() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*1".to_string()),
        Just("*2".to_string()),
        Just("*3".to_string()),
        Just("*4".to_string()),
        Just("*10".to_string()),
        Just("*17".to_string()),
        Just("*1xN".to_string()),
        Just("c.2846A>T".to_string()),
        // Alleles no table knows about; they must score as normal function.
        "[*][0-9]{3}",
    ]
}

fn phenotype_rank(phenotype: Phenotype) -> u8 {
    match phenotype {
        Phenotype::PoorMetabolizer => 0,
        Phenotype::IntermediateMetabolizer => 1,
        Phenotype::NormalMetabolizer => 2,
        Phenotype::RapidMetabolizer => 3,
        Phenotype::UltraRapidMetabolizer => 4,
    }
}

proptest! {
    #[test]
    fn activity_score_stays_in_bounds(gene in genes(), a1 in alleles(), a2 in alleles()) {
        let kb = KnowledgeBase::new();
        let scorer = PhenotypeScorer::new(&kb);
        let assignment = AlleleAssignment {
            gene: gene.to_string(),
            function1: kb.allele_function(gene, &a1),
            function2: kb.allele_function(gene, &a2),
            allele1: a1,
            allele2: a2,
        };

        let result = scorer.score(&assignment);
        prop_assert!((0.0..=3.0).contains(&result.activity_score));
    }

    #[test]
    fn phenotype_is_monotonic_in_activity_score(
        lower in 0.0f64..=3.0,
        higher in 0.0f64..=3.0,
    ) {
        let (lower, higher) = if lower <= higher { (lower, higher) } else { (higher, lower) };
        prop_assert!(
            phenotype_rank(Phenotype::from_activity_score(lower))
                <= phenotype_rank(Phenotype::from_activity_score(higher))
        );
    }

    #[test]
    fn scoring_agrees_with_allele_functions(gene in genes(), a1 in alleles(), a2 in alleles()) {
        let kb = KnowledgeBase::new();
        let expected = kb.allele_function(gene, &a1).activity_value()
            + kb.allele_function(gene, &a2).activity_value();
        let assignment = AlleleAssignment {
            gene: gene.to_string(),
            function1: kb.allele_function(gene, &a1),
            function2: kb.allele_function(gene, &a2),
            allele1: a1,
            allele2: a2,
        };

        let result = PhenotypeScorer::new(&kb).score(&assignment);
        prop_assert_eq!(result.activity_score, expected);
    }

    #[test]
    fn empty_variant_lists_always_score_normal(gene in genes()) {
        let kb = KnowledgeBase::new();
        let assignment = AlleleResolver::new(&kb).resolve(gene, &[]);
        let result = PhenotypeScorer::new(&kb).score(&assignment);

        prop_assert_eq!(result.phenotype, Phenotype::NormalMetabolizer);
        prop_assert_eq!(result.activity_score, 2.0);
    }
}
