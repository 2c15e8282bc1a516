//! Activity scoring and metabolizer phenotype classification.

use serde::Serialize;

use crate::allele::AlleleAssignment;
use crate::knowledge::KnowledgeBase;

/// Functional status of a single star allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlleleFunction {
    /// No enzymatic activity.
    NoFunction,
    /// Reduced enzymatic activity.
    DecreasedFunction,
    /// Reference-level activity.
    NormalFunction,
    /// Elevated activity (e.g. gene duplication).
    IncreasedFunction,
}

impl AlleleFunction {
    /// Activity value contributed by one allele of this function class.
    pub fn activity_value(&self) -> f64 {
        match self {
            AlleleFunction::NoFunction => 0.0,
            AlleleFunction::DecreasedFunction => 0.5,
            AlleleFunction::NormalFunction => 1.0,
            AlleleFunction::IncreasedFunction => 1.5,
        }
    }

    /// Short clinical description of the function class.
    pub fn describe(&self) -> &'static str {
        match self {
            AlleleFunction::NoFunction => "no function",
            AlleleFunction::DecreasedFunction => "decreased function",
            AlleleFunction::NormalFunction => "normal function",
            AlleleFunction::IncreasedFunction => "increased function",
        }
    }
}

/// Metabolizer phenotype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phenotype {
    /// Activity score 0.
    PoorMetabolizer,
    /// Activity score in (0, 1].
    IntermediateMetabolizer,
    /// Activity score in (1, 2].
    NormalMetabolizer,
    /// Activity score in (2, 2.5].
    RapidMetabolizer,
    /// Activity score above 2.5.
    UltraRapidMetabolizer,
}

impl Phenotype {
    /// Classify an activity score.
    ///
    /// Boundaries are lower-inclusive: a score of exactly 1.0 is an
    /// intermediate metabolizer and exactly 2.0 a normal metabolizer.
    pub fn from_activity_score(score: f64) -> Self {
        if score <= 0.0 {
            Phenotype::PoorMetabolizer
        } else if score <= 1.0 {
            Phenotype::IntermediateMetabolizer
        } else if score <= 2.0 {
            Phenotype::NormalMetabolizer
        } else if score <= 2.5 {
            Phenotype::RapidMetabolizer
        } else {
            Phenotype::UltraRapidMetabolizer
        }
    }

    /// Standard abbreviation (PM/IM/NM/RM/URM).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Phenotype::PoorMetabolizer => "PM",
            Phenotype::IntermediateMetabolizer => "IM",
            Phenotype::NormalMetabolizer => "NM",
            Phenotype::RapidMetabolizer => "RM",
            Phenotype::UltraRapidMetabolizer => "URM",
        }
    }

    /// Full category name.
    pub fn label(&self) -> &'static str {
        match self {
            Phenotype::PoorMetabolizer => "Poor Metabolizer",
            Phenotype::IntermediateMetabolizer => "Intermediate Metabolizer",
            Phenotype::NormalMetabolizer => "Normal Metabolizer",
            Phenotype::RapidMetabolizer => "Rapid Metabolizer",
            Phenotype::UltraRapidMetabolizer => "Ultra-Rapid Metabolizer",
        }
    }

    /// All categories, in activity-score order.
    pub const ALL: [Phenotype; 5] = [
        Phenotype::PoorMetabolizer,
        Phenotype::IntermediateMetabolizer,
        Phenotype::NormalMetabolizer,
        Phenotype::RapidMetabolizer,
        Phenotype::UltraRapidMetabolizer,
    ];
}

/// Scored phenotype for one gene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhenotypeResult {
    /// Diplotype label, `allele1/allele2`.
    pub diplotype: String,
    /// Metabolizer category.
    pub phenotype: Phenotype,
    /// Sum of both alleles' activity values, in [0, 3].
    pub activity_score: f64,
}

/// Maps an allele assignment to an activity score and metabolizer category.
#[derive(Debug, Clone, Copy)]
pub struct PhenotypeScorer<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> PhenotypeScorer<'kb> {
    /// Borrow the shared knowledge base.
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Score a resolved allele pair.
    ///
    /// Each allele contributes its function value from the per-gene lookup
    /// table; alleles absent from the table count as normal function.
    pub fn score(&self, assignment: &AlleleAssignment) -> PhenotypeResult {
        let f1 = self
            .knowledge
            .allele_function(&assignment.gene, &assignment.allele1);
        let f2 = self
            .knowledge
            .allele_function(&assignment.gene, &assignment.allele2);
        let activity_score = f1.activity_value() + f2.activity_value();

        PhenotypeResult {
            diplotype: format!("{}/{}", assignment.allele1, assignment.allele2),
            phenotype: Phenotype::from_activity_score(activity_score),
            activity_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries_are_lower_inclusive() {
        assert_eq!(Phenotype::from_activity_score(0.0), Phenotype::PoorMetabolizer);
        assert_eq!(
            Phenotype::from_activity_score(0.5),
            Phenotype::IntermediateMetabolizer
        );
        assert_eq!(
            Phenotype::from_activity_score(1.0),
            Phenotype::IntermediateMetabolizer
        );
        assert_eq!(Phenotype::from_activity_score(1.5), Phenotype::NormalMetabolizer);
        assert_eq!(Phenotype::from_activity_score(2.0), Phenotype::NormalMetabolizer);
        assert_eq!(Phenotype::from_activity_score(2.5), Phenotype::RapidMetabolizer);
        assert_eq!(
            Phenotype::from_activity_score(3.0),
            Phenotype::UltraRapidMetabolizer
        );
    }

    #[test]
    fn function_values_match_activity_contributions() {
        assert_eq!(AlleleFunction::NoFunction.activity_value(), 0.0);
        assert_eq!(AlleleFunction::DecreasedFunction.activity_value(), 0.5);
        assert_eq!(AlleleFunction::NormalFunction.activity_value(), 1.0);
        assert_eq!(AlleleFunction::IncreasedFunction.activity_value(), 1.5);
    }

    #[test]
    fn scorer_produces_diplotype_label() {
        let kb = KnowledgeBase::new();
        let scorer = PhenotypeScorer::new(&kb);
        let assignment = AlleleAssignment {
            gene: "CYP2D6".to_string(),
            allele1: "*4".to_string(),
            allele2: "*4".to_string(),
            function1: AlleleFunction::NoFunction,
            function2: AlleleFunction::NoFunction,
        };

        let result = scorer.score(&assignment);
        assert_eq!(result.diplotype, "*4/*4");
        assert_eq!(result.activity_score, 0.0);
        assert_eq!(result.phenotype, Phenotype::PoorMetabolizer);
    }

    #[test]
    fn unknown_allele_defaults_to_normal_function() {
        let kb = KnowledgeBase::new();
        let scorer = PhenotypeScorer::new(&kb);
        let assignment = AlleleAssignment {
            gene: "CYP2D6".to_string(),
            allele1: "*999".to_string(),
            allele2: "*999".to_string(),
            function1: AlleleFunction::NormalFunction,
            function2: AlleleFunction::NormalFunction,
        };

        let result = scorer.score(&assignment);
        assert_eq!(result.activity_score, 2.0);
        assert_eq!(result.phenotype, Phenotype::NormalMetabolizer);
    }
}
