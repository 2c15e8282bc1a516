//! Risk classification: rule types and the dispatch engine.

mod engine;
mod rules;

pub use engine::{AnalysisResult, DrugAnalysis, RiskRuleEngine};
pub use rules::{DrugGeneRule, RiskCategory, RiskRule, Severity};
