//! Clinical recommendation post-processing.
//!
//! A pure function of one completed analysis; reads only rule-engine
//! output and the static monitoring-plan table.

use serde::Serialize;

use crate::risk::{AnalysisResult, RiskCategory, Severity};

/// How quickly the care team should act on the finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    /// No expedited action needed.
    Routine,
    /// Address at the next prescribing decision.
    Moderate,
    /// Address before the next dose is given.
    High,
    /// Act immediately.
    Urgent,
}

impl Urgency {
    /// Display label (ROUTINE/MODERATE/HIGH/URGENT).
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Routine => "ROUTINE",
            Urgency::Moderate => "MODERATE",
            Urgency::High => "HIGH",
            Urgency::Urgent => "URGENT",
        }
    }
}

/// Structured clinical recommendation for one drug.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub urgency: Urgency,
    /// Narrative summary keyed by risk category and drug.
    pub summary: String,
    /// Monitoring plan for this drug and risk category.
    pub monitoring_plan: String,
    /// CPIC-style evidence tier.
    pub evidence_level: String,
}

/// Derive the clinical recommendation from a completed analysis.
pub fn recommend(result: &AnalysisResult) -> Recommendation {
    Recommendation {
        urgency: urgency_for(&result.rule.severity, &result.rule.risk),
        summary: summary_for(result),
        monitoring_plan: monitoring_plan(&result.drug, result.rule.risk).to_string(),
        evidence_level: evidence_tier(result.rule.confidence).to_string(),
    }
}

/// Urgency ladder: Critical severity outranks High severity outranks a
/// dosage-adjustment risk; everything else is routine.
fn urgency_for(severity: &Severity, risk: &RiskCategory) -> Urgency {
    match (severity, risk) {
        (Severity::Critical, _) => Urgency::Urgent,
        (Severity::High, _) => Urgency::High,
        (_, RiskCategory::AdjustDosage) => Urgency::Moderate,
        _ => Urgency::Routine,
    }
}

fn summary_for(result: &AnalysisResult) -> String {
    let drug = &result.drug;
    let phenotype = result.phenotype.phenotype.label();
    match result.rule.risk {
        RiskCategory::Safe => format!(
            "{drug} can be prescribed at standard dosing; the patient's {phenotype} \
             status does not alter its risk profile."
        ),
        RiskCategory::AdjustDosage => format!(
            "{drug} requires dose modification: the patient's {phenotype} status \
             shifts drug exposure outside the standard dosing assumptions."
        ),
        RiskCategory::Toxic => format!(
            "{drug} carries an elevated toxicity risk for this patient's {phenotype} \
             status; avoid or use only with the stated precautions."
        ),
        RiskCategory::Ineffective => format!(
            "{drug} is unlikely to achieve its therapeutic effect given the \
             patient's {phenotype} status; select an alternative agent."
        ),
        RiskCategory::Unknown => format!("No risk assessment is available for {drug}."),
    }
}

/// Monitoring plans keyed by (drug, risk category).
///
/// Lookup order: exact (drug, risk) entry, then the drug's Safe-category
/// plan, then a generic follow-up plan. The Safe fallback is the required
/// policy for categories without a bespoke plan.
fn monitoring_plan(drug: &str, risk: RiskCategory) -> &'static str {
    let key = drug.to_lowercase();
    lookup_plan(&key, risk)
        .or_else(|| lookup_plan(&key, RiskCategory::Safe))
        .unwrap_or("Standard clinical follow-up at the next scheduled visit.")
}

fn lookup_plan(drug: &str, risk: RiskCategory) -> Option<&'static str> {
    MONITORING_PLANS
        .iter()
        .find(|(d, r, _)| *d == drug && *r == risk)
        .map(|(_, _, plan)| *plan)
}

const MONITORING_PLANS: &[(&str, RiskCategory, &str)] = &[
    (
        "codeine",
        RiskCategory::Safe,
        "Reassess analgesia at routine follow-up; no additional monitoring required.",
    ),
    (
        "codeine",
        RiskCategory::Ineffective,
        "Reassess pain control within 48 hours and escalate to an alternative analgesic if inadequate.",
    ),
    (
        "codeine",
        RiskCategory::Toxic,
        "If an opioid is still required, observe for sedation and respiratory depression after every dose change.",
    ),
    (
        "tramadol",
        RiskCategory::Safe,
        "Reassess analgesia at routine follow-up; no additional monitoring required.",
    ),
    (
        "tramadol",
        RiskCategory::Ineffective,
        "Reassess pain control within 48 hours and escalate to an alternative analgesic if inadequate.",
    ),
    (
        "tramadol",
        RiskCategory::Toxic,
        "If an opioid is still required, observe for sedation and respiratory depression after every dose change.",
    ),
    (
        "warfarin",
        RiskCategory::Safe,
        "Routine INR monitoring per the anticoagulation clinic schedule.",
    ),
    (
        "warfarin",
        RiskCategory::AdjustDosage,
        "INR every 2-3 days during initiation until two consecutive in-range values, then weekly until stable.",
    ),
    (
        "phenytoin",
        RiskCategory::Safe,
        "Serum phenytoin level at steady state and with any dose change.",
    ),
    (
        "phenytoin",
        RiskCategory::AdjustDosage,
        "Serum phenytoin level within the first week, then with every dose change until stable.",
    ),
    (
        "phenytoin",
        RiskCategory::Toxic,
        "Early serum level within 3-5 days of initiation; review for nystagmus, ataxia, and sedation weekly.",
    ),
    (
        "clopidogrel",
        RiskCategory::Safe,
        "Routine cardiology follow-up; no platelet function testing required.",
    ),
    (
        "clopidogrel",
        RiskCategory::Ineffective,
        "If clopidogrel is continued, confirm response with platelet function testing and watch for stent thrombosis.",
    ),
    (
        "clopidogrel",
        RiskCategory::AdjustDosage,
        "Platelet function testing after the first maintenance week to confirm adequate inhibition.",
    ),
    (
        "omeprazole",
        RiskCategory::Safe,
        "Symptom review at 4-8 weeks; deprescribe when no longer indicated.",
    ),
    (
        "omeprazole",
        RiskCategory::AdjustDosage,
        "Symptom review at 2-4 weeks after each dose change.",
    ),
    (
        "omeprazole",
        RiskCategory::Ineffective,
        "Symptom review at 2 weeks; if symptoms persist, confirm adherence and escalate therapy.",
    ),
    (
        "simvastatin",
        RiskCategory::Safe,
        "Lipid panel at 4-12 weeks after initiation; ask about muscle symptoms at each visit.",
    ),
    (
        "simvastatin",
        RiskCategory::AdjustDosage,
        "Lipid panel at 4 weeks; check creatine kinase promptly if muscle symptoms appear.",
    ),
    (
        "simvastatin",
        RiskCategory::Toxic,
        "If any statin is continued, baseline creatine kinase and early review for muscle symptoms.",
    ),
    (
        "atorvastatin",
        RiskCategory::Safe,
        "Lipid panel at 4-12 weeks after initiation; ask about muscle symptoms at each visit.",
    ),
    (
        "atorvastatin",
        RiskCategory::AdjustDosage,
        "Lipid panel at 4 weeks; check creatine kinase promptly if muscle symptoms appear.",
    ),
    (
        "azathioprine",
        RiskCategory::Safe,
        "CBC and liver panel every 2 weeks for the first month, then monthly.",
    ),
    (
        "azathioprine",
        RiskCategory::AdjustDosage,
        "CBC weekly for the first month after any dose change, then every 2 weeks.",
    ),
    (
        "azathioprine",
        RiskCategory::Toxic,
        "CBC twice weekly for the first month; stop immediately for cytopenias.",
    ),
    (
        "mercaptopurine",
        RiskCategory::Safe,
        "CBC and liver panel per protocol schedule.",
    ),
    (
        "mercaptopurine",
        RiskCategory::AdjustDosage,
        "CBC weekly for the first month after any dose change, then every 2 weeks.",
    ),
    (
        "mercaptopurine",
        RiskCategory::Toxic,
        "CBC twice weekly for the first month; stop immediately for cytopenias.",
    ),
    (
        "fluorouracil",
        RiskCategory::Safe,
        "Toxicity review before each cycle per protocol.",
    ),
    (
        "fluorouracil",
        RiskCategory::AdjustDosage,
        "Toxicity review before each cycle with CBC; escalate dose only after two well-tolerated cycles.",
    ),
    (
        "fluorouracil",
        RiskCategory::Toxic,
        "Daily clinical review during any exposure; manage mucositis and cytopenias aggressively.",
    ),
    (
        "capecitabine",
        RiskCategory::Safe,
        "Toxicity review before each cycle per protocol.",
    ),
    (
        "capecitabine",
        RiskCategory::AdjustDosage,
        "Toxicity review before each cycle with CBC; escalate dose only after two well-tolerated cycles.",
    ),
    (
        "capecitabine",
        RiskCategory::Toxic,
        "Daily clinical review during any exposure; manage mucositis and cytopenias aggressively.",
    ),
];

/// CPIC-style evidence tier from guideline confidence.
fn evidence_tier(confidence: f64) -> &'static str {
    if confidence >= 0.9 {
        "CPIC Level A"
    } else if confidence >= 0.75 {
        "CPIC Level B"
    } else {
        "CPIC Level C"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_ladder_prefers_severity() {
        assert_eq!(
            urgency_for(&Severity::Critical, &RiskCategory::Safe),
            Urgency::Urgent
        );
        assert_eq!(
            urgency_for(&Severity::High, &RiskCategory::AdjustDosage),
            Urgency::High
        );
        assert_eq!(
            urgency_for(&Severity::Moderate, &RiskCategory::AdjustDosage),
            Urgency::Moderate
        );
        assert_eq!(
            urgency_for(&Severity::Low, &RiskCategory::Safe),
            Urgency::Routine
        );
    }

    #[test]
    fn monitoring_plan_falls_back_to_safe_entry() {
        // Warfarin has no Toxic-specific plan; the Safe plan answers.
        let plan = monitoring_plan("Warfarin", RiskCategory::Toxic);
        assert_eq!(
            plan,
            "Routine INR monitoring per the anticoagulation clinic schedule."
        );
    }

    #[test]
    fn monitoring_plan_prefers_exact_entry() {
        let plan = monitoring_plan("warfarin", RiskCategory::AdjustDosage);
        assert!(plan.starts_with("INR every 2-3 days"));
    }

    #[test]
    fn unknown_drug_gets_generic_plan() {
        let plan = monitoring_plan("examplol", RiskCategory::Safe);
        assert!(plan.starts_with("Standard clinical follow-up"));
    }

    #[test]
    fn evidence_tier_bands() {
        assert_eq!(evidence_tier(0.95), "CPIC Level A");
        assert_eq!(evidence_tier(0.80), "CPIC Level B");
        assert_eq!(evidence_tier(0.60), "CPIC Level C");
    }
}
