//! Drug-gene rule tables.
//!
//! One table per supported drug: the governing gene, a mandatory
//! normal-metabolizer rule, and phenotype-specific overrides. Phenotypes
//! without an override resolve to the normal-metabolizer rule. Content
//! follows CPIC guideline semantics and is versioned with the engine.

use crate::allele::Phenotype::{
    IntermediateMetabolizer as IM, PoorMetabolizer as PM, RapidMetabolizer as RM,
    UltraRapidMetabolizer as URM,
};
use crate::risk::{DrugGeneRule, RiskCategory, RiskRule, Severity};

fn rule(
    risk: RiskCategory,
    severity: Severity,
    confidence: f64,
    recommendation: &'static str,
    dosage_advice: &'static str,
    alternatives: &'static [&'static str],
    mechanism: &'static str,
) -> RiskRule {
    RiskRule {
        risk,
        severity,
        confidence,
        recommendation,
        dosage_advice,
        alternatives,
        mechanism,
    }
}

/// Build the full rule set, one `DrugGeneRule` per supported drug.
pub fn build_rule_tables() -> Vec<DrugGeneRule> {
    vec![
        codeine(),
        tramadol(),
        warfarin(),
        phenytoin(),
        clopidogrel(),
        omeprazole(),
        simvastatin(),
        atorvastatin(),
        azathioprine(),
        mercaptopurine(),
        fluorouracil(),
        capecitabine(),
    ]
}

fn codeine() -> DrugGeneRule {
    DrugGeneRule::new(
        "Codeine",
        "CYP2D6",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.93,
            "Use codeine at label-recommended dosing.",
            "Standard dosing; no adjustment required.",
            &[],
            "Normal CYP2D6 activity produces expected morphine formation from codeine.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Ineffective,
                    Severity::High,
                    0.95,
                    "Avoid codeine; analgesia is unlikely. Select a non-tramadol alternative.",
                    "Do not titrate codeine upward; switch agents instead.",
                    &["Morphine", "Hydromorphone", "Non-opioid analgesics"],
                    "Absent CYP2D6 activity prevents O-demethylation of codeine to morphine, \
                     so little or no analgesic effect is produced.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.82,
                    "Use codeine with close attention to analgesic response.",
                    "Start at standard dosing; reassess early and switch if pain control is inadequate.",
                    &["Morphine", "Non-opioid analgesics"],
                    "Reduced CYP2D6 activity lowers morphine formation and may blunt analgesia.",
                ),
            ),
            (
                URM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.96,
                    "Avoid codeine; risk of life-threatening toxicity.",
                    "Do not administer codeine at any dose.",
                    &["Morphine", "Non-opioid analgesics"],
                    "Excess CYP2D6 activity converts codeine to morphine unusually fast, \
                     risking respiratory depression even at labeled doses.",
                ),
            ),
        ],
    )
}

fn tramadol() -> DrugGeneRule {
    DrugGeneRule::new(
        "Tramadol",
        "CYP2D6",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.90,
            "Use tramadol at label-recommended dosing.",
            "Standard dosing; no adjustment required.",
            &[],
            "Normal CYP2D6 activity yields expected formation of the active M1 metabolite.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Ineffective,
                    Severity::High,
                    0.92,
                    "Avoid tramadol; analgesia is unlikely. Select a non-codeine alternative.",
                    "Do not titrate tramadol upward; switch agents instead.",
                    &["Morphine", "Hydromorphone", "Non-opioid analgesics"],
                    "Absent CYP2D6 activity prevents formation of the active M1 metabolite \
                     responsible for most of tramadol's opioid effect.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.80,
                    "Use tramadol with close attention to analgesic response.",
                    "Start at standard dosing; reassess early and switch if pain control is inadequate.",
                    &["Morphine", "Non-opioid analgesics"],
                    "Reduced CYP2D6 activity lowers M1 formation and may blunt analgesia.",
                ),
            ),
            (
                URM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.91,
                    "Avoid tramadol; risk of opioid toxicity.",
                    "Do not administer tramadol at any dose.",
                    &["Morphine", "Non-opioid analgesics"],
                    "Excess CYP2D6 activity accelerates M1 formation, risking sedation and \
                     respiratory depression.",
                ),
            ),
        ],
    )
}

fn warfarin() -> DrugGeneRule {
    DrugGeneRule::new(
        "Warfarin",
        "CYP2C9",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.90,
            "Initiate warfarin per standard nomogram dosing.",
            "Standard initiation dose with routine INR titration.",
            &[],
            "Normal CYP2C9 activity clears S-warfarin at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.93,
                    "Substantially reduce the warfarin starting dose and extend INR monitoring.",
                    "Initiate at 50% or less of the standard dose; titrate slowly against INR.",
                    &["Apixaban", "Rivaroxaban", "Dabigatran"],
                    "Severely reduced CYP2C9 activity slows S-warfarin clearance, raising \
                     exposure and bleeding risk at standard doses.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.88,
                    "Reduce the warfarin starting dose and monitor INR closely.",
                    "Initiate at 65-80% of the standard dose; titrate against INR.",
                    &["Apixaban", "Rivaroxaban"],
                    "Reduced CYP2C9 activity slows S-warfarin clearance and increases \
                     sensitivity to standard initiation doses.",
                ),
            ),
        ],
    )
}

fn phenytoin() -> DrugGeneRule {
    DrugGeneRule::new(
        "Phenytoin",
        "CYP2C9",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.88,
            "Use phenytoin at standard loading and maintenance dosing.",
            "Standard dosing with routine level monitoring.",
            &[],
            "Normal CYP2C9 activity clears phenytoin at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::High,
                    0.91,
                    "Reduce phenytoin maintenance dose substantially or select an alternative \
                     anticonvulsant.",
                    "Reduce maintenance dose by at least 50%; obtain early serum levels.",
                    &["Levetiracetam", "Lamotrigine"],
                    "Severely reduced CYP2C9 activity causes phenytoin accumulation and \
                     concentration-dependent neurotoxicity.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.84,
                    "Reduce phenytoin maintenance dose and monitor serum levels.",
                    "Reduce maintenance dose by about 25%; adjust on measured levels.",
                    &["Levetiracetam"],
                    "Reduced CYP2C9 activity slows phenytoin clearance and raises steady-state \
                     concentrations.",
                ),
            ),
        ],
    )
}

fn clopidogrel() -> DrugGeneRule {
    DrugGeneRule::new(
        "Clopidogrel",
        "CYP2C19",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.92,
            "Use clopidogrel at label-recommended dosing.",
            "Standard 75 mg maintenance dosing.",
            &[],
            "Normal CYP2C19 activity produces expected levels of the active metabolite.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Ineffective,
                    Severity::High,
                    0.95,
                    "Avoid clopidogrel; antiplatelet protection is unreliable.",
                    "Switch to an alternative antiplatelet agent rather than raising the dose.",
                    &["Prasugrel", "Ticagrelor"],
                    "Absent CYP2C19 activity prevents bioactivation of clopidogrel, leaving \
                     platelets insufficiently inhibited after stenting.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.87,
                    "Prefer an alternative antiplatelet agent when available.",
                    "If clopidogrel must be used, confirm response with platelet function testing.",
                    &["Prasugrel", "Ticagrelor"],
                    "Reduced CYP2C19 activity lowers active metabolite exposure and diminishes \
                     platelet inhibition.",
                ),
            ),
            (
                RM,
                rule(
                    RiskCategory::Safe,
                    Severity::Low,
                    0.85,
                    "Use clopidogrel at label-recommended dosing.",
                    "Standard 75 mg maintenance dosing.",
                    &[],
                    "Increased CYP2C19 activity maintains adequate active metabolite formation.",
                ),
            ),
            (
                URM,
                rule(
                    RiskCategory::Safe,
                    Severity::Low,
                    0.83,
                    "Use clopidogrel at label-recommended dosing; be alert for bleeding.",
                    "Standard 75 mg maintenance dosing.",
                    &[],
                    "Markedly increased CYP2C19 activity raises active metabolite exposure; \
                     platelet inhibition is preserved with a modestly higher bleeding tendency.",
                ),
            ),
        ],
    )
}

fn omeprazole() -> DrugGeneRule {
    DrugGeneRule::new(
        "Omeprazole",
        "CYP2C19",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.86,
            "Use omeprazole at label-recommended dosing.",
            "Standard dosing; no adjustment required.",
            &[],
            "Normal CYP2C19 activity clears omeprazole at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.81,
                    "For chronic therapy, consider a dose reduction.",
                    "Reduce the maintenance dose by about 50% for long-term use.",
                    &["Pantoprazole"],
                    "Absent CYP2C19 activity raises omeprazole exposure several-fold during \
                     chronic dosing.",
                ),
            ),
            (
                RM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.78,
                    "Monitor for inadequate acid suppression; increase the dose if needed.",
                    "Consider a 50-100% dose increase if symptoms persist.",
                    &["Esomeprazole", "Rabeprazole"],
                    "Increased CYP2C19 activity lowers omeprazole exposure and can shorten \
                     acid suppression.",
                ),
            ),
            (
                URM,
                rule(
                    RiskCategory::Ineffective,
                    Severity::Moderate,
                    0.80,
                    "Expect therapeutic failure at standard doses; increase the dose or switch.",
                    "Increase the dose by 100% or select a less CYP2C19-dependent agent.",
                    &["Rabeprazole", "Pantoprazole"],
                    "Markedly increased CYP2C19 activity clears omeprazole before adequate \
                     acid suppression is achieved.",
                ),
            ),
        ],
    )
}

fn simvastatin() -> DrugGeneRule {
    DrugGeneRule::new(
        "Simvastatin",
        "SLCO1B1",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.89,
            "Use simvastatin at label-recommended dosing.",
            "Standard dosing; avoid the 80 mg dose per label guidance.",
            &[],
            "Normal OATP1B1 transport keeps systemic simvastatin acid exposure in the \
             expected range.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::High,
                    0.92,
                    "Avoid simvastatin; myopathy risk is substantially elevated.",
                    "Prescribe an alternative statin at a conservative starting dose.",
                    &["Rosuvastatin", "Pravastatin"],
                    "Severely reduced OATP1B1 transport raises plasma simvastatin acid \
                     exposure, the primary driver of statin myopathy.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.85,
                    "Limit simvastatin to a lower dose or select an alternative statin.",
                    "Do not exceed 20 mg daily; monitor creatine kinase if symptoms appear.",
                    &["Rosuvastatin", "Pravastatin"],
                    "Reduced OATP1B1 transport increases simvastatin acid exposure and \
                     myopathy risk at higher doses.",
                ),
            ),
        ],
    )
}

fn atorvastatin() -> DrugGeneRule {
    DrugGeneRule::new(
        "Atorvastatin",
        "SLCO1B1",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.84,
            "Use atorvastatin at label-recommended dosing.",
            "Standard dosing; no adjustment required.",
            &[],
            "Normal OATP1B1 transport keeps atorvastatin exposure in the expected range.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.86,
                    "Prefer a lower atorvastatin dose or an alternative statin.",
                    "Start at 10-20 mg daily; monitor for muscle symptoms.",
                    &["Rosuvastatin", "Pravastatin"],
                    "Severely reduced OATP1B1 transport raises atorvastatin exposure and \
                     myopathy risk.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::Moderate,
                    0.80,
                    "Use atorvastatin with a conservative dose ceiling.",
                    "Start at the low end of the dose range; reassess if muscle symptoms occur.",
                    &["Rosuvastatin"],
                    "Reduced OATP1B1 transport modestly raises atorvastatin exposure.",
                ),
            ),
        ],
    )
}

fn azathioprine() -> DrugGeneRule {
    DrugGeneRule::new(
        "Azathioprine",
        "TPMT",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.94,
            "Use azathioprine at standard weight-based dosing.",
            "Standard dosing with routine blood count monitoring.",
            &[],
            "Normal TPMT activity inactivates thiopurines at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.97,
                    "Avoid azathioprine or reduce the dose drastically; fatal myelosuppression \
                     is possible at standard doses.",
                    "If thiopurine therapy is essential, use 10% of the standard dose given \
                     three times weekly with intensive blood count monitoring.",
                    &["Mycophenolate", "Methotrexate"],
                    "Absent TPMT activity shunts azathioprine into cytotoxic thioguanine \
                     nucleotides, causing severe marrow suppression.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.91,
                    "Reduce the azathioprine starting dose and monitor blood counts closely.",
                    "Start at 30-70% of the standard dose; titrate on tolerated counts.",
                    &["Mycophenolate"],
                    "Reduced TPMT activity raises thioguanine nucleotide levels and \
                     myelosuppression risk at standard doses.",
                ),
            ),
        ],
    )
}

fn mercaptopurine() -> DrugGeneRule {
    DrugGeneRule::new(
        "Mercaptopurine",
        "TPMT",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.94,
            "Use mercaptopurine at standard protocol dosing.",
            "Standard dosing with routine blood count monitoring.",
            &[],
            "Normal TPMT activity inactivates mercaptopurine at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.97,
                    "Reduce the mercaptopurine dose drastically; fatal myelosuppression is \
                     possible at protocol doses.",
                    "Use 10% of the protocol dose given three times weekly with intensive \
                     blood count monitoring.",
                    &["Thioguanine (reduced dose)"],
                    "Absent TPMT activity channels mercaptopurine into cytotoxic thioguanine \
                     nucleotides, causing severe marrow suppression.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.91,
                    "Reduce the mercaptopurine starting dose and monitor blood counts closely.",
                    "Start at 30-70% of the protocol dose; titrate on tolerated counts.",
                    &[],
                    "Reduced TPMT activity raises thioguanine nucleotide levels and \
                     myelosuppression risk at protocol doses.",
                ),
            ),
        ],
    )
}

fn fluorouracil() -> DrugGeneRule {
    DrugGeneRule::new(
        "Fluorouracil",
        "DPYD",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.93,
            "Use fluorouracil at standard protocol dosing.",
            "Standard dosing with routine toxicity monitoring.",
            &[],
            "Normal DPD activity clears fluorouracil at the expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.96,
                    "Avoid fluorouracil; complete DPD deficiency makes standard doses \
                     life-threatening.",
                    "Do not administer fluoropyrimidines; select a non-fluoropyrimidine regimen.",
                    &["Raltitrexed", "Non-fluoropyrimidine regimens"],
                    "Absent DPD activity blocks fluorouracil catabolism, producing severe \
                     mucositis, neutropenia, and neurotoxicity.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.90,
                    "Reduce the fluorouracil starting dose and escalate only as tolerated.",
                    "Start at 50% of the protocol dose; increase cautiously guided by toxicity.",
                    &[],
                    "Partial DPD deficiency slows fluorouracil clearance and raises exposure \
                     at protocol doses.",
                ),
            ),
        ],
    )
}

fn capecitabine() -> DrugGeneRule {
    DrugGeneRule::new(
        "Capecitabine",
        "DPYD",
        rule(
            RiskCategory::Safe,
            Severity::Low,
            0.93,
            "Use capecitabine at standard protocol dosing.",
            "Standard dosing with routine toxicity monitoring.",
            &[],
            "Normal DPD activity clears capecitabine's fluorouracil payload at the \
             expected rate.",
        ),
        vec![
            (
                PM,
                rule(
                    RiskCategory::Toxic,
                    Severity::Critical,
                    0.96,
                    "Avoid capecitabine; complete DPD deficiency makes standard doses \
                     life-threatening.",
                    "Do not administer fluoropyrimidines; select a non-fluoropyrimidine regimen.",
                    &["Non-fluoropyrimidine regimens"],
                    "Capecitabine is converted to fluorouracil; absent DPD activity blocks its \
                     catabolism and produces severe toxicity.",
                ),
            ),
            (
                IM,
                rule(
                    RiskCategory::AdjustDosage,
                    Severity::High,
                    0.90,
                    "Reduce the capecitabine starting dose and escalate only as tolerated.",
                    "Start at 50% of the protocol dose; increase cautiously guided by toxicity.",
                    &[],
                    "Partial DPD deficiency slows clearance of the fluorouracil payload and \
                     raises exposure at protocol doses.",
                ),
            ),
        ],
    )
}
