//! Per-gene reference data: supported genes, default alleles, star-allele
//! function tables, and biological role narratives.
//!
//! Versioned with the rule engine; not runtime-configurable.

use crate::allele::AlleleFunction;
use crate::allele::AlleleFunction::{
    DecreasedFunction, IncreasedFunction, NoFunction, NormalFunction,
};

/// Genes the engine can assess.
pub const SUPPORTED_GENES: [&str; 6] = [
    "CYP2D6", "CYP2C19", "CYP2C9", "SLCO1B1", "TPMT", "DPYD",
];

/// Allele assumed for a gene when no variant evidence is present.
pub const DEFAULT_ALLELES: [(&str, &str); 6] = [
    ("CYP2D6", "*1"),
    ("CYP2C19", "*1"),
    ("CYP2C9", "*1"),
    ("SLCO1B1", "*1a"),
    ("TPMT", "*1"),
    ("DPYD", "*1"),
];

/// Star-allele function assignments per gene.
///
/// Alleles absent from this table score as normal function.
pub const ALLELE_FUNCTIONS: [(&str, &[(&str, AlleleFunction)]); 6] = [
    (
        "CYP2D6",
        &[
            ("*1", NormalFunction),
            ("*2", NormalFunction),
            ("*3", NoFunction),
            ("*4", NoFunction),
            ("*5", NoFunction),
            ("*6", NoFunction),
            ("*9", DecreasedFunction),
            ("*10", DecreasedFunction),
            ("*17", DecreasedFunction),
            ("*41", DecreasedFunction),
            ("*1xN", IncreasedFunction),
            ("*2xN", IncreasedFunction),
        ],
    ),
    (
        "CYP2C19",
        &[
            ("*1", NormalFunction),
            ("*2", NoFunction),
            ("*3", NoFunction),
            ("*4", NoFunction),
            ("*9", DecreasedFunction),
            ("*17", IncreasedFunction),
        ],
    ),
    (
        "CYP2C9",
        &[
            ("*1", NormalFunction),
            ("*2", DecreasedFunction),
            ("*3", NoFunction),
            ("*5", DecreasedFunction),
            ("*6", NoFunction),
            ("*11", DecreasedFunction),
        ],
    ),
    (
        "SLCO1B1",
        &[
            ("*1a", NormalFunction),
            ("*1b", NormalFunction),
            ("*5", DecreasedFunction),
            ("*15", DecreasedFunction),
            ("*17", DecreasedFunction),
        ],
    ),
    (
        "TPMT",
        &[
            ("*1", NormalFunction),
            ("*2", NoFunction),
            ("*3A", NoFunction),
            ("*3B", NoFunction),
            ("*3C", NoFunction),
            ("*4", NoFunction),
        ],
    ),
    (
        "DPYD",
        &[
            ("*1", NormalFunction),
            ("*2A", NoFunction),
            ("*13", NoFunction),
            ("c.2846A>T", DecreasedFunction),
            ("c.1129-5923C>G", DecreasedFunction),
        ],
    ),
];

/// Biological role of each gene, used by the explanation generator.
pub fn gene_role(gene: &str) -> &'static str {
    match gene {
        "CYP2D6" => {
            "CYP2D6 encodes a hepatic cytochrome P450 enzyme responsible for \
             metabolizing roughly a quarter of commonly prescribed drugs, \
             including the bioactivation of opioid prodrugs such as codeine \
             and tramadol"
        }
        "CYP2C19" => {
            "CYP2C19 encodes a hepatic cytochrome P450 enzyme that activates \
             the antiplatelet prodrug clopidogrel and clears proton-pump \
             inhibitors such as omeprazole"
        }
        "CYP2C9" => {
            "CYP2C9 encodes a hepatic cytochrome P450 enzyme that clears \
             narrow-therapeutic-index drugs including S-warfarin and \
             phenytoin"
        }
        "SLCO1B1" => {
            "SLCO1B1 encodes the OATP1B1 hepatic uptake transporter that \
             moves statins from blood into the liver; reduced transport \
             raises systemic statin exposure"
        }
        "TPMT" => {
            "TPMT encodes thiopurine S-methyltransferase, which inactivates \
             thiopurine immunosuppressants; deficient activity shunts drug \
             into cytotoxic nucleotides"
        }
        "DPYD" => {
            "DPYD encodes dihydropyrimidine dehydrogenase, the rate-limiting \
             enzyme clearing fluoropyrimidine chemotherapy agents"
        }
        _ => "this gene influences drug disposition",
    }
}
