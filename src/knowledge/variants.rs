//! Reference table of known pharmacogenomic variant identifiers.
//!
//! Maps an rsID to the (gene, star allele) it tags. Records whose INFO
//! column lacks explicit gene/allele tags are resolved through this table.

/// rsID → (gene, star allele).
pub const KNOWN_VARIANTS: [(&str, &str, &str); 23] = [
    // CYP2D6
    ("rs16947", "CYP2D6", "*2"),
    ("rs35742686", "CYP2D6", "*3"),
    ("rs3892097", "CYP2D6", "*4"),
    ("rs5030655", "CYP2D6", "*6"),
    ("rs5030656", "CYP2D6", "*9"),
    ("rs1065852", "CYP2D6", "*10"),
    ("rs28371706", "CYP2D6", "*17"),
    ("rs28371725", "CYP2D6", "*41"),
    // CYP2C19
    ("rs4244285", "CYP2C19", "*2"),
    ("rs4986893", "CYP2C19", "*3"),
    ("rs12248560", "CYP2C19", "*17"),
    // CYP2C9
    ("rs1799853", "CYP2C9", "*2"),
    ("rs1057910", "CYP2C9", "*3"),
    ("rs28371685", "CYP2C9", "*11"),
    // SLCO1B1
    ("rs4149056", "SLCO1B1", "*5"),
    ("rs2306283", "SLCO1B1", "*1b"),
    // TPMT
    ("rs1800462", "TPMT", "*2"),
    ("rs1800460", "TPMT", "*3B"),
    ("rs1142345", "TPMT", "*3C"),
    // DPYD
    ("rs3918290", "DPYD", "*2A"),
    ("rs55886062", "DPYD", "*13"),
    ("rs67376798", "DPYD", "c.2846A>T"),
    ("rs75017182", "DPYD", "c.1129-5923C>G"),
];
