//! Variant-file handling: structural validation and record extraction.

mod extractor;
mod record;
mod validator;

pub use extractor::{Extraction, VariantExtractor};
pub use record::{ExtractionSummary, VariantRecord, Zygosity};
pub use validator::{validate_document, ValidationReport};
