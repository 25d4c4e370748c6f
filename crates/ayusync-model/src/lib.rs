//! Data model for the NAMASTE / ICD-11 reference table.
//!
//! The types here are shared by the loader (`ayusync-ingest`), the query
//! engine (`ayusync-core`) and the command-line boundary (`ayusync-cli`).

pub mod record;
pub mod system;
pub mod table;
pub mod translation;

pub use record::{Record, columns};
pub use system::CodeSystem;
pub use table::{ReferenceTable, TableOrigin};
pub use translation::{TranslatedCode, Translation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_points_at_the_other_system() {
        let record = Record::new("A01", Some("Fever"), "1D01", Some("Pyrexia"));
        let translation = Translation::from_record("a01", CodeSystem::Namaste, &record);
        assert_eq!(translation.translation.system, CodeSystem::Icd11);
        assert_eq!(translation.translation.code, "1D01");
    }
}
