use crate::{CodeSystem, Record};

/// Result of translating a code from one system into the other.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Translation {
    /// The code exactly as the caller supplied it.
    pub input_code: String,
    /// The system the input code was recognized under.
    pub input_system: CodeSystem,
    pub translation: TranslatedCode,
}

/// The counterpart entry in the other system.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TranslatedCode {
    pub system: CodeSystem,
    pub code: String,
    pub term: Option<String>,
}

impl Translation {
    /// Builds a translation for `input_code`, recognized under `input_system`
    /// on `record`. The translated side is always the other system.
    pub fn from_record(
        input_code: impl Into<String>,
        input_system: CodeSystem,
        record: &Record,
    ) -> Self {
        let target = input_system.other();
        Self {
            input_code: input_code.into(),
            input_system,
            translation: TranslatedCode {
                system: target,
                code: record.code(target).to_string(),
                term: record.term(target).map(str::to_string),
            },
        }
    }
}
