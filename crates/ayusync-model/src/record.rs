use crate::CodeSystem;

/// Exact column names of the reference CSV.
pub mod columns {
    pub const NAMASTE_CODE: &str = "NAMASTE_Code";
    pub const NAMASTE_TERM: &str = "NAMASTE_Term";
    pub const ICD11_CODE: &str = "ICD11_Code";
    pub const ICD11_TERM: &str = "ICD11_Term";

    /// Every column a reference table must carry, in canonical order.
    pub const REQUIRED: [&str; 4] = [NAMASTE_CODE, NAMASTE_TERM, ICD11_CODE, ICD11_TERM];
}

/// One row of the reference table linking a NAMASTE entry to an ICD-11 entry.
///
/// Terms are optional: an empty cell in the source is an absent term, which
/// never matches a search and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "NAMASTE_Code")]
    pub namaste_code: String,
    #[serde(rename = "NAMASTE_Term")]
    pub namaste_term: Option<String>,
    #[serde(rename = "ICD11_Code")]
    pub icd11_code: String,
    #[serde(rename = "ICD11_Term")]
    pub icd11_term: Option<String>,
}

impl Record {
    pub fn new(
        namaste_code: impl Into<String>,
        namaste_term: Option<&str>,
        icd11_code: impl Into<String>,
        icd11_term: Option<&str>,
    ) -> Self {
        Self {
            namaste_code: namaste_code.into(),
            namaste_term: namaste_term.map(str::to_string),
            icd11_code: icd11_code.into(),
            icd11_term: icd11_term.map(str::to_string),
        }
    }

    /// Code on the given side of the pair.
    pub fn code(&self, system: CodeSystem) -> &str {
        match system {
            CodeSystem::Namaste => &self.namaste_code,
            CodeSystem::Icd11 => &self.icd11_code,
        }
    }

    /// Term on the given side of the pair, if present.
    pub fn term(&self, system: CodeSystem) -> Option<&str> {
        match system {
            CodeSystem::Namaste => self.namaste_term.as_deref(),
            CodeSystem::Icd11 => self.icd11_term.as_deref(),
        }
    }
}
