use std::fmt;

/// One side of the translation pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum CodeSystem {
    /// Traditional-medicine terminology.
    #[serde(rename = "NAMASTE")]
    Namaste,
    /// International Classification of Diseases, 11th revision.
    #[serde(rename = "ICD-11")]
    Icd11,
}

impl CodeSystem {
    /// Both systems, in translation lookup order.
    pub const ALL: [CodeSystem; 2] = [CodeSystem::Namaste, CodeSystem::Icd11];

    pub fn as_str(self) -> &'static str {
        match self {
            CodeSystem::Namaste => "NAMASTE",
            CodeSystem::Icd11 => "ICD-11",
        }
    }

    /// The system on the opposite side of the pair.
    pub fn other(self) -> CodeSystem {
        match self {
            CodeSystem::Namaste => CodeSystem::Icd11,
            CodeSystem::Icd11 => CodeSystem::Namaste,
        }
    }
}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
