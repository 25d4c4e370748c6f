//! Case-folded lookup keys built once per table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ayusync_model::{CodeSystem, Record};

pub(crate) fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Lower-cased terms of one record, aligned with table order.
#[derive(Debug, Clone)]
pub(crate) struct TermKeys {
    namaste: Option<String>,
    icd11: Option<String>,
}

impl TermKeys {
    pub(crate) fn new(record: &Record) -> Self {
        Self {
            namaste: record.namaste_term.as_deref().map(fold_case),
            icd11: record.icd11_term.as_deref().map(fold_case),
        }
    }

    /// `needle` must already be case-folded. Absent terms never match.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        [&self.namaste, &self.icd11]
            .into_iter()
            .flatten()
            .any(|term| term.contains(needle))
    }
}

/// Maps a case-folded code to the position of the first row carrying it.
#[derive(Debug, Clone, Default)]
pub(crate) struct CodeIndex {
    namaste: HashMap<String, usize>,
    icd11: HashMap<String, usize>,
    duplicates: usize,
}

impl CodeIndex {
    pub(crate) fn build(records: &[Record]) -> Self {
        let mut index = Self::default();
        let mut duplicates = 0usize;
        for (position, record) in records.iter().enumerate() {
            for system in CodeSystem::ALL {
                let key = fold_case(record.code(system));
                if key.is_empty() {
                    continue;
                }
                match index.map_mut(system).entry(key) {
                    // Later rows with the same code are shadowed by the first.
                    Entry::Occupied(_) => duplicates += 1,
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                    }
                }
            }
        }
        index.duplicates = duplicates;
        index
    }

    /// `code` must already be case-folded.
    pub(crate) fn lookup(&self, system: CodeSystem, code: &str) -> Option<usize> {
        self.map(system).get(code).copied()
    }

    /// Rows whose code is shadowed by an earlier row, summed over both systems.
    pub(crate) fn duplicates(&self) -> usize {
        self.duplicates
    }

    fn map(&self, system: CodeSystem) -> &HashMap<String, usize> {
        match system {
            CodeSystem::Namaste => &self.namaste,
            CodeSystem::Icd11 => &self.icd11,
        }
    }

    fn map_mut(&mut self, system: CodeSystem) -> &mut HashMap<String, usize> {
        match system {
            CodeSystem::Namaste => &mut self.namaste,
            CodeSystem::Icd11 => &mut self.icd11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(namaste: &str, icd11: &str) -> Record {
        Record::new(namaste, Some("term"), icd11, Some("term"))
    }

    #[test]
    fn first_occurrence_wins() {
        let records = vec![record("A01", "1D01"), record("a01", "1D02")];
        let index = CodeIndex::build(&records);
        assert_eq!(index.lookup(CodeSystem::Namaste, "a01"), Some(0));
        assert_eq!(index.lookup(CodeSystem::Icd11, "1d02"), Some(1));
        assert_eq!(index.duplicates(), 1);
    }

    #[test]
    fn systems_are_indexed_separately() {
        let index = CodeIndex::build(&[record("X1", "Y1")]);
        assert_eq!(index.lookup(CodeSystem::Namaste, "y1"), None);
        assert_eq!(index.lookup(CodeSystem::Icd11, "x1"), None);
    }

    #[test]
    fn absent_terms_never_match() {
        let keys = TermKeys::new(&Record::new("A01", None, "1D01", None));
        assert!(!keys.contains("a"));
        assert!(!keys.contains(""));
    }
}
