//! Property tests for the query engine.

use ayusync_core::{QueryEngine, QueryError};
use ayusync_model::{CodeSystem, Record, ReferenceTable};
use proptest::prelude::*;

fn term() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.85, "[A-Za-z][A-Za-z ,-]{0,15}")
}

fn record() -> impl Strategy<Value = Record> {
    ("[A-Z][0-9]{2}", term(), "[0-9][A-Z][0-9]{2}", term()).prop_map(
        |(namaste_code, namaste_term, icd11_code, icd11_term)| Record {
            namaste_code,
            namaste_term,
            icd11_code,
            icd11_term,
        },
    )
}

/// Tables whose codes are unique within and across both columns.
fn unique_table() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..24).prop_map(|records| {
        let mut seen = std::collections::HashSet::new();
        records
            .into_iter()
            .filter(|record| {
                seen.insert(record.namaste_code.to_lowercase())
                    && seen.insert(record.icd11_code.to_lowercase())
            })
            .collect()
    })
}

fn engine(records: Vec<Record>) -> QueryEngine {
    QueryEngine::new(ReferenceTable::loaded("prop.csv", records))
}

fn contains_ignoring_case(term: Option<&str>, query: &str) -> bool {
    term.is_some_and(|term| term.to_lowercase().contains(&query.to_lowercase()))
}

proptest! {
    #[test]
    fn search_returns_exactly_the_matching_rows(
        records in prop::collection::vec(record(), 0..24),
        query in "[A-Za-z]{1,3}",
    ) {
        let expected: Vec<Record> = records
            .iter()
            .filter(|record| {
                contains_ignoring_case(record.namaste_term.as_deref(), &query)
                    || contains_ignoring_case(record.icd11_term.as_deref(), &query)
            })
            .cloned()
            .collect();
        let engine = engine(records);

        let results: Vec<Record> = engine
            .search(&query)
            .expect("search")
            .into_iter()
            .cloned()
            .collect();

        prop_assert_eq!(results, expected);
    }

    #[test]
    fn search_is_idempotent(
        records in prop::collection::vec(record(), 0..24),
        query in "[A-Za-z ]{1,4}",
    ) {
        let engine = engine(records);
        let first = engine.search(&query).expect("search");
        let second = engine.search(&query).expect("search");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn codes_translate_to_their_counterpart(records in unique_table()) {
        let engine = engine(records.clone());
        for record in &records {
            let forward = engine.translate(&record.namaste_code).expect("forward");
            prop_assert_eq!(forward.input_system, CodeSystem::Namaste);
            prop_assert_eq!(&forward.translation.code, &record.icd11_code);
            prop_assert_eq!(&forward.translation.term, &record.icd11_term);

            let backward = engine.translate(&record.icd11_code).expect("backward");
            prop_assert_eq!(backward.input_system, CodeSystem::Icd11);
            prop_assert_eq!(&backward.translation.code, &record.namaste_code);
            prop_assert_eq!(&backward.translation.term, &record.namaste_term);
        }
    }

    #[test]
    fn translate_ignores_case(records in unique_table(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let record = pick.get(&records).clone();
        let engine = engine(records);

        for code in [&record.namaste_code, &record.icd11_code] {
            let as_given = engine.translate(code).expect("as given");
            let upper = engine.translate(&code.to_uppercase()).expect("upper");
            let lower = engine.translate(&code.to_lowercase()).expect("lower");
            prop_assert_eq!(&as_given.input_system, &upper.input_system);
            prop_assert_eq!(&as_given.input_system, &lower.input_system);
            prop_assert_eq!(&as_given.translation, &upper.translation);
            prop_assert_eq!(&as_given.translation, &lower.translation);
        }
    }

    #[test]
    fn absent_codes_are_not_found(records in unique_table(), code in "[a-z]{4,6}") {
        // Generated codes always contain a digit, so lowercase-only codes are absent.
        let engine = engine(records);
        let is_not_found = matches!(engine.translate(&code), Err(QueryError::NotFound { .. }));
        prop_assert!(is_not_found);
    }
}
