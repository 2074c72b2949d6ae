//! Randomized operation sequences checked against a simple model.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::*;

const WORDS: &[&str] = &["alpha", "Beta", "GAMMA", "delta", "Alpha", "beta", "x", "a"];

#[derive(Debug, Clone)]
enum Op {
    Upsert(u8, Vec<usize>),
    Delete(u8),
    Restore(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..5, prop::collection::vec(0..WORDS.len(), 0..6)).prop_map(|(d, w)| Op::Upsert(d, w)),
        2 => (0u8..5).prop_map(Op::Delete),
        1 => (0u8..5).prop_map(Op::Restore),
    ]
}

/// Reference semantics: two maps, no index
#[derive(Default)]
struct Model {
    active: BTreeMap<String, String>,
    retained: BTreeMap<String, String>,
}

impl Model {
    fn upsert(&mut self, id: &str, content: String) {
        self.retained.remove(id);
        self.active.insert(id.to_string(), content);
    }

    fn delete(&mut self, id: &str) -> bool {
        match self.active.remove(id) {
            Some(content) => {
                self.retained.insert(id.to_string(), content);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, id: &str) -> bool {
        match self.retained.remove(id) {
            Some(content) => {
                self.active.insert(id.to_string(), content);
                true
            }
            None => false,
        }
    }

    fn search(&self, keyword: &str) -> Vec<DocId> {
        let keyword = keyword.to_lowercase();
        self.active
            .iter()
            .filter(|(_, content)| tokenize(content).contains(&keyword))
            .map(|(id, _)| DocId::from(id.as_str()))
            .collect()
    }
}

fn run(strategy: IndexStrategy, ops: &[Op]) -> Result<(), TestCaseError> {
    let store = store_with(strategy);
    let mut model = Model::default();

    for op in ops {
        match op {
            Op::Upsert(d, words) => {
                let id = format!("doc{}", d);
                let content = words.iter().map(|w| WORDS[*w]).collect::<Vec<_>>().join(" ");
                store.upsert(id.as_str(), Document::new(content.clone()));
                model.upsert(&id, content);
            }
            Op::Delete(d) => {
                let id = format!("doc{}", d);
                prop_assert_eq!(store.delete(&id).is_ok(), model.delete(&id));
            }
            Op::Restore(d) => {
                let id = format!("doc{}", d);
                prop_assert_eq!(store.restore(&id).is_ok(), model.restore(&id));
            }
        }

        assert_consistent(&store);
        let deleted: Vec<DocId> = model.retained.keys().map(|k| DocId::from(k.as_str())).collect();
        prop_assert_eq!(store.list_deleted(), deleted);
        for word in WORDS {
            prop_assert_eq!(store.search(word), model.search(word));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scan_store_matches_model(ops in prop::collection::vec(op(), 0..30)) {
        run(IndexStrategy::Scan, &ops)?;
    }

    #[test]
    fn reverse_map_store_matches_model(ops in prop::collection::vec(op(), 0..30)) {
        run(IndexStrategy::ReverseMap, &ops)?;
    }

    #[test]
    fn upsert_twice_equals_fresh(first in prop::collection::vec(0..WORDS.len(), 0..6),
                                 second in prop::collection::vec(0..WORDS.len(), 0..6)) {
        let join = |ws: &[usize]| ws.iter().map(|w| WORDS[*w]).collect::<Vec<_>>().join(" ");

        for strategy in STRATEGIES {
            let updated = store_with(strategy);
            updated.upsert("other", Document::new("alpha delta"));
            updated.upsert("doc", Document::new(join(&first)));
            updated.upsert("doc", Document::new(join(&second)));

            let fresh = store_with(strategy);
            fresh.upsert("other", Document::new("alpha delta"));
            fresh.upsert("doc", Document::new(join(&second)));

            prop_assert_eq!(index_snapshot(&updated), index_snapshot(&fresh));
        }
    }

    #[test]
    fn search_case_insensitive(word in "[a-zA-Z]{1,8}") {
        let store = store_with(IndexStrategy::Scan);
        store.upsert("doc", Document::new(format!("prefix {} suffix", word)));

        let upper = store.search(&word.to_uppercase());
        prop_assert_eq!(&upper, &store.search(&word.to_lowercase()));
        prop_assert_eq!(upper, ids(&["doc"]));
    }
}
