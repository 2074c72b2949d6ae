//! Consistency between documents and index across mutations.

use crate::*;

fn seeded(strategy: IndexStrategy) -> DocumentStore {
    let store = store_with(strategy);
    store.upsert("doc1", doc("The quick brown fox"));
    store.upsert("doc2", doc("the lazy brown dog"));
    store.upsert("doc3", doc("Quick thinking, quick acting"));
    store
}

#[test]
fn every_active_token_is_indexed() {
    for strategy in STRATEGIES {
        let store = seeded(strategy);
        assert_eq!(store.lookup("brown"), ids(&["doc1", "doc2"]));
        assert_eq!(store.lookup("quick"), ids(&["doc1", "doc3"]));
        assert_eq!(store.lookup("thinking,"), ids(&["doc3"]));
        assert_consistent(&store);
    }
}

#[test]
fn update_equals_fresh_insert() {
    for strategy in STRATEGIES {
        let updated = seeded(strategy);
        updated.upsert("doc1", doc("A slow green turtle"));

        let fresh = store_with(strategy);
        fresh.upsert("doc2", doc("the lazy brown dog"));
        fresh.upsert("doc3", doc("Quick thinking, quick acting"));
        fresh.upsert("doc1", doc("A slow green turtle"));

        assert_eq!(index_snapshot(&updated), index_snapshot(&fresh));
        assert!(!updated.lookup("fox").contains(&DocId::from("doc1")));
        assert_consistent(&updated);
    }
}

#[test]
fn update_with_shrinking_content() {
    for store in all_stores() {
        store.upsert("doc1", doc("one two three four"));
        store.upsert("doc1", doc("two"));

        assert_eq!(store.indexed_terms(), vec!["two".to_string()]);
        assert_consistent(&store);
    }
}

#[test]
fn delete_clears_every_bucket() {
    for strategy in STRATEGIES {
        let store = seeded(strategy);
        store.delete("doc1").unwrap();

        for term in store.indexed_terms() {
            assert!(!store.lookup(&term).contains(&DocId::from("doc1")));
        }
        assert_eq!(store.lookup("brown"), ids(&["doc2"]));
        assert!(store.lookup("fox").is_empty());
        assert_consistent(&store);
    }
}

#[test]
fn restore_reproduces_index() {
    for strategy in STRATEGIES {
        let store = seeded(strategy);
        let before = index_snapshot(&store);

        store.delete("doc3").unwrap();
        assert_ne!(index_snapshot(&store), before);

        store.restore("doc3").unwrap();
        assert_eq!(index_snapshot(&store), before);
        assert_consistent(&store);
    }
}

#[test]
fn search_is_case_insensitive() {
    for strategy in STRATEGIES {
        let store = seeded(strategy);
        let lower = store.search("quick");
        assert_eq!(store.search("QUICK"), lower);
        assert_eq!(store.search("Quick"), lower);
        assert_eq!(lower, ids(&["doc1", "doc3"]));
    }
}

#[test]
fn search_folds_final_sigma() {
    for store in all_stores() {
        store.upsert("greek", doc("η οδοσ"));

        assert_eq!(store.search("οδοσ"), ids(&["greek"]));
        assert_eq!(store.search("ΟΔΟΣ"), ids(&["greek"]));
        assert_eq!(store.search("οδος"), ids(&["greek"]));
        assert_consistent(&store);
    }
}

#[test]
fn retained_and_active_stay_disjoint() {
    for strategy in STRATEGIES {
        let store = seeded(strategy);
        store.delete("doc2").unwrap();
        store.upsert("doc2", doc("brand new"));

        assert!(store.contains("doc2"));
        assert!(!store.is_deleted("doc2"));
        assert_consistent(&store);
    }
}

#[test]
fn search_never_duplicates() {
    for store in all_stores() {
        store.upsert("doc1", doc("echo echo ECHO Echo"));
        store.upsert("doc1", doc("echo echo"));
        assert_eq!(store.search("echo"), ids(&["doc1"]));
    }
}
