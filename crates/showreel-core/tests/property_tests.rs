//! Property-based tests for the portfolio document
//!
//! Uses proptest to check persistence round-trips and project id invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use showreel_core::{
    DocumentStore, MediaRef, MemoryStore, Mutation, PortfolioDocument, ProjectId, SessionHandle,
    Storage,
};
use tempfile::tempdir;

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,200}").expect("valid regex")
}

fn media_strategy() -> impl Strategy<Value = MediaRef> {
    prop_oneof![
        "[a-z]{3,10}\\.[a-z]{2,3}/[a-z0-9/]{0,20}"
            .prop_map(|u| MediaRef::durable(format!("https://{}", u))),
        Just(()).prop_map(|_| MediaRef::transient(SessionHandle::new())),
    ]
}

/// Edits that can be applied to a document
#[derive(Debug, Clone)]
enum DocOp {
    SetName(String),
    SetBio(String),
    SetLogo(Option<MediaRef>),
    Add(MediaRef),
    Remove(usize), // Index into existing projects
    Rename(usize, String),
}

fn doc_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<DocOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => text_strategy().prop_map(DocOp::SetName),
            1 => text_strategy().prop_map(DocOp::SetBio),
            1 => prop::option::of(media_strategy()).prop_map(DocOp::SetLogo),
            3 => media_strategy().prop_map(DocOp::Add),
            1 => (0..20usize).prop_map(DocOp::Remove),
            1 => ((0..20usize), text_strategy()).prop_map(|(i, t)| DocOp::Rename(i, t)),
        ],
        0..max_ops,
    )
}

fn to_mutation(doc: &PortfolioDocument, op: DocOp) -> Mutation {
    let id_at = |i: usize| {
        doc.projects
            .get(i)
            .map(|p| p.id.clone())
            .unwrap_or_else(|| ProjectId::from_raw(format!("missing-{}", i)))
    };
    match op {
        DocOp::SetName(v) => Mutation::SetName(v),
        DocOp::SetBio(v) => Mutation::SetBio(v),
        DocOp::SetLogo(v) => Mutation::SetLogo(v),
        DocOp::Add(url) => Mutation::AddProject { url },
        DocOp::Remove(i) => Mutation::RemoveProject { id: id_at(i) },
        DocOp::Rename(i, title) => Mutation::RenameProject { id: id_at(i), title },
    }
}

fn build(ops: Vec<DocOp>) -> PortfolioDocument {
    ops.into_iter().fold(PortfolioDocument::default(), |doc, op| {
        let m = to_mutation(&doc, op);
        doc.apply(m)
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whatever edits were made, what is saved is what loads
    #[test]
    fn memory_store_roundtrip(ops in doc_ops_strategy(30)) {
        let doc = build(ops);
        let store = MemoryStore::new();
        store.save(&doc).unwrap();
        prop_assert_eq!(store.load().unwrap().unwrap(), doc);
    }

    /// Project ids stay pairwise distinct through any edit sequence
    #[test]
    fn project_ids_unique(ops in doc_ops_strategy(60)) {
        let doc = build(ops);
        let ids: HashSet<_> = doc.projects.iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids.len(), doc.projects.len());
    }

    /// Removing an id that is not present changes nothing
    #[test]
    fn remove_absent_is_noop(ops in doc_ops_strategy(20), junk in "[A-Z]{1,12}") {
        let doc = build(ops);
        let id = ProjectId::from_raw(format!("absent-{}", junk));
        prop_assert_eq!(doc.apply(Mutation::RemoveProject { id }), doc);
    }

    /// Appending keeps the existing projects in place
    #[test]
    fn add_preserves_prefix(ops in doc_ops_strategy(20), url in media_strategy()) {
        let doc = build(ops);
        let next = doc.apply(Mutation::AddProject { url: url.clone() });
        prop_assert_eq!(next.projects.len(), doc.projects.len() + 1);
        prop_assert_eq!(&next.projects[..doc.projects.len()], &doc.projects[..]);
        prop_assert_eq!(&next.projects.last().unwrap().url, &url);
    }

    /// Name split never loses words
    #[test]
    fn name_split_covers_all_words(name in "[a-zA-Z ]{0,40}") {
        let doc = PortfolioDocument { name: name.clone(), ..Default::default() };
        let display = doc.display_name();
        let joined = format!("{} {}", display.first, display.rest);
        let expected: Vec<String> = name.split_whitespace().map(|w| w.to_uppercase()).collect();
        let got: Vec<&str> = joined.split_whitespace().collect();
        prop_assert_eq!(got, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Same round-trip through the on-disk store
    #[test]
    fn redb_store_roundtrip(ops in doc_ops_strategy(15)) {
        let doc = build(ops);
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("prop.redb")).unwrap();
        storage.save(&doc).unwrap();
        prop_assert_eq!(storage.load().unwrap().unwrap(), doc);
    }
}
