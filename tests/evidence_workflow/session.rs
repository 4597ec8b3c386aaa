//! Store-backed sessions.

use crate::test_utils::{OASIS_PAGES, REFERRAL_PAGES};
use caseproof::{
    document_name, format_evidence, AppConfig, DocumentStore, FormFeedTextSource, InMemorySource,
    PageTexts,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn uploads_are_extracted_on_first_search() {
    let store = DocumentStore::new();
    store
        .insert_source("oasis.pdf", Arc::new(InMemorySource::new(OASIS_PAGES.iter().copied())))
        .unwrap();
    store
        .insert_source("referral.pdf", Arc::new(InMemorySource::new(REFERRAL_PAGES.iter().copied())))
        .unwrap();
    assert!(matches!(
        store.get("oasis.pdf").unwrap().pages,
        PageTexts::Pending { page_count: 4 }
    ));

    let out = store.search("face encounter", 5);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(
        format_evidence(&out.matches),
        "[1] referral.pdf p.1: Face-to-face encounter completed on 03/02.\n"
    );
    assert!(store.get("oasis.pdf").unwrap().pages.is_extracted());
}

#[test]
fn file_backed_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("oasis.txt");
    std::fs::write(&path, OASIS_PAGES.join("\x0c")).unwrap();

    let store = DocumentStore::from_config(&AppConfig::default());
    let source = FormFeedTextSource::open(&path).unwrap();
    store.insert_source(document_name(&path), Arc::new(source)).unwrap();

    let out = store.search("homebound", 5);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].document, "oasis.txt");
    assert_eq!(out.matches[0].page, 1);
}

#[test]
fn removed_document_no_longer_matches() {
    let store = DocumentStore::new();
    store.insert_extracted("referral.pdf", REFERRAL_PAGES.iter().copied()).unwrap();
    assert!(!store.search("therapy", 5).matches.is_empty());
    store.remove("referral.pdf").unwrap();
    assert!(store.search("therapy", 5).matches.is_empty());
}
