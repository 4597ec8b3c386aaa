//! Integration tests for the document store over file-backed sources.

use caseproof_core::{AppConfig, PageTexts};
use caseproof_ingest::{document_name, DocumentStore, FormFeedTextSource};
use caseproof_search::SearchStatus;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const OASIS: &str = "OASIS-E Start of Care assessment.\x0c\
M1850 Transferring: patient requires assistance. Patient is homebound due to dyspnea.\x0c\
\x0c\
Skilled nursing needed for medication management.\x0c";

const REFERRAL: &str = "Referral from Dr. Lee. Face-to-face encounter dated 03/02.\x0c\
Orders: skilled nursing and physical therapy.\x0c";

fn write_docs(dir: &TempDir) -> Vec<std::path::PathBuf> {
    let oasis = dir.path().join("oasis.txt");
    let referral = dir.path().join("referral.txt");
    fs::write(&oasis, OASIS).unwrap();
    fs::write(&referral, REFERRAL).unwrap();
    vec![oasis, referral]
}

fn load(paths: &[std::path::PathBuf], config: &AppConfig) -> DocumentStore {
    let store = DocumentStore::from_config(config);
    for path in paths {
        let source = FormFeedTextSource::open(path).unwrap();
        store.insert_source(document_name(path), Arc::new(source)).unwrap();
    }
    store
}

#[test]
fn test_search_across_files() {
    let dir = TempDir::new().unwrap();
    let store = load(&write_docs(&dir), &AppConfig::default());

    assert_eq!(store.names(), vec!["oasis.txt", "referral.txt"]);
    assert_eq!(
        store.get("oasis.txt").unwrap().pages,
        PageTexts::Pending { page_count: 4 }
    );

    let out = store.search("skilled nursing", 5);
    assert_eq!(out.status, SearchStatus::Searched);
    assert_eq!(out.matches.len(), 2);
    // Both units have 6 words and 2 hits; the tie goes to the document name
    assert_eq!(out.matches[0].document, "oasis.txt");
    assert_eq!(out.matches[0].page, 3);
    assert_eq!(out.matches[0].score, 2.0 / 7.0);
    assert_eq!(out.matches[1].document, "referral.txt");
    assert_eq!(out.matches[1].page, 1);
    assert_eq!(out.matches[1].text, "Orders: skilled nursing and physical therapy.");
}

#[test]
fn test_empty_page_skipped_in_file() {
    let dir = TempDir::new().unwrap();
    let store = load(&write_docs(&dir), &AppConfig::default());
    let out = store.search("homebound", 5);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].page, 1);
    assert_eq!(out.matches[0].text, "Patient is homebound due to dyspnea.");
    let doc = store.get("oasis.txt").unwrap();
    assert_eq!(doc.page_texts().unwrap()[2], "");
}

#[test]
fn test_config_limits_bound_search() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::from_toml_str("[limits]\nmax_pages_per_document = 1\n").unwrap();
    let store = load(&write_docs(&dir), &config);
    let out = store.search("skilled", 5);
    assert_eq!(out.status, SearchStatus::Searched);
    assert!(out.matches.is_empty());
}

#[test]
fn test_concurrent_searches_and_inserts() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(load(&write_docs(&dir), &AppConfig::default()));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..20 {
                    let out = store.search("homebound", 5);
                    assert!(!out.matches.is_empty());
                    assert!(out.matches.len() <= 5);
                }
            })
        })
        .collect();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..20 {
                store
                    .insert_extracted(format!("note{}.txt", i), ["Homebound per nursing note."])
                    .unwrap();
            }
        })
    };

    for r in readers {
        r.join().unwrap();
    }
    writer.join().unwrap();
    assert_eq!(store.len(), 22);
}
