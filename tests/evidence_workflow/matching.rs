//! Ranking and early-exit behavior of the matcher.

use crate::test_utils::case_documents;
use caseproof::{find_matches, find_matches_default, EvidenceMatcher, SearchStatus};
use std::collections::BTreeMap;

#[test]
fn homebound_scenario_ranks_shorter_sentence_first() {
    let mut docs = BTreeMap::new();
    docs.insert(
        "doc1".to_string(),
        vec!["The patient is homebound. The patient needs skilled nursing care.".to_string()],
    );
    let m = find_matches(&docs, "homebound skilled", 5);
    assert_eq!(m.len(), 2);
    assert_eq!(m[0].text, "The patient is homebound.");
    assert_eq!(m[1].text, "The patient needs skilled nursing care.");
    assert!(m[0].score > m[1].score);
}

#[test]
fn empty_queries_return_nothing() {
    let docs = case_documents();
    for q in ["", "   ", "!!!"] {
        assert!(find_matches(&docs, q, 5).is_empty());
    }
}

#[test]
fn empty_document_mapping_returns_nothing() {
    assert!(find_matches(&BTreeMap::new(), "homebound", 5).is_empty());
}

#[test]
fn home_matches_inside_homebound() {
    let m = find_matches(&case_documents(), "home", 10);
    let texts: Vec<&str> = m.iter().map(|x| x.text.as_str()).collect();
    assert!(texts.contains(&"The patient is homebound."));
    assert!(texts.contains(&"Referral for home health services."));
}

#[test]
fn empty_page_does_not_stop_later_pages() {
    let m = find_matches(&case_documents(), "wound", 5);
    assert_eq!(m.len(), 1);
    assert_eq!(m[0].document, "oasis.pdf");
    assert_eq!(m[0].page, 3);
}

#[test]
fn top_k_one_returns_best() {
    let all = find_matches(&case_documents(), "skilled nursing", 10);
    assert!(all.len() >= 2);
    let best = find_matches(&case_documents(), "skilled nursing", 1);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0], all[0]);
}

#[test]
fn default_bound_is_five() {
    let m = find_matches_default(&case_documents(), "the patient care nursing home");
    assert!(m.len() <= 5);
}

#[test]
fn reason_codes_distinguish_empty_results() {
    let docs = case_documents();
    let matcher = EvidenceMatcher::new();
    let pairs = || docs.iter().map(|(k, v)| (k.as_str(), v.as_slice()));

    assert_eq!(matcher.search(pairs(), "?!", 5).status, SearchStatus::NoKeywords);
    let miss = matcher.search(pairs(), "zzzz", 5);
    assert_eq!(miss.status, SearchStatus::Searched);
    assert!(miss.matches.is_empty());
}
