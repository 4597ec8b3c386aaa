//! Shared fixtures.

use std::collections::BTreeMap;

pub const OASIS_PAGES: &[&str] = &[
    "OASIS-E Start of Care. Patient: J. Doe.",
    "M1850 Transferring: requires assistance of one person. The patient is homebound.",
    "",
    "Skilled nursing needed for wound care and medication teaching.",
];

pub const REFERRAL_PAGES: &[&str] = &[
    "Referral for home health services. Face-to-face encounter completed on 03/02.",
    "Orders: skilled nursing 2w4, physical therapy eval.",
];

/// Name → pages mapping for the two fixture documents.
pub fn case_documents() -> BTreeMap<String, Vec<String>> {
    let mut docs = BTreeMap::new();
    docs.insert(
        "oasis.pdf".to_string(),
        OASIS_PAGES.iter().map(|p| p.to_string()).collect(),
    );
    docs.insert(
        "referral.pdf".to_string(),
        REFERRAL_PAGES.iter().map(|p| p.to_string()).collect(),
    );
    docs
}
