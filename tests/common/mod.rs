#![allow(dead_code)]

use candidate_catalog::model::candidate::{
    Candidate, CandidateReviewStatusItem, CandidateStatus, Gender, ReviewStatus,
};
use candidate_catalog::model::reference::Country;
use candidate_catalog::model::saved_list::SavedList;
use candidate_catalog::model::saved_search::SavedSearch;
use candidate_catalog::model::user::{Role, User};
use candidate_catalog::store::{MemoryStore, RecordStore};

pub const ADMIN: i64 = 1;
pub const CASE_WORKER: i64 = 2;
pub const VIEWER: i64 = 3;

pub const SHORTLIST_A: i64 = 10;
pub const SHORTLIST_B: i64 = 11;
pub const FIXED_LIST: i64 = 12;

pub const SEARCH: i64 = 20;

pub fn candidate(id: i64) -> Candidate {
    let mut c = Candidate::new(id, format!("CN{id:04}"));
    c.status = CandidateStatus::Active;
    c
}

/// Candidate with enough profile data to observe role-based suppression
pub fn profiled_candidate(id: i64) -> Candidate {
    let mut c = candidate(id);
    c.gender = Some(Gender::Female);
    c.phone = Some("+962-7-000-0000".into());
    c.whatsapp = Some("+962-7-000-0000".into());
    c.city = Some("Amman".into());
    c.year_of_arrival = Some(2015);
    c.country = Some(Country::new(100, "Jordan"));
    c.nationality = Some(Country::new(101, "Syria"));
    c.user = Some(User::new(50, "candidate.login", Role::User));
    c.candidate_review_status_items.push(CandidateReviewStatusItem {
        id: 900,
        review_status: ReviewStatus::Verified,
        comment: Some("looks complete".into()),
        saved_search_id: None,
    });
    c
}

pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_user(User::new(ADMIN, "admin", Role::Admin));
    store.insert_user(User::new(CASE_WORKER, "case.worker", Role::User));
    store.insert_user(User::new(VIEWER, "viewer", Role::Limited));

    store.insert_candidate(profiled_candidate(7));
    store.insert_candidate(candidate(42));
    store.insert_candidate(candidate(43));
    store.insert_candidate(candidate(44));

    store.insert_saved_list(SavedList::new(SHORTLIST_A, "Shortlist-A", CASE_WORKER));
    store.insert_saved_list(SavedList::new(SHORTLIST_B, "Shortlist-B", CASE_WORKER));

    let mut fixed = SavedList::new(FIXED_LIST, "Fixed intake", CASE_WORKER);
    fixed.details.fixed = true;
    store.insert_saved_list(fixed);

    store.insert_saved_search(SavedSearch::new(SEARCH, "Active in Amman", CASE_WORKER));

    store
}
