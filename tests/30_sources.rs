mod common;

use anyhow::Result;

use candidate_catalog::error::CatalogError;
use candidate_catalog::model::candidate::{CandidateStatus, Gender};
use candidate_catalog::model::saved_search::{SavedSearch, SearchJoin, SearchJoinType};
use candidate_catalog::model::source::CandidateSource;
use candidate_catalog::services::{search, selection, sharing};
use candidate_catalog::store::RecordStore;
use candidate_catalog::types::{PageRequest, SourceRef};

use common::{ADMIN, CASE_WORKER, SEARCH, SHORTLIST_A, SHORTLIST_B, VIEWER};

#[test]
fn sharing_updates_both_sides_together() -> Result<()> {
    let mut store = common::seeded_store();
    let list = SourceRef::list(SHORTLIST_A);

    let shared = sharing::share_with(&mut store, list, &[VIEWER, ADMIN])?;
    assert_eq!(shared, 2);

    assert_eq!(store.shares().users_of(list), vec![ADMIN, VIEWER]);
    assert!(store.shares().sources_of(VIEWER).contains(&list));
    assert!(store.shares().is_consistent());

    // Re-sharing is a no-op, not a duplicate
    assert_eq!(sharing::share_with(&mut store, list, &[VIEWER])?, 0);

    assert!(sharing::unshare(&mut store, list, VIEWER)?);
    assert!(!sharing::unshare(&mut store, list, VIEWER)?);
    assert!(store.shares().sources_of(VIEWER).is_empty());
    assert!(store.shares().is_consistent());
    Ok(())
}

#[test]
fn sharing_with_an_unknown_user_shares_nothing() {
    let mut store = common::seeded_store();
    let list = SourceRef::list(SHORTLIST_A);

    let err = sharing::share_with(&mut store, list, &[VIEWER, 999]).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: "user", id: 999 }));
    assert!(store.shares().users_of(list).is_empty());
}

#[test]
fn unknown_source_is_reported_by_kind() {
    let mut store = common::seeded_store();

    let err = sharing::share_with(&mut store, SourceRef::search(555), &[VIEWER]).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: "saved search", id: 555 }));
}

#[test]
fn visibility_covers_global_owned_shared_and_watched() -> Result<()> {
    let mut store = common::seeded_store();

    // VIEWER owns nothing; grant one source through each channel
    store.saved_list_mut(SHORTLIST_A).unwrap().details.global = true;
    sharing::share_with(&mut store, SourceRef::list(SHORTLIST_B), &[VIEWER])?;
    store.saved_search_mut(SEARCH).unwrap().details.add_watcher(VIEWER);

    let visible = sharing::visible_sources(&store, VIEWER)?;
    assert_eq!(
        visible,
        vec![
            SourceRef::list(SHORTLIST_A),
            SourceRef::list(SHORTLIST_B),
            SourceRef::search(SEARCH),
        ]
    );

    // The owner sees everything they created
    let visible = sharing::visible_sources(&store, CASE_WORKER)?;
    assert_eq!(visible.len(), 4);
    Ok(())
}

#[test]
fn deleted_sources_are_never_visible() -> Result<()> {
    let mut store = common::seeded_store();
    store.saved_list_mut(SHORTLIST_A).unwrap().details.global = true;
    store.saved_list_mut(SHORTLIST_A).unwrap().details.mark_deleted();

    let visible = sharing::visible_sources(&store, VIEWER)?;
    assert!(visible.is_empty());

    let err = sharing::share_with(&mut store, SourceRef::list(SHORTLIST_A), &[VIEWER]).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: "saved list", .. }));
    Ok(())
}

#[test]
fn selection_list_is_created_once_per_user_and_search() -> Result<()> {
    let mut store = common::seeded_store();

    let first = selection::selection_list(&mut store, CASE_WORKER, SEARCH)?;
    let second = selection::selection_list(&mut store, CASE_WORKER, SEARCH)?;
    assert_eq!(first, second);

    let list = store.saved_list(first).unwrap();
    assert!(list.is_selection_list());
    assert_eq!(list.saved_search_id, Some(SEARCH));
    assert!(list.details.fixed);
    assert!(!list.details.global);
    assert_eq!(list.details.created_by, CASE_WORKER);
    assert_eq!(list.details.name, format!("Active in Amman-selection-{CASE_WORKER}"));

    // A different user gets their own selection list
    let other = selection::selection_list(&mut store, ADMIN, SEARCH)?;
    assert_ne!(first, other);
    Ok(())
}

#[test]
fn selection_list_requires_resolvable_ids() {
    let mut store = common::seeded_store();

    let err = selection::selection_list(&mut store, 999, SEARCH).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: "user", .. }));

    let err = selection::selection_list(&mut store, CASE_WORKER, 999).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: "saved search", .. }));
}

#[test]
fn run_search_applies_the_base_query() -> Result<()> {
    let mut store = common::seeded_store();
    store.saved_search_mut(SEARCH).unwrap().query.gender = Some(Gender::Female);

    let page = search::run_search(&store, SEARCH, PageRequest::default())?;
    let ids: Vec<_> = page.content.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7]); // only the profiled candidate has a gender
    assert_eq!(page.total_elements, 1);
    Ok(())
}

#[test]
fn search_joins_compose_with_and_or_semantics() -> Result<()> {
    let mut store = common::seeded_store();

    // Base: everyone. Child 21: candidates from 2015. Child 22: id keyword.
    let mut by_year = SavedSearch::new(21, "arrived 2015", CASE_WORKER);
    by_year.query.min_year_of_arrival = Some(2015);
    store.insert_saved_search(by_year);

    let mut by_number = SavedSearch::new(22, "number match", CASE_WORKER);
    by_number.query.keyword = Some("cn0042".into());
    store.insert_saved_search(by_number);

    store.saved_search_mut(SEARCH).unwrap().search_joins.push(SearchJoin {
        child_search_id: 21,
        join_type: SearchJoinType::And,
    });

    let page = search::run_search(&store, SEARCH, PageRequest::default())?;
    let ids: Vec<_> = page.content.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7]);

    store.saved_search_mut(SEARCH).unwrap().search_joins.push(SearchJoin {
        child_search_id: 22,
        join_type: SearchJoinType::Or,
    });

    let page = search::run_search(&store, SEARCH, PageRequest::default())?;
    let ids: Vec<_> = page.content.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7, 42]);
    Ok(())
}

#[test]
fn cyclic_search_joins_terminate() -> Result<()> {
    let mut store = common::seeded_store();

    let mut other = SavedSearch::new(23, "cycle partner", CASE_WORKER);
    other.query.statuses = vec![CandidateStatus::Active];
    other
        .search_joins
        .push(SearchJoin { child_search_id: SEARCH, join_type: SearchJoinType::And });
    store.insert_saved_search(other);

    store
        .saved_search_mut(SEARCH)
        .unwrap()
        .search_joins
        .push(SearchJoin { child_search_id: 23, join_type: SearchJoinType::And });

    let page = search::run_search(&store, SEARCH, PageRequest::default())?;
    assert_eq!(page.total_elements, 4);
    Ok(())
}

#[test]
fn source_trait_exposes_a_typed_reference() {
    let store = common::seeded_store();

    let list = store.saved_list(SHORTLIST_A).unwrap();
    assert_eq!(list.source_ref(), SourceRef::list(SHORTLIST_A));

    let search = store.saved_search(SEARCH).unwrap();
    assert_eq!(search.source_ref(), SourceRef::search(SEARCH));
}
