//! Saved-search execution against the record store, including composed
//! child searches.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::CatalogError;
use crate::model::candidate::Candidate;
use crate::model::saved_search::SearchJoinType;
use crate::store::RecordStore;
use crate::types::{CandidateId, Page, PageRequest, SearchId};

/// Run a saved search, folding each child join over its own evaluation,
/// and page the combined result ordered by candidate id.
pub fn run_search<S: RecordStore>(
    store: &S,
    search: SearchId,
    page: PageRequest,
) -> Result<Page<Candidate>, CatalogError> {
    let mut visited = BTreeSet::new();
    let ids = matching_ids(store, search, &mut visited)?;

    // BTreeSet iteration keeps the id ordering the page contract promises
    let matched: Vec<Candidate> =
        ids.iter().filter_map(|id| store.candidate(*id)).cloned().collect();

    debug!(search, matches = matched.len(), "ran saved search");
    Ok(Page::from_complete(matched, page))
}

// A search revisited through a join cycle contributes its base query
// only, so composition always terminates.
fn matching_ids<S: RecordStore>(
    store: &S,
    search: SearchId,
    visited: &mut BTreeSet<SearchId>,
) -> Result<BTreeSet<CandidateId>, CatalogError> {
    let entity = store
        .saved_search(search)
        .ok_or(CatalogError::NotFound { kind: "saved search", id: search })?;

    let mut ids: BTreeSet<CandidateId> = store
        .candidate_ids()
        .into_iter()
        .filter(|id| {
            store.candidate(*id).is_some_and(|candidate| entity.query.matches(candidate))
        })
        .collect();

    if !visited.insert(search) {
        return Ok(ids);
    }

    for join in &entity.search_joins {
        let child = matching_ids(store, join.child_search_id, visited)?;
        match join.join_type {
            SearchJoinType::And => ids.retain(|id| child.contains(id)),
            SearchJoinType::Or => ids.extend(child),
        }
    }

    Ok(ids)
}
