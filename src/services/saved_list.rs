//! Bulk membership operations on saved lists.
//!
//! Every operation resolves and validates all of its inputs before it
//! touches the link table, so a failing call never leaves a partial set
//! of pairings behind.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::CatalogError;
use crate::model::saved_list::SavedList;
use crate::model::source::SourceStatus;
use crate::model::user::{Role, User};
use crate::store::RecordStore;
use crate::types::{CandidateId, ListId, UserId};

fn resolve_actor<S: RecordStore>(store: &S, actor: UserId) -> Result<&User, CatalogError> {
    store.user(actor).ok_or(CatalogError::NotFound { kind: "user", id: actor })
}

// Soft-deleted lists are invisible to membership operations.
fn resolve_list<S: RecordStore>(store: &S, list: ListId) -> Result<&SavedList, CatalogError> {
    store
        .saved_list(list)
        .filter(|l| l.details.status != SourceStatus::Deleted)
        .ok_or(CatalogError::NotFound { kind: "saved list", id: list })
}

fn check_modifiable(list: &SavedList, actor: &User) -> Result<(), CatalogError> {
    if list.details.fixed && list.details.created_by != actor.id && actor.role != Role::Admin {
        return Err(CatalogError::Authorization {
            user: actor.id,
            kind: "saved list",
            name: list.details.name.clone(),
        });
    }
    Ok(())
}

fn resolve_candidates<S: RecordStore>(
    store: &S,
    ids: &[CandidateId],
) -> Result<(), CatalogError> {
    for &id in ids {
        if id <= 0 {
            return Err(CatalogError::validation(format!("candidate id {id} is not valid")));
        }
        if store.candidate(id).is_none() {
            return Err(CatalogError::NotFound { kind: "candidate", id });
        }
    }
    Ok(())
}

/// Add candidates to a list, creating a pairing for each candidate not
/// already present. When `source_list` is given, the candidate's context
/// note on that list is copied into each newly created pairing; existing
/// pairings are never touched, so re-adding neither duplicates the pair
/// nor overwrites its note. Returns the number of pairings created.
pub fn add_candidates<S: RecordStore>(
    store: &mut S,
    actor: UserId,
    list: ListId,
    candidate_ids: &[CandidateId],
    source_list: Option<ListId>,
) -> Result<usize, CatalogError> {
    let actor = resolve_actor(store, actor)?;
    let target = resolve_list(store, list)?;
    check_modifiable(target, actor)?;
    if let Some(source) = source_list {
        resolve_list(store, source)?;
    }
    resolve_candidates(store, candidate_ids)?;

    let mut added = 0;
    for &candidate in candidate_ids {
        if store.links().is_linked(candidate, list) {
            continue;
        }
        let note = source_list
            .and_then(|source| store.links().context_note(candidate, source))
            .map(str::to_owned);
        store.links_mut().link(candidate, list, note);
        added += 1;
    }

    debug!(list, added, "added candidates to saved list");
    Ok(added)
}

/// Add the missing pairings from the given id set; existing pairings and
/// their context notes are left untouched. Idempotent.
pub fn merge<S: RecordStore>(
    store: &mut S,
    actor: UserId,
    list: ListId,
    candidate_ids: &[CandidateId],
) -> Result<usize, CatalogError> {
    add_candidates(store, actor, list, candidate_ids, None)
}

/// Make the list's pairing set exactly `candidate_ids`. Pairings outside
/// the new set are removed; surviving pairings keep their context notes.
/// `None` or an empty set clears the list entirely.
pub fn replace<S: RecordStore>(
    store: &mut S,
    actor: UserId,
    list: ListId,
    candidate_ids: Option<&[CandidateId]>,
) -> Result<(), CatalogError> {
    let ids = candidate_ids.unwrap_or_default();
    let actor = resolve_actor(store, actor)?;
    let target = resolve_list(store, list)?;
    check_modifiable(target, actor)?;
    resolve_candidates(store, ids)?;

    let wanted: BTreeSet<CandidateId> = ids.iter().copied().collect();
    for candidate in store.links().candidates_of(list) {
        if !wanted.contains(&candidate) {
            store.links_mut().unlink(candidate, list);
        }
    }
    for &candidate in &wanted {
        store.links_mut().link(candidate, list, None);
    }

    debug!(list, count = wanted.len(), "replaced saved list contents");
    Ok(())
}

/// Remove exactly the named pairings. A pairing that does not exist is
/// skipped, not an error. Returns the number of pairings removed.
pub fn remove<S: RecordStore>(
    store: &mut S,
    actor: UserId,
    list: ListId,
    candidate_ids: &[CandidateId],
) -> Result<usize, CatalogError> {
    let actor = resolve_actor(store, actor)?;
    let target = resolve_list(store, list)?;
    check_modifiable(target, actor)?;
    resolve_candidates(store, candidate_ids)?;

    let mut removed = 0;
    for &candidate in candidate_ids {
        if store.links_mut().unlink(candidate, list) {
            removed += 1;
        }
    }

    debug!(list, removed, "removed candidates from saved list");
    Ok(removed)
}

/// Context note of the pairing between this candidate and list; None when
/// no pairing exists or no note was set.
pub fn context_note<S: RecordStore>(
    store: &S,
    candidate: CandidateId,
    list: ListId,
) -> Result<Option<String>, CatalogError> {
    store
        .candidate(candidate)
        .ok_or(CatalogError::NotFound { kind: "candidate", id: candidate })?;
    resolve_list(store, list)?;
    Ok(store.links().context_note(candidate, list).map(str::to_owned))
}
