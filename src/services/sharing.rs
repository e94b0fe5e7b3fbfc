//! Sharing and visibility of candidate sources.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::CatalogError;
use crate::model::source::{SourceDetails, SourceStatus};
use crate::store::RecordStore;
use crate::types::{SourceKind, SourceRef, UserId};

fn resolve_details<S: RecordStore>(
    store: &S,
    source: SourceRef,
) -> Result<&SourceDetails, CatalogError> {
    let details = match source.kind {
        SourceKind::List => store.saved_list(source.id).map(|l| &l.details),
        SourceKind::Search => store.saved_search(source.id).map(|s| &s.details),
    };
    details
        .filter(|d| d.status != SourceStatus::Deleted)
        .ok_or(CatalogError::NotFound { kind: source.kind.name(), id: source.id })
}

fn resolve_users<S: RecordStore>(store: &S, user_ids: &[UserId]) -> Result<(), CatalogError> {
    for &id in user_ids {
        if store.user(id).is_none() {
            return Err(CatalogError::NotFound { kind: "user", id });
        }
    }
    Ok(())
}

/// Share the source with each of the given users. Both sides of the
/// relationship move together; users already shared with are skipped.
/// Returns the number of new shares.
pub fn share_with<S: RecordStore>(
    store: &mut S,
    source: SourceRef,
    user_ids: &[UserId],
) -> Result<usize, CatalogError> {
    resolve_details(store, source)?;
    resolve_users(store, user_ids)?;

    let mut shared = 0;
    for &user in user_ids {
        if store.shares_mut().share(source, user) {
            shared += 1;
        }
    }

    debug!(?source, shared, "shared source with users");
    Ok(shared)
}

/// Stop sharing the source with the user. False when it was not shared.
pub fn unshare<S: RecordStore>(
    store: &mut S,
    source: SourceRef,
    user: UserId,
) -> Result<bool, CatalogError> {
    resolve_details(store, source)?;
    resolve_users(store, &[user])?;
    Ok(store.shares_mut().unshare(source, user))
}

/// Every non-deleted source the user can see: global sources, sources
/// they own, sources shared with them, and sources they watch. Ordered
/// and duplicate-free.
pub fn visible_sources<S: RecordStore>(
    store: &S,
    user: UserId,
) -> Result<Vec<SourceRef>, CatalogError> {
    resolve_users(store, &[user])?;

    let mut visible: BTreeSet<SourceRef> = BTreeSet::new();

    let mut consider = |source: SourceRef, details: &SourceDetails| {
        if details.status == SourceStatus::Deleted {
            return;
        }
        if details.global
            || details.created_by == user
            || details.is_watching(user)
            || store.shares().is_shared_with(source, user)
        {
            visible.insert(source);
        }
    };

    for list in store.saved_lists() {
        consider(SourceRef::list(list.id), &list.details);
    }
    for search in store.saved_searches() {
        consider(SourceRef::search(search.id), &search.details);
    }

    Ok(visible.into_iter().collect())
}
