//! Selection lists: the hidden saved list recording which results of one
//! saved search a particular user has selected.

use tracing::debug;

use crate::error::CatalogError;
use crate::model::saved_list::SavedList;
use crate::store::RecordStore;
use crate::types::{ListId, SearchId, UserId};

/// Return the selection list for this (user, search) pair, creating it on
/// first use. At most one such list exists per pair; repeated calls hand
/// back the same list.
pub fn selection_list<S: RecordStore>(
    store: &mut S,
    user: UserId,
    search: SearchId,
) -> Result<ListId, CatalogError> {
    store.user(user).ok_or(CatalogError::NotFound { kind: "user", id: user })?;
    let search_entity = store
        .saved_search(search)
        .ok_or(CatalogError::NotFound { kind: "saved search", id: search })?;

    if let Some(existing) = store
        .saved_lists()
        .into_iter()
        .find(|list| list.saved_search_id == Some(search) && list.details.created_by == user)
    {
        return Ok(existing.id);
    }

    let name = format!("{}-selection-{}", search_entity.details.name, user);
    let mut list = SavedList::new(0, name, user);
    list.details.fixed = true;
    list.saved_search_id = Some(search);

    let id = store.insert_saved_list(list);
    debug!(user, search, list = id, "created selection list");
    Ok(id)
}
