use std::collections::BTreeMap;

use crate::links::{LinkTable, ShareTable};
use crate::model::candidate::Candidate;
use crate::model::saved_list::SavedList;
use crate::model::saved_search::{CandidateQuery, SavedSearch};
use crate::model::user::User;
use crate::store::RecordStore;
use crate::types::{CandidateId, ListId, Page, PageRequest, SearchId, UserId};

/// BTreeMap-backed store with deterministic iteration order. Used by the
/// test suites and by embedders that keep the whole graph in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    candidates: BTreeMap<CandidateId, Candidate>,
    saved_lists: BTreeMap<ListId, SavedList>,
    saved_searches: BTreeMap<SearchId, SavedSearch>,
    users: BTreeMap<UserId, User>,
    links: LinkTable,
    shares: ShareTable,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_candidate(&mut self, candidate: Candidate) {
        self.candidates.insert(candidate.id, candidate);
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn insert_saved_search(&mut self, search: SavedSearch) {
        self.saved_searches.insert(search.id, search);
    }

    fn next_list_id(&self) -> ListId {
        self.saved_lists.keys().next_back().copied().unwrap_or(0) + 1
    }
}

impl RecordStore for MemoryStore {
    fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(&id)
    }

    fn candidate_ids(&self) -> Vec<CandidateId> {
        self.candidates.keys().copied().collect()
    }

    fn saved_list(&self, id: ListId) -> Option<&SavedList> {
        self.saved_lists.get(&id)
    }

    fn saved_list_mut(&mut self, id: ListId) -> Option<&mut SavedList> {
        self.saved_lists.get_mut(&id)
    }

    fn saved_lists(&self) -> Vec<&SavedList> {
        self.saved_lists.values().collect()
    }

    fn insert_saved_list(&mut self, mut list: SavedList) -> ListId {
        if list.id <= 0 {
            list.id = self.next_list_id();
        }
        let id = list.id;
        self.saved_lists.insert(id, list);
        id
    }

    fn saved_search(&self, id: SearchId) -> Option<&SavedSearch> {
        self.saved_searches.get(&id)
    }

    fn saved_search_mut(&mut self, id: SearchId) -> Option<&mut SavedSearch> {
        self.saved_searches.get_mut(&id)
    }

    fn saved_searches(&self) -> Vec<&SavedSearch> {
        self.saved_searches.values().collect()
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    fn search_candidates(&self, query: &CandidateQuery, page: PageRequest) -> Page<Candidate> {
        let matched: Vec<Candidate> =
            self.candidates.values().filter(|c| query.matches(c)).cloned().collect();
        Page::from_complete(matched, page)
    }

    fn links(&self) -> &LinkTable {
        &self.links
    }

    fn links_mut(&mut self) -> &mut LinkTable {
        &mut self.links
    }

    fn shares(&self) -> &ShareTable {
        &self.shares
    }

    fn shares_mut(&mut self) -> &mut ShareTable {
        &mut self.shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_saved_list_assigns_monotonic_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert_saved_list(SavedList::new(0, "one", 1));
        let b = store.insert_saved_list(SavedList::new(0, "two", 1));
        assert_eq!(a, 1);
        assert_eq!(b, 2);

        // Explicit ids are kept as-is
        let c = store.insert_saved_list(SavedList::new(10, "ten", 1));
        assert_eq!(c, 10);
        assert_eq!(store.insert_saved_list(SavedList::new(0, "next", 1)), 11);
    }

    #[test]
    fn search_candidates_pages_matches_by_id() {
        let mut store = MemoryStore::new();
        for id in 1..=5 {
            store.insert_candidate(Candidate::new(id, format!("CN{id}")));
        }

        let page =
            store.search_candidates(&CandidateQuery::default(), PageRequest::new(1, 2));
        let ids: Vec<_> = page.content.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 3);
    }
}
