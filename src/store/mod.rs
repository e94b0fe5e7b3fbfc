//! The persistence collaborator, narrowed to what the core consumes.
//! Entities arrive as already-consistent snapshots for the duration of
//! one operation; locking and transactions belong to the real store
//! behind this trait.

pub mod memory;

pub use memory::MemoryStore;

use crate::links::{LinkTable, ShareTable};
use crate::model::candidate::Candidate;
use crate::model::saved_list::SavedList;
use crate::model::saved_search::{CandidateQuery, SavedSearch};
use crate::model::user::User;
use crate::types::{CandidateId, ListId, Page, PageRequest, SearchId, UserId};

pub trait RecordStore {
    fn candidate(&self, id: CandidateId) -> Option<&Candidate>;

    fn candidate_ids(&self) -> Vec<CandidateId>;

    fn saved_list(&self, id: ListId) -> Option<&SavedList>;

    fn saved_list_mut(&mut self, id: ListId) -> Option<&mut SavedList>;

    fn saved_lists(&self) -> Vec<&SavedList>;

    /// Persist a new list, assigning its id
    fn insert_saved_list(&mut self, list: SavedList) -> ListId;

    fn saved_search(&self, id: SearchId) -> Option<&SavedSearch>;

    fn saved_search_mut(&mut self, id: SearchId) -> Option<&mut SavedSearch>;

    fn saved_searches(&self) -> Vec<&SavedSearch>;

    fn user(&self, id: UserId) -> Option<&User>;

    /// Page of candidates matching the filter criteria, ordered by id
    fn search_candidates(&self, query: &CandidateQuery, page: PageRequest) -> Page<Candidate>;

    fn links(&self) -> &LinkTable;

    fn links_mut(&mut self) -> &mut LinkTable;

    fn shares(&self) -> &ShareTable;

    fn shares_mut(&mut self) -> &mut ShareTable;
}
