use std::collections::{BTreeMap, BTreeSet};

use crate::types::{CandidateId, ListId, SourceRef, UserId};

/// One row of the candidate<->saved-list join relationship.
///
/// The context note belongs to the pairing, not to either entity: it is
/// only visible when the candidate is viewed through that particular list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub context_note: Option<String>,
}

/// In-memory join table for the candidate<->saved-list relationship.
///
/// This is the only way the relationship is mutated; both directional
/// indexes are maintained inside `link`/`unlink`, so a caller can never
/// leave one side stale. Uniqueness of a pairing is structural: the map
/// is keyed by the (candidate, list) composite.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    pairs: BTreeMap<(CandidateId, ListId), Pairing>,
    by_candidate: BTreeMap<CandidateId, BTreeSet<ListId>>,
    by_list: BTreeMap<ListId, BTreeSet<CandidateId>>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the pairing if absent. Returns false and leaves the existing
    /// pairing (including its context note) untouched when already linked.
    pub fn link(
        &mut self,
        candidate: CandidateId,
        list: ListId,
        context_note: Option<String>,
    ) -> bool {
        if self.pairs.contains_key(&(candidate, list)) {
            return false;
        }
        self.pairs.insert((candidate, list), Pairing { context_note });
        self.by_candidate.entry(candidate).or_default().insert(list);
        self.by_list.entry(list).or_default().insert(candidate);
        true
    }

    /// Remove the pairing. Removing a non-existent pairing is a no-op.
    pub fn unlink(&mut self, candidate: CandidateId, list: ListId) -> bool {
        if self.pairs.remove(&(candidate, list)).is_none() {
            return false;
        }
        if let Some(lists) = self.by_candidate.get_mut(&candidate) {
            lists.remove(&list);
            if lists.is_empty() {
                self.by_candidate.remove(&candidate);
            }
        }
        if let Some(candidates) = self.by_list.get_mut(&list) {
            candidates.remove(&candidate);
            if candidates.is_empty() {
                self.by_list.remove(&list);
            }
        }
        true
    }

    /// Drop every pairing of one list
    pub fn clear_list(&mut self, list: ListId) {
        for candidate in self.candidates_of(list) {
            self.unlink(candidate, list);
        }
    }

    pub fn is_linked(&self, candidate: CandidateId, list: ListId) -> bool {
        self.pairs.contains_key(&(candidate, list))
    }

    pub fn lists_of(&self, candidate: CandidateId) -> Vec<ListId> {
        self.by_candidate.get(&candidate).map(|s| s.iter().copied().collect()).unwrap_or_default()
    }

    pub fn candidates_of(&self, list: ListId) -> Vec<CandidateId> {
        self.by_list.get(&list).map(|s| s.iter().copied().collect()).unwrap_or_default()
    }

    /// Note on this specific pairing, if the pairing exists and one was set
    pub fn context_note(&self, candidate: CandidateId, list: ListId) -> Option<&str> {
        self.pairs.get(&(candidate, list)).and_then(|p| p.context_note.as_deref())
    }

    /// Replace the note on an existing pairing. False when unpaired.
    pub fn set_context_note(
        &mut self,
        candidate: CandidateId,
        list: ListId,
        note: Option<String>,
    ) -> bool {
        match self.pairs.get_mut(&(candidate, list)) {
            Some(pairing) => {
                pairing.context_note = note;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (CandidateId, ListId)> + '_ {
        self.pairs.keys().copied()
    }

    /// Both directional indexes agree with the pair map
    pub fn is_consistent(&self) -> bool {
        let from_pairs: BTreeSet<_> = self.pairs.keys().copied().collect();
        let from_candidates: BTreeSet<_> = self
            .by_candidate
            .iter()
            .flat_map(|(c, lists)| lists.iter().map(move |l| (*c, *l)))
            .collect();
        let from_lists: BTreeSet<_> = self
            .by_list
            .iter()
            .flat_map(|(l, candidates)| candidates.iter().map(move |c| (*c, *l)))
            .collect();
        from_pairs == from_candidates && from_pairs == from_lists
    }
}

/// In-memory join table for the source<->user sharing relationship.
///
/// Same discipline as [`LinkTable`]: one entry point per direction of
/// mutation, both indexes updated together, duplicate-free by key.
#[derive(Debug, Clone, Default)]
pub struct ShareTable {
    by_source: BTreeMap<SourceRef, BTreeSet<UserId>>,
    by_user: BTreeMap<UserId, BTreeSet<SourceRef>>,
}

impl ShareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share the source with the user. False when already shared.
    pub fn share(&mut self, source: SourceRef, user: UserId) -> bool {
        let added = self.by_source.entry(source).or_default().insert(user);
        if added {
            self.by_user.entry(user).or_default().insert(source);
        }
        added
    }

    /// Stop sharing. False (no-op) when not currently shared.
    pub fn unshare(&mut self, source: SourceRef, user: UserId) -> bool {
        let removed = match self.by_source.get_mut(&source) {
            Some(users) => users.remove(&user),
            None => false,
        };
        if removed {
            if let Some(sources) = self.by_user.get_mut(&user) {
                sources.remove(&source);
                if sources.is_empty() {
                    self.by_user.remove(&user);
                }
            }
            if self.by_source.get(&source).is_some_and(BTreeSet::is_empty) {
                self.by_source.remove(&source);
            }
        }
        removed
    }

    pub fn is_shared_with(&self, source: SourceRef, user: UserId) -> bool {
        self.by_source.get(&source).is_some_and(|users| users.contains(&user))
    }

    pub fn users_of(&self, source: SourceRef) -> Vec<UserId> {
        self.by_source.get(&source).map(|s| s.iter().copied().collect()).unwrap_or_default()
    }

    pub fn sources_of(&self, user: UserId) -> Vec<SourceRef> {
        self.by_user.get(&user).map(|s| s.iter().copied().collect()).unwrap_or_default()
    }

    pub fn is_consistent(&self) -> bool {
        let forward: BTreeSet<_> = self
            .by_source
            .iter()
            .flat_map(|(s, users)| users.iter().map(move |u| (*s, *u)))
            .collect();
        let backward: BTreeSet<_> = self
            .by_user
            .iter()
            .flat_map(|(u, sources)| sources.iter().map(move |s| (*s, *u)))
            .collect();
        forward == backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceKind;

    #[test]
    fn link_is_idempotent_and_keeps_the_first_note() {
        let mut links = LinkTable::new();
        assert!(links.link(1, 10, Some("first".into())));
        assert!(!links.link(1, 10, Some("second".into())));
        assert_eq!(links.context_note(1, 10), Some("first"));
        assert_eq!(links.len(), 1);
        assert!(links.is_consistent());
    }

    #[test]
    fn unlink_missing_pairing_is_a_noop() {
        let mut links = LinkTable::new();
        assert!(!links.unlink(1, 10));
        links.link(1, 10, None);
        assert!(links.unlink(1, 10));
        assert!(links.is_empty());
        assert!(links.is_consistent());
    }

    #[test]
    fn both_directions_stay_in_step() {
        let mut links = LinkTable::new();
        links.link(1, 10, None);
        links.link(1, 11, None);
        links.link(2, 10, None);

        assert_eq!(links.lists_of(1), vec![10, 11]);
        assert_eq!(links.candidates_of(10), vec![1, 2]);

        links.unlink(1, 10);
        assert_eq!(links.lists_of(1), vec![11]);
        assert_eq!(links.candidates_of(10), vec![2]);
        assert!(links.is_consistent());
    }

    #[test]
    fn clear_list_leaves_other_lists_alone() {
        let mut links = LinkTable::new();
        links.link(1, 10, None);
        links.link(2, 10, None);
        links.link(1, 11, Some("keep".into()));

        links.clear_list(10);
        assert!(links.candidates_of(10).is_empty());
        assert_eq!(links.context_note(1, 11), Some("keep"));
        assert!(links.is_consistent());
    }

    #[test]
    fn set_context_note_requires_a_pairing() {
        let mut links = LinkTable::new();
        assert!(!links.set_context_note(1, 10, Some("nope".into())));
        links.link(1, 10, None);
        assert!(links.set_context_note(1, 10, Some("now".into())));
        assert_eq!(links.context_note(1, 10), Some("now"));
    }

    #[test]
    fn share_and_unshare_update_both_sides() {
        let list = SourceRef { kind: SourceKind::List, id: 5 };
        let search = SourceRef { kind: SourceKind::Search, id: 5 };

        let mut shares = ShareTable::new();
        assert!(shares.share(list, 7));
        assert!(!shares.share(list, 7));
        assert!(shares.share(search, 7));

        assert_eq!(shares.sources_of(7), vec![list, search]);
        assert_eq!(shares.users_of(list), vec![7]);
        assert!(shares.is_consistent());

        assert!(shares.unshare(list, 7));
        assert!(!shares.unshare(list, 7));
        assert_eq!(shares.sources_of(7), vec![search]);
        assert!(shares.is_consistent());
    }
}
