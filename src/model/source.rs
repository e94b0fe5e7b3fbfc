use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{SourceKind, SourceRef, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Active,
    Inactive,
    Deleted,
}

/// Fields common to every candidate source (saved lists and saved
/// searches). Sources are never physically deleted; [`SourceDetails::mark_deleted`]
/// flags the status instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDetails {
    pub name: String,
    pub status: SourceStatus,
    /// Only the owner may modify a fixed source
    pub fixed: bool,
    /// Visible to every user without explicit sharing
    pub global: bool,
    pub created_by: UserId,
    /// Non-default column selection for the "long" display mode
    pub displayed_fields_long: Option<Vec<String>>,
    /// Non-default column selection for the "short" display mode
    pub displayed_fields_short: Option<Vec<String>>,
    watchers: BTreeSet<UserId>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl SourceDetails {
    pub fn new(name: impl Into<String>, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            status: SourceStatus::Active,
            fixed: false,
            global: false,
            created_by,
            displayed_fields_long: None,
            displayed_fields_short: None,
            watchers: BTreeSet::new(),
            created_date: now,
            updated_date: now,
        }
    }

    pub fn mark_deleted(&mut self) {
        self.status = SourceStatus::Deleted;
        self.updated_date = Utc::now();
    }

    /// Start watching. False when the user already watches; the set never
    /// holds duplicates.
    pub fn add_watcher(&mut self, user: UserId) -> bool {
        self.watchers.insert(user)
    }

    /// Stop watching. Removing an absent watcher is a no-op.
    pub fn remove_watcher(&mut self, user: UserId) -> bool {
        self.watchers.remove(&user)
    }

    pub fn is_watching(&self, user: UserId) -> bool {
        self.watchers.contains(&user)
    }

    pub fn watcher_ids(&self) -> Vec<UserId> {
        self.watchers.iter().copied().collect()
    }

    /// Comma-delimited encoding used by the persistence layer, e.g. "3,5,9".
    /// None when nobody watches.
    pub fn encoded_watchers(&self) -> Option<String> {
        if self.watchers.is_empty() {
            return None;
        }
        let ids: Vec<String> = self.watchers.iter().map(|id| id.to_string()).collect();
        Some(ids.join(","))
    }

    /// Restore the watcher set from its delimited encoding. Blank tokens
    /// are skipped; a malformed token is a validation error. The result is
    /// duplicate-free regardless of the input.
    pub fn set_watchers_from(&mut self, encoded: &str) -> Result<(), CatalogError> {
        let mut watchers = BTreeSet::new();
        for token in encoded.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let id: UserId = token.parse().map_err(|_| {
                CatalogError::Validation(format!("malformed watcher id '{token}'"))
            })?;
            watchers.insert(id);
        }
        self.watchers = watchers;
        Ok(())
    }
}

/// Common abstraction over saved lists and saved searches: anything that
/// can contain or produce a set of candidates.
pub trait CandidateSource {
    fn id(&self) -> i64;

    fn kind(&self) -> SourceKind;

    fn details(&self) -> &SourceDetails;

    fn details_mut(&mut self) -> &mut SourceDetails;

    fn source_ref(&self) -> SourceRef {
        SourceRef { kind: self.kind(), id: self.id() }
    }
}
