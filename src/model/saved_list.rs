use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::source::{CandidateSource, SourceDetails};
use crate::projection::{FieldValue, Projectable};
use crate::types::{ListId, SearchId, SourceKind, UserId};

/// A curated list of candidates. Membership lives in the link table, not
/// on the list itself; the entity carries only the source details plus the
/// selection-list backlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedList {
    pub id: ListId,
    pub details: SourceDetails,
    /// Set only on the hidden per-user selection list recording which
    /// results of one saved search a user has selected
    pub saved_search_id: Option<SearchId>,
}

impl SavedList {
    pub fn new(id: ListId, name: impl Into<String>, created_by: UserId) -> Self {
        Self { id, details: SourceDetails::new(name, created_by), saved_search_id: None }
    }

    pub fn is_selection_list(&self) -> bool {
        self.saved_search_id.is_some()
    }
}

impl CandidateSource for SavedList {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::List
    }

    fn details(&self) -> &SourceDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut SourceDetails {
        &mut self.details
    }
}

impl Projectable for SavedList {
    fn entity_name(&self) -> &'static str {
        "saved_list"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.details.name),
            "status" => json!(self.details.status),
            "fixed" => json!(self.details.fixed),
            "global" => json!(self.details.global),
            "displayed_fields_long" => json!(self.details.displayed_fields_long),
            "displayed_fields_short" => json!(self.details.displayed_fields_short),
            "saved_search_id" => json!(self.saved_search_id),
            "created_date" => json!(self.details.created_date),
            "updated_date" => json!(self.details.updated_date),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}
