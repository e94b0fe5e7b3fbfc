use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::candidate::{Candidate, CandidateStatus, Gender};
use crate::model::source::{CandidateSource, SourceDetails};
use crate::projection::{FieldValue, Projectable};
use crate::types::{SearchId, SourceKind, UserId};

/// How a child search combines with its parent's results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchJoinType {
    And,
    Or,
}

/// Composable sub-search: the child's results are folded into the
/// parent's with the given join semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJoin {
    pub child_search_id: SearchId,
    pub join_type: SearchJoinType,
}

impl Projectable for SearchJoin {
    fn entity_name(&self) -> &'static str {
        "search_join"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "child_search_id" => json!(self.child_search_id),
            "join_type" => json!(self.join_type),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

/// Filter criteria a saved search runs against the candidate store. An
/// empty query matches every candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateQuery {
    /// Case-insensitive match against candidate number, additional info
    /// and city
    pub keyword: Option<String>,
    pub statuses: Vec<CandidateStatus>,
    pub gender: Option<Gender>,
    pub min_year_of_arrival: Option<i32>,
    pub max_year_of_arrival: Option<i32>,
    pub country_ids: Vec<i64>,
    pub nationality_ids: Vec<i64>,
}

impl CandidateQuery {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            let mut haystacks = vec![candidate.candidate_number.to_lowercase()];
            if let Some(info) = &candidate.additional_info {
                haystacks.push(info.to_lowercase());
            }
            if let Some(city) = &candidate.city {
                haystacks.push(city.to_lowercase());
            }
            if !haystacks.iter().any(|h| h.contains(&keyword)) {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&candidate.status) {
            return false;
        }

        if let Some(gender) = self.gender {
            if candidate.gender != Some(gender) {
                return false;
            }
        }

        if let Some(min) = self.min_year_of_arrival {
            if !candidate.year_of_arrival.is_some_and(|year| year >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_year_of_arrival {
            if !candidate.year_of_arrival.is_some_and(|year| year <= max) {
                return false;
            }
        }

        if !self.country_ids.is_empty() {
            let country = candidate.country.as_ref().map(|c| c.id);
            if !country.is_some_and(|id| self.country_ids.contains(&id)) {
                return false;
            }
        }
        if !self.nationality_ids.is_empty() {
            let nationality = candidate.nationality.as_ref().map(|c| c.id);
            if !nationality.is_some_and(|id| self.nationality_ids.contains(&id)) {
                return false;
            }
        }

        true
    }
}

/// A stored search over candidates, optionally composed with child
/// searches through [`SearchJoin`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: SearchId,
    pub details: SourceDetails,
    pub query: CandidateQuery,
    pub search_joins: Vec<SearchJoin>,
}

impl SavedSearch {
    pub fn new(id: SearchId, name: impl Into<String>, created_by: UserId) -> Self {
        Self {
            id,
            details: SourceDetails::new(name, created_by),
            query: CandidateQuery::default(),
            search_joins: Vec::new(),
        }
    }
}

impl CandidateSource for SavedSearch {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Search
    }

    fn details(&self) -> &SourceDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut SourceDetails {
        &mut self.details
    }
}

impl Projectable for SavedSearch {
    fn entity_name(&self) -> &'static str {
        "saved_search"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Scalar(json!(self.id)),
            "name" => FieldValue::Scalar(json!(self.details.name)),
            "status" => FieldValue::Scalar(json!(self.details.status)),
            "fixed" => FieldValue::Scalar(json!(self.details.fixed)),
            "global" => FieldValue::Scalar(json!(self.details.global)),
            "displayed_fields_long" => {
                FieldValue::Scalar(json!(self.details.displayed_fields_long))
            }
            "displayed_fields_short" => {
                FieldValue::Scalar(json!(self.details.displayed_fields_short))
            }
            "keyword" => FieldValue::Scalar(json!(self.query.keyword)),
            "search_joins" => {
                FieldValue::Many(self.search_joins.iter().map(|j| j as &dyn Projectable).collect())
            }
            "created_date" => FieldValue::Scalar(json!(self.details.created_date)),
            "updated_date" => FieldValue::Scalar(json!(self.details.updated_date)),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        let mut c = Candidate::new(1, "CN1001");
        c.status = CandidateStatus::Active;
        c.gender = Some(Gender::Female);
        c.city = Some("Amman".into());
        c.year_of_arrival = Some(2016);
        c
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(CandidateQuery::default().matches(&candidate()));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let query = CandidateQuery { keyword: Some("amman".into()), ..Default::default() };
        assert!(query.matches(&candidate()));

        let query = CandidateQuery { keyword: Some("beirut".into()), ..Default::default() };
        assert!(!query.matches(&candidate()));
    }

    #[test]
    fn ranges_require_a_value() {
        let query = CandidateQuery { min_year_of_arrival: Some(2015), ..Default::default() };
        assert!(query.matches(&candidate()));

        let mut unknown_year = candidate();
        unknown_year.year_of_arrival = None;
        assert!(!query.matches(&unknown_year));
    }

    #[test]
    fn status_filter_is_a_whitelist() {
        let query = CandidateQuery {
            statuses: vec![CandidateStatus::Pending, CandidateStatus::Active],
            ..Default::default()
        };
        assert!(query.matches(&candidate()));

        let query =
            CandidateQuery { statuses: vec![CandidateStatus::Employed], ..Default::default() };
        assert!(!query.matches(&candidate()));
    }
}
