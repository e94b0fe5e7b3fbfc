use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::projection::{FieldValue, Projectable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    Prospect,
    Review,
    Offer,
    Acceptance,
    Employed,
    Closed,
}

/// A job opportunity a candidate is being considered for. Projected flat
/// through the role property filter rather than a per-role spec: most
/// fields are public, a few are gated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateOpportunity {
    pub id: i64,
    pub name: String,
    pub stage: OpportunityStage,
    pub next_step: Option<String>,
    pub next_step_due_date: Option<NaiveDate>,
    pub closing_comments: Option<String>,
    pub closing_comments_for_candidate: Option<String>,
    pub employer_feedback: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl CandidateOpportunity {
    pub fn new(id: i64, name: impl Into<String>, stage: OpportunityStage) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            stage,
            next_step: None,
            next_step_due_date: None,
            closing_comments: None,
            closing_comments_for_candidate: None,
            employer_feedback: None,
            created_date: now,
            updated_date: now,
        }
    }
}

impl Projectable for CandidateOpportunity {
    fn entity_name(&self) -> &'static str {
        "candidate_opportunity"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "stage" => json!(self.stage),
            "next_step" => json!(self.next_step),
            "next_step_due_date" => json!(self.next_step_due_date),
            "closing_comments" => json!(self.closing_comments),
            "closing_comments_for_candidate" => json!(self.closing_comments_for_candidate),
            "employer_feedback" => json!(self.employer_feedback),
            "created_date" => json!(self.created_date),
            "updated_date" => json!(self.updated_date),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}
