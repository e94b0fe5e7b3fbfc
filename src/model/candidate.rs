use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::links::LinkTable;
use crate::model::reference::{Country, EducationLevel, Occupation};
use crate::model::user::User;
use crate::projection::{FieldValue, Projectable};
use crate::types::{CandidateId, ListId, SearchId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Draft,
    Active,
    Pending,
    Incomplete,
    Employed,
    Ineligible,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhcrStatus {
    Registered,
    NotRegistered,
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Unverified,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exam {
    IeltsGen,
    IeltsAca,
    Toefl,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependantRelation {
    Partner,
    Child,
    Parent,
    Sibling,
    Other,
}

// Sub-records owned by a candidate. Independent 1-to-many relations with
// their own CRUD lifecycle; none of them carries hard invariants.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateOccupation {
    pub id: i64,
    pub occupation: Option<Occupation>,
    pub years_experience: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEducation {
    pub id: i64,
    pub education_type: Option<String>,
    pub country: Option<Country>,
    pub institution: Option<String>,
    pub course_name: Option<String>,
    pub year_completed: Option<i32>,
    pub incomplete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateExam {
    pub id: i64,
    pub exam: Option<Exam>,
    pub other_exam: Option<String>,
    pub score: Option<Decimal>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCitizenship {
    pub id: i64,
    pub nationality: Option<Country>,
    pub has_passport: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDependant {
    pub id: i64,
    pub relation: Option<DependantRelation>,
    pub name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub registered: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateJobExperience {
    pub id: i64,
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub full_time: Option<bool>,
    pub paid: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAttachment {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub file_type: Option<String>,
    pub cv: bool,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReviewStatusItem {
    pub id: i64,
    pub review_status: ReviewStatus,
    pub comment: Option<String>,
    pub saved_search_id: Option<SearchId>,
}

/// Core identity/profile entity. Nearly every intake field is optional;
/// which of them a caller sees is decided entirely by the projector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub candidate_number: String,
    pub status: CandidateStatus,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub year_of_arrival: Option<i32>,
    pub additional_info: Option<String>,
    pub candidate_message: Option<String>,
    pub folderlink: Option<String>,
    pub sflink: Option<String>,
    pub videolink: Option<String>,
    pub linked_in_link: Option<String>,
    pub unhcr_status: Option<UnhcrStatus>,
    pub unhcr_number: Option<String>,
    pub ielts_score: Option<Decimal>,
    pub survey_comment: Option<String>,
    pub user: Option<User>,
    pub country: Option<Country>,
    pub nationality: Option<Country>,
    pub max_education_level: Option<EducationLevel>,
    pub candidate_occupations: Vec<CandidateOccupation>,
    pub candidate_educations: Vec<CandidateEducation>,
    pub candidate_exams: Vec<CandidateExam>,
    pub candidate_citizenships: Vec<CandidateCitizenship>,
    pub candidate_dependants: Vec<CandidateDependant>,
    pub candidate_job_experiences: Vec<CandidateJobExperience>,
    pub candidate_attachments: Vec<CandidateAttachment>,
    pub candidate_review_status_items: Vec<CandidateReviewStatusItem>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Candidate {
    pub fn new(id: CandidateId, candidate_number: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            candidate_number: candidate_number.into(),
            status: CandidateStatus::Draft,
            gender: None,
            dob: None,
            phone: None,
            whatsapp: None,
            address1: None,
            city: None,
            year_of_arrival: None,
            additional_info: None,
            candidate_message: None,
            folderlink: None,
            sflink: None,
            videolink: None,
            linked_in_link: None,
            unhcr_status: None,
            unhcr_number: None,
            ielts_score: None,
            survey_comment: None,
            user: None,
            country: None,
            nationality: None,
            max_education_level: None,
            candidate_occupations: Vec::new(),
            candidate_educations: Vec::new(),
            candidate_exams: Vec::new(),
            candidate_citizenships: Vec::new(),
            candidate_dependants: Vec::new(),
            candidate_job_experiences: Vec::new(),
            candidate_attachments: Vec::new(),
            candidate_review_status_items: Vec::new(),
            created_date: now,
            updated_date: now,
        }
    }
}

fn one(entity: &Option<impl Projectable>) -> FieldValue<'_> {
    FieldValue::One(entity.as_ref().map(|e| e as &dyn Projectable))
}

fn many<'a>(entities: &'a [impl Projectable]) -> FieldValue<'a> {
    FieldValue::Many(entities.iter().map(|e| e as &dyn Projectable).collect())
}

impl Projectable for Candidate {
    fn entity_name(&self) -> &'static str {
        "candidate"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Scalar(json!(self.id)),
            "candidate_number" => FieldValue::Scalar(json!(self.candidate_number)),
            "status" => FieldValue::Scalar(json!(self.status)),
            "gender" => FieldValue::Scalar(json!(self.gender)),
            "dob" => FieldValue::Scalar(json!(self.dob)),
            "phone" => FieldValue::Scalar(json!(self.phone)),
            "whatsapp" => FieldValue::Scalar(json!(self.whatsapp)),
            "address1" => FieldValue::Scalar(json!(self.address1)),
            "city" => FieldValue::Scalar(json!(self.city)),
            "year_of_arrival" => FieldValue::Scalar(json!(self.year_of_arrival)),
            "additional_info" => FieldValue::Scalar(json!(self.additional_info)),
            "candidate_message" => FieldValue::Scalar(json!(self.candidate_message)),
            "folderlink" => FieldValue::Scalar(json!(self.folderlink)),
            "sflink" => FieldValue::Scalar(json!(self.sflink)),
            "videolink" => FieldValue::Scalar(json!(self.videolink)),
            "linked_in_link" => FieldValue::Scalar(json!(self.linked_in_link)),
            "unhcr_status" => FieldValue::Scalar(json!(self.unhcr_status)),
            "unhcr_number" => FieldValue::Scalar(json!(self.unhcr_number)),
            "ielts_score" => FieldValue::Scalar(json!(self.ielts_score)),
            "survey_comment" => FieldValue::Scalar(json!(self.survey_comment)),
            // List-scoped fields resolve through CandidateView; a bare
            // candidate has no list context designated.
            "selected" => FieldValue::Scalar(Value::Null),
            "context_note" => FieldValue::Scalar(Value::Null),
            "created_date" => FieldValue::Scalar(json!(self.created_date)),
            "updated_date" => FieldValue::Scalar(json!(self.updated_date)),
            "user" => one(&self.user),
            "country" => one(&self.country),
            "nationality" => one(&self.nationality),
            "max_education_level" => one(&self.max_education_level),
            "candidate_occupations" => many(&self.candidate_occupations),
            "candidate_educations" => many(&self.candidate_educations),
            "candidate_exams" => many(&self.candidate_exams),
            "candidate_citizenships" => many(&self.candidate_citizenships),
            "candidate_dependants" => many(&self.candidate_dependants),
            "candidate_job_experiences" => many(&self.candidate_job_experiences),
            "candidate_attachments" => many(&self.candidate_attachments),
            "candidate_review_status_items" => many(&self.candidate_review_status_items),
            _ => return None,
        };
        Some(value)
    }
}

/// A candidate viewed through an explicit list context.
///
/// The caller designates the current list by constructing the view; the
/// two list-scoped fields then resolve against the link table. No state
/// is stored on the candidate itself, so context can never leak across
/// unrelated reads.
pub struct CandidateView<'a> {
    pub candidate: &'a Candidate,
    pub links: &'a LinkTable,
    pub list: Option<ListId>,
}

impl<'a> CandidateView<'a> {
    pub fn new(candidate: &'a Candidate, links: &'a LinkTable, list: Option<ListId>) -> Self {
        Self { candidate, links, list }
    }
}

impl Projectable for CandidateView<'_> {
    fn entity_name(&self) -> &'static str {
        "candidate"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "context_note" => {
                let note = self
                    .list
                    .and_then(|list| self.links.context_note(self.candidate.id, list));
                Some(FieldValue::Scalar(json!(note)))
            }
            "selected" => {
                let selected =
                    self.list.map(|list| self.links.is_linked(self.candidate.id, list));
                Some(FieldValue::Scalar(json!(selected)))
            }
            _ => self.candidate.field(name),
        }
    }
}

impl Projectable for CandidateOccupation {
    fn entity_name(&self) -> &'static str {
        "candidate_occupation"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Scalar(json!(self.id)),
            "occupation" => one(&self.occupation),
            "years_experience" => FieldValue::Scalar(json!(self.years_experience)),
            _ => return None,
        };
        Some(value)
    }
}

impl Projectable for CandidateEducation {
    fn entity_name(&self) -> &'static str {
        "candidate_education"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Scalar(json!(self.id)),
            "education_type" => FieldValue::Scalar(json!(self.education_type)),
            "country" => one(&self.country),
            "institution" => FieldValue::Scalar(json!(self.institution)),
            "course_name" => FieldValue::Scalar(json!(self.course_name)),
            "year_completed" => FieldValue::Scalar(json!(self.year_completed)),
            "incomplete" => FieldValue::Scalar(json!(self.incomplete)),
            _ => return None,
        };
        Some(value)
    }
}

impl Projectable for CandidateExam {
    fn entity_name(&self) -> &'static str {
        "candidate_exam"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "exam" => json!(self.exam),
            "other_exam" => json!(self.other_exam),
            "score" => json!(self.score),
            "year" => json!(self.year),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

impl Projectable for CandidateCitizenship {
    fn entity_name(&self) -> &'static str {
        "candidate_citizenship"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Scalar(json!(self.id)),
            "nationality" => one(&self.nationality),
            "has_passport" => FieldValue::Scalar(json!(self.has_passport)),
            "notes" => FieldValue::Scalar(json!(self.notes)),
            _ => return None,
        };
        Some(value)
    }
}

impl Projectable for CandidateDependant {
    fn entity_name(&self) -> &'static str {
        "candidate_dependant"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "relation" => json!(self.relation),
            "name" => json!(self.name),
            "dob" => json!(self.dob),
            "registered" => json!(self.registered),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

impl Projectable for CandidateJobExperience {
    fn entity_name(&self) -> &'static str {
        "candidate_job_experience"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "company_name" => json!(self.company_name),
            "role" => json!(self.role),
            "start_date" => json!(self.start_date),
            "end_date" => json!(self.end_date),
            "full_time" => json!(self.full_time),
            "paid" => json!(self.paid),
            "description" => json!(self.description),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

impl Projectable for CandidateAttachment {
    fn entity_name(&self) -> &'static str {
        "candidate_attachment"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "location" => json!(self.location),
            "file_type" => json!(self.file_type),
            "cv" => json!(self.cv),
            "created_date" => json!(self.created_date),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

impl Projectable for CandidateReviewStatusItem {
    fn entity_name(&self) -> &'static str {
        "candidate_review_status_item"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "review_status" => json!(self.review_status),
            "comment" => json!(self.comment),
            "saved_search_id" => json!(self.saved_search_id),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}
