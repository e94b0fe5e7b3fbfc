//! Domain entities: candidates with their attached records, users and
//! roles, and the two candidate-source subtypes.

pub mod candidate;
pub mod opportunity;
pub mod reference;
pub mod saved_list;
pub mod saved_search;
pub mod source;
pub mod user;

pub use candidate::{Candidate, CandidateStatus, CandidateView, Gender};
pub use opportunity::{CandidateOpportunity, OpportunityStage};
pub use reference::{Country, EducationLevel, Occupation};
pub use saved_list::SavedList;
pub use saved_search::{CandidateQuery, SavedSearch, SearchJoin, SearchJoinType};
pub use source::{CandidateSource, SourceDetails, SourceStatus};
pub use user::{Role, User, UserStatus};
