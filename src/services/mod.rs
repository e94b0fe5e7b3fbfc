//! Stateless operations over the store: list membership, sharing,
//! selection lists and saved-search execution. Services hold no state
//! between calls; everything is parameterized by the acting user and the
//! entities resolved per call.

pub mod saved_list;
pub mod search;
pub mod selection;
pub mod sharing;
