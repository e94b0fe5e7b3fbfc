//! First-class join tables for the two bidirectional relationships:
//! candidate<->saved-list membership and source<->user sharing.

pub mod table;

pub use table::{LinkTable, Pairing, ShareTable};
