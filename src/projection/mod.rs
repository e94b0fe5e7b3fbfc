//! Role-scoped projection: turns entities into ordered name->value maps
//! exposing only the fields a caller's role is authorized to see.

pub mod error;
pub mod filters;
pub mod projector;
pub mod roles;
pub mod spec;

pub use error::ProjectionError;
pub use filters::{ApplicableFieldsFilter, RolePropertyFilter};
pub use projector::{
    project, project_filtered, project_list, project_list_filtered, project_page, FieldValue,
    Projectable, ProjectedPage, PropertyFilter,
};
pub use spec::{FieldSpec, ProjectionSpec};
