use thiserror::Error;

/// Projection failures are implementer errors: specs are written against
/// known entity shapes, so a bad field reference fails fast instead of
/// being silently defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("entity '{entity}' has no field '{field}'")]
    UnknownField { entity: &'static str, field: &'static str },

    #[error("field '{field}' on '{entity}' is {found}, but the spec expects {expected}")]
    ShapeMismatch {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
