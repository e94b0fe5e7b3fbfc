use serde_json::{Map, Value};

use crate::projection::error::ProjectionError;
use crate::projection::spec::{FieldSpec, ProjectionSpec};
use crate::types::Page;

/// A property read off an entity, tagged with its shape
pub enum FieldValue<'a> {
    /// Plain value, already serialized
    Scalar(Value),
    /// Single association; `None` means the reference is null
    One(Option<&'a dyn Projectable>),
    /// Collection of associations, in entity order
    Many(Vec<&'a dyn Projectable>),
}

impl FieldValue<'_> {
    fn shape(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "a scalar",
            FieldValue::One(_) => "a single association",
            FieldValue::Many(_) => "a collection",
        }
    }
}

/// Capability consulted by the generic projector: entities expose their
/// properties by name instead of the projector reflecting over them.
/// Returning `None` means the property does not exist, which the projector
/// treats as a spec error. A null association is `Some(FieldValue::One(None))`.
pub trait Projectable {
    /// Entity label used in projection error messages
    fn entity_name(&self) -> &'static str;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Role-sensitive suppression hook consulted before each top-level field
/// is emitted. Used where the static per-role specs are not enough, e.g.
/// public-vs-gated property rules or union specs over source subtypes.
pub trait PropertyFilter {
    fn ignore(&self, entity: &dyn Projectable, field: &str) -> bool;
}

/// Projected page: content plus standard pagination metadata
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProjectedPage {
    pub content: Vec<Map<String, Value>>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub first: bool,
    pub last: bool,
}

/// Project one entity into an ordered name->value map
pub fn project(
    entity: &dyn Projectable,
    spec: &ProjectionSpec,
) -> Result<Map<String, Value>, ProjectionError> {
    project_inner(entity, spec, None)
}

/// Project one entity, consulting `filter` for each top-level field
pub fn project_filtered(
    entity: &dyn Projectable,
    spec: &ProjectionSpec,
    filter: &dyn PropertyFilter,
) -> Result<Map<String, Value>, ProjectionError> {
    project_inner(entity, spec, Some(filter))
}

pub fn project_list<'a, I>(
    entities: I,
    spec: &ProjectionSpec,
) -> Result<Vec<Map<String, Value>>, ProjectionError>
where
    I: IntoIterator<Item = &'a dyn Projectable>,
{
    entities.into_iter().map(|entity| project(entity, spec)).collect()
}

pub fn project_list_filtered<'a, I>(
    entities: I,
    spec: &ProjectionSpec,
    filter: &dyn PropertyFilter,
) -> Result<Vec<Map<String, Value>>, ProjectionError>
where
    I: IntoIterator<Item = &'a dyn Projectable>,
{
    entities.into_iter().map(|entity| project_filtered(entity, spec, filter)).collect()
}

pub fn project_page<T: Projectable>(
    page: &Page<T>,
    spec: &ProjectionSpec,
) -> Result<ProjectedPage, ProjectionError> {
    let content = page
        .content
        .iter()
        .map(|entity| project(entity, spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ProjectedPage {
        content,
        number: page.number,
        size: page.size,
        total_elements: page.total_elements,
        total_pages: page.total_pages(),
        first: page.is_first(),
        last: page.is_last(),
    })
}

// The filter applies to top-level fields only; nested specs are emitted
// exactly as written.
fn project_inner(
    entity: &dyn Projectable,
    spec: &ProjectionSpec,
    filter: Option<&dyn PropertyFilter>,
) -> Result<Map<String, Value>, ProjectionError> {
    let mut out = Map::new();

    for descriptor in spec.fields() {
        let name = descriptor.name();
        if let Some(filter) = filter {
            if filter.ignore(entity, name) {
                continue;
            }
        }

        let value = entity.field(name).ok_or(ProjectionError::UnknownField {
            entity: entity.entity_name(),
            field: name,
        })?;

        let rendered = match (descriptor, value) {
            (FieldSpec::Leaf(_), FieldValue::Scalar(value)) => value,
            (FieldSpec::One(_, nested), FieldValue::One(Some(inner))) => {
                Value::Object(project_inner(inner, nested, None)?)
            }
            (FieldSpec::One(_, _), FieldValue::One(None)) => Value::Null,
            (FieldSpec::Many(_, nested), FieldValue::Many(items)) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    array.push(Value::Object(project_inner(item, nested, None)?));
                }
                Value::Array(array)
            }
            (descriptor, value) => {
                return Err(ProjectionError::ShapeMismatch {
                    entity: entity.entity_name(),
                    field: name,
                    expected: descriptor.expects(),
                    found: value.shape(),
                })
            }
        };

        out.insert(name.to_string(), rendered);
    }

    Ok(out)
}
