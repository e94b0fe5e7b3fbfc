//! Declarative field-selection tree for role-scoped projections.
//!
//! A spec is an ordered list of descriptors: plain leaves copied by name,
//! and composite descriptors carrying a nested spec that is applied
//! recursively to a single association or mapped over a collection. Specs
//! are plain data with no mutable builder state; the per-role instances
//! are built once and shared.

#[derive(Debug, Clone)]
pub enum FieldSpec {
    /// Scalar property copied as-is
    Leaf(&'static str),
    /// Single association projected with the nested spec, null-safe
    One(&'static str, ProjectionSpec),
    /// Collection of associations, nested spec mapped over each element
    Many(&'static str, ProjectionSpec),
}

impl FieldSpec {
    pub fn name(&self) -> &'static str {
        match self {
            FieldSpec::Leaf(name) => name,
            FieldSpec::One(name, _) => name,
            FieldSpec::Many(name, _) => name,
        }
    }

    /// Human label for shape-mismatch diagnostics
    pub fn expects(&self) -> &'static str {
        match self {
            FieldSpec::Leaf(_) => "a scalar",
            FieldSpec::One(_, _) => "a single association",
            FieldSpec::Many(_, _) => "a collection",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectionSpec {
    fields: Vec<FieldSpec>,
}

impl ProjectionSpec {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn leaf(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec::Leaf(name));
        self
    }

    pub fn one(mut self, name: &'static str, nested: ProjectionSpec) -> Self {
        self.fields.push(FieldSpec::One(name, nested));
        self
    }

    pub fn many(mut self, name: &'static str, nested: ProjectionSpec) -> Self {
        self.fields.push(FieldSpec::Many(name, nested));
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Top-level field names, in spec order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(FieldSpec::name).collect()
    }

    /// True when every top-level field of `other` also appears here
    pub fn covers(&self, other: &ProjectionSpec) -> bool {
        let names = self.field_names();
        other.field_names().iter().all(|name| names.contains(name))
    }
}
