use crate::model::user::Role;
use crate::projection::projector::{Projectable, PropertyFilter};

/// Public-vs-gated property rule used by the flat opportunity projections.
///
/// Public fields are never ignored. Admins see everything, a source
/// partner admin additionally sees the enumerated extra set, and every
/// other role (including an unresolvable one) sees public fields only.
pub struct RolePropertyFilter {
    role: Option<Role>,
    public_fields: &'static [&'static str],
    extra_fields: &'static [&'static str],
}

impl RolePropertyFilter {
    pub fn new(
        role: Option<Role>,
        public_fields: &'static [&'static str],
        extra_fields: &'static [&'static str],
    ) -> Self {
        Self { role, public_fields, extra_fields }
    }
}

impl PropertyFilter for RolePropertyFilter {
    fn ignore(&self, _entity: &dyn Projectable, field: &str) -> bool {
        if self.public_fields.contains(&field) {
            return false;
        }
        match self.role {
            Some(Role::Admin) => false,
            Some(Role::SourcePartnerAdmin) => !self.extra_fields.contains(&field),
            _ => true,
        }
    }
}

/// Skips spec fields the concrete entity does not expose, so one union
/// spec can cover several source subtypes without tripping the
/// unknown-field check.
pub struct ApplicableFieldsFilter;

impl PropertyFilter for ApplicableFieldsFilter {
    fn ignore(&self, entity: &dyn Projectable, field: &str) -> bool {
        entity.field(field).is_none()
    }
}
