//! Reference-table entities nested inside candidate projections.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::projection::{FieldValue, Projectable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
}

impl Country {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), iso_code: None }
    }
}

impl Projectable for Country {
    fn entity_name(&self) -> &'static str {
        "country"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "iso_code" => json!(self.iso_code),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationLevel {
    pub id: i64,
    pub name: String,
    pub level: i32,
}

impl Projectable for EducationLevel {
    fn entity_name(&self) -> &'static str {
        "education_level"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "level" => json!(self.level),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupation {
    pub id: i64,
    pub name: String,
    pub isco08_code: Option<String>,
}

impl Projectable for Occupation {
    fn entity_name(&self) -> &'static str {
        "occupation"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "isco08_code" => json!(self.isco08_code),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}
