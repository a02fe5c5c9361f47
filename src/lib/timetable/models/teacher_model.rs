//! Teacher records as served by `/api/v1/timetable/teachers/`
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::timetable::{
    error::ValidationError,
    validation::{FieldFormat, FieldRule, Form, Schema},
};

use super::{Creatable, Resource};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}

impl Resource for Teacher {
    const PATH: &'static str = "teachers/";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "name"];
    const COLUMNS: &'static [&'static str] = &["ID", "Name"];
    const FIELDS: &'static [&'static str] = &["id", "name"];
    const EMPTY_MESSAGE: &'static str = "No teachers yet.";
    const ERROR_MESSAGE: &'static str = "Error loading teachers";

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Creatable for Teacher {
    const SCHEMA: Schema = &[FieldRule::required("name", FieldFormat::Text)];
    const CREATED_MESSAGE: &'static str = "Teacher added successfully";

    fn payload(form: &Form) -> Result<Value, ValidationError> {
        let name = form
            .get("name")
            .ok_or_else(|| ValidationError::missing("name"))?;
        Ok(json!({ "name": name }))
    }
}
