//! Schedule entries as served by `/api/v1/timetable/schedule/`
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::timetable::{
    error::ValidationError,
    helpers::{format_hour, or_placeholder},
    validation::{
        parse_hour, parse_positive_int, parse_weekday, FieldFormat, FieldRule, Form, Schema,
    },
};

use super::{Creatable, Deletable, Resource};

/// The backend stores a group id, older fixtures carry the group letter.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum GroupRef {
    Id(i64),
    Name(String),
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupRef::Id(id) => write!(f, "{}", id),
            GroupRef::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: i64,
    pub day_of_week: String,
    pub start_hour: i64,
    pub end_hour: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    pub subject_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
    #[serde(default)]
    pub student_group_id: Option<GroupRef>,
}

impl Resource for ScheduleEntry {
    const PATH: &'static str = "schedule/";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "day_of_week"];
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Day", "Start", "End", "Subject", "Room", "Teacher", "Type", "Group",
    ];
    const FIELDS: &'static [&'static str] = &[
        "id",
        "day_of_week",
        "start_hour",
        "end_hour",
        "subject_id",
        "room_id",
        "teacher_id",
        "class_type",
        "student_group_id",
    ];
    const EMPTY_MESSAGE: &'static str = "No timetable available for this group.";
    const ERROR_MESSAGE: &'static str = "Error loading timetable";

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.day_of_week.clone(),
            format_hour(self.start_hour),
            format_hour(self.end_hour),
            self.subject_id.to_string(),
            self.room_id.to_string(),
            self.teacher_id.to_string(),
            or_placeholder(self.class_type.as_ref()),
            or_placeholder(self.student_group_id.as_ref()),
        ]
    }

    fn check(&self) -> Result<(), String> {
        if self.start_hour < self.end_hour {
            Ok(())
        } else {
            Err(format!(
                "entry {} starts at {} but ends at {}",
                self.id, self.start_hour, self.end_hour
            ))
        }
    }
}

impl Creatable for ScheduleEntry {
    const SCHEMA: Schema = &[
        FieldRule::required("day_of_week", FieldFormat::Weekday),
        FieldRule::required("start_hour", FieldFormat::Hour),
        FieldRule::required("end_hour", FieldFormat::Hour),
        FieldRule::required("teacher_id", FieldFormat::PositiveInt),
        FieldRule::required("room_id", FieldFormat::PositiveInt),
        FieldRule::required("subject_id", FieldFormat::PositiveInt),
        FieldRule::required("class_type", FieldFormat::Text),
        FieldRule::optional("student_group_id", FieldFormat::PositiveInt),
    ];
    const CREATED_MESSAGE: &'static str = "Entry added successfully";

    fn payload(form: &Form) -> Result<Value, ValidationError> {
        let day_of_week = parse_weekday("day_of_week", required(form, "day_of_week")?)?;
        let start_hour = parse_hour("start_hour", required(form, "start_hour")?)?;
        let end_hour = parse_hour("end_hour", required(form, "end_hour")?)?;
        if start_hour >= end_hour {
            return Err(ValidationError::new(
                "end_hour",
                "must be later than start_hour",
            ));
        }
        let student_group_id = form
            .get("student_group_id")
            .map(|v| parse_positive_int("student_group_id", v))
            .transpose()?;
        let teacher_id = parse_positive_int("teacher_id", required(form, "teacher_id")?)?;
        let room_id = parse_positive_int("room_id", required(form, "room_id")?)?;
        let subject_id = parse_positive_int("subject_id", required(form, "subject_id")?)?;
        let class_type = required(form, "class_type")?;

        Ok(json!({
            "day_of_week": day_of_week,
            "start_hour": start_hour,
            "end_hour": end_hour,
            "teacher_id": teacher_id,
            "room_id": room_id,
            "subject_id": subject_id,
            "class_type": class_type,
            "student_group_id": student_group_id,
        }))
    }
}

impl Deletable for ScheduleEntry {}

fn required<'f>(form: &'f Form, name: &str) -> Result<&'f str, ValidationError> {
    form.get(name).ok_or_else(|| ValidationError::missing(name))
}
