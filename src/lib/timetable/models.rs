use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::{
    error::ValidationError,
    validation::{Form, Schema},
};

pub mod schedule_model;
pub mod teacher_model;

/// A record type served by the timetable backend under `/api/v1/timetable/`.
pub trait Resource: DeserializeOwned + Serialize {
    /// Collection path relative to the timetable API root, with trailing slash
    const PATH: &'static str;
    /// Keys every listed record must carry to be displayable
    const REQUIRED_FIELDS: &'static [&'static str];
    const COLUMNS: &'static [&'static str];
    /// Record key shown in each column, used for rows that failed to type
    const FIELDS: &'static [&'static str];
    const EMPTY_MESSAGE: &'static str;
    const ERROR_MESSAGE: &'static str;

    /// One display string per column, absent values as "-".
    fn cells(&self) -> Vec<String>;

    /// Data-quality check on a record the backend handed out.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A resource that can be created from a submitted form.
pub trait Creatable: Resource {
    const SCHEMA: Schema;
    const CREATED_MESSAGE: &'static str;

    /// Request body for a form that already passed `SCHEMA`.
    fn payload(form: &Form) -> Result<Value, ValidationError>;
}

/// A resource that can be deleted by id.
pub trait Deletable: Resource {
    fn item_path(id: i64) -> String {
        format!("{}{}", Self::PATH, id)
    }
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the API address and defaults.
/// 2. Output format for rendered pages.
/// 3. The action to perform.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// `schedule delete --yes` answers the confirmation up front.
    pub fn assume_yes(&self) -> bool {
        matches!(
            self.command,
            Command::Schedule(ScheduleCommand::Delete { yes: true, .. })
        )
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table followed by the raw JSON
    Text,
    /// `<tr>` rows followed by the raw JSON
    Html,
    /// Raw JSON only
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(subcommand)]
    Teachers(TeachersCommand),
    #[command(subcommand)]
    Schedule(ScheduleCommand),
    /// Show teachers and the schedule side by side
    Overview {
        #[arg(long)]
        group: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TeachersCommand {
    List,
    Add {
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleCommand {
    List {
        /// Only entries of this student group
        #[arg(long)]
        group: Option<String>,
    },
    Add(EntryArgs),
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
}

/// Raw schedule entry fields, checked by the entry schema rather than by clap.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryArgs {
    #[arg(long)]
    pub day_of_week: Option<String>,
    #[arg(long)]
    pub start_hour: Option<String>,
    #[arg(long)]
    pub end_hour: Option<String>,
    #[arg(long)]
    pub teacher_id: Option<String>,
    #[arg(long)]
    pub room_id: Option<String>,
    #[arg(long)]
    pub subject_id: Option<String>,
    #[arg(long)]
    pub class_type: Option<String>,
    #[arg(long)]
    pub student_group_id: Option<String>,
}

impl EntryArgs {
    pub fn to_form(&self) -> Form {
        let fields = [
            ("day_of_week", &self.day_of_week),
            ("start_hour", &self.start_hour),
            ("end_hour", &self.end_hour),
            ("teacher_id", &self.teacher_id),
            ("room_id", &self.room_id),
            ("subject_id", &self.subject_id),
            ("class_type", &self.class_type),
            ("student_group_id", &self.student_group_id),
        ];
        Form::from_pairs(
            fields
                .into_iter()
                .filter_map(|(name, value)| value.clone().map(|v| (name, v))),
        )
    }
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base address of the backend, `scheme://host:port`
/// 2. Group used by `schedule list` when none is given
/// 3. Per-request timeout in seconds, 0 disables it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub default_group: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_owned(),
            default_group: None,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
