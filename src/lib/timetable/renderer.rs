//! Projects a fetch result into a page: a table body plus a raw JSON mirror.
//!
//! Rendering always starts from a cleared page, so rendering the same result
//! twice yields the same page and rows never accumulate.
use log::{debug, warn};
use serde_json::Value;

use super::{
    fetcher::FetchResult,
    helpers::{escape_html, PLACEHOLDER},
    models::{OutputFormat, Resource},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Data(Vec<String>),
    /// Informational row spanning every column, used for empty lists
    Placeholder(String),
    /// Error indicator spanning every column
    Error(String),
}

/// The display target for one resource list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub columns: Vec<String>,
    pub body: Vec<Row>,
    /// Pretty JSON of the records, or the error text
    pub raw: String,
    /// Query parameters the list is loaded with
    pub query: Vec<(String, String)>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: Vec<(String, String)>) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.body.clear();
        self.raw.clear();
    }

    pub fn data_rows(&self) -> usize {
        self.body
            .iter()
            .filter(|row| matches!(row, Row::Data(_)))
            .count()
    }

    pub fn is_error(&self) -> bool {
        self.body.iter().any(|row| matches!(row, Row::Error(_)))
    }

    pub fn to_html(&self) -> String {
        let colspan = self.columns.len().max(1);
        self.body
            .iter()
            .map(|row| match row {
                Row::Data(cells) => format!(
                    "<tr>{}</tr>",
                    cells
                        .iter()
                        .map(|c| format!("<td>{}</td>", escape_html(c)))
                        .collect::<String>()
                ),
                Row::Placeholder(text) => format!(
                    "<tr><td colspan=\"{}\">{}</td></tr>",
                    colspan,
                    escape_html(text)
                ),
                Row::Error(text) => format!(
                    "<tr class=\"error\"><td colspan=\"{}\">{}</td></tr>",
                    colspan,
                    escape_html(text)
                ),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_text(&self) -> String {
        let mut widths = self
            .columns
            .iter()
            .map(|c| c.chars().count())
            .collect::<Vec<_>>();
        for row in &self.body {
            if let Row::Data(cells) = row {
                for (i, cell) in cells.iter().enumerate() {
                    if let Some(w) = widths.get_mut(i) {
                        *w = (*w).max(cell.chars().count());
                    }
                }
            }
        }
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_owned()
        };

        let mut out = vec![line(self.columns.as_slice())];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.body {
            out.push(match row {
                Row::Data(cells) => line(cells.as_slice()),
                Row::Placeholder(text) => text.clone(),
                Row::Error(text) => format!("!! {}", text),
            });
        }
        out.join("\n")
    }

    pub fn display(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("{}\n\n{}", self.to_text(), self.raw),
            OutputFormat::Html => format!(
                "{}\n\n<pre>{}</pre>",
                self.to_html(),
                escape_html(&self.raw)
            ),
            OutputFormat::Json => self.raw.clone(),
        }
    }
}

/// Clears `page` and writes `result` into it.
pub fn render<T: Resource>(page: &mut Page, result: &FetchResult<T>) {
    page.clear();
    page.columns = T::COLUMNS.iter().map(|c| c.to_string()).collect();
    match result {
        Ok(fetched) if fetched.is_empty() => {
            page.body.push(Row::Placeholder(T::EMPTY_MESSAGE.to_owned()));
            page.raw = "[]".to_owned();
        }
        Ok(fetched) => {
            page.body = fetched
                .raw
                .iter()
                .zip(&fetched.records)
                .map(|(value, record)| match record {
                    Some(record) => Row::Data(record.cells()),
                    None => Row::Data(raw_cells::<T>(value)),
                })
                .collect();
            /* mirror what the backend sent, not what the model kept */
            page.raw = match serde_json::to_string_pretty(&fetched.raw) {
                Ok(json) => json,
                Err(err) => {
                    warn!("Could not mirror records as JSON: {}", err);
                    err.to_string()
                }
            };
        }
        Err(err) => {
            page.body.push(Row::Error(T::ERROR_MESSAGE.to_owned()));
            page.raw = err.to_string();
        }
    }
    debug!("Rendered {} row(s)", page.body.len());
}

/// Best-effort cells for a record that did not fit the model.
fn raw_cells<T: Resource>(value: &Value) -> Vec<String> {
    T::FIELDS
        .iter()
        .map(|field| match value.get(*field) {
            None | Some(Value::Null) => PLACEHOLDER.to_owned(),
            Some(Value::String(s)) if s.is_empty() => PLACEHOLDER.to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
