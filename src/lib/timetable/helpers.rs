use std::{error::Error, fmt::Display};

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::info;
use serde_json::Value;

use super::{
    models::{Args, Config},
    transport::HttpReply,
};

pub const API_ROOT: &str = "/api/v1/timetable/";

/// Token shown for values the backend left out.
pub const PLACEHOLDER: &str = "-";

/// Reads config.json and lets `TT_` environment variables override it.
pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    info!(
        "Reading config from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("TT_"))
        .extract()?;
    info!("Using timetable API at {}", config.api_base);
    Ok(config)
}

/// Full URL of a path below the timetable API root.
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}{}", api_base.trim_end_matches('/'), API_ROOT, path)
}

/// Best human-readable reason for a failed reply: the server's `detail`,
/// then the status text, then the bare code.
pub fn error_message(reply: &HttpReply) -> String {
    if let Some(detail) = server_detail(&reply.body) {
        return detail;
    }
    if !reply.status_text.is_empty() {
        return reply.status_text.clone();
    }
    format!("HTTP {}", reply.status)
}

/// The `detail` a failed request carries in its JSON body, if any.
pub fn server_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        /* request validation errors come as a list of {loc, msg, type} */
        Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_owned),
                })
                .collect::<Vec<_>>();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

pub fn format_hour(hour: i64) -> String {
    format!("{:02}:00", hour)
}

pub fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/helpers_tests.rs"]
mod tests;
