use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "hiring-timeline.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Holiday calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Projection rules.
    #[serde(default)]
    pub policy: PolicyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_calendar_name")]
    pub name: String,
    /// Native TOML dates (`2024-03-29`) or ISO strings (`"2024-03-29"`).
    #[serde(default, deserialize_with = "deserialize_dates")]
    pub extra_holidays: Vec<NaiveDate>,
    /// Fail on dates outside the years described by the holiday data.
    #[serde(default = "default_true")]
    pub strict_coverage: bool,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            extra_holidays: Vec::new(),
            strict_coverage: true,
        }
    }
}

fn default_calendar_name() -> String {
    "br".to_string()
}
fn default_true() -> bool {
    true
}

fn deserialize_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<toml::Value>::deserialize(deserializer)?
        .iter()
        .map(|v| toml_date(v).map_err(serde::de::Error::custom))
        .collect()
}

/// Read a calendar date from a TOML local date or an ISO formatted string.
fn toml_date(value: &toml::Value) -> std::result::Result<NaiveDate, String> {
    match value {
        toml::Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date {s:?}: {e}")),
        toml::Value::Datetime(dt) => match (dt.date, dt.time, dt.offset) {
            (Some(d), None, None) => {
                NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
                    .ok_or_else(|| format!("invalid date {dt}"))
            }
            _ => Err(format!("expected a date without a time, got {dt}")),
        },
        other => Err(format!("expected a date, got {}", other.type_str())),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyToml {
    #[serde(default = "default_early_stage_span")]
    pub early_stage_span: String,
    #[serde(default = "default_candidates")]
    pub candidates: String,
    #[serde(default = "default_posting_bus_days")]
    pub posting_bus_days: i32,
    #[serde(default = "default_admission_bus_days")]
    pub admission_bus_days: i32,
    #[serde(default = "default_interview_bus_days")]
    pub interview_bus_days: i32,
    #[serde(default = "default_start_day_limit")]
    pub start_day_limit: u32,
    #[serde(default)]
    pub reject_unordered_anchors: bool,
}

impl Default for PolicyToml {
    fn default() -> Self {
        Self {
            early_stage_span: default_early_stage_span(),
            candidates: default_candidates(),
            posting_bus_days: default_posting_bus_days(),
            admission_bus_days: default_admission_bus_days(),
            interview_bus_days: default_interview_bus_days(),
            start_day_limit: default_start_day_limit(),
            reject_unordered_anchors: false,
        }
    }
}

fn default_early_stage_span() -> String {
    "two_day".to_string()
}
fn default_candidates() -> String {
    "current_and_next".to_string()
}
fn default_posting_bus_days() -> i32 {
    15
}
fn default_admission_bus_days() -> i32 {
    14
}
fn default_interview_bus_days() -> i32 {
    1
}
fn default_start_day_limit() -> u32 {
    20
}

/// Load the configuration from `path`, or from [`DEFAULT_CONFIG`] if present.
///
/// Without either file every setting takes its default.
pub fn load(path: Option<&Path>) -> Result<TimelineConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(TimelineConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    parse(&toml_str).with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

pub fn parse(toml_str: &str) -> Result<TimelineConfig> {
    Ok(toml::from_str(toml_str)?)
}
