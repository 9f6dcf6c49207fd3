//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{bail, Context, Result};

use hiring_timeline::pipeline::{CandidateRule, CoverageMode, EarlyStageSpan, PipelinePolicy};
use hiring_timeline::scheduling::{Cal, CALENDAR_NAMES};

use crate::config::{CalendarToml, PolicyToml};

/// Parses an early stage span name into the corresponding enum variant.
pub fn parse_early_stage_span(s: &str) -> Result<EarlyStageSpan> {
    match s.to_lowercase().as_str() {
        "single_day" => Ok(EarlyStageSpan::SingleDay),
        "two_day" => Ok(EarlyStageSpan::TwoDay),
        other => bail!("unknown early stage span: {other:?}"),
    }
}

/// Parses a candidate rule name into the corresponding enum variant.
pub fn parse_candidate_rule(s: &str) -> Result<CandidateRule> {
    match s.to_lowercase().as_str() {
        "current_and_next" => Ok(CandidateRule::CurrentAndNext),
        "earliest_only" => Ok(CandidateRule::EarliestOnly),
        other => bail!("unknown candidate rule: {other:?}"),
    }
}

/// Builds a validated projection policy.
///
/// Coverage strictness lives in the `[calendar]` section since it describes the holiday data.
pub fn build_policy(policy: &PolicyToml, strict_coverage: bool) -> Result<PipelinePolicy> {
    let coverage = if strict_coverage {
        CoverageMode::Strict
    } else {
        CoverageMode::Lenient
    };
    let built = PipelinePolicy::new()
        .with_early_stage_span(parse_early_stage_span(&policy.early_stage_span)?)
        .with_candidates(parse_candidate_rule(&policy.candidates)?)
        .with_posting_bus_days(policy.posting_bus_days)
        .with_admission_bus_days(policy.admission_bus_days)
        .with_interview_bus_days(policy.interview_bus_days)
        .with_start_day_limit(policy.start_day_limit)
        .with_coverage(coverage)
        .with_reject_unordered_anchors(policy.reject_unordered_anchors);
    built.validate().context("invalid [policy] section")?;
    Ok(built)
}

/// Builds the holiday calendar, with `name` overriding the configured calendar name.
pub fn build_calendar(calendar: &CalendarToml, name: Option<&str>) -> Result<Cal> {
    let name = name.unwrap_or(&calendar.name);
    let cal = Cal::try_from_name(name).with_context(|| {
        format!("failed to load calendar {name:?}, expected one of {CALENDAR_NAMES:?}")
    })?;
    Ok(cal.with_holidays(calendar.extra_holidays.iter().copied()))
}
