//! Project command: build a timeline from anchor dates and print it.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use hiring_timeline::pipeline::{Anchors, Projector};

use crate::cli::{OutputFormat, ProjectArgs};
use crate::{config, convert, report};

pub fn run(args: ProjectArgs) -> Result<()> {
    let _cmd = info_span!("project").entered();
    let config = config::load(args.config.as_deref())?;
    let cal = convert::build_calendar(&config.calendar, args.calendar.as_deref())?;
    let policy = convert::build_policy(&config.policy, config.calendar.strict_coverage)?;

    let today = Local::now().date_naive();
    let anchors = Anchors::resolve(
        &cal,
        &policy,
        args.rc.unwrap_or(today),
        args.alignment.unwrap_or(today),
        args.posting_start.unwrap_or(today),
        args.posting_end,
    )
    .context("failed to derive the job posting end")?;
    info!(?anchors, "anchors resolved");

    let timeline = Projector::new(&cal, policy)
        .project(&anchors)
        .context("failed to project timeline")?;

    let out = match args.format {
        OutputFormat::Table => report::render_table(&timeline),
        OutputFormat::Json => report::render_json(&timeline)?,
    };
    println!("{out}");
    Ok(())
}
