//! Calendar command: print business days for a month or a year.

use anyhow::Result;
use tracing::{info_span, warn};

use hiring_timeline::scheduling::{try_ndt, DateRoll};

use crate::cli::CalendarArgs;
use crate::{config, convert};

pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let config = config::load(args.config.as_deref())?;
    let cal = convert::build_calendar(&config.calendar, args.calendar.as_deref())?;

    let first = try_ndt(args.year, u32::from(args.month.unwrap_or(1)), 1)?;
    if let Err(err) = cal.check_coverage(&first) {
        warn!(%err, "printing weekends only");
    }

    let out = match args.month {
        Some(month) => cal.print_month(args.year, month),
        None => cal.print_year(args.year),
    };
    println!("{out}");
    Ok(())
}
