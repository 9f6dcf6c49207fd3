use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Hiring pipeline timeline projector.
#[derive(Parser)]
#[command(
    name = "hiring-timeline",
    version,
    about = "Project hiring pipeline stages over a business day calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Project the stages of a hiring pipeline from its anchor dates.
    Project(ProjectArgs),
    /// Print a month or year of a business day calendar.
    Calendar(CalendarArgs),
}

/// Output format of a projected timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Arguments for the `project` subcommand.
///
/// Anchor dates are ISO formatted (`YYYY-MM-DD`) and default to today.
#[derive(clap::Args)]
pub struct ProjectArgs {
    /// RC received date.
    #[arg(long)]
    pub rc: Option<NaiveDate>,

    /// Profile alignment date.
    #[arg(long)]
    pub alignment: Option<NaiveDate>,

    /// First day of the job posting.
    #[arg(long = "posting-start")]
    pub posting_start: Option<NaiveDate>,

    /// Last day of the job posting, derived from the posting start when omitted.
    #[arg(long = "posting-end")]
    pub posting_end: Option<NaiveDate>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the named holiday calendar from config.
    #[arg(long)]
    pub calendar: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Year to print.
    #[arg(long)]
    pub year: i32,

    /// Print a single month (1-12) instead of the whole year.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the named holiday calendar from config.
    #[arg(long)]
    pub calendar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hiring-timeline").chain(args.iter().copied()))
    }

    #[test]
    fn project_defaults() {
        let cli = parse(&[
            "project",
            "--rc",
            "2024-03-04",
            "--posting-start",
            "2024-03-05",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 0);
        let Command::Project(args) = cli.command else {
            panic!("expected the project subcommand");
        };
        assert_eq!(args.rc, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(args.posting_start, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(args.alignment, None);
        assert_eq!(args.posting_end, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.config.is_none());
    }

    #[test]
    fn project_explicit_posting_end_and_json() {
        let cli = parse(&[
            "-vv",
            "project",
            "--posting-end",
            "2024-03-26",
            "--format",
            "json",
            "--calendar",
            "bus",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Project(args) = cli.command else {
            panic!("expected the project subcommand");
        };
        assert_eq!(args.posting_end, NaiveDate::from_ymd_opt(2024, 3, 26));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.calendar.as_deref(), Some("bus"));
    }

    #[test]
    fn project_rejects_bad_date() {
        assert!(parse(&["project", "--rc", "04/03/2024"]).is_err());
        assert!(parse(&["project", "--posting-end", "2023-02-29"]).is_err());
    }

    #[test]
    fn calendar_month_range() {
        let cli = parse(&["calendar", "--year", "2024", "--month", "12"]).unwrap();
        let Command::Calendar(args) = cli.command else {
            panic!("expected the calendar subcommand");
        };
        assert_eq!(args.year, 2024);
        assert_eq!(args.month, Some(12));

        assert!(parse(&["calendar", "--year", "2024", "--month", "13"]).is_err());
        assert!(parse(&["calendar", "--year", "2024", "--month", "0"]).is_err());
        assert!(parse(&["calendar", "--month", "3"]).is_err());
    }
}
