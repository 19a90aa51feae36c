mod config_cmd;
mod diary;
mod habit;
mod plan;
mod profile;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;

pub use config_cmd::ConfigCommand;
pub use diary::DiaryCommand;
pub use habit::HabitCommand;
pub use plan::PlanCommand;
pub use profile::ProfileCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses `YYYY-MM-DD`, defaulting to today in local time.
pub(crate) fn parse_date(date: &Option<String>) -> Result<NaiveDate, String> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", d)),
        None => Ok(Local::now().date_naive()),
    }
}
