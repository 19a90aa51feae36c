use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fit_diary_core::{
    DiaryLedger, DiaryTarget, JsonFileStore, Notice, NoticeLevel, Notifier, SaveOutcome,
    UpdateOutcome,
};

use super::{parse_date, OutputFormat};
use crate::config::Config;
use crate::drafts::{clear_draft, load_day, store_draft};

/// Prints ledger notices to the terminal.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Failure => eprintln!("{}", notice),
            NoticeLevel::Success | NoticeLevel::Info => println!("{}", notice),
        }
    }
}

#[derive(Args)]
pub struct DiaryCommand {
    #[command(subcommand)]
    pub command: DiarySubcommand,
}

#[derive(Subcommand)]
pub enum DiarySubcommand {
    /// Add an amount to a meal slot, water or exercise
    Add {
        /// breakfast, lunch, dinner, snacks, water or exercise
        target: String,

        /// Calories, or glasses for water. Negative amounts correct a mistake.
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show the diary for a day
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Save a day; it cannot be edited afterwards
    Save {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl DiaryCommand {
    pub fn run(
        &self,
        store: &JsonFileStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut ledger =
            DiaryLedger::new(store, config.ledger_config()).with_notifier(ConsoleNotifier);

        match &self.command {
            DiarySubcommand::Add {
                target,
                amount,
                date,
            } => {
                let date = parse_date(date)?;
                let target: DiaryTarget = target.parse()?;
                self.add(&mut ledger, date, target, *amount)
            }
            DiarySubcommand::Show { date, format } => {
                let date = parse_date(date)?;
                self.show(&mut ledger, date, format)
            }
            DiarySubcommand::Save { date } => {
                let date = parse_date(date)?;
                self.save(&mut ledger, date)
            }
        }
    }

    fn add(
        &self,
        ledger: &mut DiaryLedger<&JsonFileStore>,
        date: NaiveDate,
        target: DiaryTarget,
        amount: f64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        load_day(ledger, date);

        match ledger.update_diary(date, target, amount) {
            UpdateOutcome::Applied { value } => {
                let entry = ledger.read_entry(date);
                store_draft(*ledger.store(), date, &entry)?;

                let unit = match target {
                    DiaryTarget::Food(slot) => slot.unit(),
                    DiaryTarget::Exercise => "kcal",
                };
                println!("{} on {}: {} {}", target, date, value, unit);
                println!("Remaining: {}", entry.remaining());
                Ok(())
            }
            UpdateOutcome::RejectedReadOnly => {
                Err(format!("Diary for {} is saved and can no longer be edited", date).into())
            }
            UpdateOutcome::RejectedInvalidAmount if !amount.is_finite() => {
                Err(format!("Amount must be a finite number, got {}", amount).into())
            }
            UpdateOutcome::RejectedInvalidAmount => Err(format!(
                "Cannot add {} to {}: the total would drop below zero",
                amount, target
            )
            .into()),
        }
    }

    fn show(
        &self,
        ledger: &mut DiaryLedger<&JsonFileStore>,
        date: NaiveDate,
        format: &OutputFormat,
    ) -> Result<(), Box<dyn std::error::Error>> {
        load_day(ledger, date);
        let entry = ledger.read_entry(date);

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "date": date,
                    "entry": entry,
                    "summary": ledger.summary(date),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("Diary for {}", date);
                println!();
                print!("{}", entry);
            }
        }
        Ok(())
    }

    fn save(
        &self,
        ledger: &mut DiaryLedger<&JsonFileStore>,
        date: NaiveDate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        load_day(ledger, date);

        match ledger.save_diary_entry(date) {
            SaveOutcome::Saved => {
                if let Err(e) = clear_draft(*ledger.store(), date) {
                    tracing::warn!("Saved {} but could not remove its draft: {}", date, e);
                }
                Ok(())
            }
            SaveOutcome::NothingToSave => Ok(()),
            SaveOutcome::Failed(_) => Err(format!("Diary for {} was not saved", date).into()),
        }
    }
}
