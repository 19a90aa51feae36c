use clap::{Args, Subcommand};
use fit_diary_core::{FitnessPlan, JsonFileStore, PlanCatalog};

use super::OutputFormat;

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// List fitness plans
    List {
        /// Only show plans you have opted into
        #[arg(long)]
        opted_in: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a plan's steps and nutrition
    Show {
        /// Plan ID
        id: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Opt into a plan
    Join {
        /// Plan ID
        id: u32,
    },

    /// Opt out of a plan
    Leave {
        /// Plan ID
        id: u32,
    },

    /// Remove a plan from your catalog
    Remove {
        /// Plan ID
        id: u32,
    },
}

impl PlanCommand {
    pub fn run(&self, store: &JsonFileStore) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = PlanCatalog::new(store);
        catalog.seed_defaults()?;

        match &self.command {
            PlanSubcommand::List { opted_in, format } => {
                let plans = if *opted_in {
                    catalog.opted_in()
                } else {
                    catalog.list()
                };

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&plans)?);
                    }
                    OutputFormat::Text => {
                        if plans.is_empty() {
                            println!("No plans found.");
                        } else {
                            print_plan_table(&plans);
                        }
                    }
                }
                Ok(())
            }

            PlanSubcommand::Show { id, format } => {
                let plan = catalog
                    .get(*id)
                    .ok_or_else(|| format!("Plan not found: {}", id))?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&plan)?);
                    }
                    OutputFormat::Text => print!("{}", plan),
                }
                Ok(())
            }

            PlanSubcommand::Join { id } => {
                if !catalog.set_opt_in(*id, true)? {
                    return Err(format!("Plan not found: {}", id).into());
                }
                println!("Joined plan {}", id);
                Ok(())
            }

            PlanSubcommand::Leave { id } => {
                if !catalog.set_opt_in(*id, false)? {
                    return Err(format!("Plan not found: {}", id).into());
                }
                println!("Left plan {}", id);
                Ok(())
            }

            PlanSubcommand::Remove { id } => {
                if !catalog.delete(*id)? {
                    return Err(format!("Plan not found: {}", id).into());
                }
                println!("Removed plan {}", id);
                Ok(())
            }
        }
    }
}

fn print_plan_table(plans: &[FitnessPlan]) {
    println!("{:<4} {:<32} {:<12} {:<10}", "ID", "TITLE", "DURATION", "OPTED IN");
    println!("{}", "-".repeat(60));
    for plan in plans {
        println!(
            "{:<4} {:<32} {:<12} {:<10}",
            plan.id,
            truncate(&plan.title, 32),
            truncate(&plan.duration, 12),
            if plan.opt_in { "yes" } else { "" }
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
