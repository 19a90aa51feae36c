use clap::{Args, Subcommand};
use fit_diary_core::{HabitCatalog, HabitData, JsonFileStore};

use super::OutputFormat;

#[derive(Args)]
pub struct HabitCommand {
    #[command(subcommand)]
    pub command: HabitSubcommand,
}

#[derive(Subcommand)]
pub enum HabitSubcommand {
    /// Show the habits you can pick from
    Presets {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the habits you picked
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Pick a habit by preset ID
    Add {
        /// Preset habit ID
        id: String,
    },

    /// Drop a picked habit
    Remove {
        /// Habit ID
        id: String,
    },
}

impl HabitCommand {
    pub fn run(&self, store: &JsonFileStore) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = HabitCatalog::new(store);

        match &self.command {
            HabitSubcommand::Presets { format } => print_habits(&catalog.presets(), format),
            HabitSubcommand::List { format } => print_habits(&catalog.list(), format),

            HabitSubcommand::Add { id } => {
                let habit = catalog
                    .preset(id)
                    .ok_or_else(|| format!("Habit not found: {}", id))?;
                let title = habit.title.clone();

                if catalog.add(habit)? {
                    println!("Added habit: {}", title);
                } else {
                    println!("Habit already added: {}", title);
                }
                Ok(())
            }

            HabitSubcommand::Remove { id } => {
                if !catalog.remove(id)? {
                    return Err(format!("Habit not found: {}", id).into());
                }
                println!("Removed habit {}", id);
                Ok(())
            }
        }
    }
}

fn print_habits(
    habits: &[HabitData],
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(habits)?);
        }
        OutputFormat::Text => {
            if habits.is_empty() {
                println!("No habits found.");
            }
            for habit in habits {
                println!("[{}] {}", habit.id, habit);
                println!();
            }
        }
    }
    Ok(())
}
