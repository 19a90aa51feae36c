use clap::{Args, Subcommand};
use fit_diary_core::{JsonFileStore, UserSettings};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show your profile
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Set your daily calorie goal
    Goal {
        /// Calories per day
        calories: f64,
    },

    /// Set your name or email
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Finish onboarding, storing your goal
    Onboard {
        /// Calories per day (defaults to the configured default goal)
        #[arg(long)]
        goal: Option<f64>,
    },

    /// Mark this device as logged in
    Login,

    /// Mark this device as logged out
    Logout,
}

impl ProfileCommand {
    pub fn run(
        &self,
        store: &JsonFileStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let settings = UserSettings::new(store);

        match &self.command {
            ProfileSubcommand::Show { format } => {
                let profile = settings.profile();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&profile)?);
                    }
                    OutputFormat::Text => {
                        println!("Name:       {}", profile.name.as_deref().unwrap_or("-"));
                        println!("Email:      {}", profile.email.as_deref().unwrap_or("-"));
                        match profile.goal {
                            Some(goal) => println!("Goal:       {} kcal", goal),
                            None => println!(
                                "Goal:       {} kcal (default)",
                                config.default_goal.value
                            ),
                        }
                        println!(
                            "Onboarded:  {}",
                            if profile.onboarding_complete { "yes" } else { "no" }
                        );
                        println!(
                            "Logged in:  {}",
                            if profile.logged_in { "yes" } else { "no" }
                        );
                    }
                }
                Ok(())
            }

            ProfileSubcommand::Goal { calories } => {
                settings.set_goal(*calories)?;
                println!("Goal set to {} kcal", calories.trunc());
                Ok(())
            }

            ProfileSubcommand::Set { name, email } => {
                if name.is_none() && email.is_none() {
                    return Err("Nothing to set. Use --name and/or --email.".into());
                }
                if let Some(name) = name {
                    if !settings.set_name(name)? {
                        return Err("Name cannot be empty".into());
                    }
                    println!("Name set to {}", name.trim());
                }
                if let Some(email) = email {
                    if !settings.set_email(email)? {
                        return Err("Email cannot be empty".into());
                    }
                    println!("Email set to {}", email.trim());
                }
                Ok(())
            }

            ProfileSubcommand::Onboard { goal } => {
                if settings.onboarding_complete() {
                    println!("Onboarding already complete.");
                    return Ok(());
                }
                let goal = goal.unwrap_or(config.default_goal.value);
                settings.complete_onboarding(goal)?;
                println!("Welcome! Your daily goal is {} kcal.", goal.trunc());
                Ok(())
            }

            ProfileSubcommand::Login => {
                if settings.email().is_none() {
                    return Err(
                        "No account on file. Run 'fit profile set --email <EMAIL>' first.".into(),
                    );
                }
                settings.set_logged_in(true)?;
                println!("Logged in.");
                Ok(())
            }

            ProfileSubcommand::Logout => {
                settings.set_logged_in(false)?;
                println!("Logged out.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSource, ConfigValue};
    use tempfile::TempDir;

    fn setup() -> (JsonFileStore, Config, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: ConfigValue::new(temp_dir.path().to_path_buf(), ConfigSource::Default),
            default_goal: ConfigValue::new(2500.0, ConfigSource::Default),
            config_file: None,
        };
        (config.store(), config, temp_dir)
    }

    fn run(
        store: &JsonFileStore,
        config: &Config,
        command: ProfileSubcommand,
    ) -> Result<(), Box<dyn std::error::Error>> {
        ProfileCommand { command }.run(store, config)
    }

    #[test]
    fn test_onboard_uses_default_goal() {
        let (store, config, _temp) = setup();

        run(&store, &config, ProfileSubcommand::Onboard { goal: None }).unwrap();

        let settings = UserSettings::new(&store);
        assert!(settings.onboarding_complete());
        assert_eq!(settings.goal(), Some(2500.0));
    }

    #[test]
    fn test_onboard_twice_keeps_goal() {
        let (store, config, _temp) = setup();

        run(&store, &config, ProfileSubcommand::Onboard { goal: Some(1900.0) }).unwrap();
        run(&store, &config, ProfileSubcommand::Onboard { goal: Some(3000.0) }).unwrap();
        assert_eq!(UserSettings::new(&store).goal(), Some(1900.0));
    }

    #[test]
    fn test_goal_must_be_positive() {
        let (store, config, _temp) = setup();
        assert!(run(&store, &config, ProfileSubcommand::Goal { calories: 0.0 }).is_err());
        assert!(UserSettings::new(&store).goal().is_none());
    }

    #[test]
    fn test_login_requires_email() {
        let (store, config, _temp) = setup();

        assert!(run(&store, &config, ProfileSubcommand::Login).is_err());

        run(
            &store,
            &config,
            ProfileSubcommand::Set {
                name: Some("Sam".to_string()),
                email: Some("sam@example.com".to_string()),
            },
        )
        .unwrap();
        run(&store, &config, ProfileSubcommand::Login).unwrap();
        assert!(UserSettings::new(&store).logged_in());

        run(&store, &config, ProfileSubcommand::Logout).unwrap();
        assert!(!UserSettings::new(&store).logged_in());
    }

    #[test]
    fn test_set_requires_a_field() {
        let (store, config, _temp) = setup();
        let result = run(
            &store,
            &config,
            ProfileSubcommand::Set {
                name: None,
                email: None,
            },
        );
        assert!(result.is_err());
    }
}
