use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning(format!("No config file found at {:?}", path));
            }
        }

        if *check {
            let mut missing = Vec::new();
            if cfg.database.is_empty() {
                missing.push("database");
            }
            if cfg.user_email.is_empty() {
                missing.push("user_email");
            }

            if missing.is_empty() {
                success("Configuration OK");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }
    }
    Ok(())
}
