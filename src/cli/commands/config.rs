use crate::cli::parser::Commands;
use crate::config::{Config, DbSettings};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand. Never connects to the database.
pub fn handle(cmd: &Commands, cfg: &Config, sqlite: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config || !*check {
            let path = Config::config_file();
            let origin = if path.exists() {
                path.display().to_string()
            } else {
                "built-in defaults".to_string()
            };
            println!("📄 Current configuration ({origin}):\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let mut failed = false;

            for problem in cfg.problems() {
                warning(problem);
                failed = true;
            }

            match sqlite {
                Some(p) if p.is_file() => info(format!("SQLite snapshot: {}", p.display())),
                Some(p) => {
                    warning(format!("SQLite snapshot not found: {}", p.display()));
                    failed = true;
                }
                None => match DbSettings::from_env() {
                    Ok(settings) => info(format!("PostgreSQL: {}", settings.masked_url())),
                    Err(e) => {
                        warning(e);
                        failed = true;
                    }
                },
            }

            if failed {
                return Err(AppError::Config("configuration check failed".to_string()));
            }
            success("Configuration looks good.");
        }
    }
    Ok(())
}
