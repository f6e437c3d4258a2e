mod backend;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod runtime;
mod session;
mod ui;
mod validate;

use crate::backend::{ApiClient, ClassApi};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_report, run_tui_mode, setup_session};
use crate::validate::validate_name;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive class dashboard
    Start {
        /// Backend base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Print the full class report and exit
    Report {
        /// Backend base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Add a new student
    Add {
        /// Name of the student to create
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Backend base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Remove a student
    Remove {
        /// Name of the student to delete
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Skip the interactive confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Backend base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Save a backend address as the default for future runs
    SetBackend {
        /// "local" or an http(s) URL
        #[arg(value_name = "URL")]
        base_url: String,
    },
    /// Clear the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start { base_url } => {
            let environment = resolve_environment(base_url);
            let session = setup_session(environment);
            run_tui_mode(session).await
        }
        Command::Report { base_url } => run_report(resolve_environment(base_url)).await,
        Command::Add { name, base_url } => {
            if let Err(error) = validate_name(&name) {
                crate::print_cmd_error!("Invalid name", &error.to_string());
                return Err(Box::from(error.to_string()));
            }
            let client = ApiClient::new(resolve_environment(base_url));
            match client.add_student(&name).await {
                Ok(()) => {
                    // Echo the stored record; grades and attendance start zeroed.
                    match client.get_student(&name).await {
                        Ok(student) => crate::print_cmd_success!(
                            "Student added",
                            "{} (average {:.2}, attendance {:.1}%)",
                            student.name,
                            student.average,
                            student.attendance
                        ),
                        Err(_) => crate::print_cmd_success!("Student added", "{}", name),
                    }
                    Ok(())
                }
                Err(error) => {
                    crate::print_cmd_error!("Could not add the student", &error.to_string());
                    Err(error.into())
                }
            }
        }
        Command::Remove {
            name,
            yes,
            base_url,
        } => {
            // No DELETE leaves the client without a confirmation.
            if !yes && !confirm_on_stdin(&name)? {
                crate::print_cmd_info!("Removal aborted", "{} was kept", name);
                return Ok(());
            }
            let client = ApiClient::new(resolve_environment(base_url));
            match client.remove_student(&name).await {
                Ok(()) => {
                    crate::print_cmd_success!("Student removed", "{}", name);
                    Ok(())
                }
                Err(error) => {
                    crate::print_cmd_error!("Could not remove the student", &error.to_string());
                    Err(error.into())
                }
            }
        }
        Command::SetBackend { base_url } => {
            let Ok(environment) = base_url.parse::<Environment>() else {
                crate::print_cmd_error!(
                    "Invalid backend address",
                    "expected \"local\" or an http(s) URL"
                );
                return Err(Box::from("invalid backend address"));
            };
            let config_path = get_config_path()?;
            Config::new(environment.base_url())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!("Backend saved", "{}", environment.base_url());
            Ok(())
        }
        Command::Reset => {
            println!("Clearing saved configuration...");
            let config_path = get_config_path()?;
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Backend resolution order: explicit flag, then the CLASSDASH_BACKEND
/// environment variable, then the saved configuration, then the local
/// default.
fn resolve_environment(flag: Option<String>) -> Environment {
    if let Some(url) = flag {
        return url
            .parse::<Environment>()
            .unwrap_or_else(|_| Environment::from_base_url(url.trim_end_matches('/')));
    }

    if let Ok(value) = std::env::var("CLASSDASH_BACKEND") {
        match value.parse::<Environment>() {
            Ok(environment) => return environment,
            Err(()) => {
                crate::print_cmd_warn!("Environment", "Ignoring invalid CLASSDASH_BACKEND: {}", value);
            }
        }
    }

    match get_config_path() {
        Ok(path) if path.exists() => match Config::load_from_file(&path) {
            Ok(config) => Environment::from_base_url(config.base_url),
            Err(error) => {
                crate::print_cmd_warn!(
                    "Config",
                    "Could not read {}: {}. Using the local default.",
                    path.display(),
                    error
                );
                Environment::default()
            }
        },
        _ => Environment::default(),
    }
}

/// Interactive y/N prompt for removals.
fn confirm_on_stdin(name: &str) -> Result<bool, std::io::Error> {
    print!("Remove {}? [y/N] ", name);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
