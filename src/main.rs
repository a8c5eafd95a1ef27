// Copyright (c) 2026 KYC Console. All rights reserved.

mod backend;
mod cli_messages;
mod config;
mod consts;
mod logging;
mod models;
mod session;
mod ui;
mod views;
mod workers;

use crate::config::{Config, get_config_dir, get_config_path};
use crate::consts::cli_consts::{API_TOKEN_ENV, API_URL_ENV};
use crate::models::{KycAction, KycStatus, RecordId, parse_action, parse_status_filter};
use crate::session::{headless_mode, run_tui_mode, setup_session};
use crate::ui::StartScreen;
use crate::views::employees::DELETE_QUESTION;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal console for employee KYC review and employee administration
struct Args {
    /// Base URL of the KYC backend
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token for the KYC backend
    #[arg(long, global = true, env = API_TOKEN_ENV, hide_env_values = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the employee dashboard
    Dashboard {
        /// Disable background colors
        #[arg(long = "no-background-color", action = ArgAction::SetFalse)]
        with_background_color: bool,
    },
    /// Open the employee listing
    EmployeeList {
        /// Disable background colors
        #[arg(long = "no-background-color", action = ArgAction::SetFalse)]
        with_background_color: bool,
    },
    /// Print the KYC counters of the signed-in employee
    Stats,
    /// List assigned farmers
    Farmers {
        /// Only farmers whose name or contact number contains this text
        #[arg(long)]
        search: Option<String>,
        /// Only farmers with this KYC status (pending, approved, refer-back, rejected)
        #[arg(long, value_parser = parse_status_filter)]
        status: Option<KycStatus>,
    },
    /// Print the to-do buckets
    Todo,
    /// Print the signed-in employee's profile
    Profile,
    /// Approve, refer back or reject a farmer's KYC
    Kyc {
        /// approve, refer-back or reject
        #[arg(value_parser = parse_action)]
        action: KycAction,
        /// ID of the farmer
        farmer_id: RecordId,
        /// Required for refer-back and reject
        #[arg(long)]
        reason: Option<String>,
    },
    /// List employees
    Employees {
        /// Only employees whose name, designation or employee ID contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one employee's full record
    Employee {
        /// ID of the employee
        id: RecordId,
    },
    /// Delete an employee
    DeleteEmployee {
        /// ID of the employee
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Store the token (and --api-url, if given) in the config file
    Login,
    /// Clear the stored credentials.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    match args.command {
        Command::Login => {
            let token = args
                .token
                .filter(|t| !t.trim().is_empty())
                .ok_or("login requires --token <TOKEN>")?;
            let mut config = Config::load_or_default(&config_path)?;
            config.token = Some(token);
            if args.api_url.is_some() {
                config.api_url = args.api_url;
            }
            config.save(&config_path)?;
            print_cmd_success!("Credentials saved", "{}", config_path.display());
            return Ok(());
        }
        Command::Logout => {
            println!("Logging out and clearing configuration file...");
            return Config::clear(&config_path).map_err(Into::into);
        }
        _ => {}
    }

    let stored = Config::load_or_default(&config_path)?;
    let resolved = stored.resolve(args.api_url, args.token);

    match args.command {
        Command::Dashboard {
            with_background_color,
        } => {
            logging::init_file_logging(&get_config_dir()?.join("kyc-console.log"));
            let session = setup_session(resolved)?;
            run_tui_mode(session, StartScreen::Dashboard, with_background_color).await
        }
        Command::EmployeeList {
            with_background_color,
        } => {
            logging::init_file_logging(&get_config_dir()?.join("kyc-console.log"));
            let session = setup_session(resolved)?;
            run_tui_mode(session, StartScreen::Employees, with_background_color).await
        }
        command => {
            logging::init_console_logging();
            let outcome = match setup_session(resolved) {
                Ok(session) => run_command(session.backend.as_ref(), command).await,
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                print_cmd_error!(&e.to_string());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn run_command(backend: &dyn backend::KycBackend, command: Command) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    match command {
        Command::Stats => headless_mode::stats(backend, &mut out).await,
        Command::Farmers { search, status } => {
            headless_mode::farmers(backend, search.as_deref(), status, &mut out).await
        }
        Command::Todo => headless_mode::todo(backend, &mut out).await,
        Command::Profile => headless_mode::profile(backend, &mut out).await,
        Command::Kyc {
            action,
            farmer_id,
            reason,
        } => headless_mode::kyc(backend, action, &farmer_id, reason.as_deref()).await,
        Command::Employees { search } => {
            headless_mode::employees(backend, search.as_deref(), &mut out).await
        }
        Command::Employee { id } => headless_mode::employee(backend, &id, &mut out).await,
        Command::DeleteEmployee { id, yes } => {
            drop(out);
            if !yes && !headless_mode::confirm(DELETE_QUESTION)? {
                print_cmd_info!("Cancelled", "employee {} was not deleted", id);
                return Ok(());
            }
            headless_mode::delete_employee(backend, &id).await
        }
        Command::Dashboard { .. }
        | Command::EmployeeList { .. }
        | Command::Login
        | Command::Logout => Ok(()),
    }
}
