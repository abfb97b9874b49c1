//! Operator CLI over `vaccine_core`.
//!
//! # Responsibility
//! - Map flags and environment variables onto core configuration.
//! - Expose registry CRUD for local inspection and scripting.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rusqlite::Connection;
use std::path::PathBuf;
use vaccine_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, SqliteVaccineIoOperations,
    SqliteVaccineTypeIoOperations, Vaccine, VaccineBrowserManager, VaccineType,
    VaccineTypeBrowserManager,
};

#[derive(Debug, Parser)]
#[command(name = "vaccine_cli", version, about = "Vaccine registry maintenance")]
struct Cli {
    /// SQLite database file. Uses a throwaway in-memory database when absent.
    #[arg(long, env = "VACCINE_DB")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when absent.
    #[arg(long, env = "VACCINE_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error. Defaults to the build-mode level.
    #[arg(long, env = "VACCINE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints core linkage information.
    Ping,
    /// Adds a vaccine type.
    TypeAdd { code: String, description: String },
    /// Lists vaccine types ordered by description.
    TypeList,
    /// Adds a vaccine. Fails when the code is already in use.
    Add {
        code: String,
        description: String,
        #[arg(long = "type")]
        vaccine_type: String,
    },
    /// Updates an existing vaccine. Fails when the code is unknown.
    Update {
        code: String,
        description: String,
        #[arg(long = "type")]
        vaccine_type: String,
    },
    /// Removes a vaccine if present.
    Remove { code: String },
    /// Shows one vaccine with its type.
    Show { code: String },
    /// Lists vaccines ordered by description.
    List {
        #[arg(long = "type")]
        vaccine_type: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let conn = match cli.db.as_ref() {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };

    run(&conn, cli.command)
}

fn run(conn: &Connection, command: Command) -> Result<()> {
    let vaccine_types =
        VaccineTypeBrowserManager::new(SqliteVaccineTypeIoOperations::try_new(conn)?);
    let vaccines = VaccineBrowserManager::new(
        SqliteVaccineIoOperations::try_new(conn)?,
        SqliteVaccineTypeIoOperations::try_new(conn)?,
    );

    match command {
        Command::Ping => {
            println!("vaccine_core ping={}", vaccine_core::ping());
            println!("vaccine_core version={}", vaccine_core::core_version());
        }
        Command::TypeAdd { code, description } => {
            let created = vaccine_types.new_vaccine_type(&VaccineType::new(code, description))?;
            info!("event=cli_type_add module=cli status=ok code={}", created.code);
            println!("{}\t{}", created.code, created.description);
        }
        Command::TypeList => {
            for vaccine_type in vaccine_types.get_vaccine_types()? {
                println!("{}\t{}", vaccine_type.code, vaccine_type.description);
            }
        }
        Command::Add {
            code,
            description,
            vaccine_type,
        } => {
            let created = vaccines.new_vaccine(&Vaccine::new(code, description, vaccine_type))?;
            info!("event=cli_add module=cli status=ok code={}", created.code);
            print_vaccine(&created);
        }
        Command::Update {
            code,
            description,
            vaccine_type,
        } => {
            let updated =
                vaccines.update_vaccine(&Vaccine::new(code, description, vaccine_type))?;
            info!("event=cli_update module=cli status=ok code={}", updated.code);
            print_vaccine(&updated);
        }
        Command::Remove { code } => {
            let Some(vaccine) = vaccines.find_vaccine(&code)? else {
                println!("{code}\tnot present");
                return Ok(());
            };
            vaccines.delete_vaccine(&vaccine)?;
            info!("event=cli_remove module=cli status=ok code={}", code);
            println!("{code}\tremoved");
        }
        Command::Show { code } => {
            let Some(detail) = vaccines.find_vaccine_detail(&code)? else {
                bail!("vaccine `{code}` not found");
            };
            println!(
                "{}\t{}\t{}\t{}",
                detail.vaccine.code,
                detail.vaccine.description,
                detail.vaccine_type.code,
                detail.vaccine_type.description
            );
        }
        Command::List { vaccine_type } => {
            for vaccine in vaccines.get_vaccines(vaccine_type.as_deref())? {
                print_vaccine(&vaccine);
            }
        }
    }

    Ok(())
}

fn print_vaccine(vaccine: &Vaccine) {
    println!(
        "{}\t{}\t{}",
        vaccine.code, vaccine.description, vaccine.vaccine_type_code
    );
}
