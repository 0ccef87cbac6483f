//! prisi-vault: command-line driver for the Prisi Ops vault tour.
//!
//! Each invocation hydrates a session from the persisted flags, applies the
//! requested actions, and prints the result.
//!
//! ## Subcommands
//!
//! - `status`, `dispatch`, `next`, `prev`, `visited`, `reset`: session control
//! - `sections`, `profile`, `case-studies`, `workflows`: content
//! - `contact`: submit the contact form

mod actions;
mod logging;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vault_core::{
    catalog, ContactForm, ContactStatus, ContactSubmission, DisabledStore, FileStore,
    HttpTransport, KeyValueStore, SessionController, StorageConfig, VaultConfig,
};

#[derive(Parser)]
#[command(name = "prisi-vault")]
#[command(about = "Walk the Prisi Ops vault from the terminal")]
#[command(version)]
struct Cli {
    /// Storage root (default: ~/.prisi-ops)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Keep the session in memory only; nothing is read or written
    #[arg(long, global = true)]
    no_storage: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current session
    Status,

    /// Apply actions in order (unlock, enter, navigate=N, unlock-section=N, a section id, or JSON)
    Dispatch {
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<String>,
    },

    /// Move to the next section
    Next,

    /// Move to the previous section
    Prev,

    /// Print whether a previous visit completed the entry sequence
    Visited,

    /// Forget the session and clear persisted flags
    Reset,

    /// List the tour sections
    Sections,

    /// Show the profile, expertise, and contact details
    Profile,

    /// List case studies, or show one in detail
    CaseStudies {
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// List agent workflows, or show one in detail
    Workflows {
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// One of the standard subjects (default: General Inquiry)
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let storage = cli
        .root
        .clone()
        .map(StorageConfig::with_root)
        .unwrap_or_default();

    let _logging_guard = if cli.no_storage {
        logging::init_stderr();
        None
    } else {
        logging::init(&storage.logs_dir())
    };

    if let Err(e) = run(cli, &storage) {
        tracing::error!(error = %e, "prisi-vault failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, storage: &StorageConfig) -> Result<(), String> {
    let store: Box<dyn KeyValueStore> = if cli.no_storage {
        Box::new(DisabledStore)
    } else {
        Box::new(FileStore::new(storage.storage_file()))
    };
    let json = cli.json;

    match cli.command {
        Commands::Status => {
            let session = SessionController::new(store);
            report::print_session(&session, json)
        }
        Commands::Dispatch {
            actions: raw_actions,
        } => {
            let parsed = raw_actions
                .iter()
                .map(|raw| actions::parse_action(raw))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.to_string())?;

            let mut session = SessionController::new(store);
            for action in parsed {
                session.dispatch(action);
            }
            report::print_session(&session, json)
        }
        Commands::Next => {
            let mut session = SessionController::new(store);
            session.next();
            report::print_session(&session, json)
        }
        Commands::Prev => {
            let mut session = SessionController::new(store);
            session.previous();
            report::print_session(&session, json)
        }
        Commands::Visited => {
            let session = SessionController::new(store);
            println!("{}", session.has_visited_before());
            Ok(())
        }
        Commands::Reset => {
            let mut session = SessionController::new(store);
            session.reset();
            report::print_session(&session, json)
        }
        Commands::Sections => {
            let session = SessionController::new(store);
            report::print_sections(session.state(), json)
        }
        Commands::Profile => report::print_profile(catalog()?, json),
        Commands::CaseStudies { id } => {
            let catalog = catalog()?;
            match id {
                Some(id) => report::print_case_study(catalog.case_study(&id)?, json),
                None => report::print_case_study_list(catalog, json),
            }
        }
        Commands::Workflows { id } => {
            let catalog = catalog()?;
            match id {
                Some(id) => report::print_workflow(catalog.workflow(&id)?, json),
                None => report::print_workflow_list(catalog, json),
            }
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let config = VaultConfig::load(&storage.config_file()).with_env_overrides();
            let transport = HttpTransport::from_config(&config)?;
            let form = ContactForm {
                name,
                email,
                subject: subject.unwrap_or_else(|| ContactForm::default().subject),
                message,
            };

            let mut submission = ContactSubmission::new(form);
            let status = submission.submit(&transport);
            report::print_contact_status(status, submission.last_error(), json)?;
            match status {
                ContactStatus::Success => Ok(()),
                _ => Err(submission
                    .last_error()
                    .unwrap_or("contact form not sent")
                    .to_string()),
            }
        }
    }
}
