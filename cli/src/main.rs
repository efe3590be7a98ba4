//! Municipal project-funding showcase — command-line front end.
//!
//! Plays the presentation role of the original site: each invocation
//! restores the session from the file-backed store, runs one gate or
//! ledger operation, and prints the result. The admin credential pair
//! comes from the environment (`ADMIN_USERNAME` / `ADMIN_PASSWORD`),
//! never from the binary itself.

mod config;
mod format;
mod store;

use std::cmp::Reverse;
use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pledges_core::{
    AdminCredentials, App, Amount, Catalog, StaticCredentials, Transaction, TransactionKind,
};

use config::Config;
use store::FileStore;

#[derive(Parser)]
#[command(name = "pledges", version, about = "Municipal project-funding showcase")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog projects with funding progress.
    Projects,
    /// Record a pledge of support for a project.
    Pledge {
        #[arg(long)]
        project: String,
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        supporter: String,
        /// Government sphere of the supporter (federal, estadual, municipal).
        #[arg(long)]
        sphere: String,
        /// Department or secretariat acronym.
        #[arg(long)]
        department: String,
    },
    /// Remove part of a project's collected amount (admin only).
    Adjust {
        #[arg(long)]
        project: String,
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        reason: String,
    },
    /// Authenticate as the administrator.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// End the administrator session.
    Logout,
    /// Show recorded transactions, newest first.
    History {
        /// Restrict to a single project id.
        #[arg(long)]
        project: Option<String>,
    },
    /// Aggregate totals across all projects.
    Summary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store = FileStore::open(&config.data_path)?;
    let verifier = StaticCredentials::new(&config.admin_username, &config.admin_password);
    let mut app = App::init(store, Box::new(verifier));

    match cli.command {
        Command::Projects => print_projects(&app),
        Command::Pledge {
            project,
            amount,
            supporter,
            sphere,
            department,
        } => {
            let transaction =
                app.record_pledge(&project, amount, &supporter, &sphere, &department)?;
            println!(
                "Pledge {} recorded: {} for {}",
                transaction.id,
                format::brl(amount),
                project
            );
            print_balance(&app, &project);
        }
        Command::Adjust {
            project,
            amount,
            reason,
        } => {
            let transaction = app.adjust_collected(&project, amount, &reason)?;
            println!(
                "Adjustment {} recorded: -{} from {} ({})",
                transaction.id,
                format::brl(amount),
                project,
                reason
            );
            print_balance(&app, &project);
        }
        Command::Login { username, password } => {
            let credentials = AdminCredentials { username, password };
            if app.login(&credentials)? {
                println!("Logged in as administrator.");
            } else {
                // Deliberately generic; no hint which field was wrong.
                println!("Invalid credentials.");
            }
        }
        Command::Logout => {
            app.logout();
            println!("Logged out.");
        }
        Command::History { project } => print_history(&app, project.as_deref()),
        Command::Summary => {
            let summary = app.ledger().summary();
            println!("Supports:    {}", summary.additions);
            println!("Adjustments: {}", summary.removals);
            println!("Net total:   {}", format::brl(summary.net_total));
        }
    }

    Ok(())
}

fn print_projects(app: &App<FileStore>) {
    for project in app.catalog().projects() {
        println!("{} ({})", project.title, project.id);
        println!(
            "  {} of {}  ({:.1}%)",
            format::brl(project.collected),
            format::brl(project.target),
            Catalog::progress(project)
        );
    }
}

fn print_balance(app: &App<FileStore>, project_id: &str) {
    if let Some(project) = app.catalog().get(project_id) {
        println!(
            "{} now at {} of {}",
            project.title,
            format::brl(project.collected),
            format::brl(project.target)
        );
    }
}

fn print_history(app: &App<FileStore>, project_id: Option<&str>) {
    match project_id {
        Some(project_id) => {
            let mut entries = app.ledger().entries_for(project_id);
            entries.sort_by_key(|t| Reverse(t.date));
            if entries.is_empty() {
                println!("No transactions for {project_id}.");
                return;
            }
            for entry in entries {
                print_entry(entry);
            }
        }
        None => {
            // Grouped by project, newest first inside each group, the way
            // the admin dashboard lays it out.
            let mut grouped: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
            for entry in app.ledger().entries() {
                grouped.entry(&entry.project_id).or_default().push(entry);
            }
            if grouped.is_empty() {
                println!("No transactions recorded.");
                return;
            }
            for (project_id, mut entries) in grouped {
                let title = app
                    .catalog()
                    .get(project_id)
                    .map(|p| p.title.as_str())
                    .unwrap_or(project_id);
                println!("{title}:");
                entries.sort_by_key(|t| Reverse(t.date));
                for entry in entries {
                    print_entry(entry);
                }
            }
        }
    }
}

fn print_entry(entry: &Transaction) {
    match &entry.kind {
        TransactionKind::Add {
            supporter,
            government_sphere,
            department,
        } => println!(
            "  {}  +{}  support from {} ({} / {})",
            format::date(entry.date),
            format::brl(entry.amount),
            supporter,
            government_sphere,
            department
        ),
        TransactionKind::Remove { reason } => println!(
            "  {}  -{}  adjustment: {}",
            format::date(entry.date),
            format::brl(entry.amount),
            reason
        ),
    }
}
