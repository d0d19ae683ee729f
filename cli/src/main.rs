mod config;
mod output;

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use entity::{EmployeeDraft, validate_draft};
use platform_api::{EmployeeApi, HttpEmployeeApi};
use platform_obs::{ObsConfig, init_tracing};
use store::EmployeeStore;
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "directory", version, about = "Employee directory console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List employees, optionally narrowed by a search term.
    List {
        /// Case-insensitive match against name or email.
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a new employee record.
    Add(DraftArgs),
    /// Update an existing employee.
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete an employee.
    Remove {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct DraftArgs {
    /// Full name.
    #[arg(long)]
    name: String,
    /// Contact email.
    #[arg(long)]
    email: String,
    /// Job title.
    #[arg(long)]
    position: String,
}

impl From<DraftArgs> for EmployeeDraft {
    fn from(value: DraftArgs) -> Self {
        EmployeeDraft::new(value.name, value.email, value.position)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let api = HttpEmployeeApi::new(&config.api_base)
        .with_context(|| format!("cannot build a client for {}", config.api_base))?;
    let mut store = EmployeeStore::new(api);
    match cli.command {
        Command::List { search } => run_list(&mut store, search).await,
        Command::Add(draft) => run_add(&mut store, draft.into()).await,
        Command::Edit { id, draft } => run_edit(&mut store, &id, draft.into()).await,
        Command::Remove { id, yes } => run_remove(&mut store, &id, yes).await,
    }
}

async fn run_list<A: EmployeeApi>(
    store: &mut EmployeeStore<A>,
    search: Option<String>,
) -> Result<()> {
    store.fetch_all().await;
    if let Some(err) = &store.state().error {
        bail!("could not load employees: {err}");
    }
    if let Some(term) = search {
        store.set_search(term);
    }
    let total = store.items().len();
    if total == 0 {
        println!("No employees yet.");
        return Ok(());
    }
    output::print_table(&store.filtered(), total);
    Ok(())
}

async fn run_add<A: EmployeeApi>(store: &mut EmployeeStore<A>, draft: EmployeeDraft) -> Result<()> {
    ensure_valid(&draft)?;
    let created = store
        .add(&draft)
        .await
        .context("could not create employee")?;
    info!(id = %created.id, "employee created");
    println!(
        "Created {} <{}> ({})",
        created.name, created.email, created.position
    );
    Ok(())
}

async fn run_edit<A: EmployeeApi>(
    store: &mut EmployeeStore<A>,
    id: &str,
    draft: EmployeeDraft,
) -> Result<()> {
    ensure_valid(&draft)?;
    let updated = store
        .edit(id, &draft)
        .await
        .with_context(|| format!("could not update employee {id}"))?;
    info!(id = %updated.id, "employee updated");
    println!(
        "Updated {} <{}> ({})",
        updated.name, updated.email, updated.position
    );
    Ok(())
}

async fn run_remove<A: EmployeeApi>(store: &mut EmployeeStore<A>, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm("This action cannot be undone. Are you sure?")? {
        println!("Aborted.");
        return Ok(());
    }
    store
        .remove(id)
        .await
        .with_context(|| format!("could not delete employee {id}"))?;
    println!("Deleted {id}.");
    Ok(())
}

/// Client-side validation; nothing is sent to the service on an invalid draft.
fn ensure_valid(draft: &EmployeeDraft) -> Result<()> {
    let errors = validate_draft(draft);
    if errors.is_empty() {
        return Ok(());
    }
    for (field, message) in &errors {
        eprintln!("{field}: {message}");
    }
    bail!("submission rejected; fix the fields above");
}

fn confirm(message: &str) -> Result<bool> {
    print!("{message} [y/N] ");
    std::io::stdout().flush().context("flush stdout")?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
