//! caseflow CLI — operator interface to the assignment engine.

use std::path::PathBuf;
use std::sync::Arc;

use caseflow::config::Config;
use caseflow::engine::{AssignOutcome, Engine};
use caseflow::model::{ItemId, Priority, Role, StaffMember, WorkItem};
use caseflow::store::json::JsonStore;
use caseflow::telemetry::init_tracing;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caseflow", about = "Caseworker assignment engine")]
struct Cli {
    /// JSON store file (overrides CASEFLOW_STORE)
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Auto-assign one item to the best available caseworker
    Assign {
        /// Item ID (full UUID or prefix)
        id: String,
    },
    /// Escalate all open items past their SLA age thresholds
    Escalate,
    /// Move excess items away from overloaded caseworkers
    Rebalance,
    /// Work item operations
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
    /// Staff directory operations
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// Add a new pending item
    Add {
        /// Category classifier (e.g. "noise", "billing")
        category: String,
        /// Priority: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List all items
    List,
    /// List recorded escalations
    Escalations,
}

#[derive(Subcommand)]
enum StaffAction {
    /// Add a staff member
    Add {
        name: String,
        /// Role: caseworker, supervisor, admin
        #[arg(long, default_value = "caseworker")]
        role: Role,
    },
    /// List all staff
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.log_level)?;

    let path = cli.store.unwrap_or_else(|| config.store_path.clone());
    let store = Arc::new(JsonStore::open(&path)?);
    let engine = Engine::with_config(store.clone(), store.clone(), config.engine_config());

    match cli.command {
        Command::Assign { id } => cmd_assign(&engine, &store, &id).await,
        Command::Escalate => {
            let report = engine.check_and_escalate_overdue().await?;
            println!(
                "Scanned {} open item(s): {} escalation(s) recorded, {} failed",
                report.scanned, report.escalated, report.failed
            );
            Ok(())
        }
        Command::Rebalance => {
            let report = engine.rebalance_workload().await?;
            println!(
                "{} caseworker(s), {} overloaded: {} item(s) reassigned, {} failed",
                report.staff_count, report.overloaded, report.reassigned, report.failed
            );
            Ok(())
        }
        Command::Item { action } => match action {
            ItemAction::Add { category, priority } => cmd_item_add(&store, category, priority),
            ItemAction::List => cmd_item_list(&store),
            ItemAction::Escalations => cmd_escalations(&store),
        },
        Command::Staff { action } => match action {
            StaffAction::Add { name, role } => cmd_staff_add(&store, name, role),
            StaffAction::List => cmd_staff_list(&store),
        },
    }
}

async fn cmd_assign(engine: &Engine, store: &JsonStore, id_str: &str) -> anyhow::Result<()> {
    let id = resolve_item_id(store, id_str)?;

    match engine.auto_assign(id).await? {
        AssignOutcome::Assigned(staff) => println!("Assigned {id} to {staff}"),
        AssignOutcome::AlreadyAssigned(staff) => {
            println!("Already assigned to {staff}, left untouched")
        }
        AssignOutcome::NotOpen => println!("Item {id} is resolved/closed, not assignable"),
        AssignOutcome::NoCaseworkers => println!("No caseworkers available, item left unassigned"),
    }
    Ok(())
}

/// Support prefix matching — find the item whose ID starts with the given string.
fn resolve_item_id(store: &JsonStore, id_str: &str) -> anyhow::Result<ItemId> {
    if id_str.len() == 36 {
        return Ok(ItemId(uuid::Uuid::parse_str(id_str)?));
    }

    let items = store.items()?;
    let matches: Vec<_> = items
        .iter()
        .filter(|item| item.id.0.to_string().starts_with(id_str))
        .collect();
    match matches.len() {
        0 => anyhow::bail!("no work item matching prefix '{id_str}'"),
        1 => Ok(matches[0].id),
        n => anyhow::bail!("{n} work items match prefix '{id_str}' — be more specific"),
    }
}

fn cmd_item_add(store: &JsonStore, category: String, priority: Priority) -> anyhow::Result<()> {
    let item = WorkItem::new(category, priority);
    let id = item.id;
    store.insert_item(item)?;
    println!("Created: {id} (status: pending)");
    Ok(())
}

fn cmd_item_list(store: &JsonStore) -> anyhow::Result<()> {
    let items = store.items()?;
    if items.is_empty() {
        println!("No work items.");
        return Ok(());
    }

    println!(
        "{:<8}  {:<16}  {:<12}  {:<6}  {:<8}  CREATED",
        "ID", "CATEGORY", "STATUS", "PRI", "ASSIGNEE"
    );
    println!("{}", "-".repeat(72));
    for item in &items {
        let assignee = item
            .assigned_to
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8}  {:<16}  {:<12}  {:<6}  {:<8}  {}",
            item.id.to_string(),
            item.category,
            item.status.to_string(),
            item.priority.to_string(),
            assignee,
            item.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!("\n{} item(s)", items.len());
    Ok(())
}

fn cmd_escalations(store: &JsonStore) -> anyhow::Result<()> {
    let escalations = store.escalations()?;
    if escalations.is_empty() {
        println!("No escalations recorded.");
        return Ok(());
    }
    for record in &escalations {
        println!(
            "{}  {}  {}",
            record.at.format("%Y-%m-%d %H:%M"),
            record.item_id,
            record.reason
        );
    }
    Ok(())
}

fn cmd_staff_add(store: &JsonStore, name: String, role: Role) -> anyhow::Result<()> {
    let member = StaffMember::new(name, role);
    let id = member.id;
    store.insert_staff(member)?;
    println!("Added: {id} ({role})");
    Ok(())
}

fn cmd_staff_list(store: &JsonStore) -> anyhow::Result<()> {
    let staff = store.staff()?;
    if staff.is_empty() {
        println!("No staff.");
        return Ok(());
    }
    println!("{:<8}  {:<20}  ROLE", "ID", "NAME");
    println!("{}", "-".repeat(44));
    for member in &staff {
        println!(
            "{:<8}  {:<20}  {}",
            member.id.to_string(),
            member.name,
            member.role
        );
    }
    Ok(())
}
