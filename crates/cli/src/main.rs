mod cli;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use campusfix_core::{
    config, Clock, Complaint, ComplaintId, Config, NewComplaint, Status, SystemClock,
};
use campusfix_store::{ComplaintStore, FileStore, KvStore, ReminderLedger};
use campusfix_tracker::{ComplaintLifecycle, ReminderPolicy, ReminderService};

use crate::cli::{Cli, Command};
use crate::output::ComplaintView;

struct App {
    clock: SystemClock,
    complaints: ComplaintStore,
    lifecycle: ComplaintLifecycle,
    service: ReminderService,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    config::load_dotenv();
    let args = Cli::parse();

    let mut config = Config::from_env();
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }
    config.log_summary();

    let store: Arc<dyn KvStore> = Arc::new(
        FileStore::new(&config.storage.data_dir).context("failed to open data directory")?,
    );
    let complaints = ComplaintStore::new(Arc::clone(&store));
    let ledger = ReminderLedger::new(store);
    let policy = ReminderPolicy::with_interval(config.reminder.interval());

    let app = App {
        clock: SystemClock,
        complaints: complaints.clone(),
        lifecycle: ComplaintLifecycle::new(complaints, ledger.clone()),
        service: ReminderService::new(ledger, policy),
    };

    run(&app, args.command)
}

fn run(app: &App, command: Command) -> Result<()> {
    let now = app.clock.now();

    match command {
        Command::Report {
            title,
            description,
            location,
            category,
            priority,
            image_url,
        } => {
            let complaint = app.lifecycle.report(
                NewComplaint {
                    title,
                    description,
                    location,
                    category,
                    priority,
                    image_url,
                },
                now,
            )?;
            print_complaint(app, &complaint)?;
        }

        Command::List { status } => {
            let complaints = app.complaints.list()?;
            let views: Vec<ComplaintView> = complaints
                .iter()
                .filter(|c| status.map_or(true, |s| c.status == s))
                .map(|c| ComplaintView::build(c, &app.service, now))
                .collect::<Result<_, _>>()?;
            println!("{}", serde_json::to_string_pretty(&views)?);
        }

        Command::Show { id } => {
            let complaint = load(app, &id)?;
            print_complaint(app, &complaint)?;
        }

        Command::Assign { id, to } => {
            let id = parse_id(&id)?;
            let updated = app
                .lifecycle
                .transition(&id, Status::InProgress, to.as_deref(), now)?;
            println!("assigned to {}", updated.assigned_to);
            print_complaint(app, &updated)?;
        }

        Command::Resolve { id } => {
            let id = parse_id(&id)?;
            let updated = app.lifecycle.transition(&id, Status::Resolved, None, now)?;
            println!("resolved");
            print_complaint(app, &updated)?;
        }

        Command::Remind { id } => {
            let complaint = load(app, &id)?;
            if !app.service.pending_eligible(&complaint, now)? {
                let since = app
                    .service
                    .time_since_pending_reminder(&complaint.id, now)?
                    .unwrap_or_else(|| "never".to_string());
                anyhow::bail!(
                    "not eligible yet: last reminder {}, interval {}h",
                    since,
                    app.service.policy().interval().num_hours()
                );
            }
            let receipt = app.service.send_pending_reminder(&complaint.id, now)?;
            println!(
                "reminder sent to admin for: {} (at {})",
                complaint.title, receipt.at
            );
        }

        Command::RemindMaintenance { id } => {
            let complaint = load(app, &id)?;
            if !app.service.maintenance_eligible(&complaint.id, now)? {
                anyhow::bail!(
                    "not eligible yet: complaint must be assigned and {}h must have passed \
                     since assignment or the last reminder",
                    app.service.policy().interval().num_hours()
                );
            }
            let receipt = app.service.send_maintenance_reminder(&complaint.id, now)?;
            println!(
                "reminder sent to maintenance for: {} (at {})",
                complaint.title, receipt.at
            );
        }

        Command::Due => {
            let complaints = app.complaints.list()?;
            let pending = app.service.pending_needing_reminder(&complaints, now)?;
            let maintenance = app.service.in_progress_needing_reminder(&complaints, now)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "pending_due": pending,
                    "maintenance_due": maintenance,
                }))?
            );
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Result<ComplaintId> {
    ComplaintId::parse(raw).with_context(|| format!("invalid complaint id: {raw}"))
}

fn load(app: &App, raw: &str) -> Result<Complaint> {
    let id = parse_id(raw)?;
    app.complaints
        .get(&id)?
        .with_context(|| format!("complaint not found: {id}"))
}

fn print_complaint(app: &App, complaint: &Complaint) -> Result<()> {
    let view = ComplaintView::build(complaint, &app.service, app.clock.now())?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
