use anyhow::{bail, ensure, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use client_application::commands::{device_commands, interest_commands::InterestController};
use client_application::queries::{event_queries, interest_queries};
use client_domain::ports::LocalStore;
use client_domain::{EventStatus, EventSummary};

use crate::context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "lightchurch-client")]
#[command(about = "LightChurch device-side event client", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List public events with their lifecycle status
    Events {
        /// Only show events in this status (upcoming, ongoing, completed, cancelled)
        #[arg(long)]
        status: Option<String>,
        /// Print the list as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one event with its status and the local interest mark
    Event { event_id: String },
    /// Toggle this device's interest in an event
    Interest { event_id: String },
    /// Print the device identity, provisioning it on first use
    Device,
    /// Check backend reachability and local store health
    Check,
}

pub async fn run(command: Command) -> Result<()> {
    let context = AppContext::new().await?;
    match command {
        Command::Events { status, json } => events(&context, status, json).await,
        Command::Event { event_id } => event(&context, &event_id).await,
        Command::Interest { event_id } => interest(&context, &event_id).await,
        Command::Device => device(&context).await,
        Command::Check => check(&context).await,
    }
}

#[derive(Serialize)]
struct EventRow<'a> {
    #[serde(flatten)]
    summary: &'a EventSummary,
    status: EventStatus,
}

async fn events(context: &AppContext, status: Option<String>, json: bool) -> Result<()> {
    let wanted = match status.as_deref() {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };

    let now = Utc::now();
    let mut summaries = event_queries::list_events(&context.state).await?;
    if let Some(wanted) = wanted {
        summaries.retain(|summary| summary.status_at(now) == wanted);
    }

    if json {
        let rows: Vec<EventRow> = summaries
            .iter()
            .map(|summary| EventRow {
                summary,
                status: summary.status_at(now),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("no events");
        return Ok(());
    }
    for summary in &summaries {
        println!("{}", render_event(summary, now));
    }
    Ok(())
}

async fn event(context: &AppContext, event_id: &str) -> Result<()> {
    let summary = event_queries::get_event(&context.state, event_id).await?;
    let marked = interest_queries::has_interest_mark(&context.state, &summary.event_id).await;

    println!("{}", render_event(&summary, Utc::now()));
    println!("local interest mark: {}", if marked { "yes" } else { "no" });
    Ok(())
}

async fn interest(context: &AppContext, event_id: &str) -> Result<()> {
    let summary = event_queries::get_event(&context.state, event_id).await?;
    let controller = InterestController::initialize(
        context.state.clone(),
        &summary.event_id,
        false,
        summary.interested_count,
    )
    .await?;

    let before = controller.snapshot().await;
    let mut changes = context.hub.subscribe();
    let after = controller.toggle().await?;

    println!(
        "event {}: interested {} -> {}, count {} -> {}",
        summary.event_id, before.interested, after.interested, before.count, after.count
    );
    if let Ok(change) = changes.try_recv() {
        println!(
            "session broadcast: event {} interested={}",
            change.event_id, change.interested
        );
    }
    Ok(())
}

async fn device(context: &AppContext) -> Result<()> {
    let device_id = device_commands::ensure_device_id(&context.state).await;
    println!("{}", device_id.as_str());
    Ok(())
}

const PROBE_KEY: &str = "lightchurch.health_probe";

async fn check(context: &AppContext) -> Result<()> {
    let mut healthy = true;

    match event_queries::list_events(&context.state).await {
        Ok(events) => println!("backend: ok ({} events)", events.len()),
        Err(err) => {
            healthy = false;
            println!("backend: unreachable ({})", err);
        }
    }

    match probe_store(context).await {
        Ok(()) => println!("store: ok ({})", context.state.config.storage_path),
        Err(err) => {
            healthy = false;
            println!("store: failing ({})", err);
        }
    }

    if !healthy {
        bail!("one or more checks failed");
    }
    Ok(())
}

async fn probe_store(context: &AppContext) -> Result<()> {
    let store = &context.state.store;
    store.set(PROBE_KEY, "ok").await?;
    let read = store.get(PROBE_KEY).await?;
    store.remove(PROBE_KEY).await?;
    ensure!(read.as_deref() == Some("ok"), "probe value did not round-trip");
    Ok(())
}

fn parse_status(raw: &str) -> Result<EventStatus> {
    let status = EventStatus::from(raw);
    if raw.eq_ignore_ascii_case(status.as_str()) {
        Ok(status)
    } else {
        bail!(
            "unknown status '{}' (expected upcoming, ongoing, completed or cancelled)",
            raw
        )
    }
}

fn render_event(summary: &EventSummary, now: DateTime<Utc>) -> String {
    format!(
        "#{:<8} {:<9} start={:<17} end={:<17} interested={:<5} {}",
        summary.event_id,
        summary.status_at(now).as_str(),
        format_time(summary.starts_at),
        format_time(summary.ends_at),
        summary.interested_count,
        summary.title,
    )
}

fn format_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
