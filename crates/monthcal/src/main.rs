//! monthcal CLI entry point.

mod cli;
mod config;
mod output;
mod render;
mod storage;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use monthcal_core::calendar::{
    add_months, build_month_view, events_for_day, start_of_month, sub_months, EventForm,
    EventFormModal, EventId,
};
use monthcal_core::EventStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::output::{format_day, format_event, format_events};
use crate::render::{render_month, GridOptions};
use crate::storage::FileStorage;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monthcal=info,monthcal_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    if let Some(key) = cli.key.clone() {
        config.storage_key = key;
    }

    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("Failed to create data directory {}", config.data_dir.display())
    })?;

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        key = %config.storage_key,
        "Opening event store"
    );
    let mut store = EventStore::open_with_key(
        FileStorage::new(config.data_dir.clone()),
        config.storage_key.clone(),
    );

    match cli.command {
        Commands::Month {
            month,
            offset,
            cell_height,
            cell_width,
        } => {
            let now = Local::now().naive_local();
            let month = shift_month(month.unwrap_or(now.date()), offset);
            let view = build_month_view(month, now, store.list());
            let options = GridOptions::new(
                cell_width.unwrap_or(config.cell_width) as usize,
                cell_height.unwrap_or(config.cell_height) as usize,
            );
            println!("{}", render_month(&view, options));
        }
        Commands::Day { date } => {
            let events = events_for_day(date, store.list());
            println!("{}", format_day(date, &events, cli.format));
        }
        Commands::List => println!("{}", format_events(store.list(), cli.format)),
        Commands::Add(args) => {
            let form = args.to_form();
            return Ok(submit(&form, &mut store, cli.format, cli.quiet, "Created"));
        }
        Commands::Edit(args) => {
            let id = EventId::from(args.id.as_str());
            let Some(event) = store.get(&id) else {
                return Ok(notice(cli.quiet, &format!("No event with id {}", id)));
            };
            let form = args.to_form(event);
            return Ok(submit(&form, &mut store, cli.format, cli.quiet, "Updated"));
        }
        Commands::Delete { id } => {
            let id = EventId::from(id);
            let mut modal = EventFormModal::new();
            modal.open();
            if !modal.delete(&id, &mut store) {
                return Ok(notice(cli.quiet, &format!("No event with id {}", id)));
            }
            if !cli.quiet {
                println!("Deleted event {}", id);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints a short notice on stderr and reports failure.
fn notice(quiet: bool, message: &str) -> ExitCode {
    if !quiet {
        eprintln!("{}", message);
    }
    ExitCode::FAILURE
}

/// Runs `form` through the dialog and prints the stored event.
fn submit(
    form: &EventForm,
    store: &mut EventStore<FileStorage>,
    format: OutputFormat,
    quiet: bool,
    verb: &str,
) -> ExitCode {
    let mut modal = EventFormModal::new();
    modal.open();

    let Some(id) = modal.submit(form, store) else {
        let reason = match form.validate() {
            Err(reason) => reason.to_string(),
            Ok(_) => "event no longer exists".to_string(),
        };
        return notice(quiet, &format!("Event not saved: {}", reason));
    };

    let Some(event) = store.get(&id) else {
        return notice(quiet, &format!("No event with id {}", id));
    };
    match format {
        OutputFormat::Pretty if quiet => println!("{}", id),
        OutputFormat::Pretty => println!("{}:\n{}", verb, format_event(event, format)),
        OutputFormat::Json => println!("{}", format_event(event, format)),
    }
    ExitCode::SUCCESS
}

/// The first day of the month `offset` months away from `date`.
fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let first = start_of_month(date);
    if offset >= 0 {
        add_months(first, offset.unsigned_abs())
    } else {
        sub_months(first, offset.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(shift_month(date, 0), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(shift_month(date, 1), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(shift_month(date, -2), NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
    }
}
