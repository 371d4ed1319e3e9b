mod actors;
mod config;
mod controller;
mod engine;
mod models;
mod storage;
mod types;
mod views;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::actors::Session;
use crate::config::{Config, StoreLocation, LOAD_DELAY_ENV, USAGE};
use crate::engine::AsyncEngine;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::views::{aggregate, LogObserver};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let load_delay = std::env::var(LOAD_DELAY_ENV).ok();

    let config = match Config::from_args(&args, load_delay.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    match config.store.clone() {
        StoreLocation::Directory(directory) => {
            let storage = FileStorage::new(directory)?;
            run(Arc::new(storage), config).await
        },
        StoreLocation::InMemory => run(Arc::new(MemoryStorage::new()), config).await
    }
}

async fn run<S: Storage>(storage: Arc<S>, config: Config) -> Result<()> {
    let engine = AsyncEngine::new(storage, config.settings)
        .with_observer(Box::new(LogObserver));

    let timer = Instant::now();
    let session = engine.run(&config.events_path).await?;
    let duration = timer.elapsed();

    info!("Processed events in: {duration:?}");

    write_report_to_stdout(&session)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout<S: Storage>(session: &Session<S>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());
    let summary = aggregate(session.controller().store().all());

    writeln!(output, "balance,income,expense")?;
    writeln!(output, "{},{},{}", summary.balance, summary.income_total, summary.expense_total)?;
    writeln!(output)?;

    let mut writer = csv::Writer::from_writer(&mut output);
    writer.write_record(["id", "date", "type", "description", "amount", "recurring"])?;

    for transaction in session.visible() {
        writer.write_record([
            transaction.id.to_string(),
            transaction.date.to_rfc3339(),
            transaction.transaction_type.to_string(),
            transaction.description.clone(),
            transaction.amount.to_string(),
            transaction.recurring.to_string()
        ])?;
    }

    writer.flush()?;
    drop(writer);
    output.flush()?;

    Ok(())
}
