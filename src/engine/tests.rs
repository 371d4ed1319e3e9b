use super::AsyncEngine;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::config::SessionSettings;
use crate::storage::{MemoryStorage, RecordStore, Storage};
use crate::views::aggregate;

const HEADER: &str = "action,id,description,amount,type,recurring,confirm,term";
const KEY: &str = "budgetBuddyData";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn instant_settings() -> SessionSettings {
    SessionSettings {
        load_delay: Duration::ZERO,
        ..SessionSettings::default()
    }
}

fn seed_storage(storage: &MemoryStorage) -> Result<()> {
    storage.write(KEY, r#"[
        {"id":"1","description":"Salary","amount":1000,"type":"income","date":"2025-02-01T09:00:00.000Z","recurring":true},
        {"id":"2","description":"Rent","amount":400,"type":"expense","date":"2025-02-02T09:00:00.000Z","recurring":true}
    ]"#)?;

    Ok(())
}

#[tokio::test]
async fn test_engine_processes_valid_csv_stream_successfully() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let file = create_temporary_csv(&[
        "submit,,Salary,1000,income,true,,",
        "submit,,Rent,400,expense,false,,",
        "submit,,\"Coffee, beans\",12.5,expense,,,",
    ])?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run(file.path()).await?;
    let summary = aggregate(session.controller().store().all());

    assert_eq!(summary.balance, Decimal::from_str_exact("587.5")?);
    assert_eq!(summary.expense_total, Decimal::from_str_exact("412.5")?);
    assert_eq!(RecordStore::load(storage, KEY).len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_engine_replays_edit_and_delete_scenario() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    seed_storage(&storage)?;

    let file = create_temporary_csv(&[
        "edit,2,,,,,,",
        "submit,,,450,,,,",
        "delete,1,,,,,true,",
        "search,,,,,,,rent",
    ])?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run(file.path()).await?;
    let summary = aggregate(session.controller().store().all());

    assert_eq!(summary.balance, Decimal::from(-450));
    assert_eq!(summary.income_total, Decimal::ZERO);
    assert_eq!(summary.expense_total, Decimal::from(450));

    let visible = session.visible();
    let rent = visible.first().ok_or_else(|| anyhow!("Rent missing from search results"))?;

    assert_eq!(visible.len(), 1);
    assert_eq!(rent.amount.to_string(), "450");
    assert!(rent.recurring);

    Ok(())
}

#[tokio::test]
async fn test_engine_trims_search_term_column() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    seed_storage(&storage)?;

    let file = create_temporary_csv(&["search,,,,,,,  rent  "])?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run(file.path()).await?;

    assert_eq!(session.search_term(), "rent");
    assert_eq!(session.visible().len(), 1);
    assert_eq!(session.visible()[0].description, "Rent");

    Ok(())
}

#[tokio::test]
async fn test_engine_accepts_rows_without_trailing_columns() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    seed_storage(&storage)?;

    let file = create_temporary_csv(&[
        "reset,,,,,,true",
        "submit,,Bonus,50,income",
    ])?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run(file.path()).await?;
    let all = session.controller().store().all();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "Bonus");

    Ok(())
}

#[tokio::test]
async fn test_engine_gracefully_skips_malformed_csv_input() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let file = create_temporary_csv(&[
        "submit,,Salary,1000,income,,,",
        "transfer,,Savings,10,income,,,",
        "submit,,Gift,25,windfall,,,",
        "submit,,Bonus,50,income,,,",
    ])?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run(file.path()).await?;

    assert_eq!(aggregate(session.controller().store().all()).income_total, Decimal::from(1050));

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_missing_csv_file_without_error() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    seed_storage(&storage)?;

    let engine = AsyncEngine::new(storage.clone(), instant_settings());
    let session = engine.run("missing.csv").await?;

    assert_eq!(session.controller().store().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_engine_waits_for_the_load_delay() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    seed_storage(&storage)?;

    let settings = SessionSettings {
        load_delay: Duration::from_millis(100),
        ..SessionSettings::default()
    };

    let file = create_temporary_csv(&["delete,2,,,,,true,"])?;

    let engine = AsyncEngine::new(storage.clone(), settings);
    let session = engine.run(file.path()).await?;

    assert_eq!(session.controller().store().len(), 1);
    assert_eq!(session.controller().store().all()[0].description, "Salary");

    Ok(())
}
