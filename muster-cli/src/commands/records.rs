//! Performance-record actions.

use anyhow::Result;
use muster_core::EventRecord;
use owo_colors::OwoColorize;

use crate::config::Config;

pub async fn list(config: &Config, event: Option<&str>, user: Option<&str>) -> Result<()> {
    let records = config.client().fetch_records(user, event).await?;

    if records.is_empty() {
        println!("{}", "No records found".dimmed());
        return Ok(());
    }

    for record in &records {
        let remarks = if record.remarks.is_empty() {
            String::new()
        } else {
            format!(" ({})", record.remarks)
        };
        println!(
            "{} {} / event {}: {}{}",
            format!("[{}]", record.id).dimmed(),
            record.user_id.bold(),
            record.event_id,
            record.performance,
            remarks
        );
    }

    Ok(())
}

pub async fn add(
    config: &Config,
    event_id: &str,
    user_id: &str,
    performance: String,
    remarks: String,
) -> Result<()> {
    config.require_staff()?;

    let record = EventRecord {
        id: String::new(),
        user_id: user_id.to_string(),
        event_id: event_id.to_string(),
        performance,
        remarks,
    };

    let id = config.client().insert_record(&record).await?;
    println!("Created record {}", id.green());

    Ok(())
}

pub async fn update(config: &Config, id: &str, performance: &str, remarks: &str) -> Result<()> {
    config.require_staff()?;
    config.client().update_record(id, performance, remarks).await?;
    println!("Updated record {}", id);
    Ok(())
}

pub async fn delete(config: &Config, id: &str) -> Result<()> {
    config.require_staff()?;
    config.client().delete_record(id).await?;
    println!("Deleted record {}", id);
    Ok(())
}
