//! List the events the configured user participates in.

use anyhow::Result;

use super::{events, report_skipped};
use crate::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    let tz = config.timezone()?;
    let fetched = config
        .client()
        .fetch_events_of_user(&config.user_id)
        .await?;
    report_skipped(&fetched.skipped);
    events::print_list(fetched.events, tz);
    Ok(())
}
