//! Single-event actions: show, add, edit, join, leave.

use anyhow::Result;
use muster_core::Event;
use owo_colors::OwoColorize;

use super::parse_local_datetime;
use crate::config::Config;

pub async fn show(config: &Config, id: &str) -> Result<()> {
    let tz = config.timezone()?;
    let event = config.client().fetch_event(id).await?;
    print!("{}", render_event(&event, tz));
    Ok(())
}

/// Full single-event view: details, lists, and both rosters by
/// user id.
fn render_event(event: &Event, tz: chrono_tz::Tz) -> String {
    let mut lines = Vec::new();

    lines.push(event.name.bold().to_string());
    lines.push(format!(
        "  {} {}",
        event.datetime.with_timezone(&tz).format("%a %b %-d %Y, %H:%M"),
        format!("({})", tz).dimmed()
    ));
    lines.push(format!("  {}", event.location));
    if !event.information.is_empty() {
        lines.push(format!("  {}", event.information));
    }

    push_section(&mut lines, "Meet-up locations", event.meet_up_locations.iter());
    push_section(&mut lines, "Items to bring", event.items_to_bring.iter());
    push_section(
        &mut lines,
        &format!("Participants ({})", event.participants.len()),
        event.participants.iter(),
    );
    push_section(
        &mut lines,
        &format!("Volunteers ({})", event.volunteers.len()),
        event.volunteers.iter(),
    );

    lines.join("\n") + "\n"
}

fn push_section<'a>(
    lines: &mut Vec<String>,
    title: &str,
    entries: impl Iterator<Item = &'a String>,
) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }
    lines.push(String::new());
    lines.push(title.bold().to_string());
    for entry in entries {
        lines.push(format!("  - {}", entry));
    }
}

pub async fn add(
    config: &Config,
    name: String,
    location: String,
    information: String,
    datetime: &str,
    meet_ups: Vec<String>,
    items: Vec<String>,
) -> Result<()> {
    config.require_staff()?;
    let tz = config.timezone()?;

    let mut event = Event::new(name, location, information, parse_local_datetime(datetime, tz)?);
    for meet_up in meet_ups {
        event.add_meet_up_location(meet_up);
    }
    for item in items {
        event.add_item_to_bring(item);
    }

    let id = config.client().insert_event(&event).await?;
    println!("Created event {}", id.green());

    Ok(())
}

/// A batch of edits applied locally and saved in one overwrite.
#[derive(Debug, Default)]
pub struct Edits {
    pub name: Option<String>,
    pub location: Option<String>,
    pub information: Option<String>,
    pub datetime: Option<String>,
    pub add_item: Vec<String>,
    pub remove_item: Vec<String>,
    pub add_meet_up: Vec<String>,
    pub remove_meet_up: Vec<String>,
}

pub async fn edit(config: &Config, id: &str, edits: Edits) -> Result<()> {
    config.require_staff()?;
    let tz = config.timezone()?;
    let client = config.client();

    let mut event = client.fetch_event(id).await?;
    apply_edits(&mut event, edits, tz)?;

    client.update_event(&event).await?;
    println!("Saved {}", event.name.bold());

    Ok(())
}

fn apply_edits(event: &mut Event, edits: Edits, tz: chrono_tz::Tz) -> Result<()> {
    if let Some(name) = edits.name {
        event.name = name;
    }
    if let Some(location) = edits.location {
        event.location = location;
    }
    if let Some(information) = edits.information {
        event.information = information;
    }
    if let Some(datetime) = edits.datetime {
        event.datetime = parse_local_datetime(&datetime, tz)?;
    }

    for item in edits.add_item {
        event.add_item_to_bring(item);
    }
    for item in &edits.remove_item {
        if !event.remove_item_to_bring(item) {
            eprintln!("{}", format!("warning: '{}' was not listed", item).dimmed());
        }
    }
    for meet_up in edits.add_meet_up {
        event.add_meet_up_location(meet_up);
    }
    for meet_up in &edits.remove_meet_up {
        if !event.remove_meet_up_location(meet_up) {
            eprintln!(
                "{}",
                format!("warning: '{}' was not a meet-up location", meet_up).dimmed()
            );
        }
    }

    Ok(())
}

pub async fn join(
    config: &Config,
    id: &str,
    meet_up: Option<&str>,
    volunteer: bool,
) -> Result<()> {
    let client = config.client();
    let mut event = client.fetch_event(id).await?;

    if let Some(meet_up) = meet_up {
        if !event.has_meet_up_location(meet_up) {
            anyhow::bail!(
                "'{}' is not a meet-up location for this event. Available: {}",
                meet_up,
                event.meet_up_locations.join(", ")
            );
        }
    }

    let joined = event.join(&config.user_id);
    let volunteered = volunteer && event.add_volunteer(&config.user_id);

    if !joined && !volunteered {
        println!("Already joined {}", event.name.bold());
        return Ok(());
    }

    client.update_event(&event).await?;

    if volunteered {
        println!("Joined {} as a volunteer", event.name.bold());
    } else {
        println!("Joined {}", event.name.bold());
    }
    if let Some(meet_up) = meet_up {
        println!("Meet at: {}", meet_up);
    }

    Ok(())
}

pub async fn leave(config: &Config, id: &str) -> Result<()> {
    let client = config.client();
    let mut event = client.fetch_event(id).await?;

    let left = event.leave(&config.user_id);
    let unvolunteered = event.remove_volunteer(&config.user_id);

    if !left && !unvolunteered {
        println!("You were not on the roster for {}", event.name.bold());
        return Ok(());
    }

    client.update_event(&event).await?;
    println!("Left {}", event.name.bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Asia::Singapore;

    fn make_test_event() -> Event {
        let mut event = Event::new(
            "Gardening",
            "Community plot",
            "",
            Utc.with_ymd_and_hms(2025, 4, 5, 1, 0, 0).unwrap(),
        );
        event.add_item_to_bring("trowel");
        event.add_meet_up_location("Clementi MRT");
        event
    }

    #[test]
    fn test_show_lists_roster_user_ids() {
        let mut event = make_test_event();
        event.join("alice");
        event.join("bob");
        event.add_volunteer("carol");

        let out = render_event(&event, Singapore);

        assert!(out.contains("Participants (2)"));
        assert!(out.contains("  - alice"));
        assert!(out.contains("  - bob"));
        assert!(out.contains("Volunteers (1)"));
        assert!(out.contains("  - carol"));
        assert!(out.contains("  - Clementi MRT"));
    }

    #[test]
    fn test_show_omits_empty_rosters() {
        let event = make_test_event();
        let out = render_event(&event, Singapore);
        assert!(!out.contains("Participants"));
        assert!(!out.contains("Volunteers"));
    }

    #[test]
    fn test_edits_are_batched_locally() {
        let mut event = make_test_event();
        let edits = Edits {
            name: Some("Gardening Day".to_string()),
            datetime: Some("2025-04-06T09:30".to_string()),
            add_item: vec!["gloves".to_string()],
            remove_item: vec!["trowel".to_string()],
            ..Edits::default()
        };

        apply_edits(&mut event, edits, Singapore).unwrap();

        assert_eq!(event.name, "Gardening Day");
        assert_eq!(event.items_to_bring, vec!["gloves"]);
        assert_eq!(
            event.datetime,
            Utc.with_ymd_and_hms(2025, 4, 6, 1, 30, 0).unwrap()
        );
        assert_eq!(event.location, "Community plot");
    }

    #[test]
    fn test_bad_datetime_edit_fails_before_save() {
        let mut event = make_test_event();
        let edits = Edits {
            datetime: Some("soon".to_string()),
            ..Edits::default()
        };
        assert!(apply_edits(&mut event, edits, Singapore).is_err());
    }
}
