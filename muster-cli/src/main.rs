mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "muster")]
#[command(about = "Coordinate events, rosters and performance records from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month view with events placed into days
    Calendar {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Move this many months from the reference (negative = back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        months: i32,

        /// Move this many weeks from the reference
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        weeks: i32,

        /// Move this many days from the reference
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        days: i32,
    },

    /// List every event, soonest first
    Events,

    /// Inspect or change a single event
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Events you have joined
    MyEvents,

    /// Performance records
    Records {
        #[command(subcommand)]
        action: RecordsAction,
    },

    /// Upcoming reminder triggers for all events
    Remind {
        /// Lead time before the event (e.g. "45m", "2h")
        #[arg(long, default_value = "1h")]
        lead: String,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// Show one event in full
    Show { id: String },

    /// Create a new event (staff only)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        location: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        information: String,

        /// Local date/time, e.g. "2025-03-20T15:00"
        #[arg(long)]
        datetime: String,

        /// Meet-up location (repeatable)
        #[arg(long = "meet-up")]
        meet_up: Vec<String>,

        /// Item to bring (repeatable)
        #[arg(long = "item")]
        item: Vec<String>,
    },

    /// Edit an event; all changes are saved in one overwrite (staff only)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        information: Option<String>,

        /// Local date/time, e.g. "2025-03-20T15:00"
        #[arg(long)]
        datetime: Option<String>,

        #[arg(long = "add-item")]
        add_item: Vec<String>,

        #[arg(long = "remove-item")]
        remove_item: Vec<String>,

        #[arg(long = "add-meet-up")]
        add_meet_up: Vec<String>,

        #[arg(long = "remove-meet-up")]
        remove_meet_up: Vec<String>,
    },

    /// Join an event as the configured user
    Join {
        id: String,

        /// Meet-up location you will start from
        #[arg(long = "meet-up")]
        meet_up: Option<String>,

        /// Also sign up as a volunteer helper
        #[arg(long)]
        volunteer: bool,
    },

    /// Leave an event's participant roster
    Leave { id: String },
}

#[derive(Subcommand)]
enum RecordsAction {
    /// List records, optionally filtered
    List {
        #[arg(long)]
        event: Option<String>,

        #[arg(long)]
        user: Option<String>,
    },

    /// Add a record for a participant (staff only)
    Add {
        event_id: String,

        #[arg(long)]
        user: String,

        #[arg(long)]
        performance: String,

        #[arg(long, default_value = "")]
        remarks: String,
    },

    /// Revise a record's performance and remarks (staff only)
    Update {
        id: String,

        #[arg(long)]
        performance: String,

        #[arg(long, default_value = "")]
        remarks: String,
    },

    /// Delete a record (staff only)
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Calendar {
            date,
            months,
            weeks,
            days,
        } => commands::calendar::run(&config, date.as_deref(), months, weeks, days).await,
        Commands::Events => commands::events::run(&config).await,
        Commands::Event { action } => match action {
            EventAction::Show { id } => commands::event::show(&config, &id).await,
            EventAction::Add {
                name,
                location,
                information,
                datetime,
                meet_up,
                item,
            } => {
                commands::event::add(&config, name, location, information, &datetime, meet_up, item)
                    .await
            }
            EventAction::Edit {
                id,
                name,
                location,
                information,
                datetime,
                add_item,
                remove_item,
                add_meet_up,
                remove_meet_up,
            } => {
                let edits = commands::event::Edits {
                    name,
                    location,
                    information,
                    datetime,
                    add_item,
                    remove_item,
                    add_meet_up,
                    remove_meet_up,
                };
                commands::event::edit(&config, &id, edits).await
            }
            EventAction::Join {
                id,
                meet_up,
                volunteer,
            } => commands::event::join(&config, &id, meet_up.as_deref(), volunteer).await,
            EventAction::Leave { id } => commands::event::leave(&config, &id).await,
        },
        Commands::MyEvents => commands::my_events::run(&config).await,
        Commands::Records { action } => match action {
            RecordsAction::List { event, user } => {
                commands::records::list(&config, event.as_deref(), user.as_deref()).await
            }
            RecordsAction::Add {
                event_id,
                user,
                performance,
                remarks,
            } => commands::records::add(&config, &event_id, &user, performance, remarks).await,
            RecordsAction::Update {
                id,
                performance,
                remarks,
            } => commands::records::update(&config, &id, &performance, &remarks).await,
            RecordsAction::Delete { id } => commands::records::delete(&config, &id).await,
        },
        Commands::Remind { lead } => commands::remind::run(&config, &lead).await,
    }
}
