//! User configuration at ~/.config/muster/config.toml.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use muster_store::StoreClient;
use serde::Deserialize;

/// Role reported by the identity service. Only used to gate which
/// actions are offered; the store enforces nothing client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    Member,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the hosted document store
    pub store_url: String,
    /// The signed-in user
    pub user_id: String,
    #[serde(default = "default_role")]
    pub role: Role,
    /// IANA timezone governing calendar-day bucketing. Defaults to
    /// the system zone.
    pub timezone: Option<String>,
}

fn default_role() -> Role {
    Role::Member
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join("muster")
            .join("config.toml"))
    }

    pub fn load() -> Result<Config> {
        let path = Self::path()?;

        if !path.exists() {
            anyhow::bail!(
                "No muster config found.\n\n\
                Create {} with:\n\n\
                store_url = \"https://store.example.com/v1\"\n\
                user_id = \"your-user-id\"\n\
                role = \"member\"                 # or \"staff\"\n\
                # timezone = \"Asia/Singapore\"   # defaults to the system zone",
                path.display()
            );
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// The single timezone convention used for every calendar-day
    /// comparison and for parsing datetime arguments.
    pub fn timezone(&self) -> Result<Tz> {
        let name = match &self.timezone {
            Some(name) => name.clone(),
            None => iana_time_zone::get_timezone()
                .context("Could not determine the system timezone")?,
        };

        name.parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("Unknown timezone '{}' in config", name))
    }

    pub fn require_staff(&self) -> Result<()> {
        if self.role == Role::Staff {
            Ok(())
        } else {
            anyhow::bail!("This action requires the staff role")
        }
    }

    pub fn client(&self) -> StoreClient {
        StoreClient::new(&self.store_url)
    }
}
