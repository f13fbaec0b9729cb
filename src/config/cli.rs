use crate::adapters::trello::DEFAULT_API_BASE_URL;
use crate::config::validate_provider;
use crate::core::color::DEFAULT_MAX_THRESHOLD;
use crate::core::{ConfigProvider, ListSelector};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "trello-pressure")]
#[command(about = "Score the due-date pressure of a Trello list and map it to an RGB light")]
pub struct CliConfig {
    #[arg(long, env = "TRELLO_API_KEY", default_value = "", hide_default_value = true)]
    pub api_key: String,

    #[arg(long, env = "TRELLO_TOKEN", default_value = "", hide_default_value = true)]
    pub token: String,

    #[arg(long, env = "TRELLO_BOARD_ID", default_value = "")]
    pub board_id: String,

    #[arg(long, env = "TRELLO_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value_t = 0, help = "Position of the tracked list on the board")]
    pub list_index: usize,

    #[arg(long, help = "Track the list with this exact name instead of --list-index")]
    pub list_name: Option<String>,

    #[arg(long, env = "PRESSURE_MAX_THRESHOLD", default_value_t = DEFAULT_MAX_THRESHOLD)]
    pub max_threshold: f64,

    #[arg(
        long,
        help = "Load settings from a TOML file; flags and environment variables only fill values the file leaves out"
    )]
    pub config: Option<String>,

    #[arg(long, help = "Poll repeatedly, waiting this many seconds between passes")]
    pub interval_secs: Option<u64>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("board_id", &self.board_id)
            .field("api_base_url", &self.api_base_url)
            .field("list_index", &self.list_index)
            .field("list_name", &self.list_name)
            .field("max_threshold", &self.max_threshold)
            .field("config", &self.config)
            .field("interval_secs", &self.interval_secs)
            .field("json", &self.json)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn board_id(&self) -> &str {
        &self.board_id
    }

    fn list_selector(&self) -> ListSelector {
        match &self.list_name {
            Some(name) => ListSelector::Name(name.clone()),
            None => ListSelector::Index(self.list_index),
        }
    }

    fn max_threshold(&self) -> f64 {
        self.max_threshold
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;
        if let Some(interval) = self.interval_secs {
            validate_positive_number("interval_secs", interval, 1)?;
        }
        Ok(())
    }
}
