pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::trello::TrelloClient;
pub use core::{
    color::{map_score, ColorMapper},
    engine::PressureEngine,
    scorer::PressureScorer,
};
pub use domain::model::{CardRecord, ColorTriple, DueStatus, ListSelector, PressureReport};
pub use utils::error::{PressureError, Result};
