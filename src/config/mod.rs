#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_credential, validate_positive_threshold, validate_url};

/// 所有配置來源共用的檢查：憑證、看板 ID、API 位址與顏色門檻
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("api_base_url", config.api_base_url())?;
    validate_credential("api_key", config.api_key())?;
    validate_credential("token", config.token())?;
    validate_credential("board_id", config.board_id())?;
    validate_positive_threshold("max_threshold", config.max_threshold())?;
    Ok(())
}

