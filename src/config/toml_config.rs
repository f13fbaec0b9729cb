use crate::adapters::trello::DEFAULT_API_BASE_URL;
#[cfg(feature = "cli")]
use crate::config::CliConfig;
use crate::config::validate_provider;
use crate::core::color::DEFAULT_MAX_THRESHOLD;
use crate::core::{ConfigProvider, ListSelector};
use crate::utils::error::{PressureError, Result};
use crate::utils::validation::{is_unresolved_placeholder, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub trello: TrelloSection,
    pub list: Option<ListSection>,
    pub light: Option<LightSection>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TrelloSection {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub token: Option<String>,
    #[serde(default)]
    pub board_id: String,
}

impl std::fmt::Debug for TrelloSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloSection")
            .field("api_base_url", &self.api_base_url)
            .field("board_id", &self.board_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSection {
    pub index: Option<usize>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightSection {
    pub max_threshold: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PressureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PressureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRELLO_TOKEN})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PressureError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 檔案未提供憑證時，改用命令列或環境變數的值
    pub fn fill_missing_credentials(&mut self, api_key: &str, token: &str) {
        if is_unset(&self.trello.api_key) && !api_key.is_empty() {
            self.trello.api_key = Some(api_key.to_string());
        }
        if is_unset(&self.trello.token) && !token.is_empty() {
            self.trello.token = Some(token.to_string());
        }
    }

    /// 以設定檔為主，命令列與環境變數只補上檔案未提供的欄位
    #[cfg(feature = "cli")]
    pub fn fill_from_cli(&mut self, cli: &CliConfig) {
        self.fill_missing_credentials(&cli.api_key, &cli.token);

        if is_blank(&self.trello.board_id) {
            self.trello.board_id = cli.board_id.clone();
        }
        if is_unset(&self.trello.api_base_url) {
            self.trello.api_base_url = Some(cli.api_base_url.clone());
        }

        let has_list = self
            .list
            .as_ref()
            .is_some_and(|list| list.index.is_some() || list.name.is_some());
        if !has_list {
            self.list = Some(match cli.list_selector() {
                ListSelector::Index(index) => ListSection {
                    index: Some(index),
                    name: None,
                },
                ListSelector::Name(name) => ListSection {
                    index: None,
                    name: Some(name),
                },
            });
        }

        let light = self.light.get_or_insert(LightSection {
            max_threshold: None,
        });
        if light.max_threshold.is_none() {
            light.max_threshold = Some(cli.max_threshold);
        }
    }
}

fn is_unset(value: &Option<String>) -> bool {
    is_blank(value.as_deref().unwrap_or(""))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty() || is_unresolved_placeholder(value)
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        self.trello
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn api_key(&self) -> &str {
        self.trello.api_key.as_deref().unwrap_or("")
    }

    fn token(&self) -> &str {
        self.trello.token.as_deref().unwrap_or("")
    }

    fn board_id(&self) -> &str {
        &self.trello.board_id
    }

    fn list_selector(&self) -> ListSelector {
        match &self.list {
            Some(ListSection {
                name: Some(name), ..
            }) => ListSelector::Name(name.clone()),
            Some(ListSection {
                index: Some(index), ..
            }) => ListSelector::Index(*index),
            _ => ListSelector::default(),
        }
    }

    fn max_threshold(&self) -> f64 {
        self.light
            .as_ref()
            .and_then(|light| light.max_threshold)
            .unwrap_or(DEFAULT_MAX_THRESHOLD)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
