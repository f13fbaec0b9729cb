use crate::core::{BoardList, BoardSource, CardRecord, ConfigProvider};
use crate::utils::error::{PressureError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com";

/// Trello REST API 的 `BoardSource` 實作。金鑰與 token 只放在查詢參數，不寫入日誌。
#[derive(Clone)]
pub struct TrelloClient {
    client: Client,
    base_url: String,
    api_key: String,
    token: String,
    board_id: String,
}

impl std::fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .field("board_id", &self.board_id)
            .finish_non_exhaustive()
    }
}

impl TrelloClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
        board_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            token: token.into(),
            board_id: board_id.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.api_base_url(),
            config.api_key(),
            config.token(),
            config.board_id(),
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PressureError::HttpStatusError {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        // 先取完整內容再解析，解析失敗時歸類為資料錯誤而非網路錯誤
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BoardSource for TrelloClient {
    async fn fetch_lists(&self) -> Result<Vec<BoardList>> {
        let path = format!("/1/boards/{}/lists", self.board_id);
        self.get_json(&path, "board lists").await
    }

    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<CardRecord>> {
        let path = format!("/1/lists/{}/cards", list_id);
        self.get_json(&path, "list cards").await
    }
}
