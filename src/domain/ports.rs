use crate::domain::model::{BoardList, CardRecord, ListSelector};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 看板資料來源（HTTP 或測試用的記憶體實作）
#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn fetch_lists(&self) -> Result<Vec<BoardList>>;
    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<CardRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn token(&self) -> &str;
    fn board_id(&self) -> &str;
    fn list_selector(&self) -> ListSelector;
    fn max_threshold(&self) -> f64;
}
