use crate::core::color::ColorMapper;
use crate::core::scorer::{total_pressure, PressureScorer};
use crate::core::{BoardList, BoardSource, ListSelector, PressureReport};
use crate::utils::error::{PressureError, Result};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;

pub struct PressureEngine<B: BoardSource> {
    source: B,
    scorer: PressureScorer,
    mapper: ColorMapper,
    selector: ListSelector,
}

impl<B: BoardSource> PressureEngine<B> {
    pub fn new(source: B, mapper: ColorMapper, selector: ListSelector) -> Self {
        Self {
            source,
            scorer: PressureScorer::new(),
            mapper,
            selector,
        }
    }

    pub async fn run(&self) -> Result<PressureReport> {
        self.run_at(Utc::now()).await
    }

    /// 以指定時刻執行一次輪詢：取清單、選清單、取卡片、計分、轉顏色
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<PressureReport> {
        tracing::info!("Fetching board lists...");
        let lists = self.source.fetch_lists().await?;
        tracing::info!("Found {} lists", lists.len());
        for (index, list) in lists.iter().enumerate() {
            tracing::debug!("  [{}] {}", index, list.name);
        }

        let list = select_list(&lists, &self.selector)?.clone();
        tracing::info!("Tracking list '{}'", list.name);

        let cards = self.source.fetch_cards(&list.id).await?;
        tracing::info!("{} cards in list, calculating pressure", cards.len());

        let assessments = self.scorer.assess(&cards, now);
        let score = total_pressure(&assessments);
        let color = self.mapper.map(i64::from(score), assessments.len());
        let ratio = if assessments.is_empty() {
            None
        } else {
            Some(self.mapper.ratio(i64::from(score)))
        };

        tracing::info!("Pressure score for '{}': {} -> RGB {}", list.name, score, color);

        Ok(PressureReport {
            generated_at: now,
            available_lists: lists,
            list,
            cards: assessments,
            score,
            ratio,
            color,
        })
    }

    /// 每隔 `period` 輪詢一次，直到 `shutdown` 完成。
    ///
    /// `shutdown` 只建立一次，並與整個輪詢（含 HTTP 請求）競爭，
    /// 進行中的請求不會延誤停止。失敗的輪詢交給 `on_report`，不中止迴圈。
    pub async fn watch<S, F>(&self, period: Duration, shutdown: S, mut on_report: F)
    where
        S: Future<Output = ()>,
        F: FnMut(Result<PressureReport>),
    {
        tokio::pin!(shutdown);
        let mut interval = tokio::time::interval(period);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Stopping");
                    return;
                }
                outcome = async {
                    interval.tick().await;
                    self.run().await
                } => on_report(outcome),
            }
        }
    }
}

pub fn select_list<'a>(lists: &'a [BoardList], selector: &ListSelector) -> Result<&'a BoardList> {
    let found = match selector {
        ListSelector::Index(index) => lists.get(*index),
        ListSelector::Name(name) => lists.iter().find(|list| list.name == *name),
    };

    found.ok_or_else(|| PressureError::ListNotFound {
        selector: selector.to_string(),
        available: lists.len(),
    })
}
