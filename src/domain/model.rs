use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 看板上的一個清單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

/// 卡片的到期資料，`due` 保留 API 回傳的原始字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub due: Option<String>,
}

impl CardRecord {
    pub fn new(name: impl Into<String>, due: Option<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            due,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSelector {
    Index(usize),
    Name(String),
}

impl Default for ListSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for ListSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{}", index),
            Self::Name(name) => write!(f, "'{}'", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTriple {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriple {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for ColorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// 單張卡片依到期時間分類後的狀態
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DueStatus {
    NoDueDate,
    MalformedDueDate,
    Overdue { hours_overdue: f64 },
    DueWithinDay { hours_left: f64 },
    DueWithinWeek { hours_left: f64 },
    DueLater { hours_left: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAssessment {
    pub name: String,
    pub due: Option<String>,
    #[serde(flatten)]
    pub status: DueStatus,
    pub pressure: u32,
}

/// 一次輪詢的完整結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureReport {
    pub generated_at: DateTime<Utc>,
    pub available_lists: Vec<BoardList>,
    pub list: BoardList,
    pub cards: Vec<CardAssessment>,
    pub score: u32,
    pub ratio: Option<f64>,
    pub color: ColorTriple,
}

impl PressureReport {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty_list(&self) -> bool {
        self.cards.is_empty()
    }
}
