pub mod color;
pub mod engine;
pub mod scorer;

pub use crate::domain::model::{
    BoardList, CardAssessment, CardRecord, ColorTriple, DueStatus, ListSelector, PressureReport,
};
pub use crate::domain::ports::{BoardSource, ConfigProvider};
pub use crate::utils::error::Result;
